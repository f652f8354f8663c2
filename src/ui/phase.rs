use crate::pipeline::{ErrorKind, JobError};
use crate::types::TranslationResult;
use std::time::{Duration, Instant};

/// Lifecycle of one tab's translation request
#[derive(Debug, Clone, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight {
        started: Instant,
    },
    Done(TranslationResult),
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

impl RequestPhase {
    /// Move to `InFlight`, dropping any previous result.
    /// Returns false when a request is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = RequestPhase::InFlight {
            started: Instant::now(),
        };
        true
    }

    /// Record the outcome. Ignored unless a request is in flight.
    pub fn finish(&mut self, outcome: Result<TranslationResult, JobError>) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = match outcome {
            Ok(result) => RequestPhase::Done(result),
            Err(e) => RequestPhase::Failed {
                kind: e.kind(),
                message: e.to_string(),
            },
        };
        true
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestPhase::InFlight { .. })
    }

    /// Progress indicator shows only while waiting
    pub fn shows_progress(&self) -> bool {
        self.is_in_flight()
    }

    /// Text the copy action would put on the clipboard
    pub fn copyable_text(&self) -> Option<&str> {
        match self {
            RequestPhase::Done(result) => Some(&result.text),
            _ => None,
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            RequestPhase::InFlight { started } => Some(started.elapsed()),
            RequestPhase::Done(result) => Some(result.elapsed),
            _ => None,
        }
    }
}
