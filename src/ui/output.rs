use crate::pipeline::{ErrorKind, JobError};
use crate::types::TranslationResult;
use crate::ui::phase::RequestPhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Output area for one tab: the request phase plus scroll position
pub struct OutputDisplay {
    phase: RequestPhase,
    scroll: u16,
}

impl OutputDisplay {
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
            scroll: 0,
        }
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    /// Start a request; false if one is already running
    pub fn begin(&mut self) -> bool {
        let started = self.phase.begin();
        if started {
            self.scroll = 0;
        }
        started
    }

    pub fn finish(&mut self, outcome: Result<TranslationResult, JobError>) -> bool {
        let applied = self.phase.finish(outcome);
        if applied {
            self.scroll = 0;
        }
        applied
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        if matches!(self.phase, RequestPhase::Done(_)) {
            self.scroll = self.scroll.saturating_add(lines);
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Widget view; `tick` drives the progress animation
    pub fn view(&self, tick: usize) -> OutputView<'_> {
        OutputView { display: self, tick }
    }
}

impl Default for OutputDisplay {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OutputView<'a> {
    display: &'a OutputDisplay,
    tick: usize,
}

fn error_title(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::NoInput => " Nothing to translate ",
        ErrorKind::Input => " Could not read file ",
        ErrorKind::Extraction => " Could not fetch URL ",
        ErrorKind::Translation => " Translation failed ",
    }
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.display.phase {
            RequestPhase::Idle => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Translation ");

                Paragraph::new("No translation yet. Press Enter to translate.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block)
                    .render(area, buf);
            }
            RequestPhase::InFlight { started } => {
                let frame = SPINNER[self.tick % SPINNER.len()];
                let lines = vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(format!("{} ", frame), Style::default().fg(Color::Magenta)),
                        Span::styled(
                            "Translating...",
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {:.1}s", started.elapsed().as_secs_f32()),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                ];

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Translation ");

                Paragraph::new(lines).block(block).render(area, buf);
            }
            RequestPhase::Done(result) => {
                let title = format!(
                    " Translation → {} ({:.1}s, {}) ",
                    result.target_language,
                    result.elapsed.as_secs_f32(),
                    result.finished_at.format("%H:%M:%S")
                );
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title(title)
                    .title_bottom(Line::from(" 📋 Ctrl+Y to copy ").right_aligned());

                Paragraph::new(result.text.as_str())
                    .style(Style::default().fg(Color::White))
                    .wrap(Wrap { trim: false })
                    .scroll((self.display.scroll, 0))
                    .block(block)
                    .render(area, buf);
            }
            RequestPhase::Failed { kind, message } => {
                let lines = vec![
                    Line::from(Span::styled(
                        "✗ Error",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Red))),
                ];

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(error_title(*kind));

                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(block)
                    .render(area, buf);
            }
        }
    }
}
