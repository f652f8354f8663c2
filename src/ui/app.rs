use crate::config::Config;
use crate::error::AppResult;
use crate::input::{FileStatus, SUGGESTED_EXTENSIONS};
use crate::logging;
use crate::pipeline::{JobError, TranslationPipeline};
use crate::types::{TargetLanguage, TranslationResult};
use crate::ui::clipboard::ClipboardHandle;
use crate::ui::help::HelpScreen;
use crate::ui::input::InputWidget;
use crate::ui::output::OutputDisplay;
use crate::ui::tabs::{InputTab, LanguageSelector, TabBar};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const SCROLL_PAGE: u16 = 10;

/// A finished pipeline run, tagged with the tab that started it
#[derive(Debug)]
pub struct Completion {
    pub tab: InputTab,
    pub outcome: Result<TranslationResult, JobError>,
}

#[derive(Debug, Clone, PartialEq)]
enum StatusMessage {
    Info(String),
    Error(String),
}

/// Main application state
pub struct App {
    pipeline: Arc<TranslationPipeline>,
    should_quit: bool,
    active_tab: InputTab,
    language: TargetLanguage,

    // One input and one output per tab
    inputs: [InputWidget; 3],
    outputs: [OutputDisplay; 3],
    help: HelpScreen,
    clipboard: ClipboardHandle,

    status: Option<StatusMessage>,
    file_status: Option<FileStatus>,
    tick: usize,
    tick_rate: Duration,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,

    config_path: String,
    log_path: String,
}

impl App {
    pub fn new(pipeline: Arc<TranslationPipeline>, config: &Config) -> AppResult<Self> {
        let language = config.default_language()?;
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        let mut inputs = InputTab::ALL.map(|tab| InputWidget::new(tab.prompt()));
        inputs[InputTab::Text.index()].set_active(true);

        let config_path = Config::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "(no HOME directory)".to_string());
        let log_path = Config::config_dir()
            .map(|dir| logging::log_path(&dir).display().to_string())
            .unwrap_or_else(|_| "(no HOME directory)".to_string());

        Ok(Self {
            pipeline,
            should_quit: false,
            active_tab: InputTab::Text,
            language,
            inputs,
            outputs: [OutputDisplay::new(), OutputDisplay::new(), OutputDisplay::new()],
            help: HelpScreen::new(),
            clipboard: ClipboardHandle::new(),
            status: None,
            file_status: None,
            tick: 0,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            completions_tx,
            completions_rx,
            config_path,
            log_path,
        })
    }

    /// Run the application event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll with a timeout so the progress animation keeps moving
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }
            self.tick = self.tick.wrapping_add(1);

            self.drain_completions();

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply every completion that has arrived, without waiting
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
        }
    }

    /// Wait for the next completion and apply it
    pub async fn wait_for_completion(&mut self) -> Option<InputTab> {
        let completion = self.completions_rx.recv().await?;
        let tab = completion.tab;
        self.apply_completion(completion);
        Some(tab)
    }

    fn apply_completion(&mut self, completion: Completion) {
        let Completion { tab, outcome } = completion;
        if !self.outputs[tab.index()].finish(outcome) {
            tracing::debug!(tab = tab.title(), "dropping completion for idle tab");
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.help.visible {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.help.hide();
            }
            return;
        }

        self.status = None;

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.help.toggle(),
            KeyCode::Tab => self.select_tab(self.active_tab.next()),
            KeyCode::BackTab => self.select_tab(self.active_tab.previous()),
            KeyCode::Char('l') if ctrl => self.language = self.language.toggle(),
            KeyCode::Char('y') if ctrl => self.copy_output(),
            KeyCode::Char('u') if ctrl => self.inputs[self.active_tab.index()].clear(),
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.outputs[self.active_tab.index()].scroll_up(1),
            KeyCode::Down => self.outputs[self.active_tab.index()].scroll_down(1),
            KeyCode::PageUp => self.outputs[self.active_tab.index()].scroll_up(SCROLL_PAGE),
            KeyCode::PageDown => self.outputs[self.active_tab.index()].scroll_down(SCROLL_PAGE),
            _ => {
                self.inputs[self.active_tab.index()].handle_key(key);
            }
        }

        self.refresh_file_status();
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.help.visible {
            return;
        }
        self.inputs[self.active_tab.index()].insert_str(text);
        self.refresh_file_status();
    }

    /// Re-check the file tab's path after its input may have changed
    fn refresh_file_status(&mut self) {
        if self.active_tab != InputTab::File {
            return;
        }
        let path = self.inputs[InputTab::File.index()].get_input().trim();
        self.file_status = if path.is_empty() {
            None
        } else {
            Some(FileStatus::of(Path::new(path)))
        };
    }

    fn select_tab(&mut self, tab: InputTab) {
        self.inputs[self.active_tab.index()].set_active(false);
        self.active_tab = tab;
        self.inputs[tab.index()].set_active(true);
    }

    /// Start a pipeline run for the active tab on a background task
    pub fn submit(&mut self) {
        let tab = self.active_tab;
        if !self.outputs[tab.index()].begin() {
            self.status = Some(StatusMessage::Info(
                "A translation is already running on this tab".to_string(),
            ));
            return;
        }

        let inputs = tab.inputs(self.inputs[tab.index()].get_input());
        let language = self.language;
        let pipeline = Arc::clone(&self.pipeline);
        let tx = self.completions_tx.clone();

        tracing::debug!(tab = tab.title(), language = %language, "submitting translation");

        tokio::spawn(async move {
            let outcome = pipeline.run(&inputs, language).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(Completion { tab, outcome });
        });
    }

    fn copy_output(&mut self) {
        let Some(text) = self.outputs[self.active_tab.index()].phase().copyable_text() else {
            self.status = Some(StatusMessage::Info("Nothing to copy yet".to_string()));
            return;
        };

        match self.clipboard.copy(text) {
            Ok(()) => {
                self.status = Some(StatusMessage::Info("Copied to clipboard".to_string()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.status = Some(StatusMessage::Error(e.to_string()));
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_tab(&self) -> InputTab {
        self.active_tab
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn input_text(&self, tab: InputTab) -> &str {
        self.inputs[tab.index()].get_input()
    }

    pub fn output(&self, tab: InputTab) -> &OutputDisplay {
        &self.outputs[tab.index()]
    }

    pub fn file_status(&self) -> Option<FileStatus> {
        self.file_status
    }

    pub fn status_text(&self) -> Option<&str> {
        match &self.status {
            Some(StatusMessage::Info(text)) | Some(StatusMessage::Error(text)) => Some(text),
            None => None,
        }
    }

    fn file_hint(&self) -> Paragraph<'static> {
        let Some(status) = self.file_status else {
            let suggested: Vec<String> = SUGGESTED_EXTENSIONS.iter().map(|ext| format!(".{}", ext)).collect();
            return Paragraph::new(format!(" Suggested: {}", suggested.join(", ")))
                .style(Style::default().fg(Color::DarkGray));
        };

        let color = match status {
            FileStatus::Missing | FileStatus::NotAFile => Color::Red,
            FileStatus::Ready { suggested: true } => Color::Green,
            FileStatus::Ready { suggested: false } => Color::Yellow,
        };
        Paragraph::new(format!(" {}", status.message())).style(Style::default().fg(color))
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Tabs
                Constraint::Length(5), // Input
                Constraint::Length(1), // File hint
                Constraint::Length(1), // Language
                Constraint::Min(5),    // Output
                Constraint::Length(1), // Status
            ])
            .split(size);

        let title = Paragraph::new("AI-Powered Translation Tool")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let tab_bar = TabBar {
            selected: self.active_tab,
            busy: InputTab::ALL.map(|tab| self.outputs[tab.index()].phase().is_in_flight()),
        };
        frame.render_widget(&tab_bar, chunks[1]);

        frame.render_widget(&self.inputs[self.active_tab.index()], chunks[2]);

        if self.active_tab == InputTab::File {
            frame.render_widget(self.file_hint(), chunks[3]);
        }

        let selector = LanguageSelector {
            selected: self.language,
        };
        frame.render_widget(&selector, chunks[4]);

        frame.render_widget(self.outputs[self.active_tab.index()].view(self.tick), chunks[5]);

        let status = match &self.status {
            Some(StatusMessage::Info(text)) => {
                Paragraph::new(text.as_str()).style(Style::default().fg(Color::Green))
            }
            Some(StatusMessage::Error(text)) => {
                Paragraph::new(text.as_str()).style(Style::default().fg(Color::Red))
            }
            None => Paragraph::new(
                "Enter: translate | Tab: switch | Ctrl+L: language | Ctrl+Y: copy | F1: help | Esc: quit",
            )
            .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(status, chunks[6]);

        if self.help.visible {
            self.help
                .render(frame, centered_rect(70, 80, size), &self.config_path, &self.log_path);
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
