use crate::input::TranslationInputs;
use crate::types::TargetLanguage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};
use std::path::PathBuf;

/// The three input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTab {
    Text,
    File,
    Url,
}

impl InputTab {
    pub const ALL: [InputTab; 3] = [InputTab::Text, InputTab::File, InputTab::Url];

    pub fn index(self) -> usize {
        match self {
            InputTab::Text => 0,
            InputTab::File => 1,
            InputTab::Url => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            InputTab::Text => "Text",
            InputTab::File => "File",
            InputTab::Url => "URL",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            InputTab::Text => "Input text:",
            InputTab::File => "File path (.md, .txt, .html):",
            InputTab::Url => "Enter URL:",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Each tab submits only its own field; the others go in as absent
    pub fn inputs(self, value: &str) -> TranslationInputs {
        match self {
            InputTab::Text => TranslationInputs::text(value),
            InputTab::File if value.trim().is_empty() => TranslationInputs::default(),
            InputTab::File => TranslationInputs::file(PathBuf::from(value.trim())),
            InputTab::Url => TranslationInputs::url(value),
        }
    }
}

/// Tab strip across the top of the input area
pub struct TabBar {
    pub selected: InputTab,
    /// Tabs with a request in flight get a marker
    pub busy: [bool; 3],
}

impl Widget for &TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = InputTab::ALL
            .iter()
            .map(|tab| {
                let marker = if self.busy[tab.index()] { " ⏳" } else { "" };
                Line::from(format!("{}{}", tab.title(), marker))
            })
            .collect();

        Tabs::new(titles)
            .select(self.selected.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title(" Input "))
            .render(area, buf);
    }
}

/// Two-option radio for the shared target language
pub struct LanguageSelector {
    pub selected: TargetLanguage,
}

impl Widget for &LanguageSelector {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            "Target Language: ",
            Style::default().fg(Color::Cyan),
        )];

        for language in TargetLanguage::ALL {
            let (mark, style) = if language == self.selected {
                ("(•) ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else {
                ("( ) ", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(format!("{}{}", mark, language), style));
            spans.push(Span::raw("   "));
        }

        spans.push(Span::styled("Ctrl+L to switch", Style::default().fg(Color::DarkGray)));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
