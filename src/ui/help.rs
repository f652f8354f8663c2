use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &str)] = &[
    ("Tab / S-Tab", "Switch between Text, File and URL"),
    ("Enter", "Translate the current tab"),
    ("Ctrl+L", "Switch target language"),
    ("Ctrl+Y", "Copy translation to clipboard"),
    ("↑ ↓ PgUp PgDn", "Scroll translation"),
    ("Ctrl+U", "Clear the input line"),
    ("F1", "Show/hide this help"),
    ("Esc / Ctrl+C", "Quit"),
];

pub struct HelpScreen {
    pub visible: bool,
}

impl HelpScreen {
    pub fn new() -> Self {
        HelpScreen { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, config_path: &str, log_path: &str) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Lingo Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(SHORTCUTS.len() as u16 + 2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let mut shortcuts = vec![Line::from(Span::styled("Keyboard Shortcuts:", heading)), Line::from("")];
        shortcuts.extend(SHORTCUTS.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<15}", keys), Style::default().fg(Color::Cyan)),
                Span::raw(*action),
            ])
        }));

        frame.render_widget(
            Paragraph::new(shortcuts)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false }),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(Line::from("─".repeat(inner.width as usize)))
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );

        let config_info = vec![
            Line::from(Span::styled("Configuration:", heading)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Config file:  ", Style::default().fg(Color::Cyan)),
                Span::raw(config_path.to_string()),
            ]),
            Line::from(vec![
                Span::styled("  Log file:     ", Style::default().fg(Color::Cyan)),
                Span::raw(log_path.to_string()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press F1 or Esc to close this help screen",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ];

        frame.render_widget(
            Paragraph::new(config_info)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false }),
            chunks[2],
        );
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}
