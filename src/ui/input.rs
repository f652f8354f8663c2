use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Editable input line for one tab. The cursor counts characters, not bytes.
pub struct InputWidget {
    input: String,
    cursor_position: usize,
    prompt: &'static str,
    active: bool,
}

impl InputWidget {
    pub fn new(prompt: &'static str) -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            prompt,
            active: false,
        }
    }

    /// Set whether the input widget is active (focused)
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Handle keyboard input. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                let at = self.byte_offset(self.cursor_position);
                self.input.insert(at, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let at = self.byte_offset(self.cursor_position);
                    self.input.remove(at);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_len() {
                    let at = self.byte_offset(self.cursor_position);
                    self.input.remove(at);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_len() {
                    self.cursor_position += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.char_len();
                true
            }
            _ => false,
        }
    }

    /// Insert pasted text at the cursor
    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor_position);
        self.input.insert_str(at, text);
        self.cursor_position += text.chars().count();
    }

    /// Get the current input (without clearing)
    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn prompt(&self) -> &str {
        self.prompt
    }
}

impl Widget for &InputWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display_text = if self.active {
            let split = self.byte_offset(self.cursor_position);
            let (before, after) = self.input.split_at(split);
            format!("{} {}▊{}", self.prompt, before, after)
        } else {
            format!("{} {}", self.prompt, self.input)
        };

        let color = if self.active { Color::Yellow } else { Color::DarkGray };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        Paragraph::new(display_text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
