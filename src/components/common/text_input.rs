use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  layout::Rect,
  style::Style,
  widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::{action::Action, tui::Frame};

/// A single-line text field. Content is kept verbatim: no trimming, no validation.
#[derive(Debug, Default)]
pub struct TextInput {
  pub text_input: TextArea<'static>,
}

impl TextInput {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn init_style(&mut self, title: String, style: Style, placeholder: &str) {
    self.text_input.set_style(Style::default());
    self.text_input.set_cursor_line_style(Style::default());
    self.text_input.set_placeholder_text(placeholder);
    self.text_input.set_block(Block::default().borders(Borders::ALL).border_style(style).title(title));
  }

  pub fn get_text(&self) -> String {
    self.text_input.lines().first().cloned().unwrap_or_default()
  }

  /// Returns `InputSubmitted` with the current text when enter was pressed.
  pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Option<Action> {
    match key_event {
      KeyEvent { code: KeyCode::Esc, .. } => Some(Action::Quit),
      KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. } => Some(Action::Quit),
      KeyEvent { code: KeyCode::Enter, .. } => {
        let text = self.get_text();
        self.clear();
        Some(Action::InputSubmitted(text))
      },
      _ => {
        let input = Input::from(key_event);
        // ctrl-m inserts a newline
        if let Input { key: Key::Char('m'), ctrl: true, .. } = input {
          return None;
        }
        self.text_input.input(input);
        None
      },
    }
  }

  pub fn clear(&mut self) {
    self.text_input.move_cursor(CursorMove::Head);
    self.text_input.delete_line_by_end();
  }

  pub fn render(&mut self, f: &mut Frame<'_>, area: Rect) {
    f.render_widget(&self.text_input, area);
  }
}
