use ratatui::{layout::Rect, style::Style, widgets::Paragraph};

use crate::tui::Frame;

#[derive(Debug, Default)]
pub struct InstructionFooter {}

impl InstructionFooter {
  /// Renders the key hints joined with a bullet.
  pub fn render(&self, frame: &mut Frame<'_>, area: Rect, instructions: &[&'static str], style: Style) {
    if instructions.is_empty() {
      return;
    }

    let paragraph = Paragraph::new(instructions.join(" • ")).style(style);
    frame.render_widget(paragraph, area);
  }
}
