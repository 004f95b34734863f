// Colours for every widget the wizard draws. Nothing outside rendering code reads these.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
  #[default]
  Dark,
  Light,
}

impl ThemeKind {
  pub fn theme(&self) -> Theme {
    match self {
      ThemeKind::Dark => Theme::dark(),
      ThemeKind::Light => Theme::light(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
  pub title: Style,
  pub item: Style,
  pub highlight: Style,
  pub highlight_marker: Style,
  pub help: Style,
  pub active_field: Style,
  pub done_field: Style,
  pub pending_field: Style,
  pub completion: Style,
}

impl Default for Theme {
  fn default() -> Self {
    Theme::dark()
  }
}

impl Theme {
  pub fn dark() -> Self {
    Theme {
      title: Style::default().fg(Color::from_u32(0xDDDDDD)).bg(Color::from_u32(0x25A065)).add_modifier(Modifier::BOLD),
      item: Style::default().fg(Color::from_u32(0xDDDDDD)),
      highlight: Style::default().fg(Color::from_u32(0xEE6FF8)).add_modifier(Modifier::BOLD),
      highlight_marker: Style::default().fg(Color::from_u32(0xAD58B4)),
      help: Style::default().fg(Color::from_u32(0x7A7A7A)),
      active_field: Style::default().fg(Color::from_u32(0xEE6FF8)),
      done_field: Style::default().fg(Color::from_u32(0x25A065)),
      pending_field: Style::default().fg(Color::from_u32(0x7A7A7A)),
      completion: Style::default().fg(Color::from_u32(0x25A065)).add_modifier(Modifier::BOLD),
    }
  }

  pub fn light() -> Self {
    Theme {
      title: Style::default().fg(Color::from_u32(0x2E2E2E)).bg(Color::from_u32(0x19A04B)).add_modifier(Modifier::BOLD),
      item: Style::default().fg(Color::from_u32(0x1A1A1A)),
      highlight: Style::default().fg(Color::from_u32(0x9A4AFF)).add_modifier(Modifier::BOLD),
      highlight_marker: Style::default().fg(Color::from_u32(0x9F72FF)),
      help: Style::default().fg(Color::from_u32(0x6F6C6C)),
      active_field: Style::default().fg(Color::from_u32(0x9A4AFF)),
      done_field: Style::default().fg(Color::from_u32(0x19A04B)),
      pending_field: Style::default().fg(Color::from_u32(0x6F6C6C)),
      completion: Style::default().fg(Color::from_u32(0x19A04B)).add_modifier(Modifier::BOLD),
    }
  }
}
