use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
  layout::{Constraint, Direction, Layout, Rect},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use tracing::info;

use crate::{
  action::Action,
  commit::{Field, FieldSet},
  components::{Component, common::text_input::TextInput, instruction_footer::InstructionFooter, theme::Theme},
  tui::Frame,
};

const INSTRUCTIONS: [&str; 2] = ["enter confirm", "esc quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
  Editing(Field),
  AllConfirmed,
}

/// Walks scope, subject, body and footer in that order, one text input each.
pub struct FieldCollector {
  inputs: Vec<TextInput>,
  values: FieldSet,
  state: CollectorState,
  theme: Theme,
  instruction_footer: InstructionFooter,
}

impl FieldCollector {
  pub fn new(theme: Theme) -> Self {
    let inputs = Field::all().iter().map(|_| TextInput::new()).collect();
    let mut collector = FieldCollector {
      inputs,
      values: FieldSet::default(),
      state: CollectorState::Editing(Field::first()),
      theme,
      instruction_footer: InstructionFooter::default(),
    };
    collector.activate(Field::first());
    collector
  }

  pub fn state(&self) -> CollectorState {
    self.state
  }

  pub fn active_field(&self) -> Option<Field> {
    match self.state {
      CollectorState::Editing(field) => Some(field),
      CollectorState::AllConfirmed => None,
    }
  }

  pub fn is_confirmed(&self, field: Field) -> bool {
    match self.state {
      CollectorState::Editing(active) => field.index() < active.index(),
      CollectorState::AllConfirmed => true,
    }
  }

  pub fn values(&self) -> &FieldSet {
    &self.values
  }

  /// Text currently typed into `field`'s input.
  pub fn pending_text(&self, field: Field) -> String {
    self.inputs[field.index()].get_text()
  }

  fn activate(&mut self, field: Field) {
    let style = self.theme.active_field;
    self.inputs[field.index()].init_style(field.to_string(), style, field.placeholder());
  }

  fn confirm(&mut self, field: Field, text: String) -> Option<Action> {
    info!("{} confirmed", field);
    self.values.set(field, text);
    match field.next() {
      Some(next) => {
        self.state = CollectorState::Editing(next);
        self.activate(next);
        Some(Action::Render)
      },
      None => {
        self.state = CollectorState::AllConfirmed;
        Some(Action::FieldsCompleted(self.values.clone()))
      },
    }
  }

  fn render_field(&mut self, f: &mut Frame<'_>, area: Rect, field: Field) {
    if self.active_field() == Some(field) {
      self.inputs[field.index()].render(f, area);
      return;
    }

    let (line, style) = if self.is_confirmed(field) {
      (Line::from(vec![Span::raw("✔ "), Span::raw(self.values.get(field).to_string())]), self.theme.done_field)
    } else {
      (Line::from(field.placeholder()), self.theme.pending_field)
    };
    let paragraph =
      Paragraph::new(line).style(style).block(Block::default().borders(Borders::ALL).title(field.to_string()));
    f.render_widget(paragraph, area);
  }
}

#[async_trait::async_trait]
impl Component for FieldCollector {
  async fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    let Some(field) = self.active_field() else {
      return Ok(None);
    };
    let action = match self.inputs[field.index()].handle_key_event(key) {
      Some(Action::InputSubmitted(text)) => self.confirm(field, text),
      other => other,
    };
    Ok(action)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let fields = Field::all();
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let layout = Layout::default().direction(Direction::Vertical).constraints(constraints).split(area);

    for (index, field) in fields.iter().enumerate() {
      self.render_field(f, layout[index], *field);
    }
    self.instruction_footer.render(f, layout[fields.len()], &INSTRUCTIONS, self.theme.help);
    Ok(())
  }
}
