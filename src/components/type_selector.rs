use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  layout::{Constraint, Direction, Layout, Rect},
  text::{Line, Span},
  widgets::{List, ListItem, ListState, Paragraph},
};
use tracing::info;

use crate::{
  action::Action,
  commit::{CommitType, prioritize},
  components::{Component, commit_type_item::CommitTypeItem, instruction_footer::InstructionFooter, theme::Theme},
  git::BranchSource,
  tui::Frame,
};

const DEFAULT_PAGE_SIZE: usize = 8;
const TITLE: &str = "Select Commit Type";
const INSTRUCTIONS: [&str; 4] = ["↑/k up", "↓/j down", "enter select", "q/esc quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
  Browsing,
  Confirmed(CommitType),
}

pub struct TypeSelector {
  candidates: Vec<CommitType>,
  cursor: usize,
  state: SelectorState,
  page_size: usize,
  list_state: ListState,
  theme: Theme,
  instruction_footer: InstructionFooter,
}

impl TypeSelector {
  /// Builds the selector over the full set of types, biased by the current branch.
  pub async fn new(source: &dyn BranchSource, theme: Theme) -> Self {
    let candidates = prioritize(CommitType::all(), source).await;
    Self::with_candidates(candidates, theme)
  }

  pub fn with_candidates(candidates: Vec<CommitType>, theme: Theme) -> Self {
    TypeSelector {
      candidates,
      cursor: 0,
      state: SelectorState::Browsing,
      page_size: DEFAULT_PAGE_SIZE,
      list_state: ListState::default().with_selected(Some(0)),
      theme,
      instruction_footer: InstructionFooter::default(),
    }
  }

  pub fn candidates(&self) -> &[CommitType] {
    &self.candidates
  }

  pub fn state(&self) -> SelectorState {
    self.state
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn highlighted(&self) -> Option<CommitType> {
    self.candidates.get(self.cursor).copied()
  }

  pub fn choice(&self) -> Option<CommitType> {
    match self.state {
      SelectorState::Confirmed(commit_type) => Some(commit_type),
      SelectorState::Browsing => None,
    }
  }

  fn last_index(&self) -> usize {
    self.candidates.len().saturating_sub(1)
  }

  fn move_to(&mut self, index: usize) {
    self.cursor = index.min(self.last_index());
    self.list_state.select(Some(self.cursor));
  }

  pub fn select_previous(&mut self) {
    self.move_to(self.cursor.saturating_sub(1));
  }

  pub fn select_next(&mut self) {
    self.move_to(self.cursor + 1);
  }

  pub fn previous_page(&mut self) {
    self.move_to(self.cursor.saturating_sub(self.page_size.max(1)));
  }

  pub fn next_page(&mut self) {
    self.move_to(self.cursor + self.page_size.max(1));
  }

  pub fn select_first(&mut self) {
    self.move_to(0);
  }

  pub fn select_last(&mut self) {
    self.move_to(self.last_index());
  }

  fn confirm(&mut self) -> Option<Action> {
    let commit_type = self.highlighted()?;
    info!("Commit type {} confirmed", commit_type);
    self.state = SelectorState::Confirmed(commit_type);
    Some(Action::TypeSelected(commit_type))
  }

  fn render_list(&mut self, f: &mut Frame<'_>, area: Rect) {
    self.page_size = usize::from(area.height).max(1);
    let items: Vec<ListItem> = self
      .candidates
      .iter()
      .enumerate()
      .map(|(index, commit_type)| CommitTypeItem::new(*commit_type, index).render(index == self.cursor, &self.theme))
      .collect();
    self.list_state.select(Some(self.cursor));
    f.render_stateful_widget(List::new(items), area, &mut self.list_state);
  }
}

#[async_trait::async_trait]
impl Component for TypeSelector {
  async fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    if self.state != SelectorState::Browsing {
      return Ok(None);
    }
    let action = match key {
      KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. } => Some(Action::Quit),
      KeyEvent { code: KeyCode::Enter, .. } => self.confirm(),
      KeyEvent { code: KeyCode::Esc | KeyCode::Char('q'), .. } => Some(Action::Quit),
      KeyEvent { code: KeyCode::Up | KeyCode::Char('k'), .. } => Some(Action::SelectPrevious),
      KeyEvent { code: KeyCode::Down | KeyCode::Char('j'), .. } => Some(Action::SelectNext),
      KeyEvent {
        code: KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h' | 'b' | 'u'), ..
      } => Some(Action::PreviousPage),
      KeyEvent {
        code: KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l' | 'f' | 'd'), ..
      } => Some(Action::NextPage),
      KeyEvent { code: KeyCode::Home | KeyCode::Char('g'), .. } => Some(Action::SelectFirst),
      KeyEvent { code: KeyCode::End | KeyCode::Char('G'), .. } => Some(Action::SelectLast),
      _ => None,
    };
    Ok(action)
  }

  async fn update(&mut self, action: Action) -> Result<Option<Action>> {
    if self.state != SelectorState::Browsing {
      return Ok(None);
    }
    match action {
      Action::SelectPrevious => self.select_previous(),
      Action::SelectNext => self.select_next(),
      Action::PreviousPage => self.previous_page(),
      Action::NextPage => self.next_page(),
      Action::SelectFirst => self.select_first(),
      Action::SelectLast => self.select_last(),
      _ => return Ok(None),
    }
    Ok(Some(Action::Render))
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    if let SelectorState::Confirmed(commit_type) = self.state {
      f.render_widget(Paragraph::new(Span::styled(commit_type.description(), self.theme.done_field)), area);
      return Ok(());
    }

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
      ])
      .split(area);

    let title = Line::from(vec![Span::styled(format!(" {} ", TITLE), self.theme.title)]);
    f.render_widget(Paragraph::new(title), layout[1]);
    self.render_list(f, layout[3]);
    self.instruction_footer.render(f, layout[4], &INSTRUCTIONS, self.theme.help);
    Ok(())
  }
}
