use color_eyre::eyre::Result;
use ratatui::{
  layout::{Constraint, Direction, Layout, Rect},
  widgets::{Paragraph, Wrap},
};
use tracing::info;

use crate::{
  action::Action,
  commit::CommitDraft,
  components::{Component, field_collector::FieldCollector, theme::Theme, type_selector::TypeSelector},
  tui::{Event, Frame},
};

pub const COMPLETION_MESSAGE: &str =
  "✔ Always code as if the guy who ends up maintaining your code will be a violent psychopath who knows where you live.";

/// The three wizard phases. They only ever move forward.
pub enum Phase {
  Selecting,
  Collecting(FieldCollector),
  Finalizing(CommitDraft),
}

impl Phase {
  pub fn name(&self) -> &'static str {
    match self {
      Phase::Selecting => "selecting",
      Phase::Collecting(_) => "collecting",
      Phase::Finalizing(_) => "finalizing",
    }
  }
}

pub struct Wizard {
  selector: TypeSelector,
  phase: Phase,
  theme: Theme,
}

impl Wizard {
  pub fn new(selector: TypeSelector, theme: Theme) -> Self {
    Wizard { selector, phase: Phase::Selecting, theme }
  }

  pub fn phase(&self) -> &Phase {
    &self.phase
  }

  /// The sub-component receiving events, or `None` once finalizing.
  pub fn current(&mut self) -> Option<&mut dyn Component> {
    match &mut self.phase {
      Phase::Selecting => Some(&mut self.selector),
      Phase::Collecting(collector) => Some(collector),
      Phase::Finalizing(_) => None,
    }
  }

  pub fn draft(&self) -> Option<&CommitDraft> {
    match &self.phase {
      Phase::Finalizing(draft) => Some(draft),
      _ => None,
    }
  }

  pub fn into_draft(self) -> Option<CommitDraft> {
    match self.phase {
      Phase::Finalizing(draft) => Some(draft),
      _ => None,
    }
  }

  fn advance(&mut self, action: &Action) -> Option<Action> {
    let (next, signal) = match (&self.phase, action) {
      (Phase::Selecting, Action::TypeSelected(commit_type)) if self.selector.choice() == Some(*commit_type) => {
        (Phase::Collecting(FieldCollector::new(self.theme.clone())), Action::StartInputMode)
      },
      (Phase::Collecting(_), Action::FieldsCompleted(fields)) => {
        (Phase::Finalizing(CommitDraft::new(self.selector.choice()?, fields.clone())), Action::Complete)
      },
      _ => return None,
    };
    self.phase = next;
    info!("Wizard moved to {}", self.phase.name());
    Some(signal)
  }

  fn draw_collecting(
    selector: &mut TypeSelector,
    collector: &mut FieldCollector,
    f: &mut Frame<'_>,
    area: Rect,
  ) -> Result<()> {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
      .split(area);
    selector.draw(f, layout[1])?;
    collector.draw(f, layout[3])
  }
}

#[async_trait::async_trait]
impl Component for Wizard {
  async fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
    match self.current() {
      Some(component) => component.handle_events(event).await,
      None => Ok(None),
    }
  }

  async fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::TypeSelected(_) | Action::FieldsCompleted(_) => Ok(self.advance(&action)),
      _ => match self.current() {
        Some(component) => component.update(action).await,
        None => Ok(None),
      },
    }
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    match &mut self.phase {
      Phase::Selecting => self.selector.draw(f, area),
      Phase::Collecting(collector) => Wizard::draw_collecting(&mut self.selector, collector, f, area),
      Phase::Finalizing(_) => {
        let paragraph = Paragraph::new(COMPLETION_MESSAGE).style(self.theme.completion).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        Ok(())
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use crossterm::event::{KeyCode, KeyEvent};
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::{
    commit::{CommitType, FieldSet},
    components::test_utils::{ctrl, key, render_lines},
    git::mock_git_repo::MockGitRepo,
  };

  async fn wizard_on(branch: Option<&str>) -> Wizard {
    let source = match branch {
      Some(name) => MockGitRepo::on_branch(name),
      None => MockGitRepo::failing(),
    };
    Wizard::new(TypeSelector::new(&source, Theme::default()).await, Theme::default())
  }

  /// Routes one key through the wizard and pumps the resulting actions back
  /// into it, returning everything that was emitted.
  async fn press(wizard: &mut Wizard, event: KeyEvent) -> Vec<Action> {
    let mut emitted = Vec::new();
    let mut pending: VecDeque<Action> = wizard.handle_events(Some(Event::Key(event))).await.unwrap().into_iter().collect();
    while let Some(action) = pending.pop_front() {
      emitted.push(action.clone());
      if action == Action::Quit {
        break;
      }
      if let Some(next) = wizard.update(action).await.unwrap() {
        pending.push_back(next);
      }
    }
    emitted
  }

  async fn type_line(wizard: &mut Wizard, text: &str) -> Vec<Action> {
    for c in text.chars() {
      press(wizard, key(KeyCode::Char(c))).await;
    }
    press(wizard, key(KeyCode::Enter)).await
  }

  #[tokio::test]
  async fn test_starts_selecting() {
    let wizard = wizard_on(None).await;

    assert_eq!(wizard.phase().name(), "selecting");
    assert!(wizard.draft().is_none());
  }

  #[tokio::test]
  async fn test_end_to_end_on_feature_branch() {
    let mut wizard = wizard_on(Some("feat/login")).await;

    let emitted = press(&mut wizard, key(KeyCode::Enter)).await;
    assert_eq!(emitted, vec![Action::TypeSelected(CommitType::Feature), Action::StartInputMode]);
    assert_eq!(wizard.phase().name(), "collecting");

    type_line(&mut wizard, "auth").await;
    type_line(&mut wizard, "add login flow").await;
    type_line(&mut wizard, "").await;
    let emitted = type_line(&mut wizard, "Closes #12").await;

    assert_eq!(emitted.last(), Some(&Action::Complete));
    assert_eq!(wizard.phase().name(), "finalizing");
    let draft = wizard.into_draft().unwrap();
    assert_eq!(draft.to_string(), "feat(auth): add login flow\n\nCloses #12\n");
  }

  #[tokio::test]
  async fn test_all_empty_fields() {
    let mut wizard = wizard_on(None).await;
    press(&mut wizard, key(KeyCode::Down)).await;
    press(&mut wizard, key(KeyCode::Enter)).await;

    for _ in 0..4 {
      press(&mut wizard, key(KeyCode::Enter)).await;
    }

    let draft = wizard.into_draft().unwrap();
    assert_eq!(draft.commit_type(), CommitType::Fix);
    assert_eq!(draft.fields(), &FieldSet::default());
    assert_eq!(draft.to_string(), "fix(): \n\n\n");
  }

  #[tokio::test]
  async fn test_cancel_while_selecting() {
    let mut wizard = wizard_on(None).await;

    let emitted = press(&mut wizard, key(KeyCode::Char('q'))).await;

    assert_eq!(emitted, vec![Action::Quit]);
    assert!(wizard.into_draft().is_none());
  }

  #[tokio::test]
  async fn test_cancel_while_collecting_discards_partial_draft() {
    let mut wizard = wizard_on(None).await;
    press(&mut wizard, key(KeyCode::Enter)).await;
    type_line(&mut wizard, "core").await;

    let emitted = press(&mut wizard, key(KeyCode::Esc)).await;

    assert_eq!(emitted, vec![Action::Quit]);
    assert_eq!(wizard.phase().name(), "collecting");
    assert!(wizard.into_draft().is_none());
  }

  #[tokio::test]
  async fn test_q_is_text_while_collecting() {
    let mut wizard = wizard_on(None).await;
    press(&mut wizard, key(KeyCode::Enter)).await;

    let emitted = press(&mut wizard, key(KeyCode::Char('q'))).await;

    assert!(emitted.is_empty());
    assert_eq!(wizard.phase().name(), "collecting");
    assert_eq!(press(&mut wizard, ctrl('c')).await, vec![Action::Quit]);
  }

  #[tokio::test]
  async fn test_stray_signals_do_not_skip_phases() {
    let mut wizard = wizard_on(None).await;

    assert_eq!(wizard.update(Action::FieldsCompleted(FieldSet::default())).await.unwrap(), None);
    assert_eq!(wizard.phase().name(), "selecting");

    // a type the selector never confirmed
    assert_eq!(wizard.update(Action::TypeSelected(CommitType::Docs)).await.unwrap(), None);
    assert_eq!(wizard.phase().name(), "selecting");

    press(&mut wizard, key(KeyCode::Enter)).await;
    assert_eq!(wizard.update(Action::TypeSelected(CommitType::Docs)).await.unwrap(), None);
    assert_eq!(wizard.phase().name(), "collecting");
  }

  #[tokio::test]
  async fn test_finalizing_ignores_events() {
    let mut wizard = wizard_on(None).await;
    press(&mut wizard, key(KeyCode::Enter)).await;
    for _ in 0..4 {
      press(&mut wizard, key(KeyCode::Enter)).await;
    }
    let before = wizard.draft().cloned();

    assert!(press(&mut wizard, key(KeyCode::Enter)).await.is_empty());
    assert!(press(&mut wizard, key(KeyCode::Esc)).await.is_empty());
    assert_eq!(wizard.update(Action::FieldsCompleted(FieldSet::default())).await.unwrap(), None);
    assert_eq!(wizard.draft().cloned(), before);
  }

  #[tokio::test]
  async fn test_draw_follows_phase() {
    let mut wizard = wizard_on(Some("docs/readme")).await;

    let lines = render_lines(&mut wizard, 100, 16);
    assert_eq!(lines[3], "│ 1. docs: Documentation only changes");

    press(&mut wizard, key(KeyCode::Enter)).await;
    let lines = render_lines(&mut wizard, 100, 20);
    assert_eq!(lines[1], "Documentation only changes");
    assert!(lines[3].contains("Scope"));

    for _ in 0..4 {
      press(&mut wizard, key(KeyCode::Enter)).await;
    }
    let lines = render_lines(&mut wizard, 200, 3);
    assert_eq!(lines[0], COMPLETION_MESSAGE);
  }

  #[tokio::test]
  async fn test_draft_built_from_confirmed_type_only_at_finalize() {
    let mut wizard = wizard_on(Some("chore/deps")).await;
    press(&mut wizard, key(KeyCode::Enter)).await;

    for _ in 0..3 {
      press(&mut wizard, key(KeyCode::Enter)).await;
      assert!(wizard.draft().is_none());
    }
    press(&mut wizard, key(KeyCode::Enter)).await;

    let draft = wizard.into_draft().unwrap();
    assert_eq!(draft.commit_type(), CommitType::Chore);
    assert_eq!(draft.to_string(), "chore(): \n\n\n");
  }
}
