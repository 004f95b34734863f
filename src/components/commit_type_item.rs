use ratatui::{
  text::{Line, Span},
  widgets::ListItem,
};

use crate::{commit::CommitType, components::theme::Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTypeItem {
  pub commit_type: CommitType,
  pub position: usize,
}

impl CommitTypeItem {
  pub fn new(commit_type: CommitType, position: usize) -> Self {
    CommitTypeItem { commit_type, position }
  }

  /// `"<n>. <code>: <description>"`, numbered from 1.
  pub fn label(&self) -> String {
    format!("{}. {}", self.position + 1, self.commit_type.title())
  }

  pub fn render(&self, highlighted: bool, theme: &Theme) -> ListItem<'static> {
    let line = if highlighted {
      Line::from(vec![Span::styled("│ ", theme.highlight_marker), Span::styled(self.label(), theme.highlight)])
    } else {
      Line::from(vec![Span::raw("  "), Span::styled(self.label(), theme.item)])
    };
    ListItem::from(line)
  }
}
