use serde::{Deserialize, Serialize};
use strum::Display;

use crate::commit::{CommitType, FieldSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
  Complete,
  EndInputMode,
  Error(String),
  FieldsCompleted(FieldSet),
  InputSubmitted(String),
  NextPage,
  PreviousPage,
  Quit,
  Render,
  Resize(u16, u16),
  Resume,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  StartInputMode,
  Suspend,
  Tick,
  TypeSelected(CommitType),
}
