use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::types::CommitType;

/// Marker attached to a draft once the wizard reaches its terminal phase.
pub const SIGN_OFF: &str = "sob";

/// The free-text parts of a commit message, in the order they are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Field {
  Scope,
  Subject,
  Body,
  Footer,
}

impl Field {
  pub fn all() -> Vec<Field> {
    Field::iter().collect()
  }

  pub fn first() -> Field {
    Field::Scope
  }

  pub fn next(self) -> Option<Field> {
    match self {
      Field::Scope => Some(Field::Subject),
      Field::Subject => Some(Field::Body),
      Field::Body => Some(Field::Footer),
      Field::Footer => None,
    }
  }

  pub fn index(self) -> usize {
    self as usize
  }

  pub fn placeholder(self) -> &'static str {
    match self {
      Field::Scope => "optional, e.g. auth",
      Field::Subject => "short summary in the imperative mood",
      Field::Body => "optional longer description",
      Field::Footer => "optional, e.g. Closes #12",
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
  pub scope: String,
  pub subject: String,
  pub body: String,
  pub footer: String,
}

impl FieldSet {
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Scope => &self.scope,
      Field::Subject => &self.subject,
      Field::Body => &self.body,
      Field::Footer => &self.footer,
    }
  }

  pub fn set(&mut self, field: Field, value: String) {
    match field {
      Field::Scope => self.scope = value,
      Field::Subject => self.subject = value,
      Field::Body => self.body = value,
      Field::Footer => self.footer = value,
    }
  }
}

/// The assembled result of a wizard run. Built once, never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
  commit_type: CommitType,
  fields: FieldSet,
  sign_off: &'static str,
}

impl CommitDraft {
  pub fn new(commit_type: CommitType, fields: FieldSet) -> Self {
    CommitDraft { commit_type, fields, sign_off: SIGN_OFF }
  }

  pub fn commit_type(&self) -> CommitType {
    self.commit_type
  }

  pub fn fields(&self) -> &FieldSet {
    &self.fields
  }

  pub fn sign_off(&self) -> &'static str {
    self.sign_off
  }
}

// The sign-off marker is intentionally not part of the printed block.
impl fmt::Display for CommitDraft {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}({}): {}\n{}\n{}\n",
      self.commit_type.code(),
      self.fields.scope,
      self.fields.subject,
      self.fields.body,
      self.fields.footer
    )
  }
}
