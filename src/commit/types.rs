use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the fixed commit types offered by the selector.
///
/// The short code (`feat`, `fix`, ...) is the identity of a type. It is what
/// ends up in the commit header and what a branch prefix is matched against.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum CommitType {
  #[strum(serialize = "feat")]
  Feature,
  Fix,
  Docs,
  Style,
  Refactor,
  Test,
  Chore,
  #[strum(serialize = "perf")]
  Performance,
  Hotfix,
}

impl CommitType {
  /// The fixed universe in its default, unbiased order.
  pub fn all() -> Vec<CommitType> {
    CommitType::iter().collect()
  }

  pub fn code(&self) -> &'static str {
    self.into()
  }

  pub fn description(&self) -> &'static str {
    match self {
      CommitType::Feature => "A new feature",
      CommitType::Fix => "A bug fix",
      CommitType::Docs => "Documentation only changes",
      CommitType::Style => "Changes that do not affect the meaning of the code (white-space, formatting, etc)",
      CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
      CommitType::Test => "Adding missing tests or correcting existing tests",
      CommitType::Chore => "Changes to the build process or auxiliary tools and libraries",
      CommitType::Performance => "A code change that improves performance",
      CommitType::Hotfix => "A critical fix that goes straight to production",
    }
  }

  /// `"<code>: <description>"`, the label shown in the list.
  pub fn title(&self) -> String {
    format!("{}: {}", self.code(), self.description())
  }
}
