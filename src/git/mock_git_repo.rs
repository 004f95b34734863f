use async_trait::async_trait;

use super::BranchSource;
use crate::error::Error;

#[derive(Clone, Debug)]
pub struct MockGitRepo {
  branch: Option<String>,
}

impl MockGitRepo {
  pub fn on_branch(name: &str) -> Self {
    MockGitRepo { branch: Some(name.to_string()) }
  }

  pub fn failing() -> Self {
    MockGitRepo { branch: None }
  }
}

#[async_trait]
impl BranchSource for MockGitRepo {
  async fn current_branch(&self) -> Result<String, Error> {
    match &self.branch {
      Some(name) => Ok(name.clone()),
      None => Err(Error::Git("Not a git repository".to_string())),
    }
  }
}
