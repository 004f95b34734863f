use async_trait::async_trait;

use crate::error::Error;

/// Answers "which branch am I on?" for the prioritizer.
#[async_trait]
pub trait BranchSource: Send + Sync {
  async fn current_branch(&self) -> Result<String, Error>;
}
