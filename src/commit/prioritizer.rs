use tracing::{debug, info};

use super::types::CommitType;
use crate::git::BranchSource;

/// The part of a branch name before the first `/`, or the whole name.
pub fn branch_prefix(branch: &str) -> &str {
  branch.split('/').next().unwrap_or(branch)
}

/// Moves the type whose code matches the branch prefix to the front.
///
/// All other entries keep their relative order. When nothing matches the
/// list is returned untouched.
pub fn promote_branch_type(mut candidates: Vec<CommitType>, branch: &str) -> Vec<CommitType> {
  let prefix = branch_prefix(branch);
  if let Some(index) = candidates.iter().position(|candidate| candidate.code() == prefix) {
    let promoted = candidates.remove(index);
    candidates.insert(0, promoted);
  }
  candidates
}

/// Orders `candidates` for the current branch, asking `source` exactly once.
///
/// A failed query means no bias: the candidates come back as given.
pub async fn prioritize(candidates: Vec<CommitType>, source: &dyn BranchSource) -> Vec<CommitType> {
  match source.current_branch().await {
    Ok(branch) => {
      info!("Prioritizing commit types for branch {}", branch);
      promote_branch_type(candidates, &branch)
    },
    Err(err) => {
      debug!("No branch bias applied: {}", err);
      candidates
    },
  }
}
