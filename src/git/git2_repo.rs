use std::{
  env::current_dir,
  path::{Path, PathBuf},
};

use async_trait::async_trait;
use git2::Repository;
use tracing::info;

use super::BranchSource;
use crate::error::Error;

const HEADS_PREFIX: &str = "refs/heads/";

pub struct Git2Repo {
  path: PathBuf,
}

impl Git2Repo {
  pub fn new(path: &Path) -> Self {
    Git2Repo { path: path.to_path_buf() }
  }

  pub fn from_cwd() -> Self {
    let path = current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Git2Repo { path }
  }

  fn read_branch(&self) -> Result<String, Error> {
    let repo = Repository::discover(self.path.as_path())?;
    // Reading the symbolic target instead of peeling HEAD keeps this working on an unborn branch.
    let head = repo.find_reference("HEAD")?;
    let target = head.symbolic_target().ok_or(Error::DetachedHead)?;
    let name = target.strip_prefix(HEADS_PREFIX).ok_or(Error::DetachedHead)?;
    info!("Current branch is {}", name);
    Ok(name.to_string())
  }
}

#[async_trait]
impl BranchSource for Git2Repo {
  async fn current_branch(&self) -> Result<String, Error> {
    self.read_branch()
  }
}

#[cfg(test)]
mod tests {
  use git2::Signature;
  use pretty_assertions::assert_eq;
  use tempfile::TempDir;

  use super::*;

  fn setup_test_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    (temp_dir, repo)
  }

  fn commit_empty_tree(repo: &Repository) -> git2::Oid {
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = Signature::now("Test User", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[]).unwrap()
  }

  #[tokio::test]
  async fn test_current_branch_on_unborn_branch() {
    let (temp_dir, repo) = setup_test_repo();
    repo.set_head("refs/heads/feat/login").unwrap();

    let source = Git2Repo::new(temp_dir.path());

    assert_eq!(source.current_branch().await.unwrap(), "feat/login");
  }

  #[tokio::test]
  async fn test_current_branch_after_commit() {
    let (temp_dir, repo) = setup_test_repo();
    repo.set_head("refs/heads/fix/crash").unwrap();
    commit_empty_tree(&repo);

    let source = Git2Repo::new(temp_dir.path());

    assert_eq!(source.current_branch().await.unwrap(), "fix/crash");
  }

  #[tokio::test]
  async fn test_current_branch_from_subdirectory() {
    let (temp_dir, repo) = setup_test_repo();
    repo.set_head("refs/heads/docs").unwrap();
    let nested = temp_dir.path().join("nested");
    std::fs::create_dir_all(&nested).unwrap();

    let source = Git2Repo::new(&nested);

    assert_eq!(source.current_branch().await.unwrap(), "docs");
  }

  #[tokio::test]
  async fn test_current_branch_detached_head() {
    let (temp_dir, repo) = setup_test_repo();
    let oid = commit_empty_tree(&repo);
    repo.set_head_detached(oid).unwrap();

    let source = Git2Repo::new(temp_dir.path());

    assert!(matches!(source.current_branch().await, Err(Error::DetachedHead)));
  }

  #[tokio::test]
  async fn test_current_branch_outside_repository() {
    let temp_dir = TempDir::new().unwrap();
    let source = Git2Repo::new(temp_dir.path());

    // the temp dir can sit inside a checkout
    if Repository::discover(temp_dir.path()).is_err() {
      assert!(source.current_branch().await.is_err());
    }
  }
}
