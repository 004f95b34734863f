use async_trait::async_trait;
use tokio::process::Command as TokioCommand;
use tracing::{error, info};

use super::BranchSource;
use crate::error::Error;

#[derive(Debug, Default)]
pub struct GitCliRepo {}

impl GitCliRepo {
  pub fn new() -> Self {
    GitCliRepo {}
  }
}

async fn run_git_command(args: &[&str]) -> Result<String, Error> {
  let args_log_command = args.join(" ");
  info!("Running `git {}`", args_log_command);
  let output = TokioCommand::new("git").args(args).output().await.map_err(|err| {
    error!("Failed to run `git {}`, error: {}", args_log_command, err);
    Error::Git(err.to_string())
  })?;

  if !output.status.success() {
    let err = String::from_utf8(output.stderr)?;
    error!("Failed to run `git {}`, error: {}", args_log_command, err);
    return Err(Error::Git(err));
  }
  let content = String::from_utf8(output.stdout)?;
  info!("Received git cli reply:\n{}", content);
  Ok(content)
}

/// Cleans up `git symbolic-ref --short HEAD` output into a branch name.
fn parse_branch_output(output: &str) -> Result<String, Error> {
  let name = strip_ansi_escapes::strip_str(output).trim().to_string();
  if name.is_empty() {
    return Err(Error::Git("Empty branch name".to_string()));
  }
  Ok(name)
}

#[async_trait]
impl BranchSource for GitCliRepo {
  async fn current_branch(&self) -> Result<String, Error> {
    let res = run_git_command(&["symbolic-ref", "--short", "HEAD"]).await?;
    parse_branch_output(&res)
  }
}
