use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Git2(#[from] git2::Error),
  #[error("git: {0}")]
  Git(String),
  #[error(transparent)]
  Utf8(#[from] std::string::FromUtf8Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error("HEAD is detached, there is no current branch")]
  DetachedHead,
}
