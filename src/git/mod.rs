pub mod git2_repo;
pub mod git_cli_repo;
pub mod mock_git_repo;
pub mod types;

pub use git_cli_repo::GitCliRepo;
pub use git2_repo::Git2Repo;
pub use types::BranchSource;
