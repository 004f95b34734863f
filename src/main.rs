use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
  app::{App, Outcome},
  cli::Cli,
  components::{
    type_selector::TypeSelector,
    wizard::{COMPLETION_MESSAGE, Wizard},
  },
  config::Config,
  git::{BranchSource, Git2Repo, GitCliRepo},
  utils::{initialize_logging, initialize_panic_handler},
};

pub mod action;
pub mod app;
pub mod cli;
pub mod commit;
pub mod components;
pub mod config;
pub mod error;
pub mod git;
pub mod mode;
pub mod tui;
pub mod utils;

async fn tokio_main() -> Result<()> {
  initialize_logging()?;
  initialize_panic_handler()?;

  let args = Cli::parse();
  let config = Config::new()?;
  let theme = config.theme.theme();

  let source: Box<dyn BranchSource> =
    if args.git_cli { Box::new(GitCliRepo::new()) } else { Box::new(Git2Repo::from_cwd()) };
  let selector = TypeSelector::new(source.as_ref(), theme.clone()).await;
  let app = App::new(config, Wizard::new(selector, theme), args.tick_rate, args.frame_rate);

  match app.run().await? {
    Outcome::Completed(draft) => {
      eprintln!("{COMPLETION_MESSAGE}");
      print!("{draft}");
    },
    Outcome::Cancelled => {},
  }

  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  if let Err(e) = tokio_main().await {
    eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
    Err(e)
  } else {
    Ok(())
  }
}
