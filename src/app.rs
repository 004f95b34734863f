use color_eyre::eyre::{Result, eyre};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tracing::info;

use crate::{
  action::Action,
  commit::CommitDraft,
  components::{Component, wizard::Wizard},
  config::Config,
  mode::Mode,
  tui::{self, Tui},
};

/// How a wizard session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Completed(CommitDraft),
  Cancelled,
}

pub struct App {
  pub config: Config,
  pub wizard: Wizard,
  pub tick_rate: f64,
  pub frame_rate: f64,
  pub should_quit: bool,
  pub should_suspend: bool,
  pub completed: bool,
  pub mode: Mode,
}

impl App {
  pub fn new(config: Config, wizard: Wizard, tick_rate: f64, frame_rate: f64) -> Self {
    Self {
      config,
      wizard,
      tick_rate,
      frame_rate,
      should_quit: false,
      should_suspend: false,
      completed: false,
      mode: Mode::Select,
    }
  }

  fn new_tui(&self) -> Result<Tui> {
    Ok(Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate))
  }

  pub async fn run(mut self) -> Result<Outcome> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();

    let mut tui = self.new_tui()?;
    tui.enter()?;

    self.wizard.register_action_handler(action_tx.clone())?;

    loop {
      if let Some(e) = tui.next().await {
        match e {
          tui::Event::Quit => action_tx.send(Action::Quit)?,
          tui::Event::Tick => action_tx.send(Action::Tick)?,
          tui::Event::Render => action_tx.send(Action::Render)?,
          tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
          tui::Event::Key(key) => match self.config.action_for(self.mode, key) {
            Some(action) => action_tx.send(action)?,
            None => {
              if let Some(action) = self.wizard.handle_events(Some(e.clone())).await? {
                action_tx.send(action)?;
              }
            },
          },
          _ => {},
        }
      }

      while let Ok(action) = action_rx.try_recv() {
        if action != Action::Tick && action != Action::Render {
          log::debug!("{action:?}");
        }

        match action {
          Action::StartInputMode => self.mode = Mode::Input,
          Action::EndInputMode => self.mode = Mode::Select,
          Action::Quit => {
            self.should_quit = true;
            break;
          },
          Action::Suspend => self.should_suspend = true,
          Action::Resume => self.should_suspend = false,
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, w, h))?;
            self.draw(&mut tui, &action_tx)?;
          },
          Action::Render => self.draw(&mut tui, &action_tx)?,
          Action::Complete => {
            self.draw(&mut tui, &action_tx)?;
            self.completed = true;
          },
          Action::Error(ref message) => return Err(eyre!(message.clone())),
          _ => {},
        }
        if let Some(action) = self.wizard.update(action.clone()).await? {
          action_tx.send(action)?
        };
      }

      if self.should_suspend {
        tui.suspend()?;
        action_tx.send(Action::Resume)?;
        tui = self.new_tui()?;
        tui.enter()?;
      } else if self.should_quit || self.completed {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;

    match self.wizard.into_draft() {
      Some(draft) if self.completed && !self.should_quit => {
        info!("Commit message completed");
        Ok(Outcome::Completed(draft))
      },
      _ => {
        info!("Wizard cancelled");
        Ok(Outcome::Cancelled)
      },
    }
  }

  fn draw(&mut self, tui: &mut Tui, action_tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
    tui.draw(|f| {
      if let Err(e) = self.wizard.draw(f, f.area()) {
        let _ = action_tx.send(Action::Error(format!("Failed to draw: {:?}", e)));
      }
    })?;
    Ok(())
  }
}
