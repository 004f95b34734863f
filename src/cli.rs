use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  #[arg(
    short,
    long,
    value_name = "FLOAT",
    help = "Tick rate, i.e. number of ticks per second",
    default_value_t = 4.0,
    value_parser = parse_rate
  )]
  pub tick_rate: f64,

  #[arg(
    short,
    long,
    value_name = "FLOAT",
    help = "Frame rate, i.e. number of frames per second",
    default_value_t = 30.0,
    value_parser = parse_rate
  )]
  pub frame_rate: f64,

  #[arg(long, help = "Read the current branch with the git executable instead of libgit2")]
  pub git_cli: bool,
}

/// Accepts finite rates greater than zero.
fn parse_rate(raw: &str) -> Result<f64, String> {
  let rate: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
  if rate.is_finite() && rate > 0.0 { Ok(rate) } else { Err(format!("`{raw}` must be a positive number")) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let cli = Cli::parse_from(["commit-wizard"]);

    assert_eq!(cli.tick_rate, 4.0);
    assert_eq!(cli.frame_rate, 30.0);
    assert!(!cli.git_cli);
  }

  #[test]
  fn test_git_cli_flag() {
    let cli = Cli::parse_from(["commit-wizard", "--git-cli", "-f", "60"]);

    assert!(cli.git_cli);
    assert_eq!(cli.frame_rate, 60.0);
  }

  #[test]
  fn test_rejects_non_positive_rates() {
    assert!(Cli::try_parse_from(["commit-wizard", "--tick-rate", "0"]).is_err());
    assert!(Cli::try_parse_from(["commit-wizard", "--frame-rate=-5"]).is_err());
    assert!(Cli::try_parse_from(["commit-wizard", "--frame-rate", "NaN"]).is_err());
    assert!(Cli::try_parse_from(["commit-wizard", "--tick-rate", "inf"]).is_err());
    assert!(Cli::try_parse_from(["commit-wizard", "-t", "fast"]).is_err());
  }

  #[test]
  fn test_accepts_fractional_rate() {
    let cli = Cli::try_parse_from(["commit-wizard", "--tick-rate", "0.5"]).unwrap();

    assert_eq!(cli.tick_rate, 0.5);
  }
}
