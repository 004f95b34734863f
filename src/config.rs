use std::{
  collections::HashMap,
  path::{Path, PathBuf},
  str::FromStr,
};

use color_eyre::eyre::{Result, eyre};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{Deserialize, Deserializer, de};

use crate::{
  action::Action,
  components::theme::ThemeKind,
  mode::Mode,
  utils::{get_config_dir, get_data_dir},
};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub _data_dir: PathBuf,
  #[serde(default)]
  pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default, flatten)]
  pub config: AppConfig,
  #[serde(default)]
  pub keybindings: KeyBindings,
  #[serde(default)]
  pub theme: ThemeKind,
}

impl Config {
  pub fn new() -> Result<Self> {
    let config_dir = get_config_dir();
    Self::from_dir(&config_dir)
  }

  /// Loads user configuration from `config_dir` on top of the embedded defaults.
  pub fn from_dir(config_dir: &Path) -> Result<Self> {
    let default_config: Config = json5::from_str(CONFIG)?;
    let data_dir = get_data_dir();
    let mut builder = config::Config::builder()
      .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
      .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

    let config_files = [
      ("config.json5", config::FileFormat::Json5),
      ("config.json", config::FileFormat::Json),
      ("config.yaml", config::FileFormat::Yaml),
      ("config.toml", config::FileFormat::Toml),
      ("config.ini", config::FileFormat::Ini),
    ];
    let mut found_config = false;
    for (file, format) in &config_files {
      let path = config_dir.join(file);
      found_config |= path.exists();
      builder = builder.add_source(config::File::from(path).format(*format).required(false));
    }
    if !found_config {
      tracing::info!("No user configuration found in {}, using defaults", config_dir.display());
    }

    let mut cfg: Self = builder.build()?.try_deserialize()?;

    for (mode, default_bindings) in default_config.keybindings.iter() {
      let user_bindings = cfg.keybindings.entry(*mode).or_default();
      for (key, cmd) in default_bindings.iter() {
        user_bindings.entry(*key).or_insert_with(|| cmd.clone());
      }
    }

    Ok(cfg)
  }

  /// The globally bound action for `key` in `mode`, if any.
  pub fn action_for(&self, mode: Mode, key: KeyEvent) -> Option<Action> {
    let normalized = KeyEvent::new(key.code, key.modifiers);
    self.keybindings.get(&mode).and_then(|bindings| bindings.get(&normalized)).cloned()
  }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Mode, HashMap<KeyEvent, Action>>);

impl<'de> Deserialize<'de> for KeyBindings {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let parsed_map = HashMap::<String, HashMap<String, Action>>::deserialize(deserializer)?;

    let mut keybindings = HashMap::new();
    for (mode_str, inner_map) in parsed_map {
      let mode = Mode::from_str(&mode_str).map_err(|_| de::Error::custom(format!("Unknown mode `{}`", mode_str)))?;
      let mut converted = HashMap::new();
      for (key_str, cmd) in inner_map {
        let key = parse_key_event(&key_str).map_err(de::Error::custom)?;
        converted.insert(key, cmd);
      }
      keybindings.insert(mode, converted);
    }

    Ok(KeyBindings(keybindings))
  }
}

/// Parses `<ctrl-c>`, `<esc>`, `q` style key descriptions.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent> {
  let trimmed = raw.strip_prefix('<').and_then(|s| s.strip_suffix('>')).unwrap_or(raw);
  let lower = trimmed.to_ascii_lowercase();
  let (remaining, modifiers) = extract_modifiers(&lower);
  // Keep the original case for single characters so `<G>` and `<g>` differ.
  let remaining = if remaining.chars().count() == 1 { &trimmed[trimmed.len() - remaining.len()..] } else { remaining };
  parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
  let mut modifiers = KeyModifiers::empty();
  let mut current = raw;

  loop {
    match current {
      rest if rest.starts_with("ctrl-") => {
        modifiers.insert(KeyModifiers::CONTROL);
        current = &rest[5..];
      },
      rest if rest.starts_with("alt-") => {
        modifiers.insert(KeyModifiers::ALT);
        current = &rest[4..];
      },
      rest if rest.starts_with("shift-") => {
        modifiers.insert(KeyModifiers::SHIFT);
        current = &rest[6..];
      },
      _ => break,
    };
  }

  (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, mut modifiers: KeyModifiers) -> Result<KeyEvent> {
  let c = match raw {
    "esc" => KeyCode::Esc,
    "enter" => KeyCode::Enter,
    "left" => KeyCode::Left,
    "right" => KeyCode::Right,
    "up" => KeyCode::Up,
    "down" => KeyCode::Down,
    "home" => KeyCode::Home,
    "end" => KeyCode::End,
    "pageup" => KeyCode::PageUp,
    "pagedown" => KeyCode::PageDown,
    "backtab" => {
      modifiers.insert(KeyModifiers::SHIFT);
      KeyCode::BackTab
    },
    "backspace" => KeyCode::Backspace,
    "delete" => KeyCode::Delete,
    "insert" => KeyCode::Insert,
    "f1" => KeyCode::F(1),
    "f2" => KeyCode::F(2),
    "f3" => KeyCode::F(3),
    "f4" => KeyCode::F(4),
    "f5" => KeyCode::F(5),
    "f6" => KeyCode::F(6),
    "f7" => KeyCode::F(7),
    "f8" => KeyCode::F(8),
    "f9" => KeyCode::F(9),
    "f10" => KeyCode::F(10),
    "f11" => KeyCode::F(11),
    "f12" => KeyCode::F(12),
    "space" => KeyCode::Char(' '),
    "hyphen" | "minus" => KeyCode::Char('-'),
    "tab" => KeyCode::Tab,
    c if c.chars().count() == 1 => {
      let mut c = c.chars().next().ok_or_else(|| eyre!("Unable to parse `{}`", raw))?;
      if modifiers.contains(KeyModifiers::SHIFT) {
        c = c.to_ascii_uppercase();
      }
      KeyCode::Char(c)
    },
    _ => return Err(eyre!("Unable to parse `{}`", raw)),
  };
  Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use pretty_assertions::assert_eq;
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_simple_keys() {
    assert_eq!(parse_key_event("<q>").unwrap(), KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()));
    assert_eq!(parse_key_event("<esc>").unwrap(), KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
    assert_eq!(parse_key_event("enter").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
  }

  #[test]
  fn test_parse_with_modifiers() {
    assert_eq!(parse_key_event("<ctrl-c>").unwrap(), KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(parse_key_event("<Ctrl-Z>").unwrap(), KeyEvent::new(KeyCode::Char('Z'), KeyModifiers::CONTROL));
    assert_eq!(
      parse_key_event("<ctrl-alt-pageup>").unwrap(),
      KeyEvent::new(KeyCode::PageUp, KeyModifiers::CONTROL | KeyModifiers::ALT)
    );
    assert_eq!(parse_key_event("<shift-g>").unwrap(), KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
  }

  #[test]
  fn test_parse_keeps_character_case() {
    assert_eq!(parse_key_event("<G>").unwrap(), KeyEvent::new(KeyCode::Char('G'), KeyModifiers::empty()));
  }

  #[test]
  fn test_parse_invalid() {
    assert!(parse_key_event("<ctrl-nope>").is_err());
    assert!(parse_key_event("").is_err());
  }

  #[test]
  fn test_default_config_bindings() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::from_dir(dir.path()).unwrap();

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
    assert_eq!(cfg.action_for(Mode::Select, ctrl_c), Some(Action::Quit));
    assert_eq!(cfg.action_for(Mode::Input, ctrl_c), Some(Action::Quit));
    assert_eq!(cfg.action_for(Mode::Input, ctrl_z), Some(Action::Suspend));
    assert_eq!(cfg.action_for(Mode::Input, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)), None);
    assert_eq!(cfg.theme, ThemeKind::Dark);
  }

  #[test]
  fn test_user_config_overrides_and_merges() {
    let dir = TempDir::new().unwrap();
    fs::write(
      dir.path().join("config.json5"),
      r#"{ "theme": "light", "keybindings": { "select": { "<ctrl-c>": "Suspend", "<x>": "Quit" } } }"#,
    )
    .unwrap();

    let cfg = Config::from_dir(dir.path()).unwrap();

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
    assert_eq!(cfg.action_for(Mode::Select, ctrl_c), Some(Action::Suspend));
    assert_eq!(cfg.action_for(Mode::Select, ctrl_z), Some(Action::Suspend));
    assert_eq!(cfg.action_for(Mode::Select, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)), Some(Action::Quit));
    assert_eq!(cfg.action_for(Mode::Input, ctrl_c), Some(Action::Quit));
    assert_eq!(cfg.theme, ThemeKind::Light);
  }
}
