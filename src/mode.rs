use serde::{Deserialize, Serialize};
use strum::EnumString;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
  #[default]
  Select,
  Input,
}
