//! Small playback types shared by the store and the settings schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop at the end of the playlist.
    #[default]
    #[serde(alias = "none", alias = "no-repeat")]
    Off,
    /// Repeat the current track.
    #[serde(alias = "repeat-one", alias = "loop-one")]
    One,
    /// Wrap around to the start of the playlist.
    #[serde(alias = "repeat-all", alias = "loop-all")]
    All,
}

impl RepeatMode {
    /// The mode after `self` in the `Off -> All -> One -> Off` cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::One => "one",
            Self::All => "all",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "one" => Ok(Self::One),
            "all" => Ok(Self::All),
            other => Err(format!("unknown repeat mode: {other:?}")),
        }
    }
}
