use serde::Deserialize;

use crate::playback::RepeatMode;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playstate/config.toml` or `~/.config/playstate/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYSTATE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
}

/// Preferences the player starts with; `reset` returns to these.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Initial volume in `[0, 1]`.
    pub volume: f64,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    pub dark_mode: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 0.7,
            repeat: RepeatMode::Off,
            shuffle: false,
            dark_mode: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Which track fields make up the now-playing label, and in what order.
    ///
    /// Example: ["artist", "title", "album"]
    pub label_fields: Vec<TrackLabelField>,

    /// Separator used to join `label_fields`.
    pub label_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            label_fields: vec![TrackLabelField::Artist, TrackLabelField::Title],
            label_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackLabelField {
    Title,
    Artist,
    Album,
    Genre,
    Year,
}
