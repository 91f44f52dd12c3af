use serde::{Deserialize, Serialize};

use crate::config::PlayerSettings;
use crate::library::Track;
use crate::playback::RepeatMode;

/// Number of recently played tracks kept in [`PlayerState::history`].
pub const HISTORY_LIMIT: usize = 20;

/// Everything the UI knows about playback.
///
/// Snapshots are immutable once published by the store; transitions build a
/// new value and swap it in whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub current_track: Option<Track>,
    /// Active play order (shuffled when `shuffle` is on).
    pub playlist: Vec<Track>,
    /// Canonical order, restored when shuffle is turned off.
    pub original_playlist: Vec<Track>,
    pub is_playing: bool,
    /// Seconds.
    pub current_time: f64,
    /// Seconds.
    pub duration: f64,
    pub volume: f64,
    pub loading: bool,
    pub error: Option<String>,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    pub dark_mode: bool,
    /// Most recently played last, at most [`HISTORY_LIMIT`] entries.
    pub history: Vec<Track>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_track: None,
            playlist: Vec::new(),
            original_playlist: Vec::new(),
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 0.7,
            loading: false,
            error: None,
            repeat: RepeatMode::Off,
            shuffle: false,
            dark_mode: false,
            history: Vec::new(),
        }
    }
}

impl PlayerState {
    /// The initial state with preferences taken from `settings`.
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self {
            volume: clamp_volume(settings.volume),
            repeat: settings.repeat,
            shuffle: settings.shuffle,
            dark_mode: settings.dark_mode,
            ..Self::default()
        }
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.playlist.iter().any(|t| t.id() == track_id)
    }

    /// Bring an externally built state back within the store's invariants:
    /// volume clamped, history trimmed to the most recent entries, and
    /// repeated ids dropped from both playlist orders.
    pub fn normalized(mut self) -> Self {
        self.volume = clamp_volume(self.volume);
        if self.history.len() > HISTORY_LIMIT {
            let overflow = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..overflow);
        }
        self.playlist = dedup_by_id(self.playlist);
        self.original_playlist = dedup_by_id(self.original_playlist);
        self
    }
}

/// Keep the first occurrence of each track id, preserving order.
pub fn dedup_by_id(tracks: impl IntoIterator<Item = Track>) -> Vec<Track> {
    let mut out: Vec<Track> = Vec::new();
    for track in tracks {
        if !out.contains(&track) {
            out.push(track);
        }
    }
    out
}

/// Clamp `volume` into `[0, 1]`; NaN becomes silence.
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}
