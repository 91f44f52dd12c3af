//! Read-only playback progress derived from the player state.
//!
//! The projection has no state of its own; the store recomputes it inside
//! the same notification cycle as every mutation.

use serde::{Deserialize, Serialize};

use crate::store::PlayerState;

/// What a progress bar needs to draw itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    pub is_playing: bool,
    /// Elapsed seconds of the current track.
    pub current_time: f64,
    /// Length of the current track in seconds.
    pub duration: f64,
    /// Percentage elapsed, within `[0, 100]`.
    pub progress: f64,
}

impl PlaybackInfo {
    pub fn project(state: &PlayerState) -> Self {
        Self {
            is_playing: state.is_playing,
            current_time: state.current_time,
            duration: state.duration,
            progress: progress_percent(state.current_time, state.duration),
        }
    }
}

impl From<&PlayerState> for PlaybackInfo {
    fn from(state: &PlayerState) -> Self {
        Self::project(state)
    }
}

/// `current_time / duration` as a percentage clamped to `[0, 100]`.
///
/// Zero, negative or non-finite durations (nothing loaded yet) project to 0.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }

    let pct = current_time / duration * 100.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}
