//! Playback state for music player front-ends.
//!
//! [`PlaybackStateManager`] owns a single [`PlayerState`] snapshot: the
//! current track, the playlist in play order and canonical order, position,
//! and preferences (volume, shuffle, repeat, theme). Every transition swaps
//! in a complete new snapshot and notifies subscribers synchronously.
//! [`PlaybackInfo`] is the derived progress view for progress bars.
//!
//! ```
//! use playstate::{PlaybackStateManager, RepeatMode, Track};
//!
//! let tracks: Vec<Track> = (1..=3)
//!     .map(|i| Track::new(format!("t{i}"), format!("Song {i}"), "Artist", format!("https://cdn.test/{i}.mp3")))
//!     .collect();
//!
//! let mut player = PlaybackStateManager::new();
//! player.set_playlist(tracks.clone());
//! player.set_current_track(tracks[2].clone());
//! assert!(player.next_track().is_none());
//!
//! player.toggle_repeat();
//! assert_eq!(player.state().repeat, RepeatMode::All);
//! assert_eq!(player.next_track(), Some(&tracks[0]));
//! ```

pub mod config;
pub mod library;
pub mod playback;
pub mod progress;
pub mod store;

pub use config::{Settings, SettingsError, load_settings};
pub use library::{Track, similar_tracks, similarity_score};
pub use playback::RepeatMode;
pub use progress::PlaybackInfo;
pub use store::{PlaybackStateManager, PlayerState, Subscription};
