//! `PlaybackStateManager`: owns the player snapshot and applies transitions.
//!
//! Every mutation copies the current snapshot, edits the copy, swaps it in
//! and then notifies observers synchronously. Observers only ever see
//! complete states.

use std::sync::Arc;

use rand::Rng;

use crate::config::{Settings, UiSettings};
use crate::library::{self, Track};
use crate::playback::{self, shuffle_pinned};
use crate::progress::PlaybackInfo;

use super::observer::{Observers, Subscription};
use super::state::{HISTORY_LIMIT, PlayerState, clamp_volume, dedup_by_id};

/// The single owner of [`PlayerState`].
pub struct PlaybackStateManager {
    state: Arc<PlayerState>,
    /// Snapshot `reset` returns to.
    initial: Arc<PlayerState>,
    ui: UiSettings,
    observers: Observers<PlayerState>,
}

impl Default for PlaybackStateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackStateManager {
    /// Create a manager holding the documented default state.
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Create a manager whose initial (and reset) state takes its
    /// preferences from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        let initial = Arc::new(PlayerState::from_settings(&settings.player));
        Self {
            state: initial.clone(),
            initial,
            ui: settings.ui.clone(),
            observers: Observers::default(),
        }
    }

    /// The current snapshot; cheap to clone and safe to hold across mutations.
    pub fn snapshot(&self) -> Arc<PlayerState> {
        self.state.clone()
    }

    /// Borrow the current state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Register `observer`. It is called right away with the current
    /// snapshot and then after every mutation.
    pub fn subscribe<F>(&mut self, mut observer: F) -> Subscription
    where
        F: FnMut(&PlayerState) + 'static,
    {
        observer(&*self.state);
        self.observers.insert(Box::new(observer))
    }

    /// Register an observer of the progress projection.
    pub fn subscribe_progress<F>(&mut self, mut observer: F) -> Subscription
    where
        F: FnMut(&PlaybackInfo) + 'static,
    {
        self.subscribe(move |state| observer(&PlaybackInfo::project(state)))
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.observers.remove(sub)
    }

    /// Number of registered observers, progress observers included.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn update(&mut self, transition: impl FnOnce(&mut PlayerState)) {
        let mut next = PlayerState::clone(&*self.state);
        transition(&mut next);
        self.publish(Arc::new(next));
    }

    fn publish(&mut self, state: Arc<PlayerState>) {
        self.state = state;
        self.observers.notify(&*self.state);
    }

    /// Make `track` the current track and record it in the history.
    pub fn set_current_track(&mut self, track: Track) {
        tracing::debug!(track = track.id(), "current track");
        self.update(|s| {
            s.history.push(track.clone());
            if s.history.len() > HISTORY_LIMIT {
                let overflow = s.history.len() - HISTORY_LIMIT;
                s.history.drain(..overflow);
            }
            s.current_track = Some(track);
        });
    }

    pub fn set_is_playing(&mut self, playing: bool) {
        self.update(|s| s.is_playing = playing);
    }

    pub fn set_current_time(&mut self, seconds: f64) {
        tracing::trace!(seconds, "current time");
        self.update(|s| s.current_time = seconds);
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.update(|s| s.duration = seconds);
    }

    /// Store `volume` clamped into `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        let clamped = clamp_volume(volume);
        if clamped != volume {
            tracing::debug!(requested = volume, clamped, "volume clamped");
        }
        self.update(|s| s.volume = clamped);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    /// Set or clear the user-visible error message. Never cleared implicitly.
    pub fn set_error(&mut self, message: Option<String>) {
        self.update(|s| s.error = message);
    }

    /// Toggle shuffle using the thread-local RNG.
    pub fn toggle_shuffle(&mut self) {
        self.toggle_shuffle_with(&mut rand::rng());
    }

    /// Toggle shuffle drawing randomness from `rng`.
    ///
    /// Turning shuffle off restores the original order. Turning it on
    /// permutes the active playlist with the current track pinned first.
    pub fn toggle_shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.update(|s| {
            if s.shuffle {
                s.playlist = s.original_playlist.clone();
            } else {
                shuffle_pinned(&mut s.playlist, s.current_track.as_ref(), rng);
            }
            s.shuffle = !s.shuffle;
            tracing::debug!(
                shuffle = s.shuffle,
                tracks = s.playlist.len(),
                "shuffle toggled"
            );
        });
    }

    /// Cycle repeat `off -> all -> one -> off`.
    pub fn toggle_repeat(&mut self) {
        self.update(|s| {
            s.repeat = s.repeat.cycled();
            tracing::debug!(repeat = %s.repeat, "repeat toggled");
        });
    }

    pub fn toggle_dark_mode(&mut self) {
        self.update(|s| s.dark_mode = !s.dark_mode);
    }

    /// Replace the playlist and its original order.
    ///
    /// Any previous shuffle order is discarded and not reapplied. Repeated
    /// ids keep their first occurrence only.
    pub fn set_playlist(&mut self, tracks: impl IntoIterator<Item = Track>) {
        let playlist = dedup_by_id(tracks);

        tracing::debug!(tracks = playlist.len(), "playlist replaced");
        self.update(|s| {
            s.original_playlist = playlist.clone();
            s.playlist = playlist;
        });
    }

    /// Append `track` to both orders unless its id is already queued.
    pub fn add_to_playlist(&mut self, track: Track) {
        self.update(|s| {
            if s.contains(track.id()) {
                tracing::debug!(track = track.id(), "already in playlist");
                return;
            }
            s.original_playlist.push(track.clone());
            s.playlist.push(track);
        });
    }

    /// Drop every entry with `track_id` from both orders.
    pub fn remove_from_playlist(&mut self, track_id: &str) {
        self.update(|s| {
            s.playlist.retain(|t| t.id() != track_id);
            s.original_playlist.retain(|t| t.id() != track_id);
        });
    }

    /// Return to the initial snapshot, discarding playlist, history and toggles.
    ///
    /// The initial snapshot is `PlayerState::default()` unless the manager was
    /// built with [`Self::with_settings`], in which case the configured
    /// preferences (volume, repeat, shuffle, dark mode) are restored instead.
    pub fn reset(&mut self) {
        tracing::debug!("state reset");
        self.publish(self.initial.clone());
    }

    /// Swap in a complete state, e.g. one restored by a collaborator.
    ///
    /// The state is normalized first: volume clamped, history trimmed and
    /// repeated playlist ids dropped.
    pub fn replace(&mut self, state: PlayerState) {
        self.publish(Arc::new(state.normalized()));
    }

    /// The track to play after the current one, honoring repeat.
    pub fn next_track(&self) -> Option<&Track> {
        playback::next_track(
            &self.state.playlist,
            self.state.current_track.as_ref(),
            self.state.repeat,
        )
    }

    /// The track to play before the current one, honoring repeat.
    pub fn previous_track(&self) -> Option<&Track> {
        playback::previous_track(
            &self.state.playlist,
            self.state.current_track.as_ref(),
            self.state.repeat,
        )
    }

    /// Move to [`Self::next_track`], if any, and return it.
    pub fn advance(&mut self) -> Option<Track> {
        let next = self.next_track().cloned();
        match &next {
            Some(track) => self.set_current_track(track.clone()),
            None => tracing::debug!("end of playlist"),
        }
        next
    }

    /// Move to [`Self::previous_track`], if any, and return it.
    pub fn go_back(&mut self) -> Option<Track> {
        let prev = self.previous_track().cloned();
        if let Some(track) = &prev {
            self.set_current_track(track.clone());
        }
        prev
    }

    /// Up to five playlist tracks resembling `track`, best match first.
    pub fn similar_tracks(&self, track: &Track) -> Vec<Track> {
        library::similar_tracks(&self.state.playlist, track)
    }

    pub fn playback_info(&self) -> PlaybackInfo {
        PlaybackInfo::project(&self.state)
    }

    /// The current track formatted with the configured label fields.
    pub fn now_playing_label(&self) -> Option<String> {
        self.state
            .current_track
            .as_ref()
            .map(|t| t.label(&self.ui.label_fields, &self.ui.label_separator))
    }
}
