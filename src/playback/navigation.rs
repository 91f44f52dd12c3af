//! Next/previous resolution under the repeat modes.
//!
//! Both helpers return `None` when there is nothing to play: no current
//! track, an empty playlist, a current track that is not in the playlist, or
//! the edge of the playlist with repeat off.

use crate::library::Track;

use super::types::RepeatMode;

fn position_of(playlist: &[Track], current: &Track) -> Option<usize> {
    playlist.iter().position(|t| t.id() == current.id())
}

/// The track that follows `current` in `playlist`.
pub fn next_track<'a>(
    playlist: &'a [Track],
    current: Option<&'a Track>,
    repeat: RepeatMode,
) -> Option<&'a Track> {
    let current = current?;
    if playlist.is_empty() {
        return None;
    }
    if repeat == RepeatMode::One {
        return Some(current);
    }

    let i = position_of(playlist, current)?;
    match repeat {
        RepeatMode::All => playlist.get((i + 1) % playlist.len()),
        _ => playlist.get(i + 1),
    }
}

/// The track that precedes `current` in `playlist`.
pub fn previous_track<'a>(
    playlist: &'a [Track],
    current: Option<&'a Track>,
    repeat: RepeatMode,
) -> Option<&'a Track> {
    let current = current?;
    if playlist.is_empty() {
        return None;
    }
    if repeat == RepeatMode::One {
        return Some(current);
    }

    match position_of(playlist, current)? {
        0 if repeat == RepeatMode::All => playlist.last(),
        0 => None,
        i => playlist.get(i - 1),
    }
}
