//! Randomized play order with the current track pinned first.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::library::Track;

/// Shuffle `playlist` in place.
///
/// When `current` is present in the playlist (by id) it is swapped to
/// position 0 and only positions `1..` are permuted, so playback continues
/// with the track already playing. Otherwise the whole slice is permuted.
pub fn shuffle_pinned<R: Rng + ?Sized>(
    playlist: &mut [Track],
    current: Option<&Track>,
    rng: &mut R,
) {
    let pinned = current.and_then(|c| playlist.iter().position(|t| t.id() == c.id()));

    match pinned {
        Some(pos) => {
            playlist.swap(0, pos);
            playlist[1..].shuffle(rng);
        }
        None => playlist.shuffle(rng),
    }
}
