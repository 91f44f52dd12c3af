//! Related-track recommendation by metadata overlap.

use super::model::Track;

/// Maximum number of tracks returned by [`similar_tracks`].
pub const SIMILAR_TRACKS_LIMIT: usize = 5;

/// Year distance (inclusive) that still counts as "same era".
const YEAR_WINDOW: u32 = 2;

/// Score how closely `candidate` resembles `reference`.
///
/// Same artist weighs 3, matching genre 2, matching album 2 and a release
/// year within two years 1. Optional fields only count when both sides carry
/// a non-empty value; a year of 0 counts as unknown.
pub fn similarity_score(reference: &Track, candidate: &Track) -> u32 {
    let mut score = 0;

    if reference.artist() == candidate.artist() {
        score += 3;
    }
    if both_match(reference.genre(), candidate.genre()) {
        score += 2;
    }
    if both_match(reference.album(), candidate.album()) {
        score += 2;
    }
    if let (Some(a), Some(b)) = (known_year(reference), known_year(candidate)) {
        if a.abs_diff(b) <= YEAR_WINDOW {
            score += 1;
        }
    }

    score
}

fn known_year(track: &Track) -> Option<i32> {
    track.year().filter(|&y| y != 0)
}

fn both_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => !a.is_empty() && a == b,
        _ => false,
    }
}

/// Up to [`SIMILAR_TRACKS_LIMIT`] tracks from `playlist` ranked by
/// [`similarity_score`] against `track`, highest first.
///
/// `track` itself is excluded (by id). Ties keep their playlist order.
pub fn similar_tracks(playlist: &[Track], track: &Track) -> Vec<Track> {
    let mut scored: Vec<(u32, &Track)> = playlist
        .iter()
        .filter(|t| t.id() != track.id())
        .map(|t| (similarity_score(track, t), t))
        .collect();

    // `sort_by` is stable, so equal scores stay in playlist order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(SIMILAR_TRACKS_LIMIT)
        .map(|(_, t)| t.clone())
        .collect()
}
