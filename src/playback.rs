//! Playback-order rules: repeat modes, shuffling and track navigation.
//!
//! These helpers are pure functions over slices of tracks; the store in
//! `crate::store` decides when to call them and owns the results.

mod navigation;
mod shuffle;
mod types;

pub use navigation::*;
pub use shuffle::*;
pub use types::*;
