//! Track model and helpers that only look at track metadata.
//!
//! `Track` is the immutable unit the playback store moves around; the
//! `display` and `similarity` helpers format and compare tracks without
//! touching any playback state.

mod display;
mod model;
mod similarity;

pub use model::*;
pub use similarity::*;
