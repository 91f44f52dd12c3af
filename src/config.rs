//! Configuration loader and schema types.
//!
//! Settings seed the initial player preferences and the now-playing label
//! format. Loading them is optional: every field has a default.

mod error;
mod load;
mod schema;

pub use error::*;
pub use load::load_settings;
pub use schema::*;
