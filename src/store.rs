//! The playback store: one `PlayerState` snapshot, the transitions that
//! replace it, and the observers notified after each replacement.

mod manager;
mod observer;
mod state;

pub use manager::*;
pub use observer::Subscription;
pub use state::*;
