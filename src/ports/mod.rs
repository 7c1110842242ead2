//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The arena drives headless games through these traits, so any move
//! source can take either seat and any observer can watch the match.

pub mod move_source;
pub mod observer;

pub use move_source::MoveSource;
pub use observer::MatchObserver;
