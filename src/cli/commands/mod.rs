//! CLI command implementations

pub mod arena;
pub mod play;
