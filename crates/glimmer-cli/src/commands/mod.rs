//! CLI command implementations

pub mod gen;
pub mod play;
pub mod verify;
