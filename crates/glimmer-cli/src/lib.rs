//! Glimmer CLI library.
//!
//! Command implementations for the `glimmer` binary: asset generation,
//! playback triggering, and on-disk asset verification.

pub mod commands;
