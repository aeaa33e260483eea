//! Glimmer Audio
//!
//! Procedural generation, caching, and playback of retro "sparkle" sound
//! effects.
//!
//! # Overview
//!
//! Each sparkle is a short swept multi-harmonic chime pushed through a
//! deliberately lo-fi processing chain: sample-and-hold downsampling,
//! bit-crush quantization, dither noise, and a soft-clip waveshaper.
//! Progressively more crushed echo taps are summed in, the mix is
//! soft-clipped once more, and the result is encoded as a canonical mono
//! 16-bit PCM WAV file.
//!
//! # Determinism
//!
//! Generation is deterministic: all randomness flows through a PCG32
//! seeded with a fixed constant, so the same crate version always writes
//! byte-identical assets. Generated files live in a cache directory
//! guarded by a version marker; bump [`params::ASSET_VERSION`] whenever
//! the DSP or its parameters change and the assets regenerate themselves.
//!
//! # Crate structure
//!
//! - [`synthesis`] - swept additive sparkle oscillator
//! - [`effects`] - soft clip, retro degradation chain, echo mixing
//! - [`wav`] - byte-exact WAV encoder and strict decoder
//! - [`generate`] - the per-asset pipeline
//! - [`cache`] - version-marker cache over the sound directory
//! - [`bank`] - in-memory sound bank with random fire-and-forget playback
//! - [`rng`] - deterministic RNG construction
//!
//! # Example
//!
//! ```no_run
//! use glimmer_audio::SoundBank;
//!
//! let bank = SoundBank::open("sounds")?;
//! bank.play(); // somewhere in a collision handler
//! # Ok::<(), glimmer_audio::AudioError>(())
//! ```

pub mod bank;
pub mod cache;
pub mod effects;
pub mod error;
pub mod generate;
pub mod params;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use bank::SoundBank;
pub use cache::SoundCache;
pub use error::{AudioError, AudioResult};
pub use generate::generate_sparkle;
pub use params::SparkleParams;
pub use wav::WavResult;
