//! Fixed synthesis and effect parameters for the sparkle presets.
//!
//! Every knob in the pipeline is a compile-time constant. Changing any of
//! them (or the DSP itself) must be accompanied by a bump of
//! [`ASSET_VERSION`] so cached assets on disk are regenerated.

use crate::error::{AudioError, AudioResult};

/// Output sample rate in Hz for every generated asset.
pub const SAMPLE_RATE: u32 = 44_100;

/// Version tag persisted beside generated assets. Bump to invalidate caches.
pub const ASSET_VERSION: u32 = 1;

/// Fixed seed for the deterministic generation pass.
pub const GENERATION_SEED: u32 = 42;

/// Base frequencies of the five sparkle variations, in Hz.
pub const FREQUENCIES: [f64; 5] = [1800.0, 2200.0, 2800.0, 3200.0, 3800.0];

/// Duration of the synthesized (pre-echo) portion of each sparkle, seconds.
pub const SPARKLE_DURATION: f64 = 0.1;

/// Echo tap delays in seconds, in mix order.
pub const ECHO_DELAYS: [f64; 3] = [0.08, 0.18, 0.30];

/// Echo tap gains, parallel to [`ECHO_DELAYS`].
pub const ECHO_DECAYS: [f64; 3] = [0.5, 0.3, 0.15];

/// Silent tail appended after the last echo tap, seconds.
pub const ECHO_TAIL: f64 = 0.1;

/// Base bit-crush depth in bits.
pub const BIT_DEPTH: u32 = 6;

/// Bit depth never drops below this, no matter how much extra crush is asked.
pub const MIN_BIT_DEPTH: u32 = 3;

/// Sample-and-hold downsampling factor.
pub const DOWNSAMPLE: usize = 4;

/// Peak amplitude of the dither noise injected by the retro chain.
pub const NOISE_AMOUNT: f64 = 0.02;

/// Soft-clip threshold inside the retro effect chain.
pub const CHAIN_CLIP_THRESHOLD: f64 = 0.15;

/// Soft-clip threshold for the master pass after echo summation.
pub const MASTER_CLIP_THRESHOLD: f64 = 0.12;

/// Synthesis input for a single sparkle asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleParams {
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Duration of the dry sparkle in seconds (echo tail excluded).
    pub duration: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl SparkleParams {
    /// Creates parameters for a preset frequency at the standard duration.
    pub fn preset(frequency: f64) -> Self {
        Self {
            frequency,
            duration: SPARKLE_DURATION,
            sample_rate: SAMPLE_RATE,
        }
    }

    /// Checks that the parameters describe a renderable sound.
    pub fn validate(&self) -> AudioResult<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: self.duration,
            });
        }
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }

    /// Number of samples in the dry (pre-echo) buffer.
    pub fn dry_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration).round() as usize
    }

    /// Total duration including the last echo tap and the fixed tail.
    pub fn total_duration(&self) -> f64 {
        self.duration + ECHO_DELAYS[ECHO_DELAYS.len() - 1] + ECHO_TAIL
    }

    /// Number of samples in the final mixed buffer.
    pub fn total_samples(&self) -> usize {
        (self.sample_rate as f64 * self.total_duration()).round() as usize
    }
}
