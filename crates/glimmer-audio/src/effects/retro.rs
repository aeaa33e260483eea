//! Retro degradation chain: downsample, bit-crush, dither, soft clip.
//!
//! The sample-and-hold step reads from the *input* buffer at a floored
//! index rather than from a block-averaged copy. The aliasing this
//! produces is the intended lo-fi character; do not "fix" it.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::params::{
    BIT_DEPTH, CHAIN_CLIP_THRESHOLD, DOWNSAMPLE, MIN_BIT_DEPTH, NOISE_AMOUNT,
};

use super::clip::soft_clip;

/// Lo-fi effect chain applied to every sparkle and each of its echoes.
#[derive(Debug, Clone, Copy)]
pub struct RetroChain {
    /// Base quantization depth in bits.
    pub bit_depth: u32,
    /// Sample-and-hold block size.
    pub downsample: usize,
    /// Peak amplitude of the injected dither noise.
    pub noise_amount: f64,
    /// Soft-clip threshold applied as the final step.
    pub clip_threshold: f64,
}

impl Default for RetroChain {
    fn default() -> Self {
        Self {
            bit_depth: BIT_DEPTH,
            downsample: DOWNSAMPLE,
            noise_amount: NOISE_AMOUNT,
            clip_threshold: CHAIN_CLIP_THRESHOLD,
        }
    }
}

impl RetroChain {
    /// Quantization depth after `extra_crush` is subtracted, floored at
    /// [`MIN_BIT_DEPTH`] bits.
    pub fn effective_depth(&self, extra_crush: u32) -> u32 {
        self.bit_depth.saturating_sub(extra_crush).max(MIN_BIT_DEPTH)
    }

    /// Runs the chain over `samples`, consuming `rng` for dither noise.
    ///
    /// Echo taps pass a positive `extra_crush` so each repeat comes back
    /// more degraded than the last. Output is reproducible only for a
    /// given RNG state.
    pub fn apply(&self, samples: &[f64], extra_crush: u32, rng: &mut Pcg32) -> Vec<f64> {
        let steps = (1u64 << self.effective_depth(extra_crush)) as f64;
        let last = samples.len().saturating_sub(1);

        (0..samples.len())
            .map(|i| {
                // Sample and hold: every block repeats its first sample.
                let held = (i / self.downsample) * self.downsample;
                let mut v = samples[held.min(last)];

                // Bit crush.
                v = (v * steps).round() / steps;

                // Subtle dither noise.
                v += (rng.gen::<f64>() - 0.5) * self.noise_amount;

                soft_clip(v, self.clip_threshold)
            })
            .collect()
    }
}
