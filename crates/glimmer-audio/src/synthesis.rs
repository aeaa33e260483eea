//! Sparkle waveform synthesis.
//!
//! A sparkle is an additive stack of four partials over an upward frequency
//! sweep, shaped by a fast exponential decay envelope. Rendering is a pure
//! function of the parameters; no randomness is involved.

use std::f64::consts::PI;

use crate::params::SparkleParams;

/// Peak amplitude before effects are applied.
const AMPLITUDE: f64 = 0.08;

/// Exponential decay rate of the envelope, per second.
const DECAY_RATE: f64 = 35.0;

/// The swept frequency rises by this fraction of the base per second.
const SWEEP_RATE: f64 = 1.5;

/// Renders the clean (pre-effects) sparkle waveform.
///
/// Produces `round(sample_rate * duration)` samples in [-1, 1]. At time
/// `t`, the instantaneous base frequency is `frequency * (1 + 1.5 t)` and
/// the signal stacks the fundamental, 1.5x and 2.5x partials, and a 1%
/// detuned fundamental for thickness.
pub fn render(params: &SparkleParams) -> Vec<f64> {
    let sample_rate = params.sample_rate as f64;
    let num_samples = params.dry_samples();

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let envelope = (-t * DECAY_RATE).exp();
            let amplitude = AMPLITUDE * envelope;

            let swept = params.frequency * (1.0 + t * SWEEP_RATE);
            let mut wave = (2.0 * PI * swept * t).sin();
            wave += 0.4 * (3.0 * PI * swept * t).sin();
            wave += 0.2 * (5.0 * PI * swept * t).sin();
            // Slightly detuned layer for thickness.
            wave += 0.3 * (2.0 * PI * swept * 1.01 * t).sin();

            wave * amplitude
        })
        .collect()
}
