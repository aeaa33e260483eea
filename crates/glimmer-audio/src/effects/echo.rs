//! Feed-forward echo mixing.
//!
//! Echoes are not recirculated through a delay line. Each tap is a fresh,
//! further-crushed render of the clean signal, summed into the output at
//! its delay offset. Repeats therefore degrade progressively instead of
//! merely getting quieter.

use rand_pcg::Pcg32;

use crate::params::{ECHO_DECAYS, ECHO_DELAYS};

use super::retro::RetroChain;

/// A single delayed, decayed copy of the signal.
#[derive(Debug, Clone, Copy)]
pub struct EchoTap {
    /// Delay before the tap starts, in seconds.
    pub delay_seconds: f64,
    /// Gain applied to the tap.
    pub decay: f64,
}

/// The fixed sparkle echo taps, in mix order.
pub fn preset_taps() -> Vec<EchoTap> {
    ECHO_DELAYS
        .iter()
        .zip(ECHO_DECAYS.iter())
        .map(|(&delay_seconds, &decay)| EchoTap {
            delay_seconds,
            decay,
        })
        .collect()
}

/// Sums the dry signal and its echo taps into a zero-initialized buffer of
/// `total_samples` samples.
///
/// `dry` is the already-degraded signal placed at offset 0; `clean` is the
/// pre-chain signal each tap re-degrades with `extra_crush = tap index + 1`.
/// Tap samples falling past the end of the buffer are silently dropped.
/// Consumes `rng` once per tap, in tap order.
pub fn mix_echoes(
    clean: &[f64],
    dry: &[f64],
    taps: &[EchoTap],
    chain: &RetroChain,
    sample_rate: u32,
    total_samples: usize,
    rng: &mut Pcg32,
) -> Vec<f64> {
    let mut out = vec![0.0; total_samples];

    for (i, &v) in dry.iter().enumerate() {
        if i >= total_samples {
            break;
        }
        out[i] += v;
    }

    for (tap_index, tap) in taps.iter().enumerate() {
        let offset = (tap.delay_seconds * sample_rate as f64).round() as usize;
        let echo = chain.apply(clean, tap_index as u32 + 1, rng);

        for (i, &v) in echo.iter().enumerate() {
            match out.get_mut(i + offset) {
                Some(slot) => *slot += v * tap.decay,
                None => break,
            }
        }
    }

    out
}
