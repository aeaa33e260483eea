//! Soft-clip waveshaping primitive.

/// Applies soft clipping to a single sample.
///
/// Below the threshold the signal passes through untouched; above it the
/// excess is folded through a tanh knee, so the output is linear near zero
/// and asymptotically bounded by 1.0 in magnitude.
///
/// # Arguments
/// * `sample` - Input sample
/// * `threshold` - Magnitude at which the knee begins (0.0 to 1.0)
#[inline]
pub fn soft_clip(sample: f64, threshold: f64) -> f64 {
    let abs = sample.abs();
    if abs < threshold {
        sample
    } else {
        let sign = sample.signum();
        let knee = (abs - threshold) / (1.0 - threshold);
        sign * (threshold + (1.0 - threshold) * knee.tanh())
    }
}

/// Applies soft clipping to a buffer in place.
pub fn soft_clip_buffer(samples: &mut [f64], threshold: f64) {
    for sample in samples.iter_mut() {
        *sample = soft_clip(*sample, threshold);
    }
}
