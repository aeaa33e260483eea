//! End-to-end generation pipeline for one sparkle asset.

use rand_pcg::Pcg32;

use crate::effects::{mix_echoes, preset_taps, soft_clip_buffer, RetroChain};
use crate::error::AudioResult;
use crate::params::{SparkleParams, MASTER_CLIP_THRESHOLD};
use crate::synthesis;
use crate::wav::WavResult;

/// Generates one sparkle and encodes it as a WAV file in memory.
///
/// Pipeline: synthesize the clean waveform, degrade it through the retro
/// chain, sum in the progressively-crushed echo taps, soft-clip the mix
/// for warmth, and quantize to 16-bit PCM.
///
/// The caller owns the RNG; seeding it fixes the dither noise and makes
/// the output bit-identical across runs.
pub fn generate_sparkle(params: &SparkleParams, rng: &mut Pcg32) -> AudioResult<WavResult> {
    params.validate()?;

    let clean = synthesis::render(params);

    let chain = RetroChain::default();
    let dry = chain.apply(&clean, 0, rng);

    let taps = preset_taps();
    let mut mixed = mix_echoes(
        &clean,
        &dry,
        &taps,
        &chain,
        params.sample_rate,
        params.total_samples(),
        rng,
    );

    soft_clip_buffer(&mut mixed, MASTER_CLIP_THRESHOLD);

    Ok(WavResult::from_mono(&mixed, params.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use crate::wav::read_wav;

    #[test]
    fn test_output_length_includes_echo_and_tail() {
        let params = SparkleParams::preset(1800.0);
        let mut rng = create_rng(42);
        let result = generate_sparkle(&params, &mut rng).unwrap();

        // 0.1s dry + 0.3s last echo + 0.1s tail at 44100 Hz
        assert_eq!(result.num_samples, 22_050);
        assert_eq!(result.wav_data.len(), 44 + 22_050 * 2);
    }

    #[test]
    fn test_generated_wav_decodes_to_expected_format() {
        let params = SparkleParams::preset(2800.0);
        let mut rng = create_rng(42);
        let result = generate_sparkle(&params, &mut rng).unwrap();

        let (format, samples) = read_wav(&result.wav_data).unwrap();
        assert_eq!(format.sample_rate, 44_100);
        assert_eq!(format.channels, 1);
        assert_eq!(format.bits_per_sample, 16);
        assert_eq!(samples.len(), result.num_samples);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let mut rng = create_rng(42);
        assert!(generate_sparkle(&SparkleParams::preset(-1.0), &mut rng).is_err());
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let params = SparkleParams::preset(1800.0);

        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let result1 = generate_sparkle(&params, &mut rng1).unwrap();
        let result2 = generate_sparkle(&params, &mut rng2).unwrap();

        assert_eq!(result1.pcm_hash, result2.pcm_hash);
        assert_eq!(result1.wav_data, result2.wav_data);
    }

    #[test]
    fn test_different_seeds_change_dither() {
        let params = SparkleParams::preset(1800.0);

        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);
        let result1 = generate_sparkle(&params, &mut rng1).unwrap();
        let result2 = generate_sparkle(&params, &mut rng2).unwrap();

        assert_ne!(result1.pcm_hash, result2.pcm_hash);
    }
}
