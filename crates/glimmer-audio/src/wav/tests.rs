//! Tests for the WAV encoder and decoder.

use pretty_assertions::assert_eq;

use super::format::WavFormat;
use super::reader::read_wav;
use super::result::WavResult;
use super::writer::{pcm16_to_bytes, samples_to_pcm16, write_wav, write_wav_to_vec};

// =========================================================================
// Format tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 88200);
}

// =========================================================================
// Header layout tests
// =========================================================================

#[test]
fn test_header_is_44_bytes() {
    let format = WavFormat::mono(44100);
    let wav = write_wav_to_vec(&format, &[]);
    assert_eq!(wav.len(), 44);
}

#[test]
fn test_header_fields_byte_exact() {
    let format = WavFormat::mono(44100);
    let pcm = pcm16_to_bytes(&[100, -100, 0]);
    let wav = write_wav_to_vec(&format, &pcm);

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes(wav[4..8].try_into().unwrap()), 36 + 6);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes(wav[16..20].try_into().unwrap()), 16);
    assert_eq!(u16::from_le_bytes(wav[20..22].try_into().unwrap()), 1);
    assert_eq!(u16::from_le_bytes(wav[22..24].try_into().unwrap()), 1);
    assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), 44100);
    assert_eq!(u32::from_le_bytes(wav[28..32].try_into().unwrap()), 88200);
    assert_eq!(u16::from_le_bytes(wav[32..34].try_into().unwrap()), 2);
    assert_eq!(u16::from_le_bytes(wav[34..36].try_into().unwrap()), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32::from_le_bytes(wav[40..44].try_into().unwrap()), 6);
    assert_eq!(&wav[44..], &pcm[..]);
}

#[test]
fn test_write_wav_to_writer_matches_vec() {
    let format = WavFormat::mono(22050);
    let pcm = pcm16_to_bytes(&[1, 2, 3, 4]);

    let mut via_writer = Vec::new();
    write_wav(&mut via_writer, &format, &pcm).unwrap();
    assert_eq!(via_writer, write_wav_to_vec(&format, &pcm));
}

// =========================================================================
// PCM conversion tests
// =========================================================================

#[test]
fn test_samples_to_pcm16_scaling() {
    let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0, 0.5]);
    let samples: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|p| i16::from_le_bytes([p[0], p[1]]))
        .collect();
    assert_eq!(samples, vec![0, 32767, -32767, 16384]);
}

#[test]
fn test_samples_to_pcm16_clips_out_of_range() {
    let pcm = samples_to_pcm16(&[2.0, -3.5]);
    let samples: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|p| i16::from_le_bytes([p[0], p[1]]))
        .collect();
    assert_eq!(samples, vec![32767, -32767]);
}

// =========================================================================
// Round-trip tests
// =========================================================================

#[test]
fn test_round_trip_reproduces_bytes() {
    let format = WavFormat::mono(44100);
    let original: Vec<i16> = vec![0, 1, -1, 32767, -32768, 12345, -12345];
    let wav = write_wav_to_vec(&format, &pcm16_to_bytes(&original));

    let (decoded_format, decoded) = read_wav(&wav).unwrap();
    assert_eq!(decoded_format, format);
    assert_eq!(decoded, original);

    let reencoded = write_wav_to_vec(&decoded_format, &pcm16_to_bytes(&decoded));
    assert_eq!(reencoded, wav);
}

#[test]
fn test_wav_result_from_mono() {
    let samples = vec![0.0, 0.25, -0.25, 0.5];
    let result = WavResult::from_mono(&samples, 44100);

    assert_eq!(result.num_samples, 4);
    assert_eq!(result.sample_rate, 44100);
    assert_eq!(result.wav_data.len(), 44 + 8);
    // BLAKE3 hex digest is 64 characters
    assert_eq!(result.pcm_hash.len(), 64);
    assert!(result.pcm_hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert!((result.duration_seconds() - 4.0 / 44100.0).abs() < 1e-12);

    // Hash covers the PCM payload only
    assert_eq!(
        result.pcm_hash,
        blake3::hash(&result.wav_data[44..]).to_hex().to_string()
    );
}

// =========================================================================
// Reader rejection tests
// =========================================================================

#[test]
fn test_read_rejects_short_input() {
    assert!(read_wav(&[0u8; 10]).is_err());
}

#[test]
fn test_read_rejects_bad_magic() {
    let format = WavFormat::mono(44100);
    let mut wav = write_wav_to_vec(&format, &pcm16_to_bytes(&[1, 2]));
    wav[0] = b'X';
    assert!(read_wav(&wav).is_err());
}

#[test]
fn test_read_rejects_truncated_data() {
    let format = WavFormat::mono(44100);
    let mut wav = write_wav_to_vec(&format, &pcm16_to_bytes(&[1, 2, 3]));
    wav.truncate(wav.len() - 2);
    assert!(read_wav(&wav).is_err());
}

#[test]
fn test_read_rejects_inconsistent_riff_size() {
    let format = WavFormat::mono(44100);
    let mut wav = write_wav_to_vec(&format, &pcm16_to_bytes(&[1, 2]));
    wav[4] = wav[4].wrapping_add(1);
    assert!(read_wav(&wav).is_err());
}

#[test]
fn test_read_rejects_non_pcm_format() {
    let format = WavFormat::mono(44100);
    let mut wav = write_wav_to_vec(&format, &pcm16_to_bytes(&[1, 2]));
    wav[20] = 3; // IEEE float
    assert!(read_wav(&wav).is_err());
}
