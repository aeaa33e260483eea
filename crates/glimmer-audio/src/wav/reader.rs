//! Strict decoder for the canonical WAV layout.
//!
//! This is deliberately not a general WAV parser. The encoder emits
//! exactly one layout (44-byte header, single data chunk, 16-bit PCM) and
//! anything else in the sound directory is treated as corrupt.

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

fn read_u16(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn read_u32(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// Decodes canonical WAV bytes into format parameters and samples.
///
/// Re-encoding the returned samples with the returned format reproduces
/// the input byte-for-byte.
pub fn read_wav(data: &[u8]) -> AudioResult<(WavFormat, Vec<i16>)> {
    if data.len() < 44 {
        return Err(AudioError::malformed_wav(format!(
            "file too short for a WAV header: {} bytes",
            data.len()
        )));
    }

    if &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
        return Err(AudioError::malformed_wav("missing RIFF/WAVE magic"));
    }
    if &data[12..16] != b"fmt " {
        return Err(AudioError::malformed_wav("expected fmt chunk at offset 12"));
    }
    if read_u32(data, 16) != 16 {
        return Err(AudioError::malformed_wav("fmt chunk size must be 16"));
    }
    if read_u16(data, 20) != 1 {
        return Err(AudioError::malformed_wav("audio format must be PCM (1)"));
    }

    let format = WavFormat {
        channels: read_u16(data, 22),
        sample_rate: read_u32(data, 24),
        bits_per_sample: read_u16(data, 34),
    };
    if format.bits_per_sample != 16 {
        return Err(AudioError::malformed_wav(format!(
            "expected 16 bits per sample, found {}",
            format.bits_per_sample
        )));
    }
    if read_u32(data, 28) != format.byte_rate() || read_u16(data, 32) != format.block_align() {
        return Err(AudioError::malformed_wav(
            "byte rate or block align inconsistent with format",
        ));
    }

    if &data[36..40] != b"data" {
        return Err(AudioError::malformed_wav("expected data chunk at offset 36"));
    }
    let data_size = read_u32(data, 40) as usize;
    if data.len() != 44 + data_size {
        return Err(AudioError::malformed_wav(format!(
            "data chunk claims {} bytes but {} follow the header",
            data_size,
            data.len() - 44
        )));
    }
    if read_u32(data, 4) as usize != 36 + data_size {
        return Err(AudioError::malformed_wav("RIFF size field inconsistent"));
    }
    if data_size % 2 != 0 {
        return Err(AudioError::malformed_wav("odd data size for 16-bit PCM"));
    }

    let samples = data[44..]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok((format, samples))
}
