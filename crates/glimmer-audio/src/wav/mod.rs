//! Canonical WAV encoding and decoding.
//!
//! Generated assets are mono 16-bit PCM with a fixed 44-byte header and no
//! variable metadata, so identical samples always produce identical bytes.
//! The strict reader round-trips that layout and rejects everything else.

mod format;
mod reader;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::WavFormat;
pub use reader::read_wav;
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, samples_to_pcm16, write_wav, write_wav_to_vec};
