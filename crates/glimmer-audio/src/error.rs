//! Error types for the sparkle pipeline.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during generation, caching, or loading.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// A WAV file did not match the canonical encoding.
    #[error("malformed WAV data: {message}")]
    MalformedWav {
        /// What was wrong with the bytes.
        message: String,
    },

    /// I/O error. Cache and bank operations treat these as fatal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a malformed-WAV error.
    pub fn malformed_wav(message: impl Into<String>) -> Self {
        Self::MalformedWav {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_wav_helper() {
        let err = AudioError::malformed_wav("missing RIFF magic");
        assert!(err.to_string().contains("missing RIFF magic"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AudioError = io.into();
        assert!(matches!(err, AudioError::Io(_)));
    }
}
