//! In-memory sound bank with fire-and-forget random playback.
//!
//! Opening a bank prepares the on-disk assets (see [`SoundCache`]) and
//! loads every WAV file into memory, so `play()` does no I/O and never
//! blocks: it picks one buffer uniformly at random and hands it to a
//! detached sink. There is no completion guarantee.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use rand::Rng;

use crate::cache::SoundCache;
use crate::error::AudioResult;

#[cfg(feature = "playback")]
mod output {
    use std::io::Cursor;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    /// Handle to the default audio output device.
    pub struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Output {
        /// Returns `None` when no audio device is available; playback then
        /// degrades to a silent no-op.
        pub fn open() -> Option<Self> {
            let (stream, handle) = OutputStream::try_default().ok()?;
            Some(Self {
                _stream: stream,
                handle,
            })
        }

        pub fn play(&self, wav_data: Vec<u8>) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                if let Ok(source) = Decoder::new(Cursor::new(wav_data)) {
                    sink.append(source);
                    sink.detach(); // fire-and-forget
                }
            }
        }
    }
}

#[cfg(not(feature = "playback"))]
mod output {
    /// Stub used when the `playback` feature is disabled.
    pub struct Output;

    impl Output {
        pub fn open() -> Option<Self> {
            None
        }

        pub fn play(&self, _wav_data: Vec<u8>) {}
    }
}

use output::Output;

/// Loaded sparkle assets plus an optional audio output.
pub struct SoundBank {
    assets: Vec<Arc<Vec<u8>>>,
    output: Option<Output>,
}

impl SoundBank {
    /// Prepares the cache under `sounds_dir` and loads every asset.
    ///
    /// Assets are loaded in file-name order. Failure to open an audio
    /// device is not an error; a deviceless bank simply plays nothing.
    pub fn open(sounds_dir: impl Into<PathBuf>) -> AudioResult<Self> {
        let cache = SoundCache::new(sounds_dir);
        cache.ensure_fresh()?;

        let mut paths: Vec<PathBuf> = fs::read_dir(cache.sounds_dir())?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "wav"))
            .collect();
        paths.sort();

        let mut assets = Vec::with_capacity(paths.len());
        for path in paths {
            assets.push(Arc::new(fs::read(&path)?));
        }

        Ok(Self {
            assets,
            output: Output::open(),
        })
    }

    /// Number of loaded assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the bank holds no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Plays one asset chosen uniformly at random.
    ///
    /// Explicitly a no-op on an empty bank or without an audio device.
    /// Never blocks; safe to call from an update loop.
    pub fn play(&self) {
        if self.assets.is_empty() {
            return;
        }
        let index = rand::thread_rng().gen_range(0..self.assets.len());
        if let Some(output) = &self.output {
            output.play(self.assets[index].as_ref().clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::read_wav;
    use tempfile::tempdir;

    #[test]
    fn test_open_loads_all_presets() {
        let dir = tempdir().unwrap();
        let bank = SoundBank::open(dir.path()).unwrap();

        assert_eq!(bank.len(), SoundCache::num_assets());
        assert!(!bank.is_empty());

        // Every loaded buffer is a decodable canonical WAV.
        for asset in &bank.assets {
            let (format, _) = read_wav(asset).unwrap();
            assert_eq!(format.sample_rate, 44_100);
        }
    }

    #[test]
    fn test_play_on_empty_bank_is_a_no_op() {
        let bank = SoundBank {
            assets: Vec::new(),
            output: None,
        };
        bank.play();
    }

    #[test]
    fn test_play_without_device_does_not_panic() {
        let dir = tempdir().unwrap();
        let mut bank = SoundBank::open(dir.path()).unwrap();
        bank.output = None;
        for _ in 0..10 {
            bank.play();
        }
    }
}
