//! On-disk sound cache with version-marker invalidation.
//!
//! The cache owns every `*.wav` file in its directory. Assets are
//! regenerated en masse whenever the marker file is missing, holds a stale
//! version, or any expected asset is absent. The marker is written last,
//! so an interrupted regeneration leaves the cache stale and the next call
//! rebuilds from scratch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AudioResult;
use crate::generate::generate_sparkle;
use crate::params::{SparkleParams, ASSET_VERSION, FREQUENCIES, GENERATION_SEED};
use crate::rng::create_rng;

/// Marker file holding the decimal asset version as UTF-8 text.
const MARKER_FILE: &str = ".version";

/// Manages the directory of generated sparkle assets.
#[derive(Debug, Clone)]
pub struct SoundCache {
    sounds_dir: PathBuf,
}

impl SoundCache {
    /// Creates a cache manager over `sounds_dir`. No filesystem access yet.
    pub fn new(sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
        }
    }

    /// The directory this cache owns.
    pub fn sounds_dir(&self) -> &Path {
        &self.sounds_dir
    }

    /// Number of preset assets the cache maintains.
    pub fn num_assets() -> usize {
        FREQUENCIES.len()
    }

    /// File name of the asset for a preset index.
    pub fn asset_file_name(index: usize) -> String {
        format!("sparkle_{index}.wav")
    }

    /// Full path of the asset for a preset index.
    pub fn asset_path(&self, index: usize) -> PathBuf {
        self.sounds_dir.join(Self::asset_file_name(index))
    }

    fn marker_path(&self) -> PathBuf {
        self.sounds_dir.join(MARKER_FILE)
    }

    /// Whether the cache holds a complete, current set of assets.
    ///
    /// Fresh means the marker exists with exactly the current version (after
    /// trimming whitespace) and every preset asset file is present.
    pub fn is_fresh(&self) -> bool {
        let marker = match fs::read_to_string(self.marker_path()) {
            Ok(content) => content,
            Err(_) => return false,
        };
        if marker.trim() != ASSET_VERSION.to_string() {
            return false;
        }
        (0..Self::num_assets()).all(|i| self.asset_path(i).exists())
    }

    /// Makes sure the assets on disk are complete and current.
    ///
    /// Idempotent: a fresh cache is left untouched (zero filesystem writes)
    /// and `Ok(false)` is returned. Otherwise the whole set is regenerated
    /// and `Ok(true)` is returned. Any I/O failure is fatal; there is no
    /// partial-success mode.
    pub fn ensure_fresh(&self) -> AudioResult<bool> {
        if self.is_fresh() {
            return Ok(false);
        }
        self.regenerate()?;
        Ok(true)
    }

    /// Unconditionally regenerates every asset and rewrites the marker.
    ///
    /// Deletes all existing `*.wav` files in the directory first (stray
    /// files included), then generates the presets in index order from a
    /// fixed-seed RNG threaded through the whole pass.
    pub fn regenerate(&self) -> AudioResult<()> {
        fs::create_dir_all(&self.sounds_dir)?;

        for entry in fs::read_dir(&self.sounds_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "wav") {
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let mut rng = create_rng(GENERATION_SEED);
        for (index, &frequency) in FREQUENCIES.iter().enumerate() {
            let result = generate_sparkle(&SparkleParams::preset(frequency), &mut rng)?;
            fs::write(self.asset_path(index), &result.wav_data)?;
        }

        // Marker last: an interrupted run stays stale and self-heals.
        fs::write(self.marker_path(), ASSET_VERSION.to_string())?;
        Ok(())
    }
}
