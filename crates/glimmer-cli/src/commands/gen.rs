//! Gen command implementation
//!
//! Prepares the sparkle assets in the output directory, regenerating them
//! only when the cache is stale (or always, with `--force`).

use anyhow::{Context, Result};
use colored::Colorize;
use glimmer_audio::SoundCache;
use std::process::ExitCode;
use std::time::Instant;

/// Run the gen command
///
/// # Arguments
/// * `out_dir` - Directory that holds the generated assets
/// * `force` - Regenerate even if the cache is fresh
///
/// # Returns
/// Exit code: 0 success, 1 generation failure
pub fn run(out_dir: &str, force: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let cache = SoundCache::new(out_dir);

    println!("{} {}", "Sound directory:".cyan().bold(), out_dir);

    let regenerated = if force {
        cache
            .regenerate()
            .with_context(|| format!("Failed to regenerate assets in {out_dir}"))?;
        true
    } else {
        cache
            .ensure_fresh()
            .with_context(|| format!("Failed to prepare assets in {out_dir}"))?
    };

    if regenerated {
        println!(
            "{} {} assets in {:.1?}",
            "Generated".green().bold(),
            SoundCache::num_assets(),
            start.elapsed()
        );
    } else {
        println!("{}", "Cache is fresh, nothing to do".dimmed());
    }

    Ok(ExitCode::SUCCESS)
}
