//! Verify command implementation
//!
//! Decodes every expected asset, checks the canonical format invariants,
//! and confirms the bytes round-trip through the encoder.

use anyhow::{Context, Result};
use colored::Colorize;
use glimmer_audio::wav::{pcm16_to_bytes, read_wav, write_wav_to_vec};
use glimmer_audio::SoundCache;
use std::fs;
use std::process::ExitCode;

/// Run the verify command
///
/// # Arguments
/// * `out_dir` - Directory that holds the generated assets
///
/// # Returns
/// Exit code: 0 all assets valid, 1 any missing or malformed
pub fn run(out_dir: &str) -> Result<ExitCode> {
    let failures = verify_dir(out_dir)?;
    if failures > 0 {
        println!("{} {failures} problem(s) found", "Result:".red().bold());
        return Ok(ExitCode::FAILURE);
    }
    println!("{} all assets valid", "Result:".green().bold());
    Ok(ExitCode::SUCCESS)
}

/// Checks every expected asset plus the cache marker; returns the number
/// of problems found.
fn verify_dir(out_dir: &str) -> Result<u32> {
    let cache = SoundCache::new(out_dir);
    let mut failures = 0u32;

    println!("{} {}", "Verifying assets in:".cyan().bold(), out_dir);

    for index in 0..SoundCache::num_assets() {
        let path = cache.asset_path(index);
        let name = SoundCache::asset_file_name(index);

        let wav_data = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                println!("{} {} ({err})", "MISSING".red().bold(), name);
                failures += 1;
                continue;
            }
        };

        match check_asset(&wav_data) {
            Ok(summary) => println!("{} {} {}", "OK".green().bold(), name, summary.dimmed()),
            Err(message) => {
                println!("{} {} {}", "FAIL".red().bold(), name, message);
                failures += 1;
            }
        }
    }

    if !cache.is_fresh() {
        println!("{}", "Cache marker is missing or stale".yellow());
        failures += 1;
    }

    Ok(failures)
}

/// Decodes one asset and checks the format and round-trip invariants.
fn check_asset(wav_data: &[u8]) -> std::result::Result<String, String> {
    let (format, samples) = read_wav(wav_data).map_err(|err| err.to_string())?;

    if format.sample_rate != 44_100 {
        return Err(format!("unexpected sample rate {}", format.sample_rate));
    }
    if format.channels != 1 {
        return Err(format!("expected mono, found {} channels", format.channels));
    }

    let reencoded = write_wav_to_vec(&format, &pcm16_to_bytes(&samples));
    if reencoded != wav_data {
        return Err("re-encoding does not reproduce the file".to_string());
    }

    Ok(format!(
        "{} samples, {:.3}s",
        samples.len(),
        samples.len() as f64 / format.sample_rate as f64
    ))
}
