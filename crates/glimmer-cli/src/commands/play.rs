//! Play command implementation
//!
//! Loads the sound bank (generating assets if needed) and triggers random
//! sparkle playback, the same way a collision handler would.

use anyhow::{Context, Result};
use colored::Colorize;
use glimmer_audio::SoundBank;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

/// Run the play command
///
/// # Arguments
/// * `out_dir` - Directory that holds the generated assets
/// * `count` - Number of sparkles to trigger
/// * `gap_ms` - Pause between triggers in milliseconds
///
/// # Returns
/// Exit code: 0 success, 1 failure to load the bank
pub fn run(out_dir: &str, count: u32, gap_ms: u64) -> Result<ExitCode> {
    let bank = SoundBank::open(out_dir)
        .with_context(|| format!("Failed to open sound bank in {out_dir}"))?;

    if bank.is_empty() {
        println!("{}", "No assets loaded; nothing to play".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} assets loaded",
        "Sound bank:".cyan().bold(),
        bank.len()
    );

    for i in 0..count {
        bank.play();
        println!("{} {}/{}", "Sparkle".green(), i + 1, count);
        // Playback is fire-and-forget; the gap also keeps the process
        // alive long enough for the tail to be heard.
        thread::sleep(Duration::from_millis(gap_ms));
    }

    Ok(ExitCode::SUCCESS)
}
