//! Glimmer - procedural sparkle sound effects
//!
//! This binary generates, verifies, and plays the cached sparkle assets.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use glimmer_cli::commands;

/// Default directory for generated assets.
const DEFAULT_OUT_DIR: &str = "sounds";

/// Glimmer - Procedural Sparkle Sound Effects
#[derive(Parser)]
#[command(name = "glimmer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sparkle assets (no-op when the cache is fresh)
    Gen {
        /// Output directory for the generated assets
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Regenerate even if the cache is fresh
        #[arg(long)]
        force: bool,
    },

    /// Play random sparkles from the sound bank
    Play {
        /// Directory holding the generated assets
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Number of sparkles to trigger
        #[arg(short, long, default_value_t = 1)]
        count: u32,

        /// Pause between triggers in milliseconds
        #[arg(long, default_value_t = 600)]
        gap_ms: u64,
    },

    /// Verify the generated assets against the format invariants
    Verify {
        /// Directory holding the generated assets
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Gen { out_dir, force } => commands::gen::run(&out_dir, force),
        Commands::Play {
            out_dir,
            count,
            gap_ms,
        } => commands::play::run(&out_dir, count, gap_ms),
        Commands::Verify { out_dir } => commands::verify::run(&out_dir),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
