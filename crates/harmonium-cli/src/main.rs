//! Harmonium sample renamer
//!
//! Normalizes the note casing in harmonium sample filenames so that
//! `harmonium-c2.wav` becomes `harmonium-C2.wav`. With no arguments it works on
//! the default sample library directory.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use harmonium_cli::commands::rename::{self, RenameMode, RenameOptions, DEFAULT_SAMPLE_DIR};

/// Harmonium sample renamer - canonical note casing for sample filenames
#[derive(Parser)]
#[command(name = "harmonium-rename")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the .wav samples
    #[arg(short, long, default_value = DEFAULT_SAMPLE_DIR)]
    dir: PathBuf,

    /// Report what would be renamed without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = RenameOptions {
        dir: cli.dir,
        mode: if cli.dry_run {
            RenameMode::DryRun
        } else {
            RenameMode::Apply
        },
        json: cli.json,
    };

    match rename::run(&options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
