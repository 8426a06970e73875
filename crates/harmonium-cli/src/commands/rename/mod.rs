//! Rename command implementation
//!
//! Normalizes the note casing in harmonium sample filenames, e.g.
//! `harmonium-c2.wav` -> `harmonium-C2.wav`. Each file is handled on its own:
//! a parse failure, unknown note, existing target or failed rename is reported
//! and the batch moves on. Only an unlistable directory stops the run.

mod types;

pub use types::{BatchSummary, RenameMode, RenameOptions, RenameOutcome, SkipReason};

use anyhow::{Context, Result};
use colored::Colorize;
use harmonium_notes::{canonical_file_name, extract_token, NoteMap, SAMPLE_EXTENSION};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use walkdir::WalkDir;

use super::json_output::{error_codes, JsonError, RenameOutput};

/// Sample library used when no directory is given.
pub const DEFAULT_SAMPLE_DIR: &str =
    r"E:\GitClone\VisualComposing\VisualComposing\public\samples\freesound\harmonium";

/// Run the rename command.
///
/// # Arguments
/// * `options` - Target directory, apply/dry-run mode and output format
///
/// # Returns
/// Exit code: 0 once the directory has been listed, whatever the per-file
/// outcomes. A listing failure is an error (or exit code 1 with `--json`).
pub fn run(options: &RenameOptions) -> Result<ExitCode> {
    let dir = options.dir.as_path();

    if !options.json {
        println!("{}", "Renaming harmonium samples...".cyan().bold());
        println!("{} {}", "Directory:".blue().bold(), dir.display());
        if options.mode == RenameMode::DryRun {
            println!(
                "{} Dry run, no files will be renamed",
                "INFO".yellow().bold()
            );
        }
        println!();
    }

    let report = |outcome: &RenameOutcome| {
        if !options.json {
            print_outcome(outcome);
        }
    };
    let outcomes = match rename_batch(dir, NoteMap::standard(), options.mode, report) {
        Ok(outcomes) => outcomes,
        Err(e) if options.json => {
            let error = JsonError::new(error_codes::DIR_READ, format!("{:#}", e))
                .with_file(dir.display().to_string());
            let output = RenameOutput::new(dir, options.mode, vec![], vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    if options.json {
        let output = RenameOutput::new(dir, options.mode, outcomes, vec![]);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&BatchSummary::from_outcomes(&outcomes));
    }

    Ok(ExitCode::SUCCESS)
}

/// Runs one batch over every sample file in `dir`.
///
/// The directory is listed once up front; `report` is called after each file
/// is processed. Only the listing can fail.
pub fn rename_batch<F>(
    dir: &Path,
    notes: &NoteMap,
    mode: RenameMode,
    mut report: F,
) -> Result<Vec<RenameOutcome>>
where
    F: FnMut(&RenameOutcome),
{
    let candidates = list_candidates(dir)?;

    let mut outcomes = Vec::with_capacity(candidates.len());
    for file_name in &candidates {
        let outcome = rename_one(dir, file_name, notes, mode);
        report(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Lists the sample files directly inside `dir`.
///
/// Keeps entries whose name ends in `.wav` (case-sensitive, compared on the raw
/// encoded bytes so names that are not valid UTF-8 are kept too). The list is
/// sorted for stable output.
pub fn list_candidates(dir: &Path) -> Result<Vec<OsString>> {
    if !dir.is_dir() {
        anyhow::bail!("Sample path is not a directory: {}", dir.display());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to list sample directory: {}", dir.display()))?;
        let name = entry.file_name();
        if name
            .as_encoded_bytes()
            .ends_with(SAMPLE_EXTENSION.as_bytes())
        {
            names.push(name.to_os_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Processes one sample file: extract the note, resolve it, rename if the
/// canonical name is free. Never fails; every problem becomes an outcome.
///
/// Invalid UTF-8 in `file_name` is replaced with U+FFFD for matching and
/// reporting; the rename itself uses the name as given.
pub fn rename_one(
    dir: &Path,
    file_name: impl AsRef<OsStr>,
    notes: &NoteMap,
    mode: RenameMode,
) -> RenameOutcome {
    let file_name = file_name.as_ref();
    let display_name = file_name.to_string_lossy();
    let skipped = |reason: SkipReason| RenameOutcome::Skipped {
        file: display_name.to_string(),
        reason,
    };

    let token = match extract_token(&display_name) {
        Ok(token) => token,
        Err(_) => return skipped(SkipReason::Unparseable),
    };

    let canonical = match notes.resolve(&token) {
        Ok(canonical) => canonical,
        Err(_) => return skipped(SkipReason::UnknownNote { token }),
    };

    let new_name = canonical_file_name(canonical);
    let new_path = dir.join(&new_name);
    if new_path.exists() {
        return skipped(SkipReason::AlreadyExists { target: new_name });
    }

    if mode == RenameMode::DryRun {
        return RenameOutcome::WouldRename {
            from: display_name.to_string(),
            to: new_name,
        };
    }

    match fs::rename(dir.join(file_name), &new_path) {
        Ok(()) => RenameOutcome::Renamed {
            from: display_name.to_string(),
            to: new_name,
        },
        Err(e) => RenameOutcome::Failed {
            file: display_name.to_string(),
            to: new_name,
            message: e.to_string(),
        },
    }
}

/// Print one console line for an outcome.
fn print_outcome(outcome: &RenameOutcome) {
    match outcome {
        RenameOutcome::Renamed { from, to } => {
            println!("  {} {} -> {}", "RENAMED".green().bold(), from, to);
        }
        RenameOutcome::WouldRename { from, to } => {
            println!("  {} {} -> {}", "WOULD RENAME".cyan().bold(), from, to);
        }
        RenameOutcome::Skipped { file, reason } => match reason {
            SkipReason::Unparseable => {
                println!("  {} Cannot parse filename: {}", "SKIP".yellow().bold(), file);
            }
            SkipReason::UnknownNote { token } => {
                println!(
                    "  {} Unknown note {} in {}",
                    "SKIP".yellow().bold(),
                    token,
                    file
                );
            }
            SkipReason::AlreadyExists { target } => {
                println!(
                    "  {} {} already exists, leaving {}",
                    "SKIP".dimmed(),
                    target,
                    file
                );
            }
        },
        RenameOutcome::Failed { file, to, message } => {
            println!(
                "  {} {} -> {}: {}",
                "FAILED".red().bold(),
                file,
                to,
                message
            );
        }
    }
}

/// Print the completion banner with outcome counts.
fn print_summary(summary: &BatchSummary) {
    println!();
    println!("{}", "Renaming complete.".cyan().bold());
    println!(
        "{} {} files: {} renamed, {} would rename, {} skipped, {} failed",
        "SUMMARY".blue().bold(),
        summary.total,
        summary.renamed.to_string().green(),
        summary.would_rename,
        summary.skipped.to_string().yellow(),
        summary.failed.to_string().red()
    );
}

#[cfg(test)]
mod tests;
