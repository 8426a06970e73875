//! Type definitions for the rename command.
//!
//! Every candidate file ends in exactly one [`RenameOutcome`].

use serde::Serialize;
use std::path::PathBuf;

/// Whether the batch touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameMode {
    /// Rename files in place.
    #[default]
    Apply,
    /// Report what would be renamed without renaming.
    DryRun,
}

/// Options for a rename run.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Directory holding the samples
    pub dir: PathBuf,
    /// Apply or dry run
    pub mode: RenameMode,
    /// Emit a JSON document instead of console lines
    pub json: bool,
}

/// Why a file was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// No `harmonium-<note>` token in the filename
    Unparseable,
    /// Token is well-formed but not in the note table
    UnknownNote { token: String },
    /// The canonical filename is already present
    AlreadyExists { target: String },
}

/// Result of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenameOutcome {
    /// File was renamed
    Renamed { from: String, to: String },
    /// File would be renamed (dry run)
    WouldRename { from: String, to: String },
    /// File was skipped
    Skipped { file: String, reason: SkipReason },
    /// The rename itself failed
    Failed {
        file: String,
        to: String,
        message: String,
    },
}

impl RenameOutcome {
    /// The original filename this outcome refers to.
    pub fn file(&self) -> &str {
        match self {
            Self::Renamed { from, .. } | Self::WouldRename { from, .. } => from,
            Self::Skipped { file, .. } | Self::Failed { file, .. } => file,
        }
    }

    /// The skip reason, if the file was skipped.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Skipped { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Outcome counts for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub renamed: usize,
    pub would_rename: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Tallies a list of outcomes.
    pub fn from_outcomes(outcomes: &[RenameOutcome]) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                RenameOutcome::Renamed { .. } => summary.renamed += 1,
                RenameOutcome::WouldRename { .. } => summary.would_rename += 1,
                RenameOutcome::Skipped { .. } => summary.skipped += 1,
                RenameOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}
