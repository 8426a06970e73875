//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag. The shape is stable so scripts can parse it.

use serde::Serialize;
use std::path::Path;

use super::rename::{BatchSummary, RenameMode, RenameOutcome};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Sample directory could not be listed
    pub const DIR_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Output of a rename run.
#[derive(Debug, Clone, Serialize)]
pub struct RenameOutput {
    /// False only when the directory could not be listed
    pub success: bool,
    /// Directory that was scanned
    pub directory: String,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// One entry per candidate file
    pub results: Vec<RenameOutcome>,
    /// Outcome counts
    pub summary: BatchSummary,
    /// Fatal errors
    pub errors: Vec<JsonError>,
}

impl RenameOutput {
    /// Builds the output document from a finished (or aborted) batch.
    pub fn new(
        directory: &Path,
        mode: RenameMode,
        results: Vec<RenameOutcome>,
        errors: Vec<JsonError>,
    ) -> Self {
        let summary = BatchSummary::from_outcomes(&results);
        Self {
            success: errors.is_empty(),
            directory: directory.display().to_string(),
            dry_run: mode == RenameMode::DryRun,
            results,
            summary,
            errors,
        }
    }
}
