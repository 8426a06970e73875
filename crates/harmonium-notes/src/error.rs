//! Error types for note parsing and lookup.

use thiserror::Error;

/// Result type for note operations.
pub type NoteResult<T> = Result<T, NoteError>;

/// Errors that can occur while mapping a filename to its canonical note.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The filename does not contain `harmonium-` followed by a note token.
    #[error("cannot parse note from filename: {file_name}")]
    Unparseable {
        /// The filename that was searched.
        file_name: String,
    },

    /// The token is well-formed but has no entry in the note table.
    #[error("unknown note: {token}")]
    UnknownNote {
        /// The lowercase token that was looked up.
        token: String,
    },
}
