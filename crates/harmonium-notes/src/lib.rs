//! Harmonium Note Library
//!
//! This crate knows how note names are embedded in harmonium sample filenames
//! and what their canonical spelling is.
//!
//! # Overview
//!
//! A sample filename such as `Harmonium-c2-soft.wav` carries a note token
//! (`c2`) after the `harmonium-` prefix. The token is matched case-insensitively,
//! looked up in a fixed table, and rendered as a canonical filename
//! (`harmonium-C2.wav`).
//!
//! # Example
//!
//! ```
//! use harmonium_notes::{extract_token, resolve_file_name, NoteMap};
//!
//! let token = extract_token("HARMONIUM-A3.wav").unwrap();
//! assert_eq!(token, "a3");
//!
//! let canonical = NoteMap::standard().resolve(&token).unwrap();
//! assert_eq!(canonical, "A3");
//!
//! assert_eq!(
//!     resolve_file_name("harmonium-a3.wav").unwrap(),
//!     "harmonium-A3.wav"
//! );
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type for parse and lookup failures
//! - [`map`]: The immutable note table
//! - [`token`]: Note-token extraction from filenames

pub mod error;
pub mod map;
pub mod token;

pub use error::{NoteError, NoteResult};
pub use map::NoteMap;
pub use token::extract_token;

/// Prefix that precedes the note token in every sample filename.
pub const SAMPLE_PREFIX: &str = "harmonium-";

/// Extension of sample files (matched case-sensitively).
pub const SAMPLE_EXTENSION: &str = ".wav";

/// Builds the canonical filename for a canonical note, e.g. `C2` -> `harmonium-C2.wav`.
pub fn canonical_file_name(canonical: &str) -> String {
    format!("{}{}{}", SAMPLE_PREFIX, canonical, SAMPLE_EXTENSION)
}

/// Resolves a sample filename to its canonical filename using the standard table.
///
/// Fails with [`NoteError::Unparseable`] when no note token is present, or
/// [`NoteError::UnknownNote`] when the token is not in the table.
pub fn resolve_file_name(file_name: &str) -> NoteResult<String> {
    let token = extract_token(file_name)?;
    let canonical = NoteMap::standard().resolve(&token)?;
    Ok(canonical_file_name(canonical))
}
