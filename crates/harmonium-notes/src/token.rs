//! Note-token extraction.
//!
//! A token is a lowercase note letter `a`-`g`, an optional sharp `#`, and one
//! octave digit (any Unicode decimal digit), found directly after the `harmonium-` prefix.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{NoteError, NoteResult};

/// Pattern matched against the lowercased filename. Group 1 is the token.
pub const TOKEN_PATTERN: &str = r"harmonium-([a-g]#?\d)";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("invalid regex pattern"))
}

/// Extracts the note token from a filename.
///
/// The filename is lowercased first, so `HARMONIUM-A3.wav` yields `a3`. Only the
/// first match is used. Sharp tokens (`c#3`) are returned as-is; whether they
/// resolve is up to the note table.
pub fn extract_token(file_name: &str) -> NoteResult<String> {
    let lowered = file_name.to_lowercase();
    token_regex()
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| NoteError::Unparseable {
            file_name: file_name.to_string(),
        })
}
