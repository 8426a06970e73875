//! The canonical note table.
//!
//! Maps lowercase note tokens to their canonical spelling. The standard table
//! covers natural notes only: `c`..`b` in octaves 2 to 4, plus `c5` and `d5`.
//! Sharp tokens can be extracted from filenames but have no entry here.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{NoteError, NoteResult};

/// Natural note letters in scale order.
const NATURAL_LETTERS: [char; 7] = ['c', 'd', 'e', 'f', 'g', 'a', 'b'];

/// Octaves that carry a full set of natural notes.
const FULL_OCTAVES: [u8; 3] = [2, 3, 4];

/// Notes above the last full octave.
const TOP_NOTES: [&str; 2] = ["c5", "d5"];

static STANDARD_MAP: OnceLock<NoteMap> = OnceLock::new();

/// Immutable mapping from lowercase note token to canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMap {
    entries: BTreeMap<String, String>,
}

impl NoteMap {
    /// Returns the process-wide standard table, built on first use.
    pub fn standard() -> &'static NoteMap {
        STANDARD_MAP.get_or_init(Self::build_standard)
    }

    /// Builds a table from `(token, canonical)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn build_standard() -> Self {
        let full = FULL_OCTAVES.into_iter().flat_map(|octave| {
            NATURAL_LETTERS
                .into_iter()
                .map(move |letter| format!("{}{}", letter, octave))
        });
        let top = TOP_NOTES.into_iter().map(String::from);

        Self::from_entries(full.chain(top).map(|token| {
            let canonical = token.to_uppercase();
            (token, canonical)
        }))
    }

    /// Looks up the canonical form of a token.
    pub fn resolve(&self, token: &str) -> NoteResult<&str> {
        self.entries
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| NoteError::UnknownNote {
                token: token.to_string(),
            })
    }

    /// Returns true if the token has an entry.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(token, canonical)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
