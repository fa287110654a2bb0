//! Word-list configuration objects.
//!
//! Stop words and sentiment lexicons are loaded once per run from plain
//! word-list files, then shared read-only across every document. A missing
//! or unreadable list file is a fatal configuration error: the whole batch
//! depends on it.

use std::fs;
use std::path::Path;

use crate::error::{ProsemeterError, Result};

pub mod sentiment;
pub mod stop_words;

// Re-export commonly used types
pub use sentiment::SentimentLexicon;
pub use stop_words::StopWordSet;

/// Read a file as Latin-1 text (each byte is one char).
///
/// The legacy word-list corpus is Latin-1 encoded; decoding bytes as chars
/// preserves byte-for-byte word identity with it, which UTF-8 decoding
/// would not.
pub(crate) fn read_to_string_latin1(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        ProsemeterError::config(format!("cannot read word list {}: {e}", path.display()))
    })?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}
