//! Stop-word set construction.
//!
//! A [`StopWordSet`] is the union of several category files (auditor terms,
//! currencies, dates and numbers, generic words, names, ...), each a
//! whitespace-delimited word list in arbitrary case. Entries are normalized
//! to lowercase so membership tests against lowercased tokens are exact.
//!
//! Loading is order-independent and idempotent (set union). Any missing file
//! aborts the run: silently analyzing with a partial exclusion list would
//! change every downstream metric.
//!
//! # Examples
//!
//! ```
//! use prosemeter::lexicon::stop_words::StopWordSet;
//!
//! let stop_words = StopWordSet::from_words(vec!["The", "AND"]);
//! assert!(stop_words.contains("the"));
//! assert!(stop_words.contains("and"));
//! assert!(!stop_words.contains("rust"));
//! ```

use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;
use crate::lexicon::read_to_string_latin1;

/// An immutable set of lowercase words excluded from content analysis.
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    /// Create an empty stop-word set (nothing gets excluded).
    pub fn empty() -> Self {
        StopWordSet {
            words: AHashSet::new(),
        }
    }

    /// Build a set from an iterator of words, lowercasing each entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        StopWordSet { words }
    }

    /// Load and union every category file into one set.
    ///
    /// Files are whitespace-delimited word lists, decoded as Latin-1.
    /// A missing or unreadable file is a fatal configuration error.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut words = AHashSet::new();
        for path in paths {
            let text = read_to_string_latin1(path.as_ref())?;
            words.extend(text.split_whitespace().map(|w| w.to_lowercase()));
        }
        Ok(StopWordSet { words })
    }

    /// Check membership. The query is expected to be lowercase already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
