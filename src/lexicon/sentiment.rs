//! Sentiment lexicon loading.
//!
//! A [`SentimentLexicon`] holds two word sets, positive and negative, each
//! loaded from one list file. The two membership tests are independent and
//! there is no cross-list deduplication: a word appearing in both lists
//! (malformed input) counts toward both scores.
//!
//! # Examples
//!
//! ```
//! use prosemeter::lexicon::sentiment::SentimentLexicon;
//!
//! let lexicon = SentimentLexicon::from_words(vec!["great", "love"], vec!["awful"]);
//! assert!(lexicon.is_positive("great"));
//! assert!(lexicon.is_negative("awful"));
//! assert!(!lexicon.is_positive("awful"));
//! ```

use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;
use crate::lexicon::read_to_string_latin1;

/// Immutable positive/negative word sets for sentiment scoring.
#[derive(Clone, Debug, Default)]
pub struct SentimentLexicon {
    positive: AHashSet<String>,
    negative: AHashSet<String>,
}

impl SentimentLexicon {
    /// Create an empty lexicon (every sentiment score comes out zero).
    pub fn empty() -> Self {
        SentimentLexicon {
            positive: AHashSet::new(),
            negative: AHashSet::new(),
        }
    }

    /// Build a lexicon from in-memory word lists, lowercasing each entry.
    pub fn from_words<I, J, S, T>(positive: I, negative: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        SentimentLexicon {
            positive: positive
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Load the positive and negative lists from one file each.
    ///
    /// Same file format as stop-word lists: whitespace-delimited words,
    /// Latin-1 decoded. A missing file is a fatal configuration error.
    pub fn load<P: AsRef<Path>>(positive_path: P, negative_path: P) -> Result<Self> {
        let positive = load_word_set(positive_path.as_ref())?;
        let negative = load_word_set(negative_path.as_ref())?;
        Ok(SentimentLexicon { positive, negative })
    }

    /// Check if a word carries positive sentiment.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Check if a word carries negative sentiment.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Number of positive entries.
    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    /// Number of negative entries.
    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

fn load_word_set(path: &Path) -> Result<AHashSet<String>> {
    let text = read_to_string_latin1(path)?;
    Ok(text.split_whitespace().map(|w| w.to_lowercase()).collect())
}
