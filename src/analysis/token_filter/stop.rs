//! Stop filter implementation.
//!
//! Removes tokens present in a shared [`StopWordSet`]. The set is built once
//! per run and shared read-only, so the filter holds it behind an `Arc`.
//!
//! Run this filter after [`LowercaseFilter`](super::LowercaseFilter): the
//! stop-word set is lowercase-normalized and lookups are exact.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use prosemeter::analysis::token::Token;
//! use prosemeter::analysis::token_filter::Filter;
//! use prosemeter::analysis::token_filter::stop::StopFilter;
//! use prosemeter::lexicon::stop_words::StopWordSet;
//!
//! let stop_words = Arc::new(StopWordSet::from_words(vec!["the", "and"]));
//! let filter = StopFilter::new(stop_words);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("and", 2),
//!     Token::new("brown", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::stop_words::StopWordSet;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The shared set of words to remove
    stop_words: Arc<StopWordSet>,
}

impl StopFilter {
    /// Create a new stop filter backed by the given stop-word set.
    pub fn new(stop_words: Arc<StopWordSet>) -> Self {
        StopFilter { stop_words }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens
            .filter(|token| !self.stop_words.contains(&token.text))
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let stop_words = Arc::new(StopWordSet::from_words(vec!["the", "and", "or"]));
        let filter = StopFilter::new(stop_words);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let filter = StopFilter::new(Arc::new(StopWordSet::empty()));
        let tokens = vec![Token::new("the", 0), Token::new("and", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_name() {
        let filter = StopFilter::new(Arc::new(StopWordSet::empty()));
        assert_eq!(filter.name(), "stop");
    }
}
