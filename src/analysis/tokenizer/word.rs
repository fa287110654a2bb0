//! Regex-based word tokenizer implementation.
//!
//! Splits raw text into word tokens and punctuation-run tokens. Punctuation
//! tokens are kept in the stream deliberately: the raw token count (words
//! plus punctuation) is what the sentence-length metrics are defined over,
//! and downstream filters decide what survives into the cleaned word list.
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::tokenizer::Tokenizer;
//! use prosemeter::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world.").unwrap().collect();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Hello", ",", "world", "."]);
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{ProsemeterError, Result};

/// Default pattern: runs of word characters, or runs of other non-space
/// characters (punctuation tokens).
const DEFAULT_PATTERN: &str = r"\w+|[^\w\s]+";

/// A regex-based tokenizer that extracts word and punctuation tokens.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new word tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ProsemeterError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
