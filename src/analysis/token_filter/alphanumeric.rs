//! Alphanumeric filter implementation.
//!
//! Removes tokens containing any non-alphanumeric character. This is the
//! first step in building the cleaned word list: punctuation-run tokens
//! emitted by the word tokenizer (",", "...", "'") are dropped here, after
//! the raw token count has already been taken for the sentence metrics.
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::token::Token;
//! use prosemeter::analysis::token_filter::Filter;
//! use prosemeter::analysis::token_filter::alphanumeric::AlphanumericFilter;
//!
//! let filter = AlphanumericFilter::new();
//! let tokens = vec![Token::new("hello", 0), Token::new(",", 1), Token::new("2024", 2)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "hello");
//! assert_eq!(result[1].text, "2024");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only fully alphanumeric tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens.filter(|token| token.is_alphanumeric()).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_punctuation_removed() {
        let filter = AlphanumericFilter::new();
        let tokens = vec![
            Token::new("hello", 0),
            Token::new(".", 1),
            Token::new("world", 2),
            Token::new("...", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
    }

    #[test]
    fn test_mixed_tokens_removed() {
        let filter = AlphanumericFilter::new();
        let tokens = vec![Token::new("well-known", 0), Token::new("known", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "known");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphanumericFilter::new().name(), "alphanumeric");
    }
}
