//! # Prosemeter
//!
//! Batch lexical and readability analytics for web articles.
//!
//! Prosemeter reads a table of `(URL_ID, URL)` rows, extracts the article
//! text behind each URL, and computes 13 lexical/readability metrics per
//! document (sentiment scores, sentence-length and complexity measures,
//! syllable and pronoun counts) into an output table keyed by document id.
//!
//! ## Features
//!
//! - Word and sentence tokenization with abbreviation/decimal handling
//! - Token filter pipeline (alphanumeric, lowercase, stop words)
//! - Multi-file stop-word sets and positive/negative sentiment lexicons
//! - Readability-based article extraction over HTTP, or a file cache
//! - Sequential batch driver with opt-in parallel mode

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
