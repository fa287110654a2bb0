//! Article acquisition collaborators.
//!
//! The analysis core only needs a raw body string per document; everything
//! about where that text comes from sits behind [`ArticleSource`]. Two
//! implementations ship: [`HttpArticleSource`] fetches and extracts live
//! pages, [`DirArticleSource`] reads previously cached article files.

use crate::document::Document;
use crate::error::Result;

pub mod dir;
pub mod http;
pub mod readability;

// Re-export commonly used types
pub use dir::DirArticleSource;
pub use http::HttpArticleSource;
pub use readability::extract_article;

/// Trait for per-document text collaborators.
///
/// A failed fetch is an [`Extraction`](crate::error::ProsemeterError::Extraction)
/// error: the pipeline logs it, skips the document, and keeps going.
pub trait ArticleSource: Send + Sync {
    /// Produce the document (title and body) for one input row.
    fn fetch(&self, id: &str, url: &str) -> Result<Document>;

    /// Get the name of this source (for debugging and configuration).
    fn name(&self) -> &'static str;
}
