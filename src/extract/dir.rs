//! Directory-backed article source.
//!
//! Reads articles previously saved by the `extract` command: one
//! `{id}.txt` per document, with the title on the first line, a blank
//! line, then the body. Lets the analysis phase rerun without touching
//! the network.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{ProsemeterError, Result};
use crate::extract::ArticleSource;

/// An [`ArticleSource`] that reads cached `{id}.txt` files from a directory.
#[derive(Clone, Debug)]
pub struct DirArticleSource {
    dir: PathBuf,
}

impl DirArticleSource {
    /// Create a source over the given article directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DirArticleSource { dir: dir.into() }
    }

    /// The path of the cache file for a document id.
    pub fn article_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.txt"))
    }

    /// Save a document into the cache in the format this source reads.
    pub fn save(&self, document: &Document) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.article_path(document.id());
        let content = format!("{}\n\n{}", document.title(), document.body());
        fs::write(&path, content)?;
        Ok(())
    }
}

/// Split a cache file into title and body.
fn parse_article(content: &str) -> (String, String) {
    match content.split_once("\n\n") {
        Some((title, body)) => (title.trim().to_string(), body.trim().to_string()),
        // No blank line: a bare body saved without a title.
        None => (String::new(), content.trim().to_string()),
    }
}

impl ArticleSource for DirArticleSource {
    fn fetch(&self, id: &str, _url: &str) -> Result<Document> {
        let path = self.article_path(id);
        let content = fs::read_to_string(&path).map_err(|e| {
            ProsemeterError::extraction(format!("cannot read article {}: {e}", path.display()))
        })?;

        let (title, body) = parse_article(&content);
        Ok(Document::new(id, title, body))
    }

    fn name(&self) -> &'static str {
        "dir"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_fetch_round_trip() {
        let tmp = TempDir::new().unwrap();
        let source = DirArticleSource::new(tmp.path());

        let doc = Document::new("doc1", "A Title", "First paragraph.\nSecond paragraph.");
        source.save(&doc).unwrap();

        let loaded = source.fetch("doc1", "https://example.com/a").unwrap();
        assert_eq!(loaded.title(), "A Title");
        assert_eq!(loaded.body(), "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn test_missing_article_is_extraction_error() {
        let tmp = TempDir::new().unwrap();
        let source = DirArticleSource::new(tmp.path());

        let err = source.fetch("ghost", "https://example.com/x").unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_file_without_title_line() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("doc2.txt"), "Just a body.").unwrap();

        let source = DirArticleSource::new(tmp.path());
        let doc = source.fetch("doc2", "").unwrap();

        assert_eq!(doc.title(), "");
        assert_eq!(doc.body(), "Just a body.");
    }

    #[test]
    fn test_source_name() {
        assert_eq!(DirArticleSource::new("articles").name(), "dir");
    }
}
