//! Document structure for one analysis pass.

use serde::{Deserialize, Serialize};

/// An extracted article: identifier, title, and raw body text.
///
/// Documents are immutable once created and live for a single analysis
/// pass; metrics are derived from `body` and keyed by `id` in the output
/// table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    title: String,
    body: String,
}

impl Document {
    /// Create a new document.
    pub fn new<S1, S2, S3>(id: S1, title: S2, body: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Document {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// The opaque document identifier (output rows are keyed by it).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The article title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The raw article body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new("blackassign0001", "A Title", "Body text.");
        assert_eq!(doc.id(), "blackassign0001");
        assert_eq!(doc.title(), "A Title");
        assert_eq!(doc.body(), "Body text.");
    }
}
