//! Article text extraction from HTML.
//!
//! Runs a readability algorithm (via `dom_smoothie`) over raw HTML to pull
//! out the article title and main body text, dropping navigation, boilerplate
//! and markup.

use dom_smoothie::{Config, Readability};

use crate::error::{ProsemeterError, Result};

/// Upper bound on elements handed to the readability parser.
const MAX_ELEMENTS_TO_PARSE: usize = 9000;

/// Extract `(title, body_text)` from raw HTML.
///
/// `url` is optional but recommended for resolving relative links.
pub fn extract_article(html: &str, url: Option<&str>) -> Result<(String, String)> {
    let cfg = Config {
        max_elements_to_parse: MAX_ELEMENTS_TO_PARSE,
        ..Default::default()
    };

    let mut readability = Readability::new(html, url, Some(cfg))
        .map_err(|e| ProsemeterError::extraction(format!("readability setup failed: {e}")))?;
    let article = readability
        .parse()
        .map_err(|e| ProsemeterError::extraction(format!("readability parse failed: {e}")))?;

    let title = article.title.trim().to_string();
    let body = article.text_content.trim().to_string();

    if body.is_empty() {
        return Err(ProsemeterError::extraction(
            "no article body found in page",
        ));
    }

    Ok((title, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_title_and_body() {
        let html = r#"<html><head><title>Rising Markets</title></head>
            <body><article>
            <h1>Rising Markets</h1>
            <p>Stocks climbed steadily through the quarter as investors
            returned to riskier assets after a long pause.</p>
            <p>Analysts attributed the move to easing rates and a string of
            better than expected earnings reports across the sector.</p>
            </article></body></html>"#;

        let (title, body) = extract_article(html, Some("https://example.com/a")).unwrap();

        assert!(title.contains("Rising Markets"));
        assert!(body.contains("Stocks climbed steadily"));
        assert!(body.contains("earnings reports"));
        assert!(!body.contains("<p>"));
    }

    #[test]
    fn test_empty_page_is_extraction_error() {
        let html = "<html><head><title>Empty</title></head><body></body></html>";
        let result = extract_article(html, None);
        assert!(result.is_err());
    }
}
