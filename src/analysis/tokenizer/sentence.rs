//! Sentence segmentation implementation.
//!
//! Splits raw text into sentence strings with a scanner that understands the
//! common cases naive period-splitting gets wrong: decimal numbers ("3.5"),
//! title and latinism abbreviations ("Dr. Smith", "etc."), single-letter
//! initials ("J. Smith", "U.S."), and terminators wrapped in closing quotes
//! or brackets. Segmentation is deterministic for identical input.
//!
//! Sentence units are strings, not [`Token`](crate::analysis::token::Token)s,
//! so this type has its own inherent API instead of the `Tokenizer` trait.
//!
//! # Examples
//!
//! ```
//! use prosemeter::analysis::tokenizer::sentence::SentenceTokenizer;
//!
//! let tokenizer = SentenceTokenizer::new();
//! let sentences = tokenizer.tokenize("Dr. Smith arrived at 3.5 p.m. today. He left early.");
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0], "Dr. Smith arrived at 3.5 p.m. today.");
//! assert_eq!(sentences[1], "He left early.");
//! ```

use ahash::AHashSet;

/// Abbreviations whose trailing period does not end a sentence.
///
/// Titles, latinisms, corporate shorteners, months, and weekdays. Compared
/// case-insensitively against the word immediately before the period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "gen", "sen", "rep", "st", "jr", "sr", "vs",
    "etc", "inc", "ltd", "co", "corp", "dept", "est", "approx", "fig", "vol", "pp", "al", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue",
    "wed", "thu", "fri", "sat", "sun",
];

/// Characters that may trail a terminator and still belong to the sentence.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

/// A sentence splitter aware of abbreviations and decimal numbers.
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    abbreviations: AHashSet<&'static str>,
}

impl SentenceTokenizer {
    /// Create a new sentence tokenizer with the default abbreviation list.
    pub fn new() -> Self {
        SentenceTokenizer {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check whether a word's trailing period marks an abbreviation.
    ///
    /// Single-letter words never end a sentence at a period: they are
    /// initials ("J. Smith") or components of dotted shorteners
    /// ("U.S.", "p.m.", "e.g.").
    fn is_abbreviation(&self, word: &str) -> bool {
        if word.chars().count() == 1 {
            return true;
        }
        self.abbreviations.contains(word.to_lowercase().as_str())
    }

    /// Split the given text into an ordered list of sentences.
    ///
    /// Sentences are trimmed of surrounding whitespace; empty segments are
    /// dropped, so whitespace-only input yields an empty list.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < len {
            let c = chars[i];
            if c != '.' && c != '!' && c != '?' {
                i += 1;
                continue;
            }

            if c == '.' {
                // Decimal point: digit on both sides.
                let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
                let next_digit = i + 1 < len && chars[i + 1].is_ascii_digit();
                if prev_digit && next_digit {
                    i += 1;
                    continue;
                }

                let word = preceding_word(&chars, i);
                if !word.is_empty() && self.is_abbreviation(&word) {
                    i += 1;
                    continue;
                }
            }

            // Absorb repeated terminators and trailing closers ("?!", ".\"").
            let mut end = i + 1;
            while end < len
                && (chars[end] == '.'
                    || chars[end] == '!'
                    || chars[end] == '?'
                    || CLOSERS.contains(&chars[end]))
            {
                end += 1;
            }

            // A boundary needs whitespace (or end of text) after it;
            // anything else is mid-token punctuation like "example.com".
            if end < len && !chars[end].is_whitespace() {
                i = end;
                continue;
            }

            let sentence: String = chars[start..end].iter().collect();
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }

            // Skip whitespace to the start of the next sentence.
            let mut next = end;
            while next < len && chars[next].is_whitespace() {
                next += 1;
            }
            start = next;
            i = next;
        }

        if start < len {
            let tail: String = chars[start..].iter().collect();
            let tail = tail.trim();
            if !tail.is_empty() {
                sentences.push(tail.to_string());
            }
        }

        sentences
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the alphabetic word immediately before position `i`.
fn preceding_word(chars: &[char], i: usize) -> String {
    let mut start = i;
    while start > 0 && chars[start - 1].is_alphabetic() {
        start -= 1;
    }
    chars[start..i].iter().collect()
}
