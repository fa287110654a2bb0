//! Metrics engine: derives all document scores from one analysis pass.
//!
//! The engine owns the tokenizers and the filter chain (alphanumeric →
//! lowercase → stop) plus shared references to the stop-word set and the
//! sentiment lexicon. Per document it tokenizes once, takes the raw word and
//! sentence counts BEFORE filtering (the sentence-length metrics are defined
//! over raw lexical density), then scores the cleaned word list.
//!
//! # Zero denominators
//!
//! A document with no sentences or an empty cleaned word list produces 0.0
//! for every affected ratio instead of failing; [`MetricsRecord::is_degenerate`]
//! reports that the policy was applied so callers can flag the document.
//! The polarity and subjectivity formulas carry their own 1e-6 epsilon and
//! never divide by zero.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use prosemeter::lexicon::{SentimentLexicon, StopWordSet};
//! use prosemeter::metrics::engine::MetricsEngine;
//!
//! let stop_words = Arc::new(StopWordSet::empty());
//! let lexicon = Arc::new(SentimentLexicon::from_words(vec!["great"], vec!["awful"]));
//! let engine = MetricsEngine::new(stop_words, lexicon).unwrap();
//!
//! let record = engine.analyze("This is great. Really great.").unwrap();
//! assert_eq!(record.positive_score, 2);
//! assert_eq!(record.negative_score, 0);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_filter::{AlphanumericFilter, Filter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{SentenceTokenizer, Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::lexicon::{SentimentLexicon, StopWordSet};
use crate::metrics::syllable::count_syllables;

/// Epsilon used by the polarity and subjectivity formulas.
const EPSILON: f64 = 1e-6;

/// Words counted as personal pronouns (exact matches over cleaned tokens).
const PERSONAL_PRONOUNS: &[&str] = &["i", "we", "my", "ours", "us"];

/// The 13 metric values computed for one document.
///
/// Count fields are integers end-to-end; everything else is `f64`. Field
/// serialization names match the output table columns exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: u64,

    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: u64,

    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,

    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,

    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,

    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,

    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,

    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,

    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: u64,

    #[serde(rename = "WORD COUNT")]
    pub word_count: u64,

    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,

    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: u64,

    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,

    /// Whether any ratio hit the zero-denominator policy.
    #[serde(skip)]
    degenerate: bool,
}

impl MetricsRecord {
    /// Output table column names, in output order.
    pub const COLUMNS: [&'static str; 13] = [
        "POSITIVE SCORE",
        "NEGATIVE SCORE",
        "POLARITY SCORE",
        "SUBJECTIVITY SCORE",
        "AVG SENTENCE LENGTH",
        "PERCENTAGE OF COMPLEX WORDS",
        "FOG INDEX",
        "AVG NUMBER OF WORDS PER SENTENCE",
        "COMPLEX WORD COUNT",
        "WORD COUNT",
        "SYLLABLE PER WORD",
        "PERSONAL PRONOUNS",
        "AVG WORD LENGTH",
    ];

    /// Format the metric values as table cells, in [`Self::COLUMNS`] order.
    pub fn values(&self) -> [String; 13] {
        [
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllables_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }

    /// Whether the zero-denominator policy was applied to any ratio.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Computes a [`MetricsRecord`] per document from shared, immutable
/// stop-word and sentiment configuration.
pub struct MetricsEngine {
    word_tokenizer: WordTokenizer,
    sentence_tokenizer: SentenceTokenizer,
    filters: Vec<Arc<dyn Filter>>,
    lexicon: Arc<SentimentLexicon>,
}

impl MetricsEngine {
    /// Create an engine over the given stop-word set and sentiment lexicon.
    pub fn new(stop_words: Arc<StopWordSet>, lexicon: Arc<SentimentLexicon>) -> Result<Self> {
        let filters: Vec<Arc<dyn Filter>> = vec![
            Arc::new(AlphanumericFilter::new()),
            Arc::new(LowercaseFilter::new()),
            Arc::new(StopFilter::new(stop_words)),
        ];

        Ok(MetricsEngine {
            word_tokenizer: WordTokenizer::new()?,
            sentence_tokenizer: SentenceTokenizer::new(),
            filters,
            lexicon,
        })
    }

    /// Build the cleaned word list for a text: alphanumeric tokens only,
    /// lowercased, stop words removed.
    pub fn cleaned_words(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<Token> = self.word_tokenizer.tokenize(text)?.collect();
        self.apply_filters(tokens)
    }

    fn apply_filters(&self, tokens: Vec<Token>) -> Result<Vec<String>> {
        let mut stream: Box<dyn Iterator<Item = Token>> = Box::new(tokens.into_iter());
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream.map(|t| t.text).collect())
    }

    /// Analyze one document body and produce its metrics record.
    pub fn analyze(&self, text: &str) -> Result<MetricsRecord> {
        let raw_tokens: Vec<Token> = self.word_tokenizer.tokenize(text)?.collect();
        let raw_word_count = raw_tokens.len();
        let sentence_count = self.sentence_tokenizer.tokenize(text).len();

        let cleaned = self.apply_filters(raw_tokens)?;
        let cleaned_count = cleaned.len();

        let positive_score = cleaned
            .iter()
            .filter(|w| self.lexicon.is_positive(w))
            .count() as u64;
        let negative_score = cleaned
            .iter()
            .filter(|w| self.lexicon.is_negative(w))
            .count() as u64;

        let pos = positive_score as f64;
        let neg = negative_score as f64;
        let polarity_score = (pos - neg) / (pos + neg + EPSILON);
        let subjectivity_score = (pos + neg) / (cleaned_count as f64 + EPSILON);

        let degenerate = sentence_count == 0 || cleaned_count == 0;

        let avg_sentence_length = if sentence_count == 0 {
            0.0
        } else {
            raw_word_count as f64 / sentence_count as f64
        };

        let complex_word_count = cleaned.iter().filter(|w| w.chars().count() > 2).count() as u64;

        let percentage_complex_words = if cleaned_count == 0 {
            0.0
        } else {
            complex_word_count as f64 / cleaned_count as f64
        };

        let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

        let syllables_per_word = if cleaned_count == 0 {
            0.0
        } else {
            let total: usize = cleaned.iter().map(|w| count_syllables(w)).sum();
            total as f64 / cleaned_count as f64
        };

        let personal_pronouns = cleaned
            .iter()
            .filter(|w| PERSONAL_PRONOUNS.contains(&w.as_str()))
            .count() as u64;

        let avg_word_length = if cleaned_count == 0 {
            0.0
        } else {
            let total: usize = cleaned.iter().map(|w| w.chars().count()).sum();
            total as f64 / cleaned_count as f64
        };

        Ok(MetricsRecord {
            positive_score,
            negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            avg_words_per_sentence: avg_sentence_length,
            complex_word_count,
            word_count: cleaned_count as u64,
            syllables_per_word,
            personal_pronouns,
            avg_word_length,
            degenerate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(stop: StopWordSet, lexicon: SentimentLexicon) -> MetricsEngine {
        MetricsEngine::new(Arc::new(stop), Arc::new(lexicon)).unwrap()
    }

    fn plain_engine() -> MetricsEngine {
        engine(StopWordSet::empty(), SentimentLexicon::empty())
    }

    #[test]
    fn test_reference_document() {
        let lexicon =
            SentimentLexicon::from_words(vec!["love", "great", "wonderful"], Vec::<&str>::new());
        let engine = engine(StopWordSet::empty(), lexicon);

        let record = engine
            .analyze("I love this. It is great and wonderful.")
            .unwrap();

        // Raw stream: 8 words + 2 period tokens over 2 sentences.
        assert_eq!(record.positive_score, 3);
        assert_eq!(record.negative_score, 0);
        assert_eq!(record.personal_pronouns, 1);
        assert_eq!(record.word_count, 8);
        assert!((record.polarity_score - 1.0).abs() < 1e-5);
        assert!((record.subjectivity_score - 3.0 / (8.0 + 1e-6)).abs() < 1e-12);
        assert!((record.avg_sentence_length - 5.0).abs() < 1e-12);
        assert!((record.avg_words_per_sentence - 5.0).abs() < 1e-12);
        // love, this, great, and, wonderful are longer than 2 chars.
        assert_eq!(record.complex_word_count, 5);
        assert!((record.percentage_complex_words - 0.625).abs() < 1e-12);
        assert!((record.fog_index - 2.25).abs() < 1e-12);
        assert!((record.syllables_per_word - 1.25).abs() < 1e-12);
        assert!((record.avg_word_length - 3.75).abs() < 1e-12);
        assert!(!record.is_degenerate());
    }

    #[test]
    fn test_stop_words_excluded_from_cleaned_list() {
        let engine = engine(
            StopWordSet::from_words(vec!["is", "and", "it", "this"]),
            SentimentLexicon::empty(),
        );

        let cleaned = engine
            .cleaned_words("I love this. It is great and wonderful.")
            .unwrap();

        assert_eq!(cleaned, vec!["i", "love", "great", "wonderful"]);
    }

    #[test]
    fn test_sentence_metrics_use_raw_counts() {
        // Stop words shrink the cleaned list but not the sentence metrics.
        let engine = engine(
            StopWordSet::from_words(vec!["the", "a"]),
            SentimentLexicon::empty(),
        );

        let record = engine.analyze("The cat sat. A dog ran.").unwrap();

        // 6 words + 2 periods = 8 raw tokens, 2 sentences.
        assert!((record.avg_sentence_length - 4.0).abs() < 1e-12);
        assert_eq!(record.word_count, 4);
    }

    #[test]
    fn test_empty_body_applies_zero_policy() {
        let record = plain_engine().analyze("").unwrap();

        assert_eq!(record.word_count, 0);
        assert_eq!(record.positive_score, 0);
        assert_eq!(record.polarity_score, 0.0);
        assert_eq!(record.subjectivity_score, 0.0);
        assert_eq!(record.avg_sentence_length, 0.0);
        assert_eq!(record.percentage_complex_words, 0.0);
        assert_eq!(record.syllables_per_word, 0.0);
        assert_eq!(record.avg_word_length, 0.0);
        assert!(record.is_degenerate());
    }

    #[test]
    fn test_zero_sentiment_polarity_is_zero_not_nan() {
        let record = plain_engine().analyze("Plain factual words here.").unwrap();

        assert_eq!(record.positive_score, 0);
        assert_eq!(record.negative_score, 0);
        assert_eq!(record.polarity_score, 0.0);
        assert!(!record.polarity_score.is_nan());
    }

    #[test]
    fn test_polarity_and_subjectivity_bounds() {
        let lexicon = SentimentLexicon::from_words(vec!["good"], vec!["bad"]);
        let engine = engine(StopWordSet::empty(), lexicon);

        for text in [
            "good good good.",
            "bad bad.",
            "good bad neutral words here.",
            "nothing scored at all.",
        ] {
            let record = engine.analyze(text).unwrap();
            assert!(record.polarity_score >= -1.0 && record.polarity_score <= 1.0);
            assert!(record.subjectivity_score >= 0.0 && record.subjectivity_score <= 1.0);
        }
    }

    #[test]
    fn test_avg_word_length_consistency() {
        let engine = plain_engine();
        let text = "Measured words carry measurable lengths.";

        let cleaned = engine.cleaned_words(text).unwrap();
        let record = engine.analyze(text).unwrap();

        let total: usize = cleaned.iter().map(|w| w.chars().count()).sum();
        let product = record.avg_word_length * record.word_count as f64;
        assert!((product - total as f64).abs() < 1e-9);
    }

    #[test]
    fn test_word_in_both_lexicon_lists_counts_twice() {
        let lexicon = SentimentLexicon::from_words(vec!["odd"], vec!["odd"]);
        let engine = engine(StopWordSet::empty(), lexicon);

        let record = engine.analyze("An odd result.").unwrap();

        assert_eq!(record.positive_score, 1);
        assert_eq!(record.negative_score, 1);
        assert_eq!(record.polarity_score, 0.0);
    }

    #[test]
    fn test_determinism() {
        let lexicon = SentimentLexicon::from_words(vec!["great"], vec!["poor"]);
        let engine = engine(StopWordSet::from_words(vec!["the"]), lexicon);
        let text = "The results were great. The outlook is poor.";

        let a = engine.analyze(text).unwrap();
        let b = engine.analyze(text).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pronoun_matching_is_exact() {
        let engine = plain_engine();

        // "us" inside "trust" or "because" must not match; the isolated
        // token "US" lowercases to "us" and does.
        let record = engine.analyze("Trust us because we deliver.").unwrap();
        assert_eq!(record.personal_pronouns, 2);
    }

    #[test]
    fn test_record_columns_and_values_align() {
        let record = plain_engine().analyze("Some simple words.").unwrap();
        assert_eq!(MetricsRecord::COLUMNS.len(), record.values().len());
    }
}
