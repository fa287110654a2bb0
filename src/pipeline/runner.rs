//! Batch pipeline driver.
//!
//! Reads the input table, pulls each document through an [`ArticleSource`]
//! and the [`MetricsEngine`], and writes the output table. Documents are
//! independent, so the runner offers an opt-in rayon parallel mode; either
//! way results are joined back to input rows by document id, never by
//! processing order.
//!
//! Per-document failures (fetch, extraction) are logged and leave the
//! output row unpopulated. Configuration failures (missing stop-word or
//! lexicon files, unreadable tables) abort the run before any document is
//! processed.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::table::{InputRow, InputTable, OutputTable};
use crate::error::Result;
use crate::extract::ArticleSource;
use crate::lexicon::{SentimentLexicon, StopWordSet};
use crate::metrics::{MetricsEngine, MetricsRecord};

/// Configuration for one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Input table path (URL_ID, URL rows).
    pub input_path: PathBuf,
    /// Output table path.
    pub output_path: PathBuf,
    /// Stop-word category files, unioned into one set.
    pub stop_word_paths: Vec<PathBuf>,
    /// Positive sentiment word list.
    pub positive_path: PathBuf,
    /// Negative sentiment word list.
    pub negative_path: PathBuf,
    /// Analyze documents in parallel with rayon.
    pub parallel: bool,
    /// 0 = quiet, 1 = normal, 2+ = verbose.
    pub verbosity: u8,
}

/// Summary of a completed pipeline run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    /// Rows in the input table.
    pub documents: usize,
    /// Documents analyzed successfully.
    pub analyzed: usize,
    /// Documents skipped after fetch/extraction failures.
    pub skipped: usize,
    /// Analyzed documents that hit the zero-denominator policy.
    pub degenerate: usize,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
    /// Where the output table was written.
    pub output_path: String,
}

/// Sequential (or opt-in parallel) batch driver.
pub struct PipelineRunner {
    config: PipelineConfig,
    engine: MetricsEngine,
    source: Box<dyn ArticleSource>,
}

impl PipelineRunner {
    /// Build a runner: loads the shared stop-word and sentiment
    /// configuration up front, so missing list files fail here.
    pub fn new(config: PipelineConfig, source: Box<dyn ArticleSource>) -> Result<Self> {
        let stop_words = Arc::new(StopWordSet::load(&config.stop_word_paths)?);
        let lexicon = Arc::new(SentimentLexicon::load(
            &config.positive_path,
            &config.negative_path,
        )?);

        if config.verbosity > 1 {
            println!(
                "Loaded {} stop words, {} positive / {} negative lexicon entries",
                stop_words.len(),
                lexicon.positive_len(),
                lexicon.negative_len()
            );
        }

        let engine = MetricsEngine::new(stop_words, lexicon)?;

        Ok(PipelineRunner {
            config,
            engine,
            source,
        })
    }

    /// Run the whole batch and write the output table.
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let rows = InputTable::load(&self.config.input_path)?;

        if self.config.verbosity > 0 {
            println!(
                "Analyzing {} documents from {}",
                rows.len(),
                self.config.input_path.display()
            );
        }

        let processed: Vec<(String, Option<MetricsRecord>)> = if self.config.parallel {
            rows.par_iter().map(|row| self.process(row)).collect()
        } else {
            rows.iter().map(|row| self.process(row)).collect()
        };

        // Join results back to input rows by id; processing order is
        // irrelevant to the output.
        let mut by_id: AHashMap<String, MetricsRecord> = AHashMap::new();
        for (id, record) in processed {
            if let Some(record) = record {
                by_id.insert(id, record);
            }
        }

        let mut output = OutputTable::create(&self.config.output_path)?;
        let mut analyzed = 0;
        let mut degenerate = 0;
        for row in &rows {
            let record = by_id.get(&row.id);
            if let Some(record) = record {
                analyzed += 1;
                if record.is_degenerate() {
                    degenerate += 1;
                }
            }
            output.write_row(row, record)?;
        }
        output.finish()?;

        let summary = RunSummary {
            documents: rows.len(),
            analyzed,
            skipped: rows.len() - analyzed,
            degenerate,
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: self.config.output_path.display().to_string(),
        };

        if self.config.verbosity > 0 {
            println!(
                "Analyzed {}/{} documents ({} skipped) in {} ms",
                summary.analyzed, summary.documents, summary.skipped, summary.duration_ms
            );
        }

        Ok(summary)
    }

    /// Process one input row. Failures are reported and become `None`.
    fn process(&self, row: &InputRow) -> (String, Option<MetricsRecord>) {
        let document = match self.source.fetch(&row.id, &row.url) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Skipping {}: {e}", row.id);
                return (row.id.clone(), None);
            }
        };

        match self.engine.analyze(document.body()) {
            Ok(record) => {
                if record.is_degenerate() && self.config.verbosity > 0 {
                    eprintln!("Document {} has no analyzable text", row.id);
                }
                if self.config.verbosity > 1 {
                    println!("Analyzed {}", row.id);
                }
                (row.id.clone(), Some(record))
            }
            Err(e) => {
                eprintln!("Skipping {}: {e}", row.id);
                (row.id.clone(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    use crate::document::Document;
    use crate::extract::DirArticleSource;

    fn write_input(dir: &TempDir, rows: &[(&str, &str)]) -> PathBuf {
        let path = dir.path().join("input.csv");
        let mut content = String::from("URL_ID,URL\n");
        for (id, url) in rows {
            content.push_str(&format!("{id},{url}\n"));
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn write_words(dir: &TempDir, name: &str, words: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, words).unwrap();
        path
    }

    fn config(dir: &TempDir, parallel: bool) -> PipelineConfig {
        PipelineConfig {
            input_path: write_input(
                dir,
                &[
                    ("doc1", "https://example.com/a"),
                    ("doc2", "https://example.com/b"),
                    ("missing", "https://example.com/c"),
                ],
            ),
            output_path: dir.path().join("output.csv"),
            stop_word_paths: vec![write_words(dir, "stop.txt", "the a an is it")],
            positive_path: write_words(dir, "positive.txt", "great love"),
            negative_path: write_words(dir, "negative.txt", "awful"),
            parallel,
            verbosity: 0,
        }
    }

    fn article_dir(dir: &TempDir) -> DirArticleSource {
        let source = DirArticleSource::new(dir.path().join("articles"));
        source
            .save(&Document::new(
                "doc1",
                "First",
                "I love this report. It is great.",
            ))
            .unwrap();
        source
            .save(&Document::new("doc2", "Second", "An awful quarter ended."))
            .unwrap();
        source
    }

    #[test]
    fn test_run_writes_all_rows() {
        let tmp = TempDir::new().unwrap();
        let source = article_dir(&tmp);
        let config = config(&tmp, false);
        let output_path = config.output_path.clone();

        let runner = PipelineRunner::new(config, Box::new(source)).unwrap();
        let summary = runner.run().unwrap();

        assert_eq!(summary.documents, 3);
        assert_eq!(summary.analyzed, 2);
        assert_eq!(summary.skipped, 1);

        let content = fs::read_to_string(output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("doc1,"));
        assert!(lines[2].starts_with("doc2,"));
        // The skipped row keeps its id and url with empty metric cells.
        assert!(lines[3].starts_with("missing,https://example.com/c,,"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let tmp_seq = TempDir::new().unwrap();
        let tmp_par = TempDir::new().unwrap();

        let seq_source = article_dir(&tmp_seq);
        let par_source = article_dir(&tmp_par);

        let seq_config = config(&tmp_seq, false);
        let par_config = config(&tmp_par, true);
        let seq_out = seq_config.output_path.clone();
        let par_out = par_config.output_path.clone();

        PipelineRunner::new(seq_config, Box::new(seq_source))
            .unwrap()
            .run()
            .unwrap();
        PipelineRunner::new(par_config, Box::new(par_source))
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(
            fs::read_to_string(seq_out).unwrap(),
            fs::read_to_string(par_out).unwrap()
        );
    }

    #[test]
    fn test_missing_stop_word_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let source = article_dir(&tmp);
        let mut config = config(&tmp, false);
        config.stop_word_paths = vec![PathBuf::from("/no/such/stopwords.txt")];

        let result = PipelineRunner::new(config, Box::new(source));
        assert!(result.is_err());
    }
}
