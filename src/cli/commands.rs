//! Command implementations for the Prosemeter CLI.

use std::time::{Duration, Instant};

use crate::cli::args::{AnalyzeArgs, Command, ExtractArgs, ProsemeterArgs};
use crate::cli::output::{output_result, AnalysisResult, ExtractionResult};
use crate::document::table::InputTable;
use crate::error::Result;
use crate::extract::{ArticleSource, DirArticleSource, HttpArticleSource};
use crate::pipeline::{PipelineConfig, PipelineRunner};

/// Execute a CLI command.
pub fn execute_command(args: ProsemeterArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => extract_articles(extract_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_documents(analyze_args.clone(), &args),
    }
}

/// Fetch every input URL and cache the extracted article text.
fn extract_articles(args: ExtractArgs, cli_args: &ProsemeterArgs) -> Result<()> {
    let start = Instant::now();
    let rows = InputTable::load(&args.input)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Extracting {} articles into {}",
            rows.len(),
            args.articles_dir.display()
        );
    }

    let source = HttpArticleSource::with_timeout(Duration::from_secs(args.timeout_secs))?;
    let cache = DirArticleSource::new(&args.articles_dir);

    let mut extracted = 0;
    let mut failed = 0;
    for row in &rows {
        match source.fetch(&row.id, &row.url) {
            Ok(document) => {
                cache.save(&document)?;
                extracted += 1;
                if cli_args.verbosity() > 1 {
                    println!("Extracted {} from {}", row.id, row.url);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Failed to extract {}: {e}", row.id);
            }
        }
    }

    output_result(
        "Extraction complete",
        &ExtractionResult {
            documents: rows.len(),
            extracted,
            failed,
            duration_ms: start.elapsed().as_millis() as u64,
            articles_dir: args.articles_dir.display().to_string(),
        },
        cli_args,
    )
}

/// Run the analysis pipeline over the input table.
fn analyze_documents(args: AnalyzeArgs, cli_args: &ProsemeterArgs) -> Result<()> {
    let source: Box<dyn ArticleSource> = match &args.articles_dir {
        Some(dir) => Box::new(DirArticleSource::new(dir)),
        None => Box::new(HttpArticleSource::with_timeout(Duration::from_secs(
            args.timeout_secs,
        ))?),
    };

    let config = PipelineConfig {
        input_path: args.input,
        output_path: args.output,
        stop_word_paths: args.stop_word_files,
        positive_path: args.positive,
        negative_path: args.negative,
        parallel: args.parallel,
        verbosity: cli_args.verbosity(),
    };

    let runner = PipelineRunner::new(config, source)?;
    let summary = runner.run()?;

    output_result(
        "Analysis complete",
        &AnalysisResult { summary },
        cli_args,
    )
}
