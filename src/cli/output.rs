//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ProsemeterArgs};
use crate::error::Result;
use crate::pipeline::RunSummary;

/// Result structure for the extract command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub documents: usize,
    pub extracted: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub articles_dir: String,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub summary: RunSummary,
}

/// Print a command result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ProsemeterArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ProsemeterArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            println!("  {key}: {val}");
        }
    }
    Ok(())
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &ProsemeterArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
