//! Input and output tables (CSV).
//!
//! The input table lists documents to analyze, one `(URL_ID, URL)` row per
//! document. The output table repeats those two columns and appends the 13
//! metric columns; a document that failed extraction keeps its row with the
//! metric cells left empty.
//!
//! # Input format
//!
//! ```csv
//! URL_ID,URL
//! blackassign0001,https://example.com/article-1
//! blackassign0002,https://example.com/article-2
//! ```

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ProsemeterError, Result};
use crate::metrics::MetricsRecord;

/// One row of the input table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRow {
    /// Opaque document identifier.
    #[serde(rename = "URL_ID")]
    pub id: String,
    /// Source URL for extraction.
    #[serde(rename = "URL")]
    pub url: String,
}

/// Reader for the input table.
pub struct InputTable;

impl InputTable {
    /// Load all rows from an input CSV.
    ///
    /// The header must contain `URL_ID` and `URL` columns; anything else is
    /// a table error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ProsemeterError::table(format!("cannot open input table {}: {e}", path.display()))
        })?;

        let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: InputRow = record
                .map_err(|e| ProsemeterError::table(format!("bad input row: {e}")))?;
            rows.push(row);
        }
        Ok(rows)
    }
}

/// Writer for the output table.
///
/// Rows are appended in whatever order the caller joins results; the table
/// is keyed by `URL_ID`, so row order carries no meaning.
pub struct OutputTable {
    writer: csv::Writer<File>,
}

impl OutputTable {
    /// Create the output CSV and write its header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            ProsemeterError::table(format!(
                "cannot create output table {}: {e}",
                path.display()
            ))
        })?;

        let mut writer = WriterBuilder::new().from_writer(file);

        let mut header = vec!["URL_ID", "URL"];
        header.extend(MetricsRecord::COLUMNS);
        writer
            .write_record(&header)
            .map_err(|e| ProsemeterError::table(format!("cannot write header: {e}")))?;

        Ok(OutputTable { writer })
    }

    /// Write one document row. `record` is `None` for skipped documents;
    /// their metric cells stay empty.
    pub fn write_row(&mut self, row: &InputRow, record: Option<&MetricsRecord>) -> Result<()> {
        let mut cells = vec![row.id.clone(), row.url.clone()];
        match record {
            Some(record) => cells.extend(record.values()),
            None => cells.extend(std::iter::repeat_n(String::new(), MetricsRecord::COLUMNS.len())),
        }

        self.writer
            .write_record(&cells)
            .map_err(|e| ProsemeterError::table(format!("cannot write row {}: {e}", row.id)))
    }

    /// Flush buffered rows to disk.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| ProsemeterError::table(format!("cannot flush output table: {e}")))
    }
}
