//! Document model and table I/O for Prosemeter.

pub mod document;
pub mod table;

// Re-export commonly used types
pub use document::Document;
pub use table::{InputRow, InputTable, OutputTable};
