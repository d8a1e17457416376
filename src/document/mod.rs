//! Document model: event records, validation, and analysis glue.

pub mod analyzed;
pub mod document;
pub mod parser;

pub use analyzed::{AnalyzedDocument, AnalyzedTerm};
pub use document::{EventDocument, EventDocumentBuilder, FieldKind};
pub use parser::DocumentParser;
