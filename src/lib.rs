//! # logseek
//!
//! An in-memory full-text search engine for event and log records.
//!
//! ## Features
//!
//! - Inverted index with per-field postings
//! - Flexible text analysis pipeline
//! - TF-IDF ranked queries with top-K truncation
//! - Batched JSON ingestion with per-row error reporting
//! - Concurrent reads, serialized writes

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod index;
pub mod ingest;
pub mod search;
pub mod service;

pub mod prelude {
    //! Convenience re-exports for embedding applications.

    pub use crate::document::{DocumentParser, EventDocument, FieldKind};
    pub use crate::error::{LogseekError, Result};
    pub use crate::index::{DuplicatePolicy, IndexConfig, IndexStats, InvertedIndex};
    pub use crate::ingest::{IngestPipeline, IngestReport, JsonRowReader};
    pub use crate::search::{SearchResults, Searcher, SearcherConfig};
    pub use crate::service::{SearchService, ServiceConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
