//! The service boundary: one object owning the index, the ingestion
//! pipeline, and the query engine.
//!
//! [`SearchService`] is the type an embedding application holds. It wraps
//! the index in a reader/writer lock so any number of queries run in
//! parallel while mutations are serialized, and it keeps query-side and
//! ingest-side analysis wired to the same field policy so indexed terms and
//! query terms always agree.
//!
//! # Examples
//!
//! ```
//! use logseek::service::SearchService;
//!
//! let service = SearchService::with_defaults();
//! let bytes = br#"[
//!     {"eventId": "e1", "message": "server crashed unexpectedly"},
//!     {"eventId": "e2", "message": "server started normally"}
//! ]"#;
//! let report = service.ingest_bytes(bytes).unwrap();
//! assert_eq!(report.indexed, 2);
//!
//! let results = service.search("server").unwrap();
//! assert_eq!(results.total_hits, 2);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::document::document::EventDocument;
use crate::document::parser::DocumentParser;
use crate::error::Result;
use crate::index::config::IndexConfig;
use crate::index::inverted::{IndexStats, InvertedIndex};
use crate::ingest::json::JsonRowReader;
use crate::ingest::pipeline::{IngestPipeline, IngestReport, PipelineConfig};
use crate::ingest::row::RowReader;
use crate::search::results::SearchResults;
use crate::search::searcher::{Searcher, SearcherConfig};

/// Configuration for a [`SearchService`].
#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    /// Index behavior: duplicate policy and capacity.
    pub index: IndexConfig,
    /// Query behavior: default top-K, candidate cap, field boosts.
    pub searcher: SearcherConfig,
    /// Ingestion behavior: batch size.
    pub pipeline: PipelineConfig,
}

/// A search service over event documents.
pub struct SearchService {
    index: Arc<RwLock<InvertedIndex>>,
    pipeline: IngestPipeline,
    searcher: Searcher,
}

impl SearchService {
    /// Create a service with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let parser = Arc::new(DocumentParser::with_defaults());
        let searcher = Searcher::new(
            parser.message_analyzer(),
            Box::new(crate::search::scorer::TfIdfScorer::new()),
            config.searcher,
        );
        SearchService {
            index: Arc::new(RwLock::new(InvertedIndex::new(config.index))),
            pipeline: IngestPipeline::new(parser, config.pipeline),
            searcher,
        }
    }

    /// Create a service with default configuration throughout.
    pub fn with_defaults() -> Self {
        SearchService::new(ServiceConfig::default())
    }

    /// The shared index handle, for callers coordinating their own reads.
    pub fn index(&self) -> Arc<RwLock<InvertedIndex>> {
        Arc::clone(&self.index)
    }

    /// Run a query with the configured default top-K.
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        let guard = self.index.read();
        self.searcher.search_default(&guard, query)
    }

    /// Run a query returning at most `top_k` hits.
    pub fn search_with_limit(&self, query: &str, top_k: usize) -> Result<SearchResults> {
        let guard = self.index.read();
        self.searcher.search(&guard, query, top_k)
    }

    /// Ingest documents from raw JSON bytes (array or one object per line).
    pub fn ingest_bytes(&self, bytes: &[u8]) -> Result<IngestReport> {
        let mut reader = JsonRowReader::from_bytes(bytes)?;
        self.ingest_reader(&mut reader)
    }

    /// Ingest documents from a JSON file on disk, or from every `.json` and
    /// `.jsonl` file in a directory.
    pub fn ingest_file<P: AsRef<Path>>(&self, path: P) -> Result<IngestReport> {
        let path = path.as_ref();
        if path.is_dir() {
            return self.ingest_dir(path);
        }

        let bytes = fs::read(path)?;
        let report = self.ingest_bytes(&bytes)?;
        info!(
            "loaded {} documents from {} ({} skipped)",
            report.indexed,
            path.display(),
            report.failed
        );
        Ok(report)
    }

    fn ingest_dir(&self, dir: &Path) -> Result<IngestReport> {
        let mut entries: Vec<_> = fs::read_dir(dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|p| {
                matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("json") | Some("jsonl")
                )
            })
            .collect();
        entries.sort();

        let mut combined = IngestReport::default();
        for path in entries {
            let report = self.ingest_file(&path)?;
            combined.indexed += report.indexed;
            combined.failed += report.failed;
            combined.failures.extend(report.failures);
        }
        Ok(combined)
    }

    /// Ingest documents from any row source.
    pub fn ingest_reader<R: RowReader>(&self, reader: &mut R) -> Result<IngestReport> {
        self.pipeline.ingest(&self.index, reader)
    }

    /// Remove one document by event id, returning it.
    pub fn remove(&self, event_id: &str) -> Result<EventDocument> {
        self.index.write().remove(event_id)
    }

    /// Number of live documents.
    pub fn doc_count(&self) -> u64 {
        self.index.read().doc_count()
    }

    /// Aggregate index statistics.
    pub fn stats(&self) -> IndexStats {
        self.index.read().stats()
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("doc_count", &self.doc_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogseekError;

    #[test]
    fn test_ingest_then_search() {
        let service = SearchService::with_defaults();
        let bytes = br#"[
            {"eventId": "e1", "message": "server crashed unexpectedly", "namespace": "prod"},
            {"eventId": "e2", "message": "server started normally"}
        ]"#;
        service.ingest_bytes(bytes).unwrap();

        let results = service.search("crashed").unwrap();
        assert_eq!(results.total_hits, 1);
        assert_eq!(results.results[0].document.event_id, "e1");
        assert_eq!(results.query, "crashed");
    }

    #[test]
    fn test_search_limit() {
        let service = SearchService::with_defaults();
        let bytes = br#"[
            {"eventId": "e1", "message": "retry retry retry"},
            {"eventId": "e2", "message": "retry once"}
        ]"#;
        service.ingest_bytes(bytes).unwrap();

        let results = service.search_with_limit("retry", 1).unwrap();
        assert_eq!(results.total_hits, 2);
        assert_eq!(results.results.len(), 1);
        assert_eq!(results.results[0].document.event_id, "e1");
    }

    #[test]
    fn test_remove() {
        let service = SearchService::with_defaults();
        service
            .ingest_bytes(br#"[{"eventId": "e1", "message": "ephemeral"}]"#)
            .unwrap();
        assert_eq!(service.doc_count(), 1);

        let removed = service.remove("e1").unwrap();
        assert_eq!(removed.event_id, "e1");
        assert_eq!(service.doc_count(), 0);
        assert_eq!(service.search("ephemeral").unwrap().total_hits, 0);

        let err = service.remove("e1").unwrap_err();
        assert!(matches!(err, LogseekError::NotFound(_)));
    }

    #[test]
    fn test_ingest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, br#"[{"eventId": "e1", "message": "from disk"}]"#).unwrap();

        let service = SearchService::with_defaults();
        let report = service.ingest_file(&path).unwrap();
        assert_eq!(report.indexed, 1);
        assert_eq!(service.search("disk").unwrap().total_hits, 1);
    }

    #[test]
    fn test_ingest_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.json"),
            br#"[{"eventId": "e1", "message": "first file"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("b.jsonl"),
            b"{\"eventId\": \"e2\", \"message\": \"second file\"}\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let service = SearchService::with_defaults();
        let report = service.ingest_file(dir.path()).unwrap();

        assert_eq!(report.indexed, 2);
        assert_eq!(service.search("file").unwrap().total_hits, 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let service = SearchService::with_defaults();
        let err = service.ingest_file("/no/such/file.json").unwrap_err();
        assert!(matches!(err, LogseekError::Io(_)));
    }
}
