//! Ingestion pipeline: rows in, indexed documents out.
//!
//! The pipeline drains a [`RowReader`] batch by batch. Each batch is
//! validated and analyzed in parallel outside any lock, then applied to the
//! index under a single writer-lock hold, so no lock hold ever spans the
//! whole file. Malformed rows are skipped and counted; only an unreadable
//! source or an exhausted resource bound aborts the call.
//!
//! # Examples
//!
//! ```
//! use parking_lot::RwLock;
//!
//! use logseek::document::DocumentParser;
//! use logseek::index::{IndexConfig, InvertedIndex};
//! use logseek::ingest::{IngestPipeline, JsonRowReader};
//!
//! let index = RwLock::new(InvertedIndex::new(IndexConfig::default()));
//! let pipeline = IngestPipeline::with_defaults();
//!
//! let bytes = br#"[{"eventId": "e1", "message": "server crashed"}]"#;
//! let mut reader = JsonRowReader::from_bytes(bytes).unwrap();
//!
//! let report = pipeline.ingest(&index, &mut reader).unwrap();
//! assert_eq!(report.indexed, 1);
//! assert_eq!(report.failed, 0);
//! ```

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::Serialize;

use crate::document::analyzed::AnalyzedDocument;
use crate::document::parser::DocumentParser;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::ingest::row::{RowReader, RowResult};

/// Configuration for the ingestion pipeline.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Rows pulled from the reader, and applied to the index, per batch.
    pub batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig { batch_size: 1000 }
    }
}

/// One skipped row and the reason it was skipped.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFailure {
    /// 1-based ordinal of the row in the source.
    pub row: usize,
    /// Human-readable reason.
    pub reason: String,
}

/// Result of one ingest call.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Number of documents successfully indexed.
    pub indexed: u64,
    /// Number of rows skipped.
    pub failed: u64,
    /// Per-row reasons for the skipped rows.
    pub failures: Vec<RowFailure>,
}

/// The ingestion pipeline.
pub struct IngestPipeline {
    parser: Arc<DocumentParser>,
    config: PipelineConfig,
}

impl IngestPipeline {
    /// Create a pipeline with the given parser and configuration.
    pub fn new(parser: Arc<DocumentParser>, config: PipelineConfig) -> Self {
        IngestPipeline { parser, config }
    }

    /// Create a pipeline with the default field policy and batch size.
    pub fn with_defaults() -> Self {
        IngestPipeline::new(
            Arc::new(DocumentParser::with_defaults()),
            PipelineConfig::default(),
        )
    }

    /// The parser used by this pipeline.
    pub fn parser(&self) -> &Arc<DocumentParser> {
        &self.parser
    }

    /// Drain the reader into the index.
    ///
    /// Returns the counts of indexed and skipped rows. Fails only when the
    /// source itself cannot be read or the index hits a fatal condition
    /// (e.g. its capacity bound); everything already indexed by that point
    /// stays in the index.
    pub fn ingest<R: RowReader>(
        &self,
        index: &RwLock<InvertedIndex>,
        reader: &mut R,
    ) -> Result<IngestReport> {
        let mut report = IngestReport::default();
        let mut ordinal = 0usize;

        while let Some(batch) = reader.next_batch(self.config.batch_size)? {
            let base = ordinal;
            ordinal += batch.len();

            // Validation and analysis are pure, so they run in parallel
            // outside the lock.
            let analyzed: Vec<(usize, Result<AnalyzedDocument>)> = batch
                .into_par_iter()
                .enumerate()
                .map(|(i, row)| (base + i + 1, self.analyze_row(row)))
                .collect();

            let mut guard = index.write();
            for (row_number, outcome) in analyzed {
                let insert_result = outcome.and_then(|doc| guard.insert(doc).map(|_| ()));
                match insert_result {
                    Ok(()) => report.indexed += 1,
                    Err(e) if e.is_fatal_for_ingest() => {
                        drop(guard);
                        return Err(e);
                    }
                    Err(e) => {
                        warn!("skipping row {row_number}: {e}");
                        report.failed += 1;
                        report.failures.push(RowFailure {
                            row: row_number,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            "ingest finished: {} indexed, {} skipped",
            report.indexed, report.failed
        );
        Ok(report)
    }

    fn analyze_row(&self, row: RowResult) -> Result<AnalyzedDocument> {
        let document = row?.into_document()?;
        self.parser.parse(document)
    }
}

impl std::fmt::Debug for IngestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestPipeline")
            .field("batch_size", &self.config.batch_size)
            .finish()
    }
}
