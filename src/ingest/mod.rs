//! Ingestion: row readers and the pipeline that feeds the index.

pub mod json;
pub mod pipeline;
pub mod row;

pub use json::JsonRowReader;
pub use pipeline::{IngestPipeline, IngestReport, PipelineConfig, RowFailure};
pub use row::{RowReader, RowRecord, RowResult};
