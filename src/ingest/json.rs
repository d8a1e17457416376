//! JSON row reader: decodes a JSON array or line-delimited JSON bytes.
//!
//! Two layouts are accepted, distinguished by the first non-whitespace
//! byte:
//!
//! - `[` — a top-level JSON array of row objects,
//! - `{` — line-delimited JSON (one row object per line).
//!
//! Anything else (or non-UTF-8 input, or an unparsable array) is a fatal
//! ingest error: the source cannot be decoded at all. Individual rows that
//! fail to decode into the expected shape are surfaced as per-row failures
//! for the pipeline to count and skip.

use crate::error::{LogseekError, Result};
use crate::ingest::row::{RowReader, RowRecord, RowResult};

enum Source {
    /// Pre-parsed values from a top-level array.
    Array(std::vec::IntoIter<serde_json::Value>),
    /// Raw lines, decoded lazily.
    Lines(std::vec::IntoIter<String>),
}

/// A [`RowReader`] over JSON bytes.
pub struct JsonRowReader {
    source: Source,
}

impl JsonRowReader {
    /// Create a reader from raw file bytes. Fails with an ingest error when
    /// the bytes cannot be decoded as either supported layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| LogseekError::ingest(format!("source is not valid UTF-8: {e}")))?;

        let trimmed = text.trim_start();
        match trimmed.bytes().next() {
            Some(b'[') => {
                let values: Vec<serde_json::Value> = serde_json::from_str(trimmed)
                    .map_err(|e| LogseekError::ingest(format!("cannot parse JSON array: {e}")))?;
                Ok(JsonRowReader {
                    source: Source::Array(values.into_iter()),
                })
            }
            Some(b'{') => {
                let lines: Vec<String> = trimmed
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(JsonRowReader {
                    source: Source::Lines(lines.into_iter()),
                })
            }
            Some(_) => Err(LogseekError::ingest(
                "unrecognized source format: expected a JSON array or line-delimited JSON",
            )),
            None => Err(LogseekError::ingest("source is empty")),
        }
    }

    fn decode_value(value: serde_json::Value) -> RowResult {
        serde_json::from_value::<RowRecord>(value)
            .map_err(|e| LogseekError::validation(format!("malformed row: {e}")))
    }

    fn decode_line(line: &str) -> RowResult {
        serde_json::from_str::<RowRecord>(line)
            .map_err(|e| LogseekError::validation(format!("malformed row: {e}")))
    }
}

impl RowReader for JsonRowReader {
    fn next_batch(&mut self, max_rows: usize) -> Result<Option<Vec<RowResult>>> {
        let batch: Vec<RowResult> = match &mut self.source {
            Source::Array(values) => values.take(max_rows).map(Self::decode_value).collect(),
            Source::Lines(lines) => lines
                .take(max_rows)
                .map(|line| Self::decode_line(&line))
                .collect(),
        };

        if batch.is_empty() {
            Ok(None)
        } else {
            Ok(Some(batch))
        }
    }
}
