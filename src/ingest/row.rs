//! Source rows and the reader abstraction over columnar input.
//!
//! The engine treats the source file as an opaque reader that yields rows
//! one batch at a time. [`RowRecord`] is the loose, pre-validation shape of
//! one row: every column is optional and unknown columns are ignored.
//! Validation happens when a row is promoted to an
//! [`EventDocument`](crate::document::EventDocument).

use serde::{Deserialize, Serialize};

use crate::document::document::EventDocument;
use crate::error::Result;

/// One decoded source row, prior to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowRecord {
    /// Unique event identifier. Required to become a document.
    pub event_id: Option<String>,
    /// Display text. Required to become a document.
    pub message: Option<String>,
    /// Original unmodified text; defaults to `message` when absent.
    pub message_raw: Option<String>,
    /// Optional categorical tag.
    pub tag: Option<String>,
    /// Optional sender/component identifier.
    pub sender: Option<String>,
    /// Optional event name.
    pub event: Option<String>,
    /// Optional namespace.
    pub namespace: Option<String>,
}

impl RowRecord {
    /// Validate this row and promote it to a document.
    pub fn into_document(self) -> Result<EventDocument> {
        let event_id = self
            .event_id
            .ok_or_else(|| crate::error::LogseekError::validation("row is missing eventId"))?;
        let message = self
            .message
            .ok_or_else(|| {
                crate::error::LogseekError::validation(format!(
                    "row {event_id} is missing message"
                ))
            })?;

        let mut builder = EventDocument::builder(event_id, message);
        if let Some(raw) = self.message_raw {
            builder = builder.message_raw(raw);
        }
        if let Some(tag) = self.tag {
            builder = builder.tag(tag);
        }
        if let Some(sender) = self.sender {
            builder = builder.sender(sender);
        }
        if let Some(event) = self.event {
            builder = builder.event(event);
        }
        if let Some(namespace) = self.namespace {
            builder = builder.namespace(namespace);
        }

        builder.build()
    }
}

/// Outcome of decoding one row: the row itself, or the recoverable error
/// that explains why it could not be decoded.
pub type RowResult = Result<RowRecord>;

/// Trait for batch readers over a row source.
///
/// Implementations surface two failure levels: a fatal error from
/// `next_batch` itself (the source is unreadable) and per-row errors inside
/// the returned batch (one malformed row, recoverable by the pipeline).
pub trait RowReader {
    /// Read up to `max_rows` rows. `Ok(None)` signals end of input.
    fn next_batch(&mut self, max_rows: usize) -> Result<Option<Vec<RowResult>>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogseekError;

    #[test]
    fn test_row_promotion() {
        let row = RowRecord {
            event_id: Some("e1".to_string()),
            message: Some("hello".to_string()),
            namespace: Some("prod".to_string()),
            ..RowRecord::default()
        };

        let doc = row.into_document().unwrap();
        assert_eq!(doc.event_id, "e1");
        assert_eq!(doc.message_raw, "hello");
        assert_eq!(doc.namespace.as_deref(), Some("prod"));
    }

    #[test]
    fn test_missing_required_fields() {
        let row = RowRecord {
            message: Some("no id".to_string()),
            ..RowRecord::default()
        };
        assert!(matches!(
            row.into_document().unwrap_err(),
            LogseekError::Validation(_)
        ));

        let row = RowRecord {
            event_id: Some("e1".to_string()),
            ..RowRecord::default()
        };
        assert!(matches!(
            row.into_document().unwrap_err(),
            LogseekError::Validation(_)
        ));
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let row: RowRecord = serde_json::from_str(
            r#"{"eventId":"e1","message":"m","severity":"high","extra":42}"#,
        )
        .unwrap();
        assert_eq!(row.event_id.as_deref(), Some("e1"));
    }
}
