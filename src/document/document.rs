//! Event document structure and validation.
//!
//! An [`EventDocument`] is the canonical in-memory representation of one
//! indexed record. Documents are immutable once indexed: the index stores
//! them for result hydration and only the explicit remove path destroys
//! them.
//!
//! Source rows carry a loose set of columns; documents deliberately use a
//! fixed struct with named optional fields instead of an open map, so the
//! indexing logic stays type-safe. Unknown source columns are ignored at
//! the row-decoding layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LogseekError, Result};

/// The indexable fields of an event document and their analysis policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Free text, tokenized word by word.
    Message,
    /// Categorical, indexed as a single lowercased keyword.
    Tag,
    /// Categorical, indexed as a single lowercased keyword.
    Sender,
    /// Categorical, indexed as a single lowercased keyword.
    Event,
    /// Categorical, indexed as a single lowercased keyword.
    Namespace,
}

impl FieldKind {
    /// All indexable fields.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Message,
        FieldKind::Tag,
        FieldKind::Sender,
        FieldKind::Event,
        FieldKind::Namespace,
    ];

    /// The wire/field name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Message => "message",
            FieldKind::Tag => "tag",
            FieldKind::Sender => "sender",
            FieldKind::Event => "event",
            FieldKind::Namespace => "namespace",
        }
    }

    /// Whether this field is analyzed as free text (vs. keyword).
    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Message)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single event record as stored in the index.
///
/// `event_id` is the primary key, unique across the whole index. `message`
/// is the normalized display text and the main tokenized field;
/// `message_raw` preserves the original text verbatim and is stored but
/// never tokenized. The remaining fields are optional categorical strings.
///
/// # Examples
///
/// ```
/// use logseek::document::EventDocument;
///
/// let doc = EventDocument::builder("e1", "server crashed unexpectedly")
///     .namespace("prod")
///     .sender("kernel")
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.event_id, "e1");
/// assert_eq!(doc.message_raw, "server crashed unexpectedly");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    /// Globally unique identifier for this event.
    pub event_id: String,

    /// Normalized/display text; the main searchable field.
    pub message: String,

    /// Original unmodified text; stored, never tokenized.
    pub message_raw: String,

    /// Optional categorical tag.
    pub tag: Option<String>,

    /// Optional sender/component identifier.
    pub sender: Option<String>,

    /// Optional event name.
    pub event: Option<String>,

    /// Optional namespace.
    pub namespace: Option<String>,
}

impl EventDocument {
    /// Start building a document from its required fields.
    pub fn builder<S: Into<String>, T: Into<String>>(event_id: S, message: T) -> EventDocumentBuilder {
        EventDocumentBuilder::new(event_id, message)
    }

    /// The value of an indexable field, if present.
    pub fn field_value(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Message => Some(self.message.as_str()),
            FieldKind::Tag => self.tag.as_deref(),
            FieldKind::Sender => self.sender.as_deref(),
            FieldKind::Event => self.event.as_deref(),
            FieldKind::Namespace => self.namespace.as_deref(),
        }
    }

    /// Iterate over the present indexable fields and their values.
    pub fn indexed_fields(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        FieldKind::ALL
            .into_iter()
            .filter_map(|kind| self.field_value(kind).map(|value| (kind, value)))
    }

    fn validate(&self) -> Result<()> {
        if self.event_id.trim().is_empty() {
            return Err(LogseekError::validation("eventId must not be empty"));
        }
        if self.event_id.chars().any(|c| c.is_control()) {
            return Err(LogseekError::validation(format!(
                "eventId {:?} contains control characters",
                self.event_id
            )));
        }
        if self.message.is_empty() {
            return Err(LogseekError::validation(format!(
                "document {} has an empty message",
                self.event_id
            )));
        }
        Ok(())
    }
}

/// A builder for constructing validated event documents.
#[derive(Debug)]
pub struct EventDocumentBuilder {
    document: EventDocument,
}

impl EventDocumentBuilder {
    /// Create a new builder with the required fields.
    pub fn new<S: Into<String>, T: Into<String>>(event_id: S, message: T) -> Self {
        let message = message.into();
        EventDocumentBuilder {
            document: EventDocument {
                event_id: event_id.into(),
                message_raw: message.clone(),
                message,
                tag: None,
                sender: None,
                event: None,
                namespace: None,
            },
        }
    }

    /// Set the raw (unmodified) message text.
    pub fn message_raw<S: Into<String>>(mut self, raw: S) -> Self {
        self.document.message_raw = raw.into();
        self
    }

    /// Set the tag field.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.document.tag = Some(tag.into());
        self
    }

    /// Set the sender field.
    pub fn sender<S: Into<String>>(mut self, sender: S) -> Self {
        self.document.sender = Some(sender.into());
        self
    }

    /// Set the event field.
    pub fn event<S: Into<String>>(mut self, event: S) -> Self {
        self.document.event = Some(event.into());
        self
    }

    /// Set the namespace field.
    pub fn namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.document.namespace = Some(namespace.into());
        self
    }

    /// Validate and build the document.
    pub fn build(self) -> Result<EventDocument> {
        self.document.validate()?;
        Ok(self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_raw_to_message() {
        let doc = EventDocument::builder("e1", "hello world").build().unwrap();
        assert_eq!(doc.message_raw, "hello world");
        assert!(doc.tag.is_none());
    }

    #[test]
    fn test_empty_event_id_rejected() {
        let err = EventDocument::builder("  ", "hello").build().unwrap_err();
        assert!(matches!(err, LogseekError::Validation(_)));
    }

    #[test]
    fn test_empty_message_rejected() {
        let err = EventDocument::builder("e1", "").build().unwrap_err();
        assert!(matches!(err, LogseekError::Validation(_)));
    }

    #[test]
    fn test_control_chars_in_event_id_rejected() {
        let err = EventDocument::builder("e\n1", "hello").build().unwrap_err();
        assert!(matches!(err, LogseekError::Validation(_)));
    }

    #[test]
    fn test_indexed_fields_skips_absent() {
        let doc = EventDocument::builder("e1", "msg")
            .tag("warn")
            .build()
            .unwrap();

        let fields: Vec<FieldKind> = doc.indexed_fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec![FieldKind::Message, FieldKind::Tag]);
    }

    #[test]
    fn test_wire_field_names() {
        let doc = EventDocument::builder("e1", "msg")
            .message_raw("MSG")
            .namespace("prod")
            .build()
            .unwrap();

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["eventId"], "e1");
        assert_eq!(json["messageRaw"], "MSG");
        assert_eq!(json["namespace"], "prod");
        assert!(json["tag"].is_null());
    }
}
