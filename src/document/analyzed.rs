//! Analyzed document representation.
//!
//! An [`AnalyzedDocument`] is a document together with the per-field terms
//! the analysis pipeline extracted from it. It is the hand-off unit between
//! the ingestion pipeline (which can analyze rows in parallel, outside any
//! lock) and the inverted index writer.

use ahash::AHashMap;

use crate::document::document::{EventDocument, FieldKind};

/// A term extracted from one field of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzedTerm {
    /// The normalized term text.
    pub text: String,

    /// Number of occurrences within the field.
    pub frequency: u32,

    /// Token positions of the occurrences within the field.
    pub positions: Vec<u32>,
}

/// A document plus its extracted terms, ready for indexing.
#[derive(Clone, Debug)]
pub struct AnalyzedDocument {
    /// The stored document.
    pub document: EventDocument,

    /// Extracted terms, grouped by field.
    pub field_terms: AHashMap<FieldKind, Vec<AnalyzedTerm>>,
}

impl AnalyzedDocument {
    /// Create an analyzed document with no terms yet.
    pub fn new(document: EventDocument) -> Self {
        AnalyzedDocument {
            document,
            field_terms: AHashMap::new(),
        }
    }

    /// Total number of distinct (field, term) pairs.
    pub fn term_count(&self) -> usize {
        self.field_terms.values().map(|terms| terms.len()).sum()
    }

    /// Iterate over all (field, term) pairs.
    pub fn terms(&self) -> impl Iterator<Item = (FieldKind, &AnalyzedTerm)> {
        self.field_terms
            .iter()
            .flat_map(|(field, terms)| terms.iter().map(move |t| (*field, t)))
    }
}
