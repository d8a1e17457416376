//! In-memory inverted index over event documents.
//!
//! The index owns three structures that must stay consistent:
//!
//! - a term dictionary mapping each term to its [`PostingList`],
//! - a store mapping `eventId` to the document and the terms it contributed
//!   (used for result hydration, duplicate detection, and removal),
//! - a map from internal doc id back to `eventId`.
//!
//! The index itself is single-threaded; concurrent access is coordinated by
//! the owner (see [`crate::service::SearchService`]), which wraps it in a
//! reader/writer lock so queries run in parallel and mutations are
//! serialized.
//!
//! # Examples
//!
//! ```
//! use logseek::document::{DocumentParser, EventDocument};
//! use logseek::index::{IndexConfig, InvertedIndex};
//!
//! let parser = DocumentParser::with_defaults();
//! let mut index = InvertedIndex::new(IndexConfig::default());
//!
//! let doc = EventDocument::builder("e1", "server crashed").build().unwrap();
//! index.insert(parser.parse(doc).unwrap()).unwrap();
//!
//! assert_eq!(index.doc_count(), 1);
//! assert_eq!(index.postings("server").len(), 1);
//! assert!(index.postings("nonexistent").is_empty());
//! ```

use ahash::AHashMap;
use serde::Serialize;

use crate::document::analyzed::AnalyzedDocument;
use crate::document::document::{EventDocument, FieldKind};
use crate::error::{LogseekError, Result};
use crate::index::config::{DuplicatePolicy, IndexConfig};
use crate::index::posting::PostingList;

/// A stored document plus the bookkeeping needed to unindex it.
#[derive(Debug, Clone)]
struct StoredEntry {
    doc_id: u64,
    document: EventDocument,
    /// Every (field, term, frequency) this document contributed, so removal
    /// can rewind postings and statistics exactly.
    contributed: Vec<(FieldKind, String, u32)>,
}

/// Statistics about an index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Number of live documents.
    pub doc_count: u64,
    /// Number of distinct terms.
    pub term_count: u64,
    /// Total number of postings across all terms.
    pub posting_count: u64,
}

/// An in-memory inverted index.
#[derive(Debug)]
pub struct InvertedIndex {
    config: IndexConfig,
    terms: AHashMap<String, PostingList>,
    entries: AHashMap<String, StoredEntry>,
    doc_ids: AHashMap<u64, String>,
    next_doc_id: u64,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new(config: IndexConfig) -> Self {
        InvertedIndex {
            config,
            terms: AHashMap::new(),
            entries: AHashMap::new(),
            doc_ids: AHashMap::new(),
            next_doc_id: 0,
        }
    }

    /// The configuration this index was created with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Insert an analyzed document.
    ///
    /// Behavior on a duplicate `eventId` follows the configured
    /// [`DuplicatePolicy`]: overwrite replaces the prior version in the same
    /// call (callers holding the writer lock therefore observe the swap as
    /// atomic), reject fails with [`LogseekError::DuplicateDocument`].
    /// Returns the internal doc id assigned to the document.
    pub fn insert(&mut self, analyzed: AnalyzedDocument) -> Result<u64> {
        let event_id = analyzed.document.event_id.clone();

        if self.entries.contains_key(&event_id) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    return Err(LogseekError::duplicate(format!(
                        "document {event_id} is already indexed"
                    )));
                }
                DuplicatePolicy::Overwrite => {
                    self.remove(&event_id)?;
                }
            }
        }

        if self.entries.len() >= self.config.max_documents {
            return Err(LogseekError::capacity(format!(
                "index is at its configured maximum of {} documents",
                self.config.max_documents
            )));
        }

        let doc_id = self.next_doc_id;
        self.next_doc_id += 1;

        let mut contributed = Vec::with_capacity(analyzed.term_count());
        for (field, term) in analyzed.terms() {
            self.terms
                .entry(term.text.clone())
                .or_default()
                .add_occurrences(doc_id, field, term.frequency);
            contributed.push((field, term.text.clone(), term.frequency));
        }

        self.doc_ids.insert(doc_id, event_id.clone());
        self.entries.insert(
            event_id,
            StoredEntry {
                doc_id,
                document: analyzed.document,
                contributed,
            },
        );

        Ok(doc_id)
    }

    /// Remove a document by event id, rewinding every posting and statistic
    /// it contributed. Fails with [`LogseekError::NotFound`] if absent.
    pub fn remove(&mut self, event_id: &str) -> Result<EventDocument> {
        let entry = self
            .entries
            .remove(event_id)
            .ok_or_else(|| LogseekError::not_found(format!("document {event_id}")))?;

        self.doc_ids.remove(&entry.doc_id);

        for (_, term, _) in &entry.contributed {
            if let Some(list) = self.terms.get_mut(term) {
                list.remove_doc(entry.doc_id);
                if list.is_empty() {
                    self.terms.remove(term);
                }
            }
        }

        Ok(entry.document)
    }

    /// Look up the posting list for a term. Unknown terms yield `None`.
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// The postings for a term; empty for unknown terms, never fails.
    pub fn postings(&self, term: &str) -> &[crate::index::posting::Posting] {
        self.terms
            .get(term)
            .map(|list| list.postings())
            .unwrap_or(&[])
    }

    /// Document frequency of a term: the number of distinct live documents
    /// containing it.
    pub fn doc_frequency(&self, term: &str) -> u64 {
        self.terms
            .get(term)
            .map(|list| list.doc_frequency())
            .unwrap_or(0)
    }

    /// Current number of live documents.
    pub fn doc_count(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> u64 {
        self.terms.len() as u64
    }

    /// Whether a document with this event id is indexed.
    pub fn contains(&self, event_id: &str) -> bool {
        self.entries.contains_key(event_id)
    }

    /// A stored document by event id.
    pub fn get(&self, event_id: &str) -> Option<&EventDocument> {
        self.entries.get(event_id).map(|entry| &entry.document)
    }

    /// A stored document by internal doc id (used for result hydration).
    pub fn get_by_doc_id(&self, doc_id: u64) -> Option<&EventDocument> {
        let event_id = self.doc_ids.get(&doc_id)?;
        self.get(event_id)
    }

    /// Aggregate statistics for the index.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count(),
            term_count: self.term_count(),
            posting_count: self.terms.values().map(|list| list.len() as u64).sum(),
        }
    }
}
