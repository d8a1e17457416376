//! Posting lists: the term-to-document side of the inverted index.
//!
//! A [`Posting`] associates one term with one document, carrying the total
//! term frequency and a per-field frequency breakdown so multi-field
//! boosting is possible at scoring time. A [`PostingList`] holds all
//! postings for one term, ordered by document id, with at most one posting
//! per document: repeated occurrences merge by incrementing frequency.

use crate::document::document::FieldKind;

/// A single posting in a posting list.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    /// Internal document id.
    pub doc_id: u64,
    /// Total term frequency in the document, across fields.
    pub frequency: u32,
    /// Frequency per contributing field.
    pub field_frequencies: Vec<(FieldKind, u32)>,
}

impl Posting {
    /// Create a new posting for one field occurrence count.
    pub fn new(doc_id: u64, field: FieldKind, frequency: u32) -> Self {
        Posting {
            doc_id,
            frequency,
            field_frequencies: vec![(field, frequency)],
        }
    }

    /// Frequency contributed by a specific field.
    pub fn field_frequency(&self, field: FieldKind) -> u32 {
        self.field_frequencies
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, freq)| *freq)
            .unwrap_or(0)
    }

    fn merge_field(&mut self, field: FieldKind, frequency: u32) {
        self.frequency += frequency;
        match self.field_frequencies.iter_mut().find(|(f, _)| *f == field) {
            Some((_, freq)) => *freq += frequency,
            None => self.field_frequencies.push((field, frequency)),
        }
    }
}

/// A posting list for a specific term.
///
/// Postings are kept sorted by `doc_id`; the document frequency of the term
/// is exactly the list length, since each document appears at most once.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    postings: Vec<Posting>,
    /// Total term frequency across all documents.
    total_frequency: u64,
}

impl PostingList {
    /// Create a new empty posting list.
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
            total_frequency: 0,
        }
    }

    /// Record `frequency` occurrences of the term in `field` of document
    /// `doc_id`, merging with an existing posting for that document if any.
    pub fn add_occurrences(&mut self, doc_id: u64, field: FieldKind, frequency: u32) {
        self.total_frequency += frequency as u64;

        match self.postings.binary_search_by_key(&doc_id, |p| p.doc_id) {
            Ok(pos) => self.postings[pos].merge_field(field, frequency),
            Err(pos) => self.postings.insert(pos, Posting::new(doc_id, field, frequency)),
        }
    }

    /// Remove the posting for a document, returning whether one existed.
    pub fn remove_doc(&mut self, doc_id: u64) -> bool {
        match self.postings.binary_search_by_key(&doc_id, |p| p.doc_id) {
            Ok(pos) => {
                let posting = self.postings.remove(pos);
                self.total_frequency -= posting.frequency as u64;
                true
            }
            Err(_) => false,
        }
    }

    /// Number of distinct documents containing the term.
    pub fn doc_frequency(&self) -> u64 {
        self.postings.len() as u64
    }

    /// Total term frequency across all documents.
    pub fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    /// The postings, ordered by document id.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Get the length of the posting list.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if the posting list is empty.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Get an iterator over the postings.
    pub fn iter(&'_ self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }
}
