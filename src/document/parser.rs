//! Document parser converting documents into analyzed documents.
//!
//! The parser runs the per-field analyzers over every present indexable
//! field, aggregates term frequencies and positions, and produces an
//! [`AnalyzedDocument`] ready for insertion. It is pure with respect to the
//! index: parsing can run on any thread without holding the index lock.
//!
//! # Examples
//!
//! ```
//! use logseek::document::{DocumentParser, EventDocument, FieldKind};
//!
//! let parser = DocumentParser::with_defaults();
//! let doc = EventDocument::builder("e1", "server crashed server")
//!     .namespace("prod")
//!     .build()
//!     .unwrap();
//!
//! let analyzed = parser.parse(doc).unwrap();
//! let message_terms = &analyzed.field_terms[&FieldKind::Message];
//! let server = message_terms.iter().find(|t| t.text == "server").unwrap();
//! assert_eq!(server.frequency, 2);
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::keyword::KeywordAnalyzer;
use crate::analysis::analyzer::per_field::PerFieldAnalyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::document::analyzed::{AnalyzedDocument, AnalyzedTerm};
use crate::document::document::{EventDocument, FieldKind};
use crate::error::Result;

/// Parses documents into analyzed documents using a per-field analyzer.
pub struct DocumentParser {
    analyzer: Arc<PerFieldAnalyzer>,
}

impl DocumentParser {
    /// Create a parser with the given per-field analyzer.
    pub fn new(analyzer: Arc<PerFieldAnalyzer>) -> Self {
        DocumentParser { analyzer }
    }

    /// Create a parser with the default field policy: `message` runs the
    /// standard analyzer, categorical fields run the keyword analyzer.
    pub fn with_defaults() -> Self {
        let mut per_field = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new()));
        let keyword: Arc<KeywordAnalyzer> = Arc::new(KeywordAnalyzer::new());
        for kind in FieldKind::ALL {
            if !kind.is_text() {
                per_field.add_analyzer(kind.as_str(), keyword.clone());
            }
        }

        DocumentParser {
            analyzer: Arc::new(per_field),
        }
    }

    /// The per-field analyzer backing this parser.
    pub fn analyzer(&self) -> &Arc<PerFieldAnalyzer> {
        &self.analyzer
    }

    /// The analyzer the message field is indexed with. Query text must run
    /// through this same analyzer for its terms to match indexed terms.
    pub fn message_analyzer(&self) -> Arc<dyn Analyzer> {
        self.analyzer.analyzer_for(FieldKind::Message.as_str()).clone()
    }

    /// Analyze every indexable field of the document.
    pub fn parse(&self, document: EventDocument) -> Result<AnalyzedDocument> {
        let mut field_terms: AHashMap<FieldKind, Vec<AnalyzedTerm>> = AHashMap::new();

        for (kind, value) in document.indexed_fields() {
            let tokens = self.analyzer.analyze_field(kind.as_str(), value)?;

            // Aggregate repeated occurrences into one term with a frequency,
            // keeping first-seen order for determinism.
            let mut order: Vec<String> = Vec::new();
            let mut by_term: AHashMap<String, AnalyzedTerm> = AHashMap::new();

            for token in tokens {
                match by_term.get_mut(&token.text) {
                    Some(term) => {
                        term.frequency += 1;
                        term.positions.push(token.position as u32);
                    }
                    None => {
                        order.push(token.text.clone());
                        by_term.insert(
                            token.text.clone(),
                            AnalyzedTerm {
                                text: token.text,
                                frequency: 1,
                                positions: vec![token.position as u32],
                            },
                        );
                    }
                }
            }

            let terms: Vec<AnalyzedTerm> = order
                .into_iter()
                .filter_map(|text| by_term.remove(&text))
                .collect();

            if !terms.is_empty() {
                field_terms.insert(kind, terms);
            }
        }

        Ok(AnalyzedDocument {
            document,
            field_terms,
        })
    }
}

impl std::fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentParser")
            .field("analyzer", &self.analyzer)
            .finish()
    }
}
