//! Per-field analyzer that dispatches to different analyzers by field name.
//!
//! Index-time field policy lives here: the `message` field runs the full
//! tokenizing pipeline while categorical fields run the keyword analyzer.
//! Query analysis uses the default analyzer so query terms line up with the
//! tokenized message terms.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use logseek::analysis::analyzer::Analyzer;
//! use logseek::analysis::analyzer::keyword::KeywordAnalyzer;
//! use logseek::analysis::analyzer::per_field::PerFieldAnalyzer;
//! use logseek::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let mut per_field = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new()));
//! per_field.add_analyzer("namespace", Arc::new(KeywordAnalyzer::new()));
//!
//! let message: Vec<_> = per_field.analyze_field("message", "Auth Failed").unwrap().collect();
//! assert_eq!(message.len(), 2);
//!
//! let ns: Vec<_> = per_field.analyze_field("namespace", "Auth Failed").unwrap().collect();
//! assert_eq!(ns.len(), 1);
//! assert_eq!(ns[0].text, "auth failed");
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// An analyzer that selects a field-specific analyzer, falling back to a
/// default for unknown fields.
pub struct PerFieldAnalyzer {
    default_analyzer: Arc<dyn Analyzer>,
    field_analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerFieldAnalyzer {
    /// Create a new per-field analyzer with the given default.
    pub fn new(default_analyzer: Arc<dyn Analyzer>) -> Self {
        PerFieldAnalyzer {
            default_analyzer,
            field_analyzers: AHashMap::new(),
        }
    }

    /// Register an analyzer for a specific field.
    pub fn add_analyzer<S: Into<String>>(&mut self, field: S, analyzer: Arc<dyn Analyzer>) {
        self.field_analyzers.insert(field.into(), analyzer);
    }

    /// Get the analyzer that will run for the given field.
    pub fn analyzer_for(&self, field: &str) -> &Arc<dyn Analyzer> {
        self.field_analyzers
            .get(field)
            .unwrap_or(&self.default_analyzer)
    }

    /// Get the default analyzer.
    pub fn default_analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.default_analyzer
    }

    /// Analyze text for a specific field.
    pub fn analyze_field(&self, field: &str, text: &str) -> Result<TokenStream> {
        self.analyzer_for(field).analyze(text)
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.default_analyzer.analyze(text)
    }

    fn name(&self) -> &'static str {
        "per_field"
    }
}

impl std::fmt::Debug for PerFieldAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerFieldAnalyzer")
            .field("default", &self.default_analyzer.name())
            .field(
                "fields",
                &self.field_analyzers.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
