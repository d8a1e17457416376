//! Standard analyzer with the defaults used for message text.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer (UAX #29 word boundaries)
//! 2. LowercaseFilter
//! 3. RemoveEmptyFilter
//!
//! Stop-word filtering is deliberately not part of the default pipeline:
//! every term that appears in an indexed message must stay findable. Use
//! [`StandardAnalyzer::with_stop_words`] for pipelines that want the fixed
//! English stop list.
//!
//! # Examples
//!
//! ```
//! use logseek::analysis::analyzer::Analyzer;
//! use logseek::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Server crashed, unexpectedly!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "server");
//! assert_eq!(tokens[1].text, "crashed");
//! assert_eq!(tokens[2].text, "unexpectedly");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// A standard analyzer that provides good defaults for free text.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Self {
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()));

        StandardAnalyzer { inner }
    }

    /// Create a standard analyzer that also drops the fixed English stop
    /// word set.
    pub fn with_stop_words() -> Self {
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()));

        StandardAnalyzer { inner }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
