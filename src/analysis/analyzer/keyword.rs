//! Keyword analyzer that treats the entire input as a single lowercased token.
//!
//! Used for the categorical fields (`tag`, `sender`, `event`, `namespace`)
//! where values match exactly rather than word by word. Lowercasing keeps
//! matching case-insensitive, consistent with the message field.
//!
//! # Examples
//!
//! ```
//! use logseek::analysis::analyzer::Analyzer;
//! use logseek::analysis::analyzer::keyword::KeywordAnalyzer;
//!
//! let analyzer = KeywordAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Auth-Service").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "auth-service");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::whole::WholeTokenizer;
use crate::error::Result;

/// A keyword analyzer producing at most one lowercased token per input.
pub struct KeywordAnalyzer {
    inner: PipelineAnalyzer,
}

impl KeywordAnalyzer {
    /// Create a new keyword analyzer.
    pub fn new() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WholeTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        KeywordAnalyzer { inner }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

impl std::fmt::Debug for KeywordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordAnalyzer").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_keyword_analyzer_single_token() {
        let analyzer = KeywordAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("user-123 abc").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "user-123 abc");
    }

    #[test]
    fn test_keyword_analyzer_empty_input() {
        let analyzer = KeywordAnalyzer::new();
        assert_eq!(analyzer.analyze("").unwrap().count(), 0);
    }
}
