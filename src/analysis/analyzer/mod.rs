//! Analyzer implementations combining tokenizers and filters.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The same analyzer must run at index time and query time, otherwise query
//! terms can never match indexed terms.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod keyword;
pub mod per_field;
pub mod pipeline;
pub mod simple;
pub mod standard;

pub use keyword::KeywordAnalyzer;
pub use per_field::PerFieldAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;
