//! Text analysis: tokenizers, filters, and analyzers.
//!
//! Analysis is deterministic and side-effect-free: the same input text
//! always yields the same term sequence, which the engine relies on for
//! reproducible scoring and ingest idempotence.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
