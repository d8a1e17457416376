//! Whole tokenizer implementation.
//!
//! Emits the entire input as a single token. Combined with a lowercase
//! filter this gives keyword-style analysis for categorical fields such as
//! `tag`, `sender`, `event`, and `namespace`.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that treats the entire input as one token.
#[derive(Clone, Debug, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    /// Create a new whole tokenizer.
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let token = Token::with_offsets(text, 0, 0, text.len());
        Ok(Box::new(std::iter::once(token)))
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_tokenizer() {
        let tokenizer = WholeTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("auth-service").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "auth-service");
        assert_eq!(tokens[0].end_offset, 12);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        let tokenizer = WholeTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
    }
}
