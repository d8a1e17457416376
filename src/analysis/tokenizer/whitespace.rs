//! Whitespace tokenizer implementation.
//!
//! Splits text on whitespace only, preserving punctuation inside tokens.
//! Useful for pre-tokenized input such as structured log lines.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut offset = 0;

        for part in text.split_whitespace() {
            // split_whitespace discards offsets, so recover them by scanning
            // forward from the previous match.
            let start_offset = match text[offset..].find(part) {
                Some(found) => offset + found,
                None => offset,
            };
            let end_offset = start_offset + part.len();
            offset = end_offset;

            tokens.push(Token::with_offsets(part, position, start_offset, end_offset));
            position += 1;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello,  world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello,");
        assert_eq!(tokens[1].text, "world!");
        assert_eq!(tokens[1].start_offset, 8);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("   \t\n").unwrap().count(), 0);
    }
}
