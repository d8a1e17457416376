//! Stop filter implementation.
//!
//! Removes common words (stop words) that rarely contribute to relevance.
//! The default list covers frequent English function words. The filter is
//! not part of the default message analyzer: dropping stop words at index
//! time would make those terms unfindable, and log queries often target
//! exact phrases. It is available for custom pipelines.
//!
//! # Examples
//!
//! ```
//! use logseek::analysis::token::Token;
//! use logseek::analysis::token_filter::Filter;
//! use logseek::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("server", 1),
//!     Token::new("crashed", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "server");
//! assert_eq!(result[1].text, "crashed");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_STOP_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .collect(),
    )
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: DEFAULT_STOP_SET.clone(),
        }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Check whether a word is in the stop set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = self.stop_words.clone();
        let filtered: Vec<_> = tokens
            .filter(|token| token.is_stopped() || !stop_words.contains(&token.text))
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_default_stop_words() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("the", 0),
            Token::new("quick", 1),
            Token::new("and", 2),
            Token::new("brown", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "quick");
        assert_eq!(result[1].text, "brown");
    }

    #[test]
    fn test_custom_stop_words() {
        let filter = StopFilter::from_words(vec!["foo", "bar"]);

        assert!(filter.is_stop_word("foo"));
        assert!(!filter.is_stop_word("the"));

        let tokens = vec![Token::new("foo", 0), Token::new("baz", 1)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "baz");
    }
}
