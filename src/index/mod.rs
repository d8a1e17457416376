//! Inverted index: postings, configuration, and the index itself.

pub mod config;
pub mod inverted;
pub mod posting;

pub use config::{DuplicatePolicy, IndexConfig};
pub use inverted::{IndexStats, InvertedIndex};
pub use posting::{Posting, PostingList};
