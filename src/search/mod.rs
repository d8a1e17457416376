//! Query engine: scoring, ranking, and result envelopes.

pub mod results;
pub mod scorer;
pub mod searcher;

pub use results::{SearchHit, SearchResults};
pub use scorer::{Scorer, TfIdfScorer};
pub use searcher::{Searcher, SearcherConfig};
