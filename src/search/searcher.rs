//! The query engine: term retrieval, scoring, and ranking.
//!
//! A query runs read-only against the index:
//!
//! 1. the query text is analyzed with the same analyzer the message field
//!    was indexed with,
//! 2. the candidate set is the union of the posting lists of all query
//!    terms (`totalHits` is its size),
//! 3. each candidate is scored per matched term (TF-IDF style, with a
//!    configurable boost for keyword-field matches),
//! 4. candidates are ranked by score descending, event id ascending for
//!    determinism, and truncated to top-K.
//!
//! # Examples
//!
//! ```
//! use logseek::document::{DocumentParser, EventDocument};
//! use logseek::index::{IndexConfig, InvertedIndex};
//! use logseek::search::Searcher;
//!
//! let parser = DocumentParser::with_defaults();
//! let mut index = InvertedIndex::new(IndexConfig::default());
//! for (id, message) in [("e1", "server crashed unexpectedly"), ("e2", "server started normally")] {
//!     let doc = EventDocument::builder(id, message).build().unwrap();
//!     index.insert(parser.parse(doc).unwrap()).unwrap();
//! }
//!
//! let searcher = Searcher::with_defaults();
//! let results = searcher.search(&index, "server", 10).unwrap();
//! assert_eq!(results.total_hits, 2);
//!
//! let results = searcher.search(&index, "crashed", 10).unwrap();
//! assert_eq!(results.total_hits, 1);
//! assert_eq!(results.results[0].document.event_id, "e1");
//! ```

use std::sync::Arc;
use std::time::Instant;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::{LogseekError, Result};
use crate::index::inverted::InvertedIndex;
use crate::index::posting::Posting;
use crate::search::results::{SearchHit, SearchResults};
use crate::search::scorer::{Scorer, TfIdfScorer};

/// Configuration for the query engine.
#[derive(Clone, Debug)]
pub struct SearcherConfig {
    /// Number of results returned when the caller does not ask for a limit.
    pub default_top_k: usize,

    /// Upper bound on the candidate set. Once a query's term union reaches
    /// this many documents, no further candidates are admitted; this is the
    /// documented capacity limit that keeps pathological queries (a term in
    /// nearly every document) bounded.
    pub max_candidates: usize,

    /// Score multiplier for matches in keyword fields (tag, sender, event,
    /// namespace) relative to message matches.
    pub keyword_boost: f32,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        SearcherConfig {
            default_top_k: 10,
            max_candidates: 1_000_000,
            keyword_boost: 1.5,
        }
    }
}

/// The query engine.
pub struct Searcher {
    analyzer: Arc<dyn Analyzer>,
    scorer: Box<dyn Scorer>,
    config: SearcherConfig,
}

impl Searcher {
    /// Create a searcher with an explicit analyzer, scorer, and config.
    ///
    /// The analyzer must be the one the message field was indexed with;
    /// otherwise query terms can never match indexed terms.
    pub fn new(analyzer: Arc<dyn Analyzer>, scorer: Box<dyn Scorer>, config: SearcherConfig) -> Self {
        Searcher {
            analyzer,
            scorer,
            config,
        }
    }

    /// Create a searcher with the standard analyzer and TF-IDF scoring.
    pub fn with_defaults() -> Self {
        Searcher::new(
            Arc::new(StandardAnalyzer::new()),
            Box::new(TfIdfScorer::new()),
            SearcherConfig::default(),
        )
    }

    /// The searcher configuration.
    pub fn config(&self) -> &SearcherConfig {
        &self.config
    }

    /// Run a query with the default top-K.
    pub fn search_default(&self, index: &InvertedIndex, query_text: &str) -> Result<SearchResults> {
        self.search(index, query_text, self.config.default_top_k)
    }

    /// Run a query, returning at most `top_k` ranked hits.
    ///
    /// An empty query (or one whose terms match nothing) returns zero hits
    /// and no error. `top_k == 0` fails with an invalid-argument error.
    pub fn search(
        &self,
        index: &InvertedIndex,
        query_text: &str,
        top_k: usize,
    ) -> Result<SearchResults> {
        if top_k == 0 {
            return Err(LogseekError::invalid_argument("top_k must be positive"));
        }

        let start = Instant::now();
        let terms = self.query_terms(query_text)?;
        if terms.is_empty() {
            return Ok(SearchResults::empty(query_text, elapsed_ms(start)));
        }

        let total_docs = index.doc_count();
        let mut scores: AHashMap<u64, f32> = AHashMap::new();
        let mut truncated = false;

        for term in &terms {
            let Some(list) = index.lookup(term) else {
                continue;
            };
            let doc_freq = list.doc_frequency();

            for posting in list.iter() {
                let known = scores.contains_key(&posting.doc_id);
                if !known && scores.len() >= self.config.max_candidates {
                    truncated = true;
                    continue;
                }

                let weighted_tf = self.weighted_frequency(posting);
                let contribution = self.scorer.score(weighted_tf, doc_freq, total_docs);
                *scores.entry(posting.doc_id).or_insert(0.0) += contribution;
            }
        }

        if truncated {
            debug!(
                "candidate set for {query_text:?} truncated at {}",
                self.config.max_candidates
            );
        }

        let total_hits = scores.len() as u64;
        let mut hits: Vec<SearchHit> = scores
            .into_iter()
            .filter_map(|(doc_id, score)| {
                index.get_by_doc_id(doc_id).map(|document| SearchHit {
                    document: document.clone(),
                    score,
                })
            })
            .collect();

        // Rank by score, break ties on event id so results are stable.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.document.event_id.cmp(&b.document.event_id))
        });
        hits.truncate(top_k);

        let search_time = elapsed_ms(start);
        debug!("query {query_text:?}: {total_hits} hit(s) in {search_time:.3} ms");

        Ok(SearchResults {
            results: hits,
            total_hits,
            search_time,
            query: query_text.to_string(),
        })
    }

    /// Analyze the query text into distinct terms, keeping first-seen order.
    fn query_terms(&self, query_text: &str) -> Result<Vec<String>> {
        let mut seen = AHashSet::new();
        let mut terms = Vec::new();
        for token in self.analyzer.analyze(query_text)? {
            if seen.insert(token.text.clone()) {
                terms.push(token.text);
            }
        }
        Ok(terms)
    }

    /// Field-boosted term frequency for one posting.
    fn weighted_frequency(&self, posting: &Posting) -> f32 {
        posting
            .field_frequencies
            .iter()
            .map(|(field, freq)| {
                let boost = if field.is_text() {
                    1.0
                } else {
                    self.config.keyword_boost
                };
                *freq as f32 * boost
            })
            .sum::<f32>()
            .max(0.0)
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("analyzer", &self.analyzer.name())
            .field("scorer", &self.scorer.name())
            .field("config", &self.config)
            .finish()
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.0
}
