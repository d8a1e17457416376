//! Search result envelope.
//!
//! Field names serialize exactly as the consuming client expects:
//! `results[].document.{message,messageRaw,tag,sender,event,eventId,
//! namespace}`, `results[].score`, `totalHits`, `searchTime` (milliseconds),
//! and the echoed `query`.

use serde::Serialize;

use crate::document::document::EventDocument;

/// One ranked hit: a document and its relevance score.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// The matched document.
    pub document: EventDocument,
    /// Relevance score; higher is more relevant.
    pub score: f32,
}

/// The response envelope for one query.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Ranked hits, best first, truncated to the requested top-K.
    pub results: Vec<SearchHit>,
    /// Number of live documents matching at least one query term.
    pub total_hits: u64,
    /// Elapsed wall time for the query, in milliseconds.
    pub search_time: f64,
    /// The original query text.
    pub query: String,
}

impl SearchResults {
    /// An empty result set for a query that matched nothing.
    pub fn empty<S: Into<String>>(query: S, search_time: f64) -> Self {
        SearchResults {
            results: Vec::new(),
            total_hits: 0,
            search_time,
            query: query.into(),
        }
    }
}
