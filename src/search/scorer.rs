//! Scoring implementations for ranking search results.

use std::fmt::Debug;

/// Trait for relevance scorers.
///
/// The contract is monotonicity, not a specific formula: holding everything
/// else fixed, a higher term frequency must never lower the score, and a
/// higher document frequency (a more common term) must never raise it.
pub trait Scorer: Send + Sync + Debug {
    /// Score the contribution of one matched query term for one document.
    ///
    /// `term_freq` is the (possibly field-boosted) frequency of the term in
    /// the document, `doc_freq` the number of documents containing the
    /// term, `total_docs` the number of live documents in the index.
    fn score(&self, term_freq: f32, doc_freq: u64, total_docs: u64) -> f32;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}

/// TF-IDF scorer.
///
/// Contribution per matched term is `tf × ln(1 + N / (1 + df))`. The
/// `1 +` inside the logarithm keeps the factor strictly positive even when
/// a term occurs in every document, so matching more distinct query terms
/// always helps, and rarer terms always weigh more.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    /// Create a new TF-IDF scorer.
    pub fn new() -> Self {
        TfIdfScorer
    }

    /// The inverse-document-frequency factor for a term.
    pub fn idf(&self, doc_freq: u64, total_docs: u64) -> f32 {
        if total_docs == 0 {
            return 0.0;
        }
        let n = total_docs as f32;
        let df = doc_freq as f32;
        (1.0 + n / (1.0 + df)).ln()
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, term_freq: f32, doc_freq: u64, total_docs: u64) -> f32 {
        if term_freq <= 0.0 {
            return 0.0;
        }
        term_freq * self.idf(doc_freq, total_docs)
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_in_term_frequency() {
        let scorer = TfIdfScorer::new();
        let low = scorer.score(1.0, 5, 100);
        let high = scorer.score(3.0, 5, 100);
        assert!(high > low);
    }

    #[test]
    fn test_inverse_monotonic_in_document_frequency() {
        let scorer = TfIdfScorer::new();
        let rare = scorer.score(1.0, 1, 100);
        let common = scorer.score(1.0, 90, 100);
        assert!(rare > common);
    }

    #[test]
    fn test_score_is_positive_for_matches() {
        let scorer = TfIdfScorer::new();
        // Even a term present in every document contributes positively.
        assert!(scorer.score(1.0, 100, 100) > 0.0);
    }

    #[test]
    fn test_empty_index_scores_zero() {
        let scorer = TfIdfScorer::new();
        assert_eq!(scorer.score(1.0, 0, 0), 0.0);
    }
}
