//! Index configuration.

use serde::{Deserialize, Serialize};

/// What to do when a document with an already-indexed `eventId` arrives.
///
/// Exactly one behavior is in force per index; the engine never mixes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Atomically replace the prior version (default).
    #[default]
    Overwrite,
    /// Reject the new document with a duplicate-document error.
    Reject,
}

/// Configuration for index creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Duplicate `eventId` handling.
    pub duplicate_policy: DuplicatePolicy,

    /// Maximum number of live documents before inserts fail with a
    /// capacity error.
    pub max_documents: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            duplicate_policy: DuplicatePolicy::Overwrite,
            max_documents: 10_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
        assert_eq!(config.max_documents, 10_000_000);
    }
}
