//! End-to-end query scenarios against an ingested corpus.

use logseek::prelude::*;

fn seeded_service() -> SearchService {
    let service = SearchService::with_defaults();
    let bytes = br#"[
        {"eventId": "e1", "message": "server crashed unexpectedly", "namespace": "prod", "sender": "watchdog"},
        {"eventId": "e2", "message": "server started normally", "namespace": "prod"},
        {"eventId": "e3", "message": "disk usage above threshold", "namespace": "staging", "tag": "storage"}
    ]"#;
    let report = service.ingest_bytes(bytes).unwrap();
    assert_eq!(report.indexed, 3);
    service
}

#[test]
fn test_shared_term_matches_both_documents() {
    let service = seeded_service();
    let results = service.search("server").unwrap();

    assert_eq!(results.total_hits, 2);
    let ids: Vec<&str> = results
        .results
        .iter()
        .map(|h| h.document.event_id.as_str())
        .collect();
    assert!(ids.contains(&"e1"));
    assert!(ids.contains(&"e2"));
}

#[test]
fn test_distinguishing_term_matches_one_document() {
    let service = seeded_service();
    let results = service.search("crashed").unwrap();

    assert_eq!(results.total_hits, 1);
    assert_eq!(results.results[0].document.event_id, "e1");
}

#[test]
fn test_unknown_term_matches_nothing() {
    let service = seeded_service();
    let results = service.search("nonexistent").unwrap();

    assert_eq!(results.total_hits, 0);
    assert!(results.results.is_empty());
}

#[test]
fn test_empty_query_matches_nothing() {
    let service = seeded_service();
    let results = service.search("").unwrap();

    assert_eq!(results.total_hits, 0);
    assert!(results.results.is_empty());
}

#[test]
fn test_total_hits_survives_truncation() {
    let service = seeded_service();
    let results = service.search_with_limit("server", 1).unwrap();

    assert_eq!(results.total_hits, 2);
    assert_eq!(results.results.len(), 1);
}

#[test]
fn test_every_message_term_is_findable() {
    let service = seeded_service();
    for term in [
        "server", "crashed", "unexpectedly", "started", "normally", "disk", "usage", "above",
        "threshold",
    ] {
        let results = service.search(term).unwrap();
        assert!(results.total_hits > 0, "term {term:?} should be findable");
    }
}

#[test]
fn test_case_insensitive_matching() {
    let service = seeded_service();
    assert_eq!(service.search("SERVER").unwrap().total_hits, 2);
    assert_eq!(service.search("Crashed").unwrap().total_hits, 1);
}

#[test]
fn test_categorical_fields_match_whole_values() {
    let service = seeded_service();

    assert_eq!(service.search("watchdog").unwrap().total_hits, 1);
    assert_eq!(service.search("storage").unwrap().total_hits, 1);
}

#[test]
fn test_multi_term_query_unions_and_ranks() {
    let service = seeded_service();
    let results = service.search("server disk").unwrap();

    assert_eq!(results.total_hits, 3);
    // Scores are strictly positive and non-increasing down the ranking.
    let mut previous = f32::INFINITY;
    for hit in &results.results {
        assert!(hit.score > 0.0);
        assert!(hit.score <= previous);
        previous = hit.score;
    }
}

#[test]
fn test_reingest_same_data_is_idempotent() {
    let service = seeded_service();
    let bytes = br#"[
        {"eventId": "e1", "message": "server crashed unexpectedly", "namespace": "prod", "sender": "watchdog"},
        {"eventId": "e2", "message": "server started normally", "namespace": "prod"},
        {"eventId": "e3", "message": "disk usage above threshold", "namespace": "staging", "tag": "storage"}
    ]"#;
    service.ingest_bytes(bytes).unwrap();

    assert_eq!(service.doc_count(), 3);
    assert_eq!(service.search("server").unwrap().total_hits, 2);
}

#[test]
fn test_reject_policy_surfaces_per_row_failures() {
    let service = SearchService::new(ServiceConfig {
        index: IndexConfig {
            duplicate_policy: DuplicatePolicy::Reject,
            ..IndexConfig::default()
        },
        ..ServiceConfig::default()
    });

    service
        .ingest_bytes(br#"[{"eventId": "e1", "message": "first"}]"#)
        .unwrap();
    let report = service
        .ingest_bytes(br#"[{"eventId": "e1", "message": "second"}]"#)
        .unwrap();

    assert_eq!(report.indexed, 0);
    assert_eq!(report.failed, 1);
    assert_eq!(service.doc_count(), 1);
    assert_eq!(service.search("first").unwrap().total_hits, 1);
    assert_eq!(service.search("second").unwrap().total_hits, 0);
}

#[test]
fn test_overwrite_replaces_searchable_content() {
    let service = seeded_service();
    service
        .ingest_bytes(br#"[{"eventId": "e1", "message": "completely different now"}]"#)
        .unwrap();

    assert_eq!(service.doc_count(), 3);
    assert_eq!(service.search("crashed").unwrap().total_hits, 0);
    assert_eq!(service.search("completely").unwrap().total_hits, 1);
}

#[test]
fn test_removed_document_stops_matching() {
    let service = seeded_service();
    service.remove("e3").unwrap();

    assert_eq!(service.doc_count(), 2);
    assert_eq!(service.search("disk").unwrap().total_hits, 0);
}

#[test]
fn test_response_envelope_shape() {
    let service = seeded_service();
    let results = service.search("crashed").unwrap();
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json["totalHits"], 1);
    assert_eq!(json["query"], "crashed");
    assert!(json["searchTime"].is_number());
    assert_eq!(json["results"][0]["document"]["eventId"], "e1");
    assert_eq!(json["results"][0]["document"]["namespace"], "prod");
}
