//! End-to-end ingestion behavior: formats, per-row failures, and files.

use std::fs;

use logseek::error::LogseekError;
use logseek::prelude::*;

#[test]
fn test_json_array_source() {
    let service = SearchService::with_defaults();
    let report = service
        .ingest_bytes(
            br#"[
                {"eventId": "e1", "message": "alpha"},
                {"eventId": "e2", "message": "beta"}
            ]"#,
        )
        .unwrap();

    assert_eq!(report.indexed, 2);
    assert_eq!(report.failed, 0);
}

#[test]
fn test_json_lines_source() {
    let service = SearchService::with_defaults();
    let bytes = concat!(
        r#"{"eventId": "e1", "message": "alpha"}"#,
        "\n",
        r#"{"eventId": "e2", "message": "beta"}"#,
        "\n",
    );
    let report = service.ingest_bytes(bytes.as_bytes()).unwrap();

    assert_eq!(report.indexed, 2);
    assert_eq!(service.search("beta").unwrap().total_hits, 1);
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let service = SearchService::with_defaults();
    let bytes = concat!(
        r#"{"eventId": "e1", "message": "good"}"#,
        "\n",
        "this is not json\n",
        r#"{"message": "missing event id"}"#,
        "\n",
        r#"{"eventId": "e2", "message": "also good"}"#,
        "\n",
    );
    let report = service.ingest_bytes(bytes.as_bytes()).unwrap();

    assert_eq!(report.indexed, 2);
    assert_eq!(report.failed, 2);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].row, 2);
    assert_eq!(report.failures[1].row, 3);
    assert_eq!(service.doc_count(), 2);
}

#[test]
fn test_unparsable_source_is_fatal() {
    let service = SearchService::with_defaults();
    let err = service.ingest_bytes(b"not json at all").unwrap_err();
    assert!(matches!(err, LogseekError::Ingest(_)));
    assert_eq!(service.doc_count(), 0);
}

#[test]
fn test_unknown_columns_are_ignored() {
    let service = SearchService::with_defaults();
    let report = service
        .ingest_bytes(
            br#"[{"eventId": "e1", "message": "kept", "severity": "high", "extra": 42}]"#,
        )
        .unwrap();

    assert_eq!(report.indexed, 1);
    assert_eq!(service.search("kept").unwrap().total_hits, 1);
    // Unknown column values are not indexed.
    assert_eq!(service.search("high").unwrap().total_hits, 0);
}

#[test]
fn test_ingest_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    fs::write(
        &path,
        br#"[
            {"eventId": "e1", "message": "from disk", "namespace": "prod"},
            {"eventId": "e2", "message": "also from disk"}
        ]"#,
    )
    .unwrap();

    let service = SearchService::with_defaults();
    let report = service.ingest_file(&path).unwrap();

    assert_eq!(report.indexed, 2);
    assert_eq!(service.search("disk").unwrap().total_hits, 2);
}

#[test]
fn test_capacity_abort_keeps_earlier_documents() {
    let service = SearchService::new(ServiceConfig {
        index: IndexConfig {
            max_documents: 2,
            ..IndexConfig::default()
        },
        ..ServiceConfig::default()
    });

    let err = service
        .ingest_bytes(
            br#"[
                {"eventId": "e1", "message": "one"},
                {"eventId": "e2", "message": "two"},
                {"eventId": "e3", "message": "three"}
            ]"#,
        )
        .unwrap_err();

    assert!(matches!(err, LogseekError::Capacity(_)));
    assert_eq!(service.doc_count(), 2);
    assert_eq!(service.search("one").unwrap().total_hits, 1);
}

#[test]
fn test_raw_message_is_stored_but_not_indexed() {
    let service = SearchService::with_defaults();
    service
        .ingest_bytes(
            br#"[{"eventId": "e1", "message": "clean text", "messageRaw": "<b>clean</b> MARKER text"}]"#,
        )
        .unwrap();

    assert_eq!(service.search("marker").unwrap().total_hits, 0);

    let results = service.search("clean").unwrap();
    assert_eq!(results.total_hits, 1);
    assert_eq!(
        results.results[0].document.message_raw,
        "<b>clean</b> MARKER text"
    );
}
