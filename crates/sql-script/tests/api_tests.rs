//! The handle boundary: lifecycle, status codes, serialized payloads.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sql_script::{
    AnalyzePayload, CompletionPayload, ParsePayload, ScanPayload, ScriptRegistry, StatusCode,
};

#[test]
fn stage_ordering_is_enforced() {
    let mut registry = ScriptRegistry::new();
    let handle = registry.script_new(1).unwrap();
    registry.script_insert_text_at(handle, 0, "select 1");

    // Parse before scan.
    let result = registry.script_parse(handle);
    assert_eq!(result.status_code, StatusCode::ParserInputNotScanned);

    // Analyze before parse.
    let result = registry.script_analyze(handle, None);
    assert_eq!(result.status_code, StatusCode::AnalyzerInputNotParsed);

    assert_eq!(registry.script_scan(handle).status_code, StatusCode::Ok);
    assert_eq!(registry.script_parse(handle).status_code, StatusCode::Ok);
    assert_eq!(registry.script_analyze(handle, None).status_code, StatusCode::Ok);
    assert_eq!(registry.script_reindex(handle), StatusCode::Ok);
}

#[test]
fn context_ids_must_be_unique_and_non_zero() {
    let mut registry = ScriptRegistry::new();
    assert!(registry.script_new(0).is_none());
    assert!(registry.script_new(7).is_some());
    assert!(registry.script_new(7).is_none());
}

#[test]
fn unknown_handles_are_rejected() {
    let mut registry = ScriptRegistry::new();
    let handle = registry.script_new(1).unwrap();
    registry.script_delete(handle);
    assert_eq!(registry.script_scan(handle).status_code, StatusCode::ScriptUnknown);
    assert_eq!(registry.script_delete(handle), StatusCode::ScriptUnknown);
}

#[test]
fn scan_payload_round_trips() {
    let mut registry = ScriptRegistry::new();
    let handle = registry.script_new(1).unwrap();
    registry.script_insert_text_at(handle, 0, "select 1 -- c\nfrom t");

    let result = registry.script_scan(handle);
    assert_eq!(result.status_code, StatusCode::Ok);
    let payload: ScanPayload = serde_json::from_slice(&result.data).unwrap();
    assert!(!payload.highlighting.token_offsets.is_empty());
    assert_eq!(payload.comments.len(), 1);
    assert_eq!(payload.line_breaks.len(), 1);
    assert_eq!(payload.errors, vec![]);
}

#[test]
fn parse_payload_preserves_the_tree_structurally() {
    let mut registry = ScriptRegistry::new();
    let handle = registry.script_new(1).unwrap();
    registry.script_insert_text_at(handle, 0, "select a, b from t where a > 1");
    registry.script_scan(handle);

    let result = registry.script_parse(handle);
    assert_eq!(result.status_code, StatusCode::Ok);
    let payload: ParsePayload = serde_json::from_slice(&result.data).unwrap();

    let script = registry.script(handle).unwrap();
    let parsed = script.parsed().unwrap();
    assert_eq!(payload.nodes, parsed.nodes);
    assert_eq!(payload.statements, parsed.statements);
    assert_eq!(payload.errors, parsed.errors);
}

#[test]
fn external_resolution_through_the_boundary() {
    let mut registry = ScriptRegistry::new();

    // Unknown external context id.
    let main = registry.script_new(1).unwrap();
    registry.script_insert_text_at(main, 0, "select x from t");
    registry.script_scan(main);
    registry.script_parse(main);
    let result = registry.script_analyze(main, Some(2));
    assert_eq!(result.status_code, StatusCode::CatalogDescriptorPoolUnknown);

    // Register the external script, then resolve against it.
    let external = registry.script_new(2).unwrap();
    registry.script_insert_text_at(external, 0, "create table main.db.t(x int)");
    registry.script_scan(external);
    registry.script_parse(external);
    registry.script_analyze(external, None);
    assert_eq!(registry.script_reindex(external), StatusCode::Ok);

    let result = registry.script_analyze(main, Some(2));
    assert_eq!(result.status_code, StatusCode::Ok);
    let payload: AnalyzePayload = serde_json::from_slice(&result.data).unwrap();
    let column_target = payload.column_references[0].target.expect("x resolves");
    assert_eq!(column_target.0.context_id(), 2);

    // Dropping the external script breaks resolution again.
    registry.script_delete(external);
    registry.script_scan(main);
    registry.script_parse(main);
    let result = registry.script_analyze(main, None);
    assert_eq!(result.status_code, StatusCode::Ok);
    let payload: AnalyzePayload = serde_json::from_slice(&result.data).unwrap();
    assert_eq!(payload.column_references[0].target, None);
}

#[test]
fn completion_needs_a_cursor_first() {
    let mut registry = ScriptRegistry::new();
    let handle = registry.script_new(1).unwrap();
    registry.script_insert_text_at(handle, 0, "sel");
    registry.script_scan(handle);
    registry.script_parse(handle);
    registry.script_analyze(handle, None);

    let result = registry.script_complete_at_cursor(handle, 8);
    assert_eq!(result.status_code, StatusCode::CompletionMissesCursor);

    let result = registry.script_move_cursor(handle, 3);
    assert_eq!(result.status_code, StatusCode::Ok);
    let result = registry.script_complete_at_cursor(handle, 8);
    assert_eq!(result.status_code, StatusCode::Ok);
    let payload: CompletionPayload = serde_json::from_slice(&result.data).unwrap();
    assert!(payload.completions.iter().any(|c| c.text == "select"));
    assert!(payload.completions.len() <= 8);
}

#[test]
fn erase_rescans_cleanly() {
    let mut registry = ScriptRegistry::new();
    let handle = registry.script_new(1).unwrap();
    registry.script_insert_text_at(handle, 0, "select 11");
    assert_eq!(registry.script_scan(handle).status_code, StatusCode::Ok);

    registry.script_erase_text_at(handle, 7, 2);
    let result = registry.script_scan(handle);
    assert_eq!(result.status_code, StatusCode::Ok);
    let payload: ScanPayload = serde_json::from_slice(&result.data).unwrap();
    assert_eq!(payload.highlighting.token_offsets, vec![0, 6]);
}
