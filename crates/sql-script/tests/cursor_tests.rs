//! Cursor placement over analyzed scripts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sql_analyzer::Catalog;
use sql_ast::{AttributeKey, NodeType};
use sql_script::{Script, StatusCode};

struct ExpectedCursor {
    scanner_token_text: Option<&'static str>,
    statement_id: Option<u32>,
    ast_attribute_key: AttributeKey,
    ast_node_type: NodeType,
}

fn test_cursor(script: &mut Script, offset: usize, expected: ExpectedCursor) {
    let (status, cursor) = script.move_cursor(offset);
    assert_eq!(status, StatusCode::Ok);
    let cursor = cursor.unwrap();

    let scanned = script.scanned().unwrap();
    match expected.scanner_token_text {
        Some(expected_text) => {
            let token_id = cursor.scanner_token_id.expect("token under cursor") as usize;
            let token = scanned.tokens[token_id];
            let text = scanned.names.text(token.name_id).unwrap_or_default();
            assert_eq!(text, expected_text, "token text at offset {offset}");
        }
        None => assert_eq!(cursor.scanner_token_id, None),
    }
    assert_eq!(cursor.statement_id, expected.statement_id, "statement at {offset}");

    let parsed = script.parsed().unwrap();
    let node = parsed.nodes[cursor.ast_node_id.expect("node under cursor") as usize];
    assert_eq!(node.attribute_key, expected.ast_attribute_key, "attribute at {offset}");
    assert_eq!(node.node_type, expected.ast_node_type, "node type at {offset}");
}

#[test]
fn cursor_walk_without_external_script() {
    let mut catalog = Catalog::new();
    let mut script = Script::new(1);
    script.insert_text_at(0, "select * from A a, B b where a.x = b.y");
    assert_eq!(script.scan(), StatusCode::Ok);
    assert_eq!(script.parse(), StatusCode::Ok);
    assert_eq!(script.analyze(&catalog, None), StatusCode::Ok);
    assert_eq!(script.reindex(&mut catalog), StatusCode::Ok);

    test_cursor(
        &mut script,
        0,
        ExpectedCursor {
            scanner_token_text: Some("select"),
            statement_id: Some(0),
            ast_attribute_key: AttributeKey::None,
            ast_node_type: NodeType::ObjectSqlSelect,
        },
    );
    test_cursor(
        &mut script,
        9,
        ExpectedCursor {
            scanner_token_text: Some("from"),
            statement_id: Some(0),
            ast_attribute_key: AttributeKey::SqlSelectFrom,
            ast_node_type: NodeType::Array,
        },
    );
    test_cursor(
        &mut script,
        16,
        ExpectedCursor {
            scanner_token_text: Some("a"),
            statement_id: Some(0),
            ast_attribute_key: AttributeKey::SqlTablerefAlias,
            ast_node_type: NodeType::Name,
        },
    );
}

#[test]
fn cursor_requires_fresh_analysis() {
    let catalog = Catalog::new();
    let mut script = Script::new(1);
    script.insert_text_at(0, "select 1");
    let (status, cursor) = script.move_cursor(0);
    assert_eq!(status, StatusCode::AnalyzerInputInvalid);
    assert_eq!(cursor, None);

    assert_eq!(script.scan(), StatusCode::Ok);
    assert_eq!(script.parse(), StatusCode::Ok);
    assert_eq!(script.analyze(&catalog, None), StatusCode::Ok);
    let (status, _) = script.move_cursor(0);
    assert_eq!(status, StatusCode::Ok);

    // An edit invalidates the chain again.
    script.insert_text_at(8, ";");
    let (status, _) = script.move_cursor(0);
    assert_eq!(status, StatusCode::AnalyzerInputInvalid);
}

#[test]
fn cursor_in_whitespace_snaps_to_preceding_token() {
    let catalog = Catalog::new();
    let mut script = Script::new(1);
    script.insert_text_at(0, "select 1");
    script.scan();
    script.parse();
    script.analyze(&catalog, None);

    let (_, cursor) = script.move_cursor(6);
    let cursor = cursor.unwrap();
    // Offset 6 is the whitespace after "select".
    assert_eq!(cursor.scanner_token_id, Some(0));
    assert_eq!(cursor.statement_id, Some(0));
}
