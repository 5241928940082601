//! Parser integration: node layout, statements, find_node_at_offset.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sql_ast::{AttributeKey, Location, NO_PARENT, NodeType, StatementType};
use sql_parser::{ExpectedSymbol, ParsedScript, parse, parse_until};
use sql_scanner::{Keyword, scan_text};

fn parse_ok(text: &str) -> ParsedScript {
    let scanned = scan_text(text, 1, 0).expect("scan should succeed");
    let parsed = parse(&scanned);
    assert_eq!(parsed.errors, vec![], "unexpected parse errors for {text:?}");
    parsed
}

fn check_invariants(parsed: &ParsedScript) {
    for (index, node) in parsed.nodes.iter().enumerate() {
        if node.parent != NO_PARENT {
            assert!(
                (node.parent as usize) > index,
                "node {index}: parent {} must have a greater index",
                node.parent
            );
        }
        let range = node.children_range();
        if !range.is_empty() {
            assert!(range.end <= index, "node {index}: children must precede it");
            for child in range {
                assert_eq!(parsed.nodes[child].parent as usize, index);
            }
        }
    }
    for statement in &parsed.statements {
        let root = &parsed.nodes[statement.root_node as usize];
        assert_eq!(root.parent, NO_PARENT);
    }
}

#[test]
fn find_node_at_offset_in_simple_select() {
    let parsed = parse_ok("select 1");
    check_invariants(&parsed);

    for offset in [0, 1, 2] {
        let (statement_id, node_id) = parsed.find_node_at_offset(offset).unwrap();
        assert_eq!(statement_id, 0);
        let node = &parsed.nodes[node_id];
        assert_eq!(node.node_type, NodeType::ObjectSqlSelect, "offset {offset}");
        assert_eq!(node.location, Location::new(0, 8));
    }
    let (statement_id, node_id) = parsed.find_node_at_offset(7).unwrap();
    assert_eq!(statement_id, 0);
    let node = &parsed.nodes[node_id];
    assert_eq!(node.node_type, NodeType::LiteralInteger);
    assert_eq!(node.location, Location::new(7, 1));
}

#[test]
fn cross_product_select_shapes() {
    let parsed = parse_ok("select * from A a, B b where a.x = b.y");
    check_invariants(&parsed);
    assert_eq!(parsed.statements.len(), 1);
    assert_eq!(parsed.statements[0].statement_type, StatementType::Select);

    // Offset 9 sits on "from"; the innermost covering node is the from
    // clause array.
    let (_, node_id) = parsed.find_node_at_offset(9).unwrap();
    let node = &parsed.nodes[node_id];
    assert_eq!(node.attribute_key, AttributeKey::SqlSelectFrom);
    assert_eq!(node.node_type, NodeType::Array);

    // Offset 16 is the alias "a".
    let (_, node_id) = parsed.find_node_at_offset(16).unwrap();
    let node = &parsed.nodes[node_id];
    assert_eq!(node.attribute_key, AttributeKey::SqlTablerefAlias);
    assert_eq!(node.node_type, NodeType::Name);
}

#[test]
fn statements_split_at_semicolons() {
    let parsed = parse_ok("select 1; select 2; create table t (x int)");
    check_invariants(&parsed);
    assert_eq!(parsed.statements.len(), 3);
    assert_eq!(parsed.statements[0].statement_type, StatementType::Select);
    assert_eq!(parsed.statements[1].statement_type, StatementType::Select);
    assert_eq!(parsed.statements[2].statement_type, StatementType::CreateTable);
    // Roots are the highest-index nodes of their subtrees, in source order.
    let roots: Vec<u32> = parsed.statements.iter().map(|s| s.root_node).collect();
    assert!(roots[0] < roots[1] && roots[1] < roots[2]);
}

#[test]
fn error_recovery_resumes_at_next_statement() {
    let scanned = scan_text("select from from; select 2", 1, 0).expect("scan");
    let parsed = parse(&scanned);
    assert!(!parsed.errors.is_empty());
    // The trailing statement still parses.
    assert!(
        parsed
            .statements
            .iter()
            .any(|s| s.statement_type == StatementType::Select
                && parsed.nodes[s.root_node as usize].location.contains(25))
    );
}

#[test]
fn qualified_name_with_four_parts_is_an_error() {
    let scanned = scan_text("select * from a.b.c.d", 1, 0).expect("scan");
    let parsed = parse(&scanned);
    assert!(
        parsed
            .errors
            .iter()
            .any(|(_, message)| message.contains("more than three parts"))
    );
}

#[test]
fn qualified_name_attribute_assignment() {
    let parsed = parse_ok("select * from main.db.t");
    check_invariants(&parsed);
    let qualified = parsed
        .nodes
        .iter()
        .position(|n| n.node_type == NodeType::ObjectSqlQualifiedName)
        .unwrap();
    let keys: Vec<AttributeKey> = parsed.nodes[qualified]
        .children_range()
        .map(|child| parsed.nodes[child].attribute_key)
        .collect();
    assert_eq!(
        keys,
        vec![
            AttributeKey::SqlQualifiedNameCatalog,
            AttributeKey::SqlQualifiedNameSchema,
            AttributeKey::SqlQualifiedNameRelation,
        ]
    );
}

#[test]
fn larger_statements_keep_invariants() {
    let texts = [
        "with t as (select 1) select * from t union all select 2 from u order by 1 desc nulls last limit 10 offset 2",
        "select count(*) over (partition by a order by b rows between 1 preceding and current row exclude ties) from t",
        "select case when a > 1 then 'x' else 'y' end, cast(a as varchar(10)), a::int from t",
        "select extract(epoch from ts), trim(leading 'x' from s), interval '1' hour from t",
        "create table if not exists s.t (id int primary key, name varchar(64) not null default 'x', check (id > 0), constraint fk foreign key (id) references o (oid) on delete cascade) on commit drop",
        "create temp view v (a, b) as select 1, 2",
        "select a from t tablesample 10 percent join u using (id) left outer join w on t.x = w.x",
        "select x = any (select y from z), exists (select 1) from t where a between 1 and 10 and b not in (1, 2)",
    ];
    for text in texts {
        let parsed = parse_ok(text);
        check_invariants(&parsed);
        assert_eq!(parsed.statements.len(), 1, "single statement for {text:?}");
    }
}

#[test]
fn parse_until_reports_expected_symbols() {
    let scanned = scan_text("select a from t", 1, 0).expect("scan");
    // Halt at the symbol "from" (index 2: select, a, from, t).
    let expected = parse_until(&scanned, 2);
    assert!(
        expected.contains(&ExpectedSymbol::Keyword(Keyword::From)),
        "FROM should be expected after the target list, got {expected:?}"
    );
    // Halt right after "select": expressions and '*' are acceptable.
    let expected = parse_until(&scanned, 1);
    assert!(!expected.is_empty());
}

#[test]
fn set_operations_reduce_to_combine_nodes() {
    let parsed = parse_ok("select 1 union all select 2 except select 3");
    check_invariants(&parsed);
    assert_eq!(parsed.statements.len(), 1);
    assert_eq!(parsed.statements[0].statement_type, StatementType::SetOperation);
    let combines = parsed
        .nodes
        .iter()
        .filter(|n| n.node_type == NodeType::ObjectSqlCombine)
        .count();
    assert_eq!(combines, 2);
}
