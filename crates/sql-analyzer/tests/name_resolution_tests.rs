//! Name resolution across scripts and the catalog.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sql_analyzer::{AnalyzedScript, AnalyzerOptions, Catalog, analyze};
use sql_scanner::scan_text;

fn analyze_script(
    text: &str,
    context_id: u32,
    catalog: &Catalog,
    external: Option<&Arc<AnalyzedScript>>,
) -> AnalyzedScript {
    let scanned = Arc::new(scan_text(text, context_id, 0).expect("scan"));
    let parsed = Arc::new(sql_parser::parse(&scanned));
    assert_eq!(parsed.errors, vec![], "parse errors for {text:?}");
    analyze(&scanned, &parsed, catalog, external, &AnalyzerOptions::default())
}

#[test]
fn local_create_table_resolves_references() {
    let catalog = Catalog::new();
    let analyzed = analyze_script(
        "create table t (x int, y int); select x from t",
        1,
        &catalog,
        None,
    );
    assert_eq!(analyzed.table_declarations.len(), 1);
    assert_eq!(analyzed.table_declarations[0].columns.len(), 2);
    assert_eq!(analyzed.table_references.len(), 1);

    let table_ref = &analyzed.table_references[0];
    let target = table_ref.target.expect("table ref should resolve locally");
    assert_eq!(target.context_id(), 1);
    assert_eq!(target.index(), 0);

    let column_ref = &analyzed.column_references[0];
    let (column_target, column_index) =
        column_ref.target.expect("column ref should resolve");
    assert_eq!(column_target, target);
    assert_eq!(column_index, 0);
}

#[test]
fn external_tables_resolve_only_after_registration() {
    let mut catalog = Catalog::new();
    let external =
        Arc::new(analyze_script("create table main.db.t (x int)", 2, &catalog, None));

    // Without registration the reference stays unresolved.
    let unresolved = analyze_script("select x from t", 1, &catalog, None);
    assert_eq!(unresolved.table_references[0].target, None);
    assert_eq!(unresolved.column_references[0].target, None);

    // With the external script imported, both the table and the column
    // bind to the external declaration.
    let resolved = analyze_script("select x from t", 1, &catalog, Some(&external));
    let target = resolved.table_references[0].target.expect("external resolution");
    assert_eq!(target.context_id(), 2);
    let (column_target, column_index) = resolved.column_references[0].target.unwrap();
    assert_eq!(column_target, target);
    assert_eq!(column_index, 0);

    // Registration in the catalog works the same without the explicit
    // external argument.
    catalog.add_script(external);
    let resolved = analyze_script("select x from t", 1, &catalog, None);
    assert_eq!(resolved.table_references[0].target.map(|t| t.context_id()), Some(2));
}

#[test]
fn alias_binding_prefers_exact_alias() {
    let catalog = Catalog::new();
    let analyzed = analyze_script(
        "create table a (x int); create table b (x int); \
         select a.x, b.x from a a, b b where a.x = b.x",
        1,
        &catalog,
        None,
    );
    assert_eq!(analyzed.table_references.len(), 2);
    for column_ref in &analyzed.column_references {
        let (target, _) = column_ref.target.expect("alias-qualified refs resolve");
        assert_eq!(target.context_id(), 1);
    }
    // a.x binds to table 0, b.x to table 1.
    let targets: Vec<u32> = analyzed
        .column_references
        .iter()
        .map(|c| c.target.unwrap().0.index())
        .collect();
    assert_eq!(targets, vec![0, 1, 0, 1]);
}

#[test]
fn unqualified_ambiguity_stays_unresolved() {
    let catalog = Catalog::new();
    let analyzed = analyze_script(
        "create table a (x int); create table b (x int); select x from a, b",
        1,
        &catalog,
        None,
    );
    assert_eq!(analyzed.column_references.len(), 1);
    assert_eq!(analyzed.column_references[0].target, None);
}

#[test]
fn correlated_subquery_binds_to_outer_scope() {
    let catalog = Catalog::new();
    let analyzed = analyze_script(
        "create table t (y int); create table u (x int); \
         select 1 from t where exists (select 1 from u where u.x = t.y)",
        1,
        &catalog,
        None,
    );
    let resolved: Vec<bool> =
        analyzed.column_references.iter().map(|c| c.target.is_some()).collect();
    assert_eq!(resolved, vec![true, true]);
}

#[test]
fn join_edges_derive_from_equality_predicates() {
    let catalog = Catalog::new();
    let analyzed = analyze_script(
        "select * from a a, b b where a.x = b.y",
        1,
        &catalog,
        None,
    );
    assert_eq!(analyzed.join_edges.len(), 1);
    let edge = &analyzed.join_edges[0];
    assert!(edge.left_node < edge.node_id && edge.right_node < edge.node_id);
}

#[test]
fn reanalysis_is_idempotent() {
    let mut catalog = Catalog::new();
    let external =
        Arc::new(analyze_script("create table main.db.t (x int)", 2, &catalog, None));
    catalog.add_script(external);

    let first = analyze_script("select x, t.x from t where x > 1", 1, &catalog, None);
    let second = analyze_script("select x, t.x from t where x > 1", 1, &catalog, None);
    assert_eq!(first.table_declarations, second.table_declarations);
    assert_eq!(first.table_references, second.table_references);
    assert_eq!(first.column_references, second.column_references);
    assert_eq!(first.join_edges, second.join_edges);
}

#[test]
fn catalog_replaces_entries_per_context() {
    let mut catalog = Catalog::new();
    let v1 = Arc::new(analyze_script("create table t (x int)", 2, &catalog, None));
    catalog.add_script(v1);
    assert!(catalog.resolve_qualified_table(None, None, "t").is_some());

    let v2 = Arc::new(analyze_script("create table u (x int)", 2, &catalog, None));
    catalog.add_script(v2);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.resolve_qualified_table(None, None, "t").is_none());
    assert!(catalog.resolve_qualified_table(None, None, "u").is_some());

    catalog.drop_script(2);
    assert!(catalog.is_empty());
    assert!(catalog.resolve_qualified_table(None, None, "u").is_none());
}
