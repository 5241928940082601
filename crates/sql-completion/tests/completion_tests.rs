//! Completion ranking over real scripts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sql_analyzer::{AnalyzedScript, AnalyzerOptions, Catalog, analyze};
use sql_completion::{CompletionContext, CompletionIndex, CompletionTag, complete};
use sql_scanner::scan_text;

fn analyze_script(text: &str, context_id: u32, catalog: &Catalog) -> Arc<AnalyzedScript> {
    let scanned = Arc::new(scan_text(text, context_id, 0).expect("scan"));
    let parsed = Arc::new(sql_parser::parse(&scanned));
    Arc::new(analyze(&scanned, &parsed, catalog, None, &AnalyzerOptions::default()))
}

#[test]
fn keyword_suffix_trie_entry_count() {
    let keywords = CompletionIndex::keywords();
    assert_eq!(keywords.suffix_trie.entries().len(), 2875);
}

#[test]
fn partial_keyword_completes_to_keyword() {
    let catalog = Catalog::new();
    let analyzed = analyze_script("sel", 1, &catalog);
    let context = CompletionContext {
        scanned: &analyzed.scanned,
        analyzed: &analyzed,
        catalog: &catalog,
        scanner_token_id: Some(0),
        statement_id: None,
    };
    let completions = complete(&context, 10);
    assert!(!completions.is_empty());
    assert!(
        completions.iter().any(|c| c.text == "select" && c.tag == CompletionTag::Keyword),
        "expected 'select' in {completions:?}"
    );
}

#[test]
fn table_names_from_catalog_rank_above_cold_keywords() {
    let mut catalog = Catalog::new();
    let external = analyze_script("create table orders (id int, amount int)", 2, &catalog);
    catalog.add_script(external);

    let analyzed = analyze_script("select id from ord", 1, &catalog);
    let token_id = analyzed.scanned.tokens.len() - 1;
    let context = CompletionContext {
        scanned: &analyzed.scanned,
        analyzed: &analyzed,
        catalog: &catalog,
        scanner_token_id: Some(token_id),
        statement_id: Some(0),
    };
    let completions = complete(&context, 10);
    let orders_rank = completions.iter().position(|c| c.text == "orders");
    let order_rank = completions.iter().position(|c| c.text == "order");
    let orders_rank = orders_rank.expect("catalog table should be offered");
    if let Some(order_rank) = order_rank {
        assert!(
            orders_rank < order_rank,
            "table name should outrank the bare keyword: {completions:?}"
        );
    }
}

#[test]
fn limit_caps_the_candidate_list() {
    let catalog = Catalog::new();
    let analyzed = analyze_script("se", 1, &catalog);
    let context = CompletionContext {
        scanned: &analyzed.scanned,
        analyzed: &analyzed,
        catalog: &catalog,
        scanner_token_id: Some(0),
        statement_id: None,
    };
    let completions = complete(&context, 4);
    assert!(completions.len() <= 4);
    // Scores are delivered in descending order.
    for pair in completions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn columns_of_referenced_tables_are_in_scope() {
    let mut catalog = Catalog::new();
    let external = analyze_script("create table t (amount int)", 2, &catalog);
    catalog.add_script(external);

    let analyzed = analyze_script("select amo from t", 1, &catalog);
    let context = CompletionContext {
        scanned: &analyzed.scanned,
        analyzed: &analyzed,
        catalog: &catalog,
        scanner_token_id: Some(1),
        statement_id: Some(0),
    };
    let completions = complete(&context, 10);
    assert!(
        completions
            .iter()
            .any(|c| c.text == "amount" && c.tag == CompletionTag::ColumnName),
        "expected column completion in {completions:?}"
    );
}
