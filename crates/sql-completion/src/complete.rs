//! Candidate collection and scoring.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sql_analyzer::{AnalyzedScript, Catalog};
use sql_arena::TopKHeap;
use sql_parser::{ExpectedSymbol, parse_until};
use sql_scanner::TokenType;

use crate::index::CompletionIndex;

/// Default candidate limit when the host passes none.
pub const DEFAULT_LIMIT: usize = 20;

/// What kind of object a completion names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum CompletionTag {
    Keyword = 0,
    SchemaName = 1,
    TableName = 2,
    ColumnName = 3,
    Alias = 4,
}

impl CompletionTag {
    /// The base weight of this tag in the combined score. Concrete names
    /// outweigh keywords so that a matching table or alias wins over the
    /// keyword the grammar would also accept.
    #[inline]
    fn weight(self) -> u32 {
        match self {
            CompletionTag::Keyword => 2,
            CompletionTag::SchemaName => 12,
            CompletionTag::ColumnName => 16,
            CompletionTag::TableName => 20,
            CompletionTag::Alias => 24,
        }
    }
}

/// Where a candidate was found, outermost to innermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum CompletionLocality {
    Catalog = 0,
    SameScript = 1,
    SameStatement = 2,
}

impl CompletionLocality {
    #[inline]
    fn bonus(self) -> u32 {
        match self {
            CompletionLocality::Catalog => 0,
            CompletionLocality::SameScript => 8,
            CompletionLocality::SameStatement => 16,
        }
    }
}

/// A ranked completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// The replacement text
    pub text: String,
    /// The candidate kind
    pub tag: CompletionTag,
    /// The combined score
    pub score: u32,
}

/// Everything the scorer knows about the cursor.
#[derive(Debug, Clone, Copy)]
pub struct CompletionContext<'a> {
    /// The script's scanner output
    pub scanned: &'a sql_scanner::ScannedScript,
    /// The script's analyzer output
    pub analyzed: &'a AnalyzedScript,
    /// The shared catalog
    pub catalog: &'a Catalog,
    /// Scanner token under the cursor
    pub scanner_token_id: Option<usize>,
    /// Statement owning the cursor
    pub statement_id: Option<usize>,
}

/// Produce the top-`limit` completions at the cursor.
pub fn complete(context: &CompletionContext, limit: usize) -> Vec<Completion> {
    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
    let typed = typed_text(context);

    // score per (text, tag): combined from all sources, best wins
    let mut scores: FxHashMap<(String, CompletionTag), u32> = FxHashMap::default();
    let mut bump = |text: &str, tag: CompletionTag, score: u32| {
        let entry = scores.entry((text.to_owned(), tag)).or_insert(0);
        *entry = (*entry).max(score);
    };

    collect_grammar_keywords(context, typed, &mut bump);
    collect_trie_matches(typed, &mut bump);
    collect_catalog_names(context, typed, &mut bump);

    let mut heap: TopKHeap<Completion, u32> = TopKHeap::with_capacity(limit);
    let mut ranked: Vec<((String, CompletionTag), u32)> = scores.into_iter().collect();
    // Deterministic insertion order for stable tie-breaking.
    ranked.sort_by(|l, r| l.0.cmp(&r.0));
    for ((text, tag), score) in ranked {
        heap.insert(Completion { text, tag, score }, score);
    }
    let completions: Vec<Completion> =
        heap.into_sorted().into_iter().map(|(completion, _)| completion).collect();
    tracing::debug!(
        candidates = completions.len(),
        typed = typed.unwrap_or(""),
        "completion computed"
    );
    completions
}

/// The partially typed token text, when the cursor sits on something
/// typeable.
fn typed_text<'a>(context: &CompletionContext<'a>) -> Option<&'a str> {
    let token_id = context.scanner_token_id?;
    let token = context.scanned.tokens.get(token_id)?;
    match token.token_type {
        TokenType::Identifier | TokenType::Keyword | TokenType::QuotedIdentifier => {
            context.scanned.names.text(token.name_id)
        }
        _ => None,
    }
}

/// Match-quality part of the score, shared by all sources.
fn match_score(candidate: &str, typed: Option<&str>) -> Option<u32> {
    let Some(typed) = typed else {
        // No typed text: every candidate matches weakly.
        return Some(0);
    };
    if typed.is_empty() {
        return Some(0);
    }
    let candidate_folded = candidate.to_ascii_lowercase();
    let typed_folded = typed.to_ascii_lowercase();
    if candidate_folded.starts_with(&typed_folded) {
        Some(typed_folded.len() as u32 * 4 + 20)
    } else if candidate_folded.contains(&typed_folded) {
        Some(typed_folded.len() as u32 * 4)
    } else {
        None
    }
}

/// Source 1: grammar symbols with a defined action at the cursor token.
fn collect_grammar_keywords(
    context: &CompletionContext,
    typed: Option<&str>,
    bump: &mut impl FnMut(&str, CompletionTag, u32),
) {
    let Some(token_id) = context.scanner_token_id else {
        return;
    };
    for symbol in parse_until(context.scanned, token_id) {
        let ExpectedSymbol::Keyword(keyword) = symbol else {
            continue;
        };
        let text = keyword.text();
        if text.is_empty() {
            continue;
        }
        let Some(match_part) = match_score(text, typed) else {
            continue;
        };
        bump(text, CompletionTag::Keyword, CompletionTag::Keyword.weight() + 16 + match_part);
    }
}

/// Source 2: keyword suffix trie over the typed text.
fn collect_trie_matches(
    typed: Option<&str>,
    bump: &mut impl FnMut(&str, CompletionTag, u32),
) {
    let Some(typed) = typed else {
        return;
    };
    let folded = typed.to_ascii_lowercase();
    let trie = &CompletionIndex::keywords().suffix_trie;
    trie.for_each_match(&folded, |keyword, is_prefix| {
        let match_part = folded.len() as u32 * 4 + if is_prefix { 20 } else { 0 };
        bump(keyword, CompletionTag::Keyword, CompletionTag::Keyword.weight() + match_part);
    });
}

/// Source 3: table, column, schema, and alias names visible in scope.
fn collect_catalog_names(
    context: &CompletionContext,
    typed: Option<&str>,
    bump: &mut impl FnMut(&str, CompletionTag, u32),
) {
    let mut offer = |text: Option<&str>, tag: CompletionTag, locality: CompletionLocality| {
        let Some(text) = text else { return };
        if text.is_empty() {
            return;
        }
        let Some(match_part) = match_score(text, typed) else {
            return;
        };
        bump(text, tag, tag.weight() + locality.bonus() + match_part);
    };

    // Current script declarations and references.
    let analyzed = context.analyzed;
    for declaration in &analyzed.table_declarations {
        offer(
            analyzed.name_text(declaration.name.table),
            CompletionTag::TableName,
            CompletionLocality::SameScript,
        );
        offer(
            analyzed.name_text(declaration.name.schema),
            CompletionTag::SchemaName,
            CompletionLocality::SameScript,
        );
        for column in &declaration.columns {
            offer(
                analyzed.name_text(column.name),
                CompletionTag::ColumnName,
                CompletionLocality::SameScript,
            );
        }
    }
    for table_ref in &analyzed.table_references {
        let locality = if in_statement(context, table_ref.node_id) {
            CompletionLocality::SameStatement
        } else {
            CompletionLocality::SameScript
        };
        offer(analyzed.name_text(table_ref.name.table), CompletionTag::TableName, locality);
        if let Some(alias) = table_ref.alias {
            offer(analyzed.name_text(alias), CompletionTag::Alias, locality);
        }
        // Columns of the referenced table are in scope too.
        if let Some(target) = table_ref.target {
            if target.context_id() == analyzed.context_id {
                if let Some(declaration) = analyzed.table_declaration(target) {
                    for column in &declaration.columns {
                        offer(
                            analyzed.name_text(column.name),
                            CompletionTag::ColumnName,
                            locality,
                        );
                    }
                }
            } else if let Some((script, declaration)) =
                context.catalog.table_declaration(target)
            {
                for column in &declaration.columns {
                    offer(
                        script.name_text(column.name),
                        CompletionTag::ColumnName,
                        CompletionLocality::Catalog,
                    );
                }
            }
        }
    }

    // Catalog-wide table names.
    for script in context.catalog.iter_scripts() {
        if script.context_id == analyzed.context_id {
            continue;
        }
        for declaration in &script.table_declarations {
            offer(
                script.name_text(declaration.name.table),
                CompletionTag::TableName,
                CompletionLocality::Catalog,
            );
            offer(
                script.name_text(declaration.name.schema),
                CompletionTag::SchemaName,
                CompletionLocality::Catalog,
            );
        }
    }
}

/// True when the node belongs to the statement under the cursor.
fn in_statement(context: &CompletionContext, node_id: u32) -> bool {
    let Some(statement_id) = context.statement_id else {
        return false;
    };
    let parsed = &context.analyzed.parsed;
    let Some(statement) = parsed.statements.get(statement_id) else {
        return false;
    };
    // The root is the highest-index node of its subtree; the previous
    // statement's root bounds it from below.
    let lower = statement_id
        .checked_sub(1)
        .and_then(|previous| parsed.statements.get(previous))
        .map(|previous| previous.root_node + 1)
        .unwrap_or(0);
    node_id >= lower && node_id <= statement.root_node
}
