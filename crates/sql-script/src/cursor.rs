//! The script cursor.

use serde::{Deserialize, Serialize};
use sql_parser::ParsedScript;
use sql_scanner::ScannedScript;

/// Where a byte offset lands in a script: the scanner token, the owning
/// statement, and the innermost AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCursor {
    /// The cursor byte offset
    pub text_offset: u32,
    /// The scanner token containing the offset, or the nearest preceding
    /// token for whitespace
    pub scanner_token_id: Option<u32>,
    /// The statement owning the offset, if any
    pub statement_id: Option<u32>,
    /// The innermost AST node covering the offset, if any
    pub ast_node_id: Option<u32>,
}

impl ScriptCursor {
    /// Compute the cursor for a byte offset.
    pub fn moved_to(scanned: &ScannedScript, parsed: &ParsedScript, offset: u32) -> Self {
        let scanner_token_id = scanned.find_token_at_offset(offset).map(|id| id as u32);
        let (statement_id, ast_node_id) = match parsed.find_node_at_offset(offset) {
            Some((statement, node)) => (Some(statement as u32), Some(node as u32)),
            None => (None, None),
        };
        Self { text_offset: offset, scanner_token_id, statement_id, ast_node_id }
    }
}
