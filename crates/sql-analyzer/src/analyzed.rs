//! The analyzer's output artifact.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sql_ast::ContextObjectId;
use sql_parser::ParsedScript;
use sql_scanner::ScannedScript;

/// A qualified table name as (database, schema, table) name ids.
///
/// Every id is a [`ContextObjectId`] into the owning script's dictionary;
/// missing qualification parts are null ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualifiedTableName {
    pub database: ContextObjectId,
    pub schema: ContextObjectId,
    pub table: ContextObjectId,
}

/// A column of a table declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDeclaration {
    /// The defining AST node
    pub node_id: u32,
    /// The column name
    pub name: ContextObjectId,
    /// Position within the table
    pub column_index: u32,
}

/// A table defined by this script (CREATE TABLE / CREATE VIEW).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDeclaration {
    /// The defining AST node
    pub node_id: u32,
    /// The qualified table name
    pub name: QualifiedTableName,
    /// The declared columns in definition order
    pub columns: Vec<ColumnDeclaration>,
}

/// A table referenced by this script.
///
/// `target` is a weak cross-script handle: the context id addresses the
/// owning script, the index its table declaration. Resolution goes through
/// the catalog, never through owning pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReference {
    /// The referencing AST node
    pub node_id: u32,
    /// The referenced qualified name
    pub name: QualifiedTableName,
    /// The table alias, if any
    pub alias: Option<ContextObjectId>,
    /// The resolved declaration, if resolution succeeded
    pub target: Option<ContextObjectId>,
}

/// A column referenced by this script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReference {
    /// The referencing AST node
    pub node_id: u32,
    /// The table alias qualifying the column, if any
    pub table_alias: Option<ContextObjectId>,
    /// The column name
    pub column_name: ContextObjectId,
    /// The resolved target: owning table declaration plus column index
    pub target: Option<(ContextObjectId, u32)>,
}

/// An equality predicate joining two resolved column references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinEdge {
    /// The predicate AST node
    pub node_id: u32,
    /// The left column reference node
    pub left_node: u32,
    /// The right column reference node
    pub right_node: u32,
}

/// The immutable artifact of one analysis run, registered in the catalog.
#[derive(Debug)]
pub struct AnalyzedScript {
    /// The owning script context
    pub context_id: u32,
    /// The analyzed text version
    pub text_version: u64,
    /// The default database applied to unqualified names
    pub database_default: Option<String>,
    /// The default schema applied to unqualified names
    pub schema_default: Option<String>,
    /// The table declarations
    pub table_declarations: Vec<TableDeclaration>,
    /// The table references
    pub table_references: Vec<TableReference>,
    /// The column references
    pub column_references: Vec<ColumnReference>,
    /// The derived join edges
    pub join_edges: Vec<JoinEdge>,
    /// The scanner stage this run consumed
    pub scanned: Arc<ScannedScript>,
    /// The parser stage this run consumed
    pub parsed: Arc<ParsedScript>,
}

impl AnalyzedScript {
    /// Read the text behind a name id owned by this script.
    pub fn name_text(&self, id: ContextObjectId) -> Option<&str> {
        if id.is_null() || id.context_id() != self.context_id {
            return None;
        }
        self.scanned.names.text(id.index())
    }

    /// The declaration addressed by a local target id.
    pub fn table_declaration(&self, target: ContextObjectId) -> Option<&TableDeclaration> {
        if target.context_id() != self.context_id {
            return None;
        }
        self.table_declarations.get(target.index() as usize)
    }
}
