//! Name resolution and the multi-script catalog.
//!
//! The analyzer runs as a pass over the flat AST: because the node buffer
//! is post-order, a single left-to-right scan in morsels visits every node
//! after all of its children. The name-resolution pass collects table
//! declarations, table references, and column references, binds them
//! against local declarations and the catalog, and exports an immutable
//! [`AnalyzedScript`] that the host registers via [`Catalog::add_script`].
//!
//! Cross-script references are weak: an `AnalyzedScript` stores
//! `ContextObjectId` targets and readers resolve them through the catalog,
//! so script graphs with cycles cannot leak.

mod analyzed;
mod analyzer;
mod catalog;
mod name_resolution;
mod pass;

pub use analyzed::{
    AnalyzedScript, ColumnDeclaration, ColumnReference, JoinEdge, QualifiedTableName,
    TableDeclaration, TableReference,
};
pub use analyzer::{AnalyzerOptions, analyze};
pub use catalog::Catalog;
pub use name_resolution::{ExternalTables, NameResolutionPass};
pub use pass::{MORSEL_SIZE, Pass, PassManager};
