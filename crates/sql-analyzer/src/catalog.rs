//! The multi-script catalog.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use sql_ast::ContextObjectId;

use crate::analyzed::AnalyzedScript;

/// Key of a fully-qualified table in the catalog's text index.
type QualifiedKey = (Option<String>, Option<String>, String);

/// Aggregates [`AnalyzedScript`]s by context id and answers qualified-name
/// lookups across them.
///
/// The catalog owns its scripts strongly; references *between* scripts stay
/// weak (`ContextObjectId`s resolved lazily through this map), which breaks
/// the cycle a script graph can otherwise form. Re-inserting a context id
/// replaces the prior entry atomically: the `Arc` is swapped, never mutated
/// in place.
#[derive(Debug, Default)]
pub struct Catalog {
    /// The scripts by context id
    scripts: FxHashMap<u32, Arc<AnalyzedScript>>,
    /// Qualified name texts to table declaration targets
    tables_by_name: FxHashMap<QualifiedKey, ContextObjectId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Register a script, replacing any prior entry under its context id.
    pub fn add_script(&mut self, script: Arc<AnalyzedScript>) {
        let context_id = script.context_id;
        if self.scripts.contains_key(&context_id) {
            self.drop_script(context_id);
        }
        for (table_index, declaration) in script.table_declarations.iter().enumerate() {
            let key = (
                script.name_text(declaration.name.database).map(str::to_owned),
                script.name_text(declaration.name.schema).map(str::to_owned),
                match script.name_text(declaration.name.table) {
                    Some(text) => text.to_owned(),
                    None => continue,
                },
            );
            let target = ContextObjectId::new(context_id, table_index as u32);
            self.tables_by_name.insert(key, target);
        }
        tracing::debug!(
            context_id,
            tables = script.table_declarations.len(),
            "registered script in catalog"
        );
        self.scripts.insert(context_id, script);
    }

    /// Remove a script and its name index rows.
    pub fn drop_script(&mut self, context_id: u32) -> Option<Arc<AnalyzedScript>> {
        let removed = self.scripts.remove(&context_id)?;
        self.tables_by_name.retain(|_, target| target.context_id() != context_id);
        tracing::debug!(context_id, "dropped script from catalog");
        Some(removed)
    }

    /// Get a registered script.
    pub fn script(&self, context_id: u32) -> Option<&Arc<AnalyzedScript>> {
        self.scripts.get(&context_id)
    }

    /// Resolve a fully-qualified table to its declaration target.
    pub fn resolve_qualified_table(
        &self,
        database: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> Option<ContextObjectId> {
        let key = (
            database.map(str::to_owned),
            schema.map(str::to_owned),
            table.to_owned(),
        );
        self.tables_by_name.get(&key).copied()
    }

    /// Resolve a table by name alone, for unqualified references with no
    /// applicable defaults. Returns `None` when ambiguous.
    pub fn resolve_table_by_name(&self, table: &str) -> Option<ContextObjectId> {
        let mut found = None;
        for (key, target) in &self.tables_by_name {
            if key.2 == table {
                if found.is_some() {
                    return None;
                }
                found = Some(*target);
            }
        }
        found
    }

    /// The declaration behind a target id.
    pub fn table_declaration(
        &self,
        target: ContextObjectId,
    ) -> Option<(&Arc<AnalyzedScript>, &crate::analyzed::TableDeclaration)> {
        let script = self.scripts.get(&target.context_id())?;
        let declaration = script.table_declarations.get(target.index() as usize)?;
        Some((script, declaration))
    }

    /// Iterate over all registered scripts.
    pub fn iter_scripts(&self) -> impl Iterator<Item = &Arc<AnalyzedScript>> {
        self.scripts.values()
    }
}
