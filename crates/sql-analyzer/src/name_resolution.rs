//! The name-resolution pass.

use rustc_hash::FxHashMap;
use sql_ast::enums::ExpressionOperator;
use sql_ast::{AttributeIndex, AttributeKey, ContextObjectId, Node, NodeType};
use sql_parser::ParsedScript;
use sql_scanner::ScannedScript;

use crate::analyzed::{
    ColumnDeclaration, ColumnReference, JoinEdge, QualifiedTableName, TableDeclaration,
    TableReference,
};
use crate::pass::Pass;

/// External table declarations visible during resolution, keyed by their
/// qualified name texts.
///
/// Text keys (not name ids) because every script owns a private dictionary:
/// the id of `"t"` differs between contexts, its spelling does not.
#[derive(Debug, Default)]
pub struct ExternalTables {
    /// table text -> (database text, schema text, declaration target)
    by_table: FxHashMap<String, Vec<(Option<String>, Option<String>, ContextObjectId)>>,
    /// declaration target -> ordered column texts
    columns: FxHashMap<ContextObjectId, Vec<String>>,
}

impl ExternalTables {
    /// Import the declarations of an analyzed script.
    pub fn register_script(&mut self, script: &crate::analyzed::AnalyzedScript) {
        for (table_index, declaration) in script.table_declarations.iter().enumerate() {
            let Some(table_text) = script.name_text(declaration.name.table) else {
                continue;
            };
            let target = ContextObjectId::new(script.context_id, table_index as u32);
            self.by_table.entry(table_text.to_owned()).or_default().push((
                script.name_text(declaration.name.database).map(str::to_owned),
                script.name_text(declaration.name.schema).map(str::to_owned),
                target,
            ));
            let columns = declaration
                .columns
                .iter()
                .filter_map(|column| script.name_text(column.name).map(str::to_owned))
                .collect();
            self.columns.insert(target, columns);
        }
    }

    /// Resolve a (possibly partially) qualified table. Qualification parts
    /// restrict the candidate set; a unique candidate wins.
    fn resolve(
        &self,
        database: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> Option<ContextObjectId> {
        let candidates = self.by_table.get(table)?;
        let mut found = None;
        for (candidate_db, candidate_schema, target) in candidates {
            if let Some(database) = database
                && candidate_db.as_deref() != Some(database)
            {
                continue;
            }
            if let Some(schema) = schema
                && candidate_schema.as_deref() != Some(schema)
            {
                continue;
            }
            if found.is_some() {
                return None;
            }
            found = Some(*target);
        }
        found
    }

    fn column_index(&self, target: ContextObjectId, column: &str) -> Option<u32> {
        self.columns
            .get(&target)?
            .iter()
            .position(|candidate| candidate == column)
            .map(|index| index as u32)
    }
}

/// Scope state tracked per unvisited node.
///
/// Only the in-scope partition is materialized: moving a reference out of
/// scope removes it from the state, the reference itself already lives in
/// the output vectors.
#[derive(Debug, Default, Clone)]
struct ScopeState {
    /// Indices into `table_references` visible in this scope
    table_refs: Vec<u32>,
    /// Indices into `column_references` not yet resolved in this scope
    column_refs: Vec<u32>,
}

impl ScopeState {
    fn merge(&mut self, other: ScopeState) {
        self.table_refs.extend(other.table_refs);
        self.column_refs.extend(other.column_refs);
    }
}

/// Collects table declarations, table references, and column references in
/// one post-order scan, binding them against local declarations and the
/// external tables.
pub struct NameResolutionPass<'a> {
    scanned: &'a ScannedScript,
    parsed: &'a ParsedScript,
    external: ExternalTables,
    attribute_index: AttributeIndex,
    database_default: Option<String>,
    schema_default: Option<String>,

    table_declarations: Vec<TableDeclaration>,
    table_references: Vec<TableReference>,
    column_references: Vec<ColumnReference>,
    join_edges: Vec<JoinEdge>,

    /// Scope states of visited nodes whose parents are still unvisited
    node_states: FxHashMap<u32, ScopeState>,
    /// Merged state of statement roots
    root_state: ScopeState,
}

impl<'a> NameResolutionPass<'a> {
    pub fn new(scanned: &'a ScannedScript, parsed: &'a ParsedScript) -> Self {
        Self {
            scanned,
            parsed,
            external: ExternalTables::default(),
            attribute_index: AttributeIndex::new(),
            database_default: None,
            schema_default: None,
            table_declarations: Vec::new(),
            table_references: Vec::new(),
            column_references: Vec::new(),
            join_edges: Vec::new(),
            node_states: FxHashMap::default(),
            root_state: ScopeState::default(),
        }
    }

    /// Set the database/schema defaults applied to unqualified names.
    pub fn with_defaults(
        mut self,
        database_default: Option<String>,
        schema_default: Option<String>,
    ) -> Self {
        self.database_default = database_default;
        self.schema_default = schema_default;
        self
    }

    /// Import an external script's tables for resolution.
    pub fn register_external_tables(&mut self, script: &crate::analyzed::AnalyzedScript) {
        self.external.register_script(script);
    }

    /// Move the collected vectors out after the pass has finished.
    pub fn export(
        self,
    ) -> (Vec<TableDeclaration>, Vec<TableReference>, Vec<ColumnReference>, Vec<JoinEdge>) {
        (self.table_declarations, self.table_references, self.column_references, self.join_edges)
    }

    fn own_context(&self) -> u32 {
        self.parsed.context_id
    }

    /// Name id of a `Name` leaf as a context object id.
    fn name_id_of(&self, node: &Node) -> ContextObjectId {
        debug_assert_eq!(node.node_type, NodeType::Name);
        ContextObjectId::new(self.own_context(), node.value())
    }

    fn name_text(&self, id: ContextObjectId) -> Option<&str> {
        if id.is_null() {
            return None;
        }
        self.scanned.names.text(id.index())
    }

    /// Read a qualified-name object into name ids.
    fn read_qualified_name(&mut self, node_id: u32) -> QualifiedTableName {
        let node = &self.parsed.nodes[node_id as usize];
        let guard = self.attribute_index.load(&self.parsed.nodes, node.children_range());
        let mut name = QualifiedTableName::default();
        if let Some(catalog) = guard.get(AttributeKey::SqlQualifiedNameCatalog) {
            name.database = ContextObjectId::new(self.parsed.context_id, catalog.value());
        }
        if let Some(schema) = guard.get(AttributeKey::SqlQualifiedNameSchema) {
            name.schema = ContextObjectId::new(self.parsed.context_id, schema.value());
        }
        if let Some(relation) = guard.get(AttributeKey::SqlQualifiedNameRelation) {
            name.table = ContextObjectId::new(self.parsed.context_id, relation.value());
        }
        name
    }

    /// CREATE TABLE / CREATE VIEW: materialize a table declaration.
    fn visit_create(&mut self, node_id: u32, node: &Node) {
        let (name_key, elements_key, is_view) = match node.node_type {
            NodeType::ObjectSqlCreateTable => (
                AttributeKey::SqlCreateTableName,
                AttributeKey::SqlCreateTableElements,
                false,
            ),
            _ => (AttributeKey::SqlCreateViewName, AttributeKey::SqlCreateViewColumns, true),
        };
        let guard = self.attribute_index.load(&self.parsed.nodes, node.children_range());
        let name_node_id = guard.node_id(name_key);
        let elements_node_id = guard.node_id(elements_key);
        drop(guard);

        let Some(name_node_id) = name_node_id else {
            return;
        };
        let name = self.read_qualified_name(name_node_id);

        let mut columns = Vec::new();
        if let Some(elements_node_id) = elements_node_id {
            let elements = &self.parsed.nodes[elements_node_id as usize];
            for child_id in elements.children_range() {
                let child = &self.parsed.nodes[child_id];
                let column_name_node = if is_view {
                    // View column lists are plain name arrays.
                    (child.node_type == NodeType::Name).then_some(child)
                } else if child.node_type == NodeType::ObjectSqlColumnDef {
                    let guard =
                        self.attribute_index.load(&self.parsed.nodes, child.children_range());
                    let name_node = guard.get(AttributeKey::SqlColumnDefName);
                    name_node
                } else {
                    None
                };
                if let Some(column_name_node) = column_name_node {
                    let column_index = columns.len() as u32;
                    columns.push(ColumnDeclaration {
                        node_id: child_id as u32,
                        name: self.name_id_of(column_name_node),
                        column_index,
                    });
                }
            }
        }
        self.table_declarations.push(TableDeclaration { node_id, name, columns });
    }

    /// A table reference: record it and resolve against local declarations
    /// first, then the external tables.
    fn visit_table_ref(&mut self, node_id: u32, node: &Node, state: &mut ScopeState) {
        let guard = self.attribute_index.load(&self.parsed.nodes, node.children_range());
        let name_node_id = guard.node_id(AttributeKey::SqlTablerefName);
        let alias_value = guard.get(AttributeKey::SqlTablerefAlias).map(|n| n.value());
        drop(guard);
        let alias =
            alias_value.map(|value| ContextObjectId::new(self.parsed.context_id, value));
        let Some(name_node_id) = name_node_id else {
            // Derived table without a relation name.
            return;
        };
        let name = self.read_qualified_name(name_node_id);
        let target = self.resolve_table(&name);
        let reference_index = self.table_references.len() as u32;
        self.table_references.push(TableReference { node_id, name, alias, target });
        state.table_refs.push(reference_index);
    }

    fn resolve_table(&self, name: &QualifiedTableName) -> Option<ContextObjectId> {
        let table_text = self.name_text(name.table)?;
        let schema_text =
            self.name_text(name.schema).or(self.schema_default.as_deref());
        let database_text =
            self.name_text(name.database).or(self.database_default.as_deref());

        // Local declarations shadow the catalog.
        for (index, declaration) in self.table_declarations.iter().enumerate() {
            if self.name_text(declaration.name.table) != Some(table_text) {
                continue;
            }
            if !name.schema.is_null()
                && self.name_text(declaration.name.schema) != self.name_text(name.schema)
            {
                continue;
            }
            if !name.database.is_null()
                && self.name_text(declaration.name.database) != self.name_text(name.database)
            {
                continue;
            }
            return Some(ContextObjectId::new(self.own_context(), index as u32));
        }

        self.external
            .resolve(database_text, schema_text, table_text)
            .or_else(|| {
                // Fully unqualified names fall back to an unqualified
                // sweep; a unique spelling match wins.
                if name.schema.is_null() && name.database.is_null() {
                    self.external.resolve(None, None, table_text)
                } else {
                    None
                }
            })
    }

    /// A column reference: record it; binding is deferred to the enclosing
    /// scope boundary because the alias may appear later in that scope.
    fn visit_column_ref(&mut self, node_id: u32, node: &Node, state: &mut ScopeState) {
        let path_node = node
            .children_range()
            .map(|child_id| &self.parsed.nodes[child_id])
            .find(|child| child.attribute_key == AttributeKey::SqlColumnRefPath);
        let Some(path_node) = path_node else {
            return;
        };
        let parts: Vec<&Node> = path_node
            .children_range()
            .map(|child_id| &self.parsed.nodes[child_id])
            .filter(|child| child.node_type == NodeType::Name)
            .collect();
        let (table_alias, column_name) = match parts.as_slice() {
            [] => return,
            [column] => (None, self.name_id_of(column)),
            [.., alias, column] => (Some(self.name_id_of(alias)), self.name_id_of(column)),
        };
        let reference_index = self.column_references.len() as u32;
        self.column_references.push(ColumnReference {
            node_id,
            table_alias,
            column_name,
            target: None,
        });
        state.column_refs.push(reference_index);
    }

    /// A join-edge candidate: `a.x = b.y` over two column references.
    fn visit_nary(&mut self, node_id: u32, node: &Node) {
        let guard = self.attribute_index.load(&self.parsed.nodes, node.children_range());
        let operator = guard
            .get(AttributeKey::SqlExpressionOperator)
            .and_then(|op| ExpressionOperator::try_from(op.value()).ok());
        let args_node = guard.get(AttributeKey::SqlExpressionArgs);
        drop(guard);
        if operator != Some(ExpressionOperator::Equal) {
            return;
        }
        let Some(args_node) = args_node else {
            return;
        };
        let args: Vec<usize> = args_node.children_range().collect();
        if let [left, right] = args.as_slice()
            && self.parsed.nodes[*left].node_type == NodeType::ObjectSqlColumnRef
            && self.parsed.nodes[*right].node_type == NodeType::ObjectSqlColumnRef
        {
            self.join_edges.push(JoinEdge {
                node_id,
                left_node: *left as u32,
                right_node: *right as u32,
            });
        }
    }

    /// Scope boundary: bind in-scope column references against in-scope
    /// table references, then take the table references out of scope.
    fn close_scope(&mut self, state: &mut ScopeState) {
        let mut still_open = Vec::new();
        for &column_index in &state.column_refs {
            let resolved = self.resolve_column(column_index, &state.table_refs);
            match resolved {
                ColumnResolution::Resolved(target) => {
                    self.column_references[column_index as usize].target = Some(target);
                }
                ColumnResolution::Ambiguous => {
                    // Decided here: the reference stays unresolved and does
                    // not escape to outer scopes.
                }
                ColumnResolution::Open => still_open.push(column_index),
            }
        }
        state.column_refs = still_open;
        state.table_refs.clear();
    }

    fn resolve_column(
        &self,
        column_index: u32,
        table_refs: &[u32],
    ) -> ColumnResolution {
        let column = &self.column_references[column_index as usize];
        let Some(column_text) = self.name_text(column.column_name) else {
            return ColumnResolution::Open;
        };

        // Alias-qualified: exact alias match first, relation name second.
        if let Some(alias) = column.table_alias {
            let alias_text = self.name_text(alias);
            for &table_index in table_refs {
                let table = &self.table_references[table_index as usize];
                let matches = match table.alias {
                    Some(table_alias) => self.name_text(table_alias) == alias_text,
                    None => self.name_text(table.name.table) == alias_text,
                };
                if !matches {
                    continue;
                }
                let Some(target) = table.target else {
                    return ColumnResolution::Open;
                };
                return match self.target_column_index(target, column_text) {
                    Some(index) => ColumnResolution::Resolved((target, index)),
                    None => ColumnResolution::Open,
                };
            }
            return ColumnResolution::Open;
        }

        // Unqualified: a unique candidate across the in-scope tables wins.
        let mut found = None;
        for &table_index in table_refs {
            let table = &self.table_references[table_index as usize];
            let Some(target) = table.target else {
                continue;
            };
            if let Some(index) = self.target_column_index(target, column_text) {
                if found.is_some() {
                    return ColumnResolution::Ambiguous;
                }
                found = Some((target, index));
            }
        }
        match found {
            Some(target) => ColumnResolution::Resolved(target),
            None => ColumnResolution::Open,
        }
    }

    /// Column position within a resolution target, local or external.
    fn target_column_index(&self, target: ContextObjectId, column: &str) -> Option<u32> {
        if target.context_id() == self.own_context() {
            let declaration = self.table_declarations.get(target.index() as usize)?;
            return declaration
                .columns
                .iter()
                .find(|candidate| self.name_text(candidate.name) == Some(column))
                .map(|candidate| candidate.column_index);
        }
        self.external.column_index(target, column)
    }
}

enum ColumnResolution {
    Resolved((ContextObjectId, u32)),
    Ambiguous,
    Open,
}

impl Pass for NameResolutionPass<'_> {
    fn prepare(&mut self) {
        self.node_states.clear();
        self.root_state = ScopeState::default();
    }

    fn visit(&mut self, offset: usize, nodes: &[Node]) {
        for (index, node) in nodes.iter().enumerate() {
            let node_id = (offset + index) as u32;

            // All children were visited before this node; collect their
            // states.
            let mut state = ScopeState::default();
            for child_id in node.children_range() {
                if let Some(child_state) = self.node_states.remove(&(child_id as u32)) {
                    state.merge(child_state);
                }
            }

            match node.node_type {
                NodeType::ObjectSqlCreateTable | NodeType::ObjectSqlCreateView => {
                    self.visit_create(node_id, node);
                }
                NodeType::ObjectSqlTableRef => {
                    self.visit_table_ref(node_id, node, &mut state);
                }
                NodeType::ObjectSqlColumnRef => {
                    self.visit_column_ref(node_id, node, &mut state);
                }
                NodeType::ObjectSqlNaryExpression => {
                    self.visit_nary(node_id, node);
                }
                NodeType::ObjectSqlSelect | NodeType::ObjectSqlSubquery => {
                    self.close_scope(&mut state);
                }
                _ => {}
            }

            if node.has_parent() {
                if !state.table_refs.is_empty() || !state.column_refs.is_empty() {
                    self.node_states.insert(node_id, state);
                }
            } else {
                self.root_state.merge(state);
            }
        }
    }

    fn finish(&mut self) {
        // Bind whatever survived to the statement roots; anything still
        // open afterwards stays a null target for the editor to render.
        let mut root_state = std::mem::take(&mut self.root_state);
        self.close_scope(&mut root_state);
        self.node_states.clear();
        tracing::debug!(
            tables = self.table_declarations.len(),
            table_refs = self.table_references.len(),
            column_refs = self.column_references.len(),
            join_edges = self.join_edges.len(),
            "name resolution finished"
        );
    }
}
