//! The reduction context: node emission and the parsed artifact.

use serde::{Deserialize, Serialize};
use sql_arena::ChunkBuffer;
use sql_ast::{AttributeKey, Location, NO_PARENT, Node, NodeType, Statement, StatementType};

/// A reduced node that has not been appended to the buffer yet.
///
/// Reductions build subtrees bottom-up: when an object or array node is
/// reduced, its direct children are appended to the buffer as one
/// contiguous block and the new node keeps floating as a value until its
/// own parent is reduced (or until the statement closes over it). This is
/// what yields the post-order layout with contiguous child ranges.
#[derive(Debug, Clone, Copy)]
pub struct NodeValue(Node);

impl NodeValue {
    #[inline]
    pub fn location(&self) -> Location {
        self.0.location
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.0.node_type
    }
}

/// The reduction context of one parser run.
#[derive(Debug, Default)]
pub struct ParseContext {
    /// The node buffer
    nodes: ChunkBuffer<Node>,
    /// The statements in source order
    statements: Vec<Statement>,
    /// The parse errors
    errors: Vec<(Location, String)>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self { nodes: ChunkBuffer::new(), statements: Vec::new(), errors: Vec::new() }
    }

    /// Number of nodes appended so far.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_error(&mut self, location: Location, message: impl Into<String>) {
        self.errors.push((location, message.into()));
    }

    /// A leaf carrying a name-dictionary id.
    pub fn name(&self, location: Location, name_id: u32) -> NodeValue {
        NodeValue(Node::leaf(location, NodeType::Name, name_id))
    }

    /// A literal leaf. The payload is unused except for booleans.
    pub fn literal(&self, location: Location, node_type: NodeType, value: u32) -> NodeValue {
        debug_assert!(!node_type.has_children());
        NodeValue(Node::leaf(location, node_type, value))
    }

    /// An enum carrier leaf.
    pub fn enum_value(
        &self,
        location: Location,
        node_type: NodeType,
        discriminant: impl Into<u32>,
    ) -> NodeValue {
        debug_assert!(node_type.is_enum());
        NodeValue(Node::leaf(location, node_type, discriminant.into()))
    }

    /// Append `child` to the buffer, patching the parent links of the
    /// child's own children now that their parent index is known.
    fn append_child(&mut self, mut child: Node, key: AttributeKey) -> u32 {
        child.attribute_key = key;
        let range = child.children_range();
        let index = self.nodes.append(child) as u32;
        for grandchild in range {
            self.nodes[grandchild].parent = index;
        }
        index
    }

    /// Reduce an object node over keyed children. `None` children are
    /// dropped, so optional attributes can be passed unconditionally.
    pub fn object(
        &mut self,
        location: Location,
        node_type: NodeType,
        children: Vec<(AttributeKey, Option<NodeValue>)>,
    ) -> NodeValue {
        debug_assert!(node_type.is_object());
        let children_begin = self.nodes.len() as u32;
        let mut count = 0u32;
        for (key, child) in children {
            if let Some(NodeValue(node)) = child {
                self.append_child(node, key);
                count += 1;
            }
        }
        NodeValue(Node::inner(location, node_type, children_begin, count))
    }

    /// Reduce an array node over key-less children.
    pub fn array(&mut self, location: Location, children: Vec<NodeValue>) -> NodeValue {
        let children_begin = self.nodes.len() as u32;
        let count = children.len() as u32;
        for NodeValue(node) in children {
            self.append_child(node, AttributeKey::None);
        }
        NodeValue(Node::inner(location, NodeType::Array, children_begin, count))
    }

    /// Close a statement over its root value. The root lands last, so it is
    /// the highest-index node of its subtree.
    pub fn finish_statement(&mut self, root: NodeValue, statement_type: StatementType) {
        let NodeValue(node) = root;
        let root_index = self.append_child(node, AttributeKey::None);
        debug_assert_eq!(self.nodes[root_index as usize].parent, NO_PARENT);
        self.statements.push(Statement { root_node: root_index, statement_type });
    }

    /// Flatten into the parsed artifact.
    pub fn finish(self, context_id: u32, text_version: u64) -> ParsedScript {
        ParsedScript {
            context_id,
            text_version,
            nodes: self.nodes.flatten(),
            statements: self.statements,
            errors: self.errors,
        }
    }
}

/// The parser's output artifact.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedScript {
    /// The owning script context
    pub context_id: u32,
    /// The parsed text version
    pub text_version: u64,
    /// The flattened post-order node buffer
    pub nodes: Vec<Node>,
    /// The statements in source order
    pub statements: Vec<Statement>,
    /// The parse errors
    pub errors: Vec<(Location, String)>,
}

impl ParsedScript {
    /// Locate the innermost node covering a byte offset, together with its
    /// owning statement.
    ///
    /// Statements are walked in source order; within the owning statement
    /// the subtree is descended child-by-child, picking the covering child
    /// with the smallest length on overlap.
    pub fn find_node_at_offset(&self, offset: u32) -> Option<(usize, usize)> {
        let (statement_id, statement) = self
            .statements
            .iter()
            .enumerate()
            .find(|(_, s)| self.nodes.get(s.root_node as usize).is_some_and(|n| n.location.contains(offset)))?;
        let mut node_id = statement.root_node as usize;
        loop {
            let node = &self.nodes[node_id];
            let mut best: Option<(usize, u32)> = None;
            for child_id in node.children_range() {
                let child = &self.nodes[child_id];
                if !child.location.contains(offset) {
                    continue;
                }
                let better = match best {
                    Some((_, best_len)) => child.location.length < best_len,
                    None => true,
                };
                if better {
                    best = Some((child_id, child.location.length));
                }
            }
            match best {
                Some((child_id, _)) => node_id = child_id,
                None => break,
            }
        }
        Some((statement_id, node_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn object_reduction_appends_children_contiguously() {
        let mut ctx = ParseContext::new();
        let a = ctx.name(Location::new(0, 1), 0);
        let b = ctx.name(Location::new(2, 1), 1);
        let object = ctx.object(
            Location::new(0, 3),
            NodeType::ObjectSqlTableRef,
            vec![
                (AttributeKey::SqlTablerefName, Some(a)),
                (AttributeKey::SqlTablerefAlias, Some(b)),
                (AttributeKey::SqlTablerefSample, None),
            ],
        );
        ctx.finish_statement(object, StatementType::Select);
        let parsed = ctx.finish(1, 0);

        assert_eq!(parsed.nodes.len(), 3);
        assert_eq!(parsed.nodes[0].attribute_key, AttributeKey::SqlTablerefName);
        assert_eq!(parsed.nodes[1].attribute_key, AttributeKey::SqlTablerefAlias);
        assert_eq!(parsed.nodes[2].children_range(), 0..2);
        // Children point at the later parent.
        assert_eq!(parsed.nodes[0].parent, 2);
        assert_eq!(parsed.nodes[1].parent, 2);
        assert_eq!(parsed.statements[0].root_node, 2);
    }

    #[test]
    fn post_order_invariants_hold_for_nested_reductions() {
        let mut ctx = ParseContext::new();
        let inner_name = ctx.name(Location::new(0, 1), 0);
        let inner = ctx.object(
            Location::new(0, 1),
            NodeType::ObjectSqlQualifiedName,
            vec![(AttributeKey::SqlQualifiedNameRelation, Some(inner_name))],
        );
        let alias = ctx.name(Location::new(2, 1), 1);
        let outer = ctx.object(
            Location::new(0, 3),
            NodeType::ObjectSqlTableRef,
            vec![
                (AttributeKey::SqlTablerefName, Some(inner)),
                (AttributeKey::SqlTablerefAlias, Some(alias)),
            ],
        );
        ctx.finish_statement(outer, StatementType::Select);
        let parsed = ctx.finish(1, 0);

        for (index, node) in parsed.nodes.iter().enumerate() {
            if node.parent != NO_PARENT {
                assert!((node.parent as usize) > index, "parent index must be greater");
            }
            let range = node.children_range();
            assert!(range.end <= index || range.is_empty(), "children precede the node");
        }
    }
}
