//! Flat AST model for the SQL script engine.
//!
//! The AST is not a pointer tree: it is a single post-order buffer of
//! fixed-size [`Node`] records with index-based parent/child links. The
//! layout is what makes morseled analysis passes and cheap serialization
//! work:
//!
//! - children of an object/array node form a contiguous range strictly
//!   before the node itself,
//! - every non-root node's parent index is greater than its own index,
//! - a left-to-right scan of the buffer is a DFS post-order traversal.
//!
//! [`AttributeIndex`] provides O(1) child lookup by [`AttributeKey`] while
//! a pass is positioned on a node; its guard clears the scratch slots on
//! drop. [`ContextObjectId`] carries cross-script identities.

mod attribute_index;
mod attribute_key;
mod context;
pub mod enums;
mod location;
mod name_tags;
mod node;
mod node_type;

pub use attribute_index::{AccessGuard, AttributeIndex};
pub use attribute_key::AttributeKey;
pub use context::{ContextObjectId, KEYWORD_CONTEXT_ID, NULL_OBJECT_INDEX};
pub use location::Location;
pub use name_tags::{NameTag, NameTags};
pub use node::{NO_PARENT, Node, Statement, StatementType};
pub use node_type::NodeType;
