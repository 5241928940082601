//! Node type tags of the flat AST.

use serde::{Deserialize, Serialize};

/// The type of a flat AST node.
///
/// Discriminants are wire-stable: the packed node buffer stores them
/// numerically and editor frontends switch on the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    #[default]
    None = 0,

    // Leaves
    LiteralNull = 1,
    LiteralBool = 2,
    LiteralInteger = 3,
    LiteralFloat = 4,
    LiteralString = 5,
    LiteralInterval = 6,
    /// A name-dictionary reference; payload is the dictionary id
    Name = 7,
    /// A contiguous list of children sharing one attribute key
    Array = 8,
    /// A named or positional statement parameter
    Parameter = 9,

    // Enum carriers; payload is the enum discriminant
    EnumSqlConstType = 16,
    EnumSqlCharacterType = 17,
    EnumSqlColumnConstraint = 18,
    EnumSqlCombineModifier = 19,
    EnumSqlCombineOperation = 20,
    EnumSqlConstraintAttribute = 21,
    EnumSqlExpressionOperator = 22,
    EnumSqlExtractTarget = 23,
    EnumSqlGroupByItemType = 24,
    EnumSqlIntervalType = 25,
    EnumSqlJoinType = 26,
    EnumSqlKeyActionCommand = 27,
    EnumSqlKeyActionTrigger = 28,
    EnumSqlKeyMatch = 29,
    EnumSqlKnownFunction = 30,
    EnumSqlNumericType = 31,
    EnumSqlOnCommitOption = 32,
    EnumSqlOrderDirection = 33,
    EnumSqlOrderNullRule = 34,
    EnumSqlRowLockingBlockBehavior = 35,
    EnumSqlRowLockingStrength = 36,
    EnumSqlSampleUnitType = 37,
    EnumSqlSubqueryQuantifier = 38,
    EnumSqlTableConstraint = 39,
    EnumSqlTempType = 40,
    EnumSqlTrimTarget = 41,
    EnumSqlWindowBoundDirection = 42,
    EnumSqlWindowBoundMode = 43,
    EnumSqlWindowExclusionMode = 44,
    EnumSqlWindowRangeMode = 45,

    // Objects; payload is the children range
    ObjectSqlSelect = 64,
    ObjectSqlCombine = 65,
    ObjectSqlResultTarget = 66,
    ObjectSqlTableRef = 67,
    ObjectSqlJoinedTable = 68,
    ObjectSqlQualifiedName = 69,
    ObjectSqlIndirectionIndex = 70,
    ObjectSqlColumnRef = 71,
    ObjectSqlNaryExpression = 72,
    ObjectSqlCase = 73,
    ObjectSqlCaseClause = 74,
    ObjectSqlCast = 75,
    ObjectSqlSubquery = 76,
    ObjectSqlFunctionCall = 77,
    ObjectSqlWindowDef = 78,
    ObjectSqlWindowFrame = 79,
    ObjectSqlWindowBound = 80,
    ObjectSqlOrderSpec = 81,
    ObjectSqlGroupByItem = 82,
    ObjectSqlInterval = 83,
    ObjectSqlExtract = 84,
    ObjectSqlTrim = 85,
    ObjectSqlCreateTable = 86,
    ObjectSqlCreateView = 87,
    ObjectSqlColumnDef = 88,
    ObjectSqlColumnConstraintSpec = 89,
    ObjectSqlTableConstraintSpec = 90,
    ObjectSqlGenericType = 91,
    ObjectSqlNumericTypeSpec = 92,
    ObjectSqlCharacterTypeSpec = 93,
    ObjectSqlCte = 94,
    ObjectSqlSample = 95,
    ObjectSqlRowLocking = 96,
}

impl NodeType {
    /// True for object nodes whose payload is a children range.
    #[inline]
    pub fn is_object(&self) -> bool {
        (*self as u8) >= NodeType::ObjectSqlSelect as u8
    }

    /// True for arrays (children range payload, key-less children).
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, NodeType::Array)
    }

    /// True for enum carriers (discriminant payload).
    #[inline]
    pub fn is_enum(&self) -> bool {
        let v = *self as u8;
        (NodeType::EnumSqlConstType as u8..=NodeType::EnumSqlWindowRangeMode as u8).contains(&v)
    }

    /// True for nodes whose payload addresses the children buffer.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.is_object() || self.is_array()
    }
}
