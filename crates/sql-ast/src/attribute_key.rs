//! Attribute keys: typed labels on parent-child edges.

use serde::{Deserialize, Serialize};

/// The label of a parent→child edge in the flat AST.
///
/// Keys index the [`AttributeIndex`](crate::AttributeIndex) scratch table,
/// so the enum is dense and `COUNT` bounds the domain. Discriminants are
/// wire-stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u16)]
pub enum AttributeKey {
    #[default]
    None = 0,

    // SELECT
    SqlSelectWithCtes = 1,
    SqlSelectTargets = 2,
    SqlSelectFrom = 3,
    SqlSelectWhere = 4,
    SqlSelectGroupBy = 5,
    SqlSelectHaving = 6,
    SqlSelectWindows = 7,
    SqlSelectOrderBy = 8,
    SqlSelectLimit = 9,
    SqlSelectOffset = 10,
    SqlSelectDistinct = 11,
    SqlSelectRowLocking = 12,

    // Set operations
    SqlCombineOperation = 16,
    SqlCombineModifier = 17,
    SqlCombineInput = 18,

    // Result targets
    SqlResultTargetValue = 24,
    SqlResultTargetAlias = 25,
    SqlResultTargetStar = 26,

    // Table references
    SqlTablerefName = 32,
    SqlTablerefAlias = 33,
    SqlTablerefColumnAliases = 34,
    SqlTablerefSubquery = 35,
    SqlTablerefLateral = 36,
    SqlTablerefSample = 37,

    // Joins
    SqlJoinType = 44,
    SqlJoinLeft = 45,
    SqlJoinRight = 46,
    SqlJoinOn = 47,
    SqlJoinUsing = 48,

    // Qualified names
    SqlQualifiedNameCatalog = 56,
    SqlQualifiedNameSchema = 57,
    SqlQualifiedNameRelation = 58,
    SqlQualifiedNameIndex = 59,

    // Indirection
    SqlIndirectionIndexValue = 64,
    SqlIndirectionIndexLowerBound = 65,
    SqlIndirectionIndexUpperBound = 66,

    // Column references
    SqlColumnRefPath = 72,

    // Expressions
    SqlExpressionOperator = 80,
    SqlExpressionArgs = 81,

    // CASE
    SqlCaseArgument = 88,
    SqlCaseClauses = 89,
    SqlCaseDefault = 90,
    SqlCaseClauseWhen = 91,
    SqlCaseClauseThen = 92,

    // CAST
    SqlCastValue = 96,
    SqlCastType = 97,

    // Subqueries
    SqlSubqueryQuantifier = 104,
    SqlSubqueryStatement = 105,

    // Function calls
    SqlFunctionName = 112,
    SqlFunctionKnown = 113,
    SqlFunctionArguments = 114,
    SqlFunctionDistinct = 115,
    SqlFunctionOver = 116,

    // Window definitions
    SqlWindowDefName = 124,
    SqlWindowDefPartitionBy = 125,
    SqlWindowDefOrderBy = 126,
    SqlWindowDefFrame = 127,

    // Window frames
    SqlWindowFrameMode = 132,
    SqlWindowFrameStart = 133,
    SqlWindowFrameEnd = 134,
    SqlWindowFrameExclusion = 135,
    SqlWindowBoundDirection = 136,
    SqlWindowBoundMode = 137,
    SqlWindowBoundValue = 138,

    // ORDER BY
    SqlOrderValue = 144,
    SqlOrderDirection = 145,
    SqlOrderNullRule = 146,

    // GROUP BY
    SqlGroupByItemType = 152,
    SqlGroupByItemArgs = 153,

    // INTERVAL
    SqlIntervalValue = 160,
    SqlIntervalType = 161,
    SqlIntervalPrecision = 162,

    // EXTRACT
    SqlExtractTarget = 168,
    SqlExtractValue = 169,

    // TRIM
    SqlTrimDirection = 176,
    SqlTrimCharacters = 177,
    SqlTrimInput = 178,

    // CREATE TABLE
    SqlCreateTableName = 184,
    SqlCreateTableTemp = 185,
    SqlCreateTableElements = 186,
    SqlCreateTableOnCommit = 187,
    SqlCreateTableIfNotExists = 188,

    // CREATE VIEW
    SqlCreateViewName = 196,
    SqlCreateViewColumns = 197,
    SqlCreateViewStatement = 198,
    SqlCreateViewTemp = 199,

    // Column definitions
    SqlColumnDefName = 204,
    SqlColumnDefType = 205,
    SqlColumnDefConstraints = 206,

    // Constraints
    SqlColumnConstraintType = 212,
    SqlColumnConstraintName = 213,
    SqlColumnConstraintValue = 214,
    SqlTableConstraintType = 220,
    SqlTableConstraintName = 221,
    SqlTableConstraintColumns = 222,
    SqlTableConstraintArgument = 223,

    // Types
    SqlGenericTypeName = 228,
    SqlGenericTypeModifiers = 229,
    SqlNumericTypeBase = 230,
    SqlNumericTypeModifiers = 231,
    SqlCharacterTypeBase = 232,
    SqlCharacterTypeLength = 233,

    // CTEs
    SqlCteName = 240,
    SqlCteColumns = 241,
    SqlCteStatement = 242,

    // Table samples
    SqlSampleCount = 248,
    SqlSampleUnit = 249,

    // Row locking
    SqlRowLockingStrength = 252,
    SqlRowLockingOf = 253,
    SqlRowLockingBlockBehavior = 254,
}

impl AttributeKey {
    /// Size of the attribute-key domain, the slot count of an
    /// [`AttributeIndex`](crate::AttributeIndex).
    pub const COUNT: usize = 256;

    /// The dense index of this key.
    #[inline]
    pub const fn index(self) -> usize {
        self as u16 as usize
    }
}
