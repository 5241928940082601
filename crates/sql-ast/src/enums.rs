//! Semantic enums carried by `ENUM_SQL_*` nodes.
//!
//! Each enum node stores its discriminant in the node payload; the
//! analyzer and editor frontends read the value back through `try_from`.
//! Discriminants are wire-stable.

use serde::{Deserialize, Serialize};

/// Error for an out-of-range enum discriminant in a node payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid discriminant {value} for {enum_name}")]
pub struct InvalidDiscriminant {
    pub enum_name: &'static str,
    pub value: u32,
}

macro_rules! sql_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl TryFrom<u32> for $name {
            type Error = InvalidDiscriminant;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(InvalidDiscriminant { enum_name: stringify!($name), value }),
                }
            }
        }

        impl From<$name> for u32 {
            #[inline]
            fn from(value: $name) -> u32 {
                value as u32
            }
        }
    };
}

sql_enum! {
    /// Binary and unary operators of n-ary expressions.
    ExpressionOperator {
        Plus = 0,
        Minus = 1,
        Multiply = 2,
        Divide = 3,
        Modulus = 4,
        Power = 5,
        Negate = 6,
        Equal = 7,
        NotEqual = 8,
        LessThan = 9,
        LessEqual = 10,
        GreaterThan = 11,
        GreaterEqual = 12,
        And = 13,
        Or = 14,
        Not = 15,
        Like = 16,
        NotLike = 17,
        Ilike = 18,
        NotIlike = 19,
        SimilarTo = 20,
        NotSimilarTo = 21,
        Between = 22,
        NotBetween = 23,
        In = 24,
        NotIn = 25,
        IsNull = 26,
        IsNotNull = 27,
        IsTrue = 28,
        IsFalse = 29,
        IsDistinctFrom = 30,
        IsNotDistinctFrom = 31,
        Concat = 32,
        Collate = 33,
        AtTimeZone = 34,
        Overlaps = 35,
        TypeCast = 36,
    }
}

sql_enum! {
    /// INNER/OUTER join classification; low bits flag the null-padded sides.
    JoinType {
        None = 0,
        Inner = 1,
        Left = 2,
        Right = 3,
        Full = 4,
        Cross = 5,
    }
}

sql_enum! {
    CombineOperation {
        Union = 0,
        Except = 1,
        Intersect = 2,
    }
}

sql_enum! {
    CombineModifier {
        None = 0,
        All = 1,
        Distinct = 2,
    }
}

sql_enum! {
    OrderDirection {
        Ascending = 0,
        Descending = 1,
    }
}

sql_enum! {
    OrderNullRule {
        NullsFirst = 0,
        NullsLast = 1,
    }
}

sql_enum! {
    IntervalType {
        Year = 0,
        Month = 1,
        Day = 2,
        Hour = 3,
        Minute = 4,
        Second = 5,
        YearToMonth = 6,
        DayToHour = 7,
        DayToMinute = 8,
        DayToSecond = 9,
        HourToMinute = 10,
        HourToSecond = 11,
        MinuteToSecond = 12,
    }
}

sql_enum! {
    ExtractTarget {
        Year = 0,
        Month = 1,
        Day = 2,
        Hour = 3,
        Minute = 4,
        Second = 5,
        Century = 6,
        Decade = 7,
        Dow = 8,
        Doy = 9,
        Epoch = 10,
        Millennium = 11,
        Microseconds = 12,
        Milliseconds = 13,
        Quarter = 14,
        Timezone = 15,
        Week = 16,
    }
}

sql_enum! {
    TrimDirection {
        Both = 0,
        Leading = 1,
        Trailing = 2,
    }
}

sql_enum! {
    WindowBoundDirection {
        Preceding = 0,
        Following = 1,
    }
}

sql_enum! {
    WindowBoundMode {
        UnboundedPreceding = 0,
        UnboundedFollowing = 1,
        CurrentRow = 2,
        Value = 3,
    }
}

sql_enum! {
    WindowExclusionMode {
        CurrentRow = 0,
        Group = 1,
        Ties = 2,
        NoOthers = 3,
    }
}

sql_enum! {
    WindowRangeMode {
        Range = 0,
        Rows = 1,
        Groups = 2,
    }
}

sql_enum! {
    SubqueryQuantifier {
        Exists = 0,
        NotExists = 1,
        Any = 2,
        All = 3,
        Some = 4,
    }
}

sql_enum! {
    TempType {
        None = 0,
        Local = 1,
        Global = 2,
        Unlogged = 3,
    }
}

sql_enum! {
    OnCommitOption {
        PreserveRows = 0,
        DeleteRows = 1,
        Drop = 2,
    }
}

sql_enum! {
    ColumnConstraint {
        NotNull = 0,
        Null = 1,
        Default = 2,
        PrimaryKey = 3,
        Unique = 4,
        Check = 5,
        References = 6,
        Collate = 7,
    }
}

sql_enum! {
    TableConstraint {
        PrimaryKey = 0,
        Unique = 1,
        Check = 2,
        ForeignKey = 3,
    }
}

sql_enum! {
    ConstraintAttribute {
        Deferrable = 0,
        NotDeferrable = 1,
        InitiallyDeferred = 2,
        InitiallyImmediate = 3,
    }
}

sql_enum! {
    KeyMatch {
        Full = 0,
        Partial = 1,
        Simple = 2,
    }
}

sql_enum! {
    KeyActionTrigger {
        Update = 0,
        Delete = 1,
    }
}

sql_enum! {
    KeyActionCommand {
        NoAction = 0,
        Restrict = 1,
        Cascade = 2,
        SetNull = 3,
        SetDefault = 4,
    }
}

sql_enum! {
    GroupByItemType {
        Expression = 0,
        Empty = 1,
        Cube = 2,
        Rollup = 3,
        GroupingSets = 4,
    }
}

sql_enum! {
    NumericType {
        Int2 = 0,
        Int4 = 1,
        Int8 = 2,
        Float4 = 3,
        Float8 = 4,
        Numeric = 5,
        Bool = 6,
    }
}

sql_enum! {
    CharacterType {
        BlankPaddedChar = 0,
        VaryingChar = 1,
    }
}

sql_enum! {
    ConstType {
        Null = 0,
        Integer = 1,
        Float = 2,
        String = 3,
        Bool = 4,
        Interval = 5,
    }
}

sql_enum! {
    SampleCountUnit {
        Rows = 0,
        Percent = 1,
    }
}

sql_enum! {
    RowLockingStrength {
        Update = 0,
        NoKeyUpdate = 1,
        Share = 2,
        KeyShare = 3,
    }
}

sql_enum! {
    RowLockingBlockBehavior {
        Wait = 0,
        Nowait = 1,
        SkipLocked = 2,
    }
}

sql_enum! {
    /// Functions the grammar recognizes by keyword.
    KnownFunction {
        Coalesce = 0,
        Greatest = 1,
        Least = 2,
        Nullif = 3,
        CurrentDate = 4,
        CurrentTime = 5,
        CurrentTimestamp = 6,
        CurrentCatalog = 7,
        CurrentSchema = 8,
        CurrentRole = 9,
        CurrentUser = 10,
        SessionUser = 11,
        Substring = 12,
        Position = 13,
        Overlay = 14,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_roundtrip() {
        let op = ExpressionOperator::NotBetween;
        let raw: u32 = op.into();
        assert_eq!(ExpressionOperator::try_from(raw), Ok(op));
        assert!(ExpressionOperator::try_from(9999).is_err());
    }
}
