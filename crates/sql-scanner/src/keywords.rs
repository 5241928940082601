//! The SQL keyword table.
//!
//! One static table drives three consumers: the scanner folds identifiers
//! to lowercase and classifies them here, the parser branches on the
//! [`Keyword`] of a token, and the completion trie is built from the key
//! set. Keywords without grammar significance map to
//! [`Keyword::Unreserved`] and behave like identifiers in the parser.

use phf::phf_map;

/// Grammar-significant keywords, plus [`Keyword::Unreserved`] for the rest
/// of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Unreserved,
    Action,
    All,
    And,
    Any,
    Array,
    As,
    Asc,
    Asymmetric,
    At,
    Between,
    Bigint,
    Bit,
    Boolean,
    Both,
    By,
    Cascade,
    Case,
    Cast,
    Char,
    Character,
    Check,
    Coalesce,
    Collate,
    Column,
    Commit,
    Constraint,
    Create,
    Cross,
    Cube,
    Current,
    CurrentCatalog,
    CurrentDate,
    CurrentRole,
    CurrentSchema,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Day,
    Dec,
    Decimal,
    Default,
    Deferrable,
    Deferred,
    Delete,
    Desc,
    Distinct,
    Double,
    Drop,
    Else,
    End,
    Escape,
    Except,
    Exclude,
    Exists,
    Extract,
    False,
    Filter,
    First,
    Float,
    Following,
    For,
    Foreign,
    From,
    Full,
    Global,
    Greatest,
    Group,
    Grouping,
    Groups,
    Having,
    Hour,
    If,
    Ilike,
    Immediate,
    In,
    Initially,
    Inner,
    Int,
    Integer,
    Intersect,
    Interval,
    Into,
    Is,
    Isnull,
    Join,
    Key,
    Last,
    Lateral,
    Leading,
    Least,
    Left,
    Like,
    Limit,
    Local,
    Locked,
    Match,
    Minute,
    Month,
    National,
    Natural,
    Nchar,
    No,
    Not,
    Nothing,
    Notnull,
    Nowait,
    Null,
    Nullif,
    Nulls,
    Numeric,
    Of,
    Offset,
    On,
    Only,
    Or,
    Order,
    Others,
    Outer,
    Over,
    Overlay,
    Partial,
    Partition,
    Position,
    Preceding,
    Precision,
    Preserve,
    Primary,
    Range,
    Real,
    Recursive,
    References,
    Repeatable,
    Restrict,
    Right,
    Rollup,
    Row,
    Rows,
    Second,
    Select,
    SessionUser,
    Set,
    Sets,
    Share,
    Similar,
    Simple,
    Skip,
    Smallint,
    Some,
    Substring,
    Symmetric,
    Table,
    Tablesample,
    Temp,
    Temporary,
    Text,
    Then,
    Ties,
    Time,
    Timestamp,
    To,
    Trailing,
    Trim,
    True,
    Unbounded,
    Union,
    Unique,
    Unlogged,
    Update,
    User,
    Using,
    Values,
    Varchar,
    Varying,
    View,
    When,
    Where,
    Window,
    With,
    Year,
    Zone,
}

/// Every keyword the scanner recognizes, lowercase.
pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "abort" => Keyword::Unreserved,
    "absent" => Keyword::Unreserved,
    "absolute" => Keyword::Unreserved,
    "access" => Keyword::Unreserved,
    "action" => Keyword::Action,
    "add" => Keyword::Unreserved,
    "admin" => Keyword::Unreserved,
    "after" => Keyword::Unreserved,
    "aggregate" => Keyword::Unreserved,
    "all" => Keyword::All,
    "also" => Keyword::Unreserved,
    "alter" => Keyword::Unreserved,
    "always" => Keyword::Unreserved,
    "analyse" => Keyword::Unreserved,
    "analyze" => Keyword::Unreserved,
    "and" => Keyword::And,
    "any" => Keyword::Any,
    "array" => Keyword::Array,
    "as" => Keyword::As,
    "asc" => Keyword::Asc,
    "asensitive" => Keyword::Unreserved,
    "asymmetric" => Keyword::Asymmetric,
    "at" => Keyword::At,
    "atomic" => Keyword::Unreserved,
    "attach" => Keyword::Unreserved,
    "attribute" => Keyword::Unreserved,
    "authorization" => Keyword::Unreserved,
    "backward" => Keyword::Unreserved,
    "before" => Keyword::Unreserved,
    "begin" => Keyword::Unreserved,
    "between" => Keyword::Between,
    "bigint" => Keyword::Bigint,
    "binary" => Keyword::Unreserved,
    "bit" => Keyword::Bit,
    "boolean" => Keyword::Boolean,
    "both" => Keyword::Both,
    "breadth" => Keyword::Unreserved,
    "by" => Keyword::By,
    "cache" => Keyword::Unreserved,
    "call" => Keyword::Unreserved,
    "called" => Keyword::Unreserved,
    "cascade" => Keyword::Cascade,
    "cascaded" => Keyword::Unreserved,
    "case" => Keyword::Case,
    "cast" => Keyword::Cast,
    "catalog" => Keyword::Unreserved,
    "chain" => Keyword::Unreserved,
    "char" => Keyword::Char,
    "character" => Keyword::Character,
    "characteristics" => Keyword::Unreserved,
    "check" => Keyword::Check,
    "checkpoint" => Keyword::Unreserved,
    "class" => Keyword::Unreserved,
    "close" => Keyword::Unreserved,
    "cluster" => Keyword::Unreserved,
    "coalesce" => Keyword::Coalesce,
    "collate" => Keyword::Collate,
    "collation" => Keyword::Unreserved,
    "column" => Keyword::Column,
    "columns" => Keyword::Unreserved,
    "comment" => Keyword::Unreserved,
    "comments" => Keyword::Unreserved,
    "commit" => Keyword::Commit,
    "committed" => Keyword::Unreserved,
    "compression" => Keyword::Unreserved,
    "concurrently" => Keyword::Unreserved,
    "configuration" => Keyword::Unreserved,
    "conflict" => Keyword::Unreserved,
    "connection" => Keyword::Unreserved,
    "constraint" => Keyword::Constraint,
    "constraints" => Keyword::Unreserved,
    "content" => Keyword::Unreserved,
    "continue" => Keyword::Unreserved,
    "conversion" => Keyword::Unreserved,
    "copy" => Keyword::Unreserved,
    "cost" => Keyword::Unreserved,
    "create" => Keyword::Create,
    "cross" => Keyword::Cross,
    "csv" => Keyword::Unreserved,
    "cube" => Keyword::Cube,
    "current" => Keyword::Current,
    "current_catalog" => Keyword::CurrentCatalog,
    "current_date" => Keyword::CurrentDate,
    "current_role" => Keyword::CurrentRole,
    "current_schema" => Keyword::CurrentSchema,
    "current_time" => Keyword::CurrentTime,
    "current_timestamp" => Keyword::CurrentTimestamp,
    "current_user" => Keyword::CurrentUser,
    "cursor" => Keyword::Unreserved,
    "cycle" => Keyword::Unreserved,
    "data" => Keyword::Unreserved,
    "database" => Keyword::Unreserved,
    "day" => Keyword::Day,
    "deallocate" => Keyword::Unreserved,
    "dec" => Keyword::Dec,
    "decimal" => Keyword::Decimal,
    "declare" => Keyword::Unreserved,
    "default" => Keyword::Default,
    "defaults" => Keyword::Unreserved,
    "deferrable" => Keyword::Deferrable,
    "deferred" => Keyword::Deferred,
    "definer" => Keyword::Unreserved,
    "delete" => Keyword::Delete,
    "delimiter" => Keyword::Unreserved,
    "delimiters" => Keyword::Unreserved,
    "depends" => Keyword::Unreserved,
    "depth" => Keyword::Unreserved,
    "desc" => Keyword::Desc,
    "detach" => Keyword::Unreserved,
    "dictionary" => Keyword::Unreserved,
    "disable" => Keyword::Unreserved,
    "discard" => Keyword::Unreserved,
    "distinct" => Keyword::Distinct,
    "do" => Keyword::Unreserved,
    "document" => Keyword::Unreserved,
    "domain" => Keyword::Unreserved,
    "double" => Keyword::Double,
    "drop" => Keyword::Drop,
    "each" => Keyword::Unreserved,
    "else" => Keyword::Else,
    "enable" => Keyword::Unreserved,
    "encoding" => Keyword::Unreserved,
    "encrypted" => Keyword::Unreserved,
    "end" => Keyword::End,
    "enum" => Keyword::Unreserved,
    "escape" => Keyword::Escape,
    "event" => Keyword::Unreserved,
    "except" => Keyword::Except,
    "exclude" => Keyword::Exclude,
    "excluding" => Keyword::Unreserved,
    "exclusive" => Keyword::Unreserved,
    "execute" => Keyword::Unreserved,
    "exists" => Keyword::Exists,
    "explain" => Keyword::Unreserved,
    "expression" => Keyword::Unreserved,
    "extension" => Keyword::Unreserved,
    "external" => Keyword::Unreserved,
    "extract" => Keyword::Extract,
    "false" => Keyword::False,
    "family" => Keyword::Unreserved,
    "fetch" => Keyword::Unreserved,
    "filter" => Keyword::Filter,
    "finalize" => Keyword::Unreserved,
    "first" => Keyword::First,
    "float" => Keyword::Float,
    "following" => Keyword::Following,
    "for" => Keyword::For,
    "force" => Keyword::Unreserved,
    "foreign" => Keyword::Foreign,
    "forward" => Keyword::Unreserved,
    "freeze" => Keyword::Unreserved,
    "from" => Keyword::From,
    "full" => Keyword::Full,
    "function" => Keyword::Unreserved,
    "functions" => Keyword::Unreserved,
    "generated" => Keyword::Unreserved,
    "global" => Keyword::Global,
    "grant" => Keyword::Unreserved,
    "granted" => Keyword::Unreserved,
    "greatest" => Keyword::Greatest,
    "group" => Keyword::Group,
    "grouping" => Keyword::Grouping,
    "groups" => Keyword::Groups,
    "handler" => Keyword::Unreserved,
    "having" => Keyword::Having,
    "header" => Keyword::Unreserved,
    "hold" => Keyword::Unreserved,
    "hour" => Keyword::Hour,
    "identity" => Keyword::Unreserved,
    "if" => Keyword::If,
    "ilike" => Keyword::Ilike,
    "immediate" => Keyword::Immediate,
    "immutable" => Keyword::Unreserved,
    "implicit" => Keyword::Unreserved,
    "import" => Keyword::Unreserved,
    "in" => Keyword::In,
    "include" => Keyword::Unreserved,
    "including" => Keyword::Unreserved,
    "increment" => Keyword::Unreserved,
    "index" => Keyword::Unreserved,
    "indexes" => Keyword::Unreserved,
    "inherit" => Keyword::Unreserved,
    "inherits" => Keyword::Unreserved,
    "initially" => Keyword::Initially,
    "inline" => Keyword::Unreserved,
    "inner" => Keyword::Inner,
    "inout" => Keyword::Unreserved,
    "input" => Keyword::Unreserved,
    "insensitive" => Keyword::Unreserved,
    "insert" => Keyword::Unreserved,
    "instead" => Keyword::Unreserved,
    "int" => Keyword::Int,
    "integer" => Keyword::Integer,
    "intersect" => Keyword::Intersect,
    "interval" => Keyword::Interval,
    "into" => Keyword::Into,
    "invoker" => Keyword::Unreserved,
    "is" => Keyword::Is,
    "isnull" => Keyword::Isnull,
    "isolation" => Keyword::Unreserved,
    "join" => Keyword::Join,
    "key" => Keyword::Key,
    "label" => Keyword::Unreserved,
    "language" => Keyword::Unreserved,
    "large" => Keyword::Unreserved,
    "last" => Keyword::Last,
    "lateral" => Keyword::Lateral,
    "leading" => Keyword::Leading,
    "leakproof" => Keyword::Unreserved,
    "least" => Keyword::Least,
    "left" => Keyword::Left,
    "level" => Keyword::Unreserved,
    "like" => Keyword::Like,
    "limit" => Keyword::Limit,
    "listen" => Keyword::Unreserved,
    "load" => Keyword::Unreserved,
    "local" => Keyword::Local,
    "localtime" => Keyword::Unreserved,
    "localtimestamp" => Keyword::Unreserved,
    "location" => Keyword::Unreserved,
    "lock" => Keyword::Unreserved,
    "locked" => Keyword::Locked,
    "logged" => Keyword::Unreserved,
    "mapping" => Keyword::Unreserved,
    "match" => Keyword::Match,
    "materialized" => Keyword::Unreserved,
    "maxvalue" => Keyword::Unreserved,
    "merge" => Keyword::Unreserved,
    "method" => Keyword::Unreserved,
    "minute" => Keyword::Minute,
    "minvalue" => Keyword::Unreserved,
    "mode" => Keyword::Unreserved,
    "month" => Keyword::Month,
    "move" => Keyword::Unreserved,
    "name" => Keyword::Unreserved,
    "names" => Keyword::Unreserved,
    "national" => Keyword::National,
    "natural" => Keyword::Natural,
    "nchar" => Keyword::Nchar,
    "new" => Keyword::Unreserved,
    "next" => Keyword::Unreserved,
    "no" => Keyword::No,
    "none" => Keyword::Unreserved,
    "normalize" => Keyword::Unreserved,
    "normalized" => Keyword::Unreserved,
    "not" => Keyword::Not,
    "nothing" => Keyword::Nothing,
    "notify" => Keyword::Unreserved,
    "notnull" => Keyword::Notnull,
    "nowait" => Keyword::Nowait,
    "null" => Keyword::Null,
    "nullif" => Keyword::Nullif,
    "nulls" => Keyword::Nulls,
    "numeric" => Keyword::Numeric,
    "object" => Keyword::Unreserved,
    "of" => Keyword::Of,
    "off" => Keyword::Unreserved,
    "offset" => Keyword::Offset,
    "oids" => Keyword::Unreserved,
    "old" => Keyword::Unreserved,
    "on" => Keyword::On,
    "only" => Keyword::Only,
    "operator" => Keyword::Unreserved,
    "option" => Keyword::Unreserved,
    "options" => Keyword::Unreserved,
    "or" => Keyword::Or,
    "order" => Keyword::Order,
    "ordinality" => Keyword::Unreserved,
    "others" => Keyword::Others,
    "out" => Keyword::Unreserved,
    "outer" => Keyword::Outer,
    "over" => Keyword::Over,
    "overlaps" => Keyword::Unreserved,
    "overlay" => Keyword::Overlay,
    "overriding" => Keyword::Unreserved,
    "owned" => Keyword::Unreserved,
    "owner" => Keyword::Unreserved,
    "parallel" => Keyword::Unreserved,
    "parameter" => Keyword::Unreserved,
    "parser" => Keyword::Unreserved,
    "partial" => Keyword::Partial,
    "partition" => Keyword::Partition,
    "passing" => Keyword::Unreserved,
    "password" => Keyword::Unreserved,
    "placing" => Keyword::Unreserved,
    "plans" => Keyword::Unreserved,
    "policy" => Keyword::Unreserved,
    "position" => Keyword::Position,
    "preceding" => Keyword::Preceding,
    "precision" => Keyword::Precision,
    "prepare" => Keyword::Unreserved,
    "prepared" => Keyword::Unreserved,
    "preserve" => Keyword::Preserve,
    "primary" => Keyword::Primary,
    "prior" => Keyword::Unreserved,
    "privileges" => Keyword::Unreserved,
    "procedural" => Keyword::Unreserved,
    "procedure" => Keyword::Unreserved,
    "procedures" => Keyword::Unreserved,
    "program" => Keyword::Unreserved,
    "publication" => Keyword::Unreserved,
    "quote" => Keyword::Unreserved,
    "range" => Keyword::Range,
    "read" => Keyword::Unreserved,
    "real" => Keyword::Real,
    "reassign" => Keyword::Unreserved,
    "recheck" => Keyword::Unreserved,
    "recursive" => Keyword::Recursive,
    "ref" => Keyword::Unreserved,
    "references" => Keyword::References,
    "referencing" => Keyword::Unreserved,
    "refresh" => Keyword::Unreserved,
    "reindex" => Keyword::Unreserved,
    "relative" => Keyword::Unreserved,
    "release" => Keyword::Unreserved,
    "rename" => Keyword::Unreserved,
    "repeatable" => Keyword::Repeatable,
    "replace" => Keyword::Unreserved,
    "replica" => Keyword::Unreserved,
    "reset" => Keyword::Unreserved,
    "restart" => Keyword::Unreserved,
    "restrict" => Keyword::Restrict,
    "return" => Keyword::Unreserved,
    "returning" => Keyword::Unreserved,
    "returns" => Keyword::Unreserved,
    "revoke" => Keyword::Unreserved,
    "right" => Keyword::Right,
    "role" => Keyword::Unreserved,
    "rollback" => Keyword::Unreserved,
    "rollup" => Keyword::Rollup,
    "routine" => Keyword::Unreserved,
    "routines" => Keyword::Unreserved,
    "row" => Keyword::Row,
    "rows" => Keyword::Rows,
    "rule" => Keyword::Unreserved,
    "savepoint" => Keyword::Unreserved,
    "schema" => Keyword::Unreserved,
    "schemas" => Keyword::Unreserved,
    "scroll" => Keyword::Unreserved,
    "search" => Keyword::Unreserved,
    "second" => Keyword::Second,
    "security" => Keyword::Unreserved,
    "select" => Keyword::Select,
    "sequence" => Keyword::Unreserved,
    "sequences" => Keyword::Unreserved,
    "serializable" => Keyword::Unreserved,
    "server" => Keyword::Unreserved,
    "session" => Keyword::Unreserved,
    "session_user" => Keyword::SessionUser,
    "set" => Keyword::Set,
    "setof" => Keyword::Unreserved,
    "sets" => Keyword::Sets,
    "share" => Keyword::Share,
    "show" => Keyword::Unreserved,
    "similar" => Keyword::Similar,
    "simple" => Keyword::Simple,
    "skip" => Keyword::Skip,
    "smallint" => Keyword::Smallint,
    "snapshot" => Keyword::Unreserved,
    "some" => Keyword::Some,
    "sql" => Keyword::Unreserved,
    "stable" => Keyword::Unreserved,
    "standalone" => Keyword::Unreserved,
    "start" => Keyword::Unreserved,
    "statement" => Keyword::Unreserved,
    "statistics" => Keyword::Unreserved,
    "stdin" => Keyword::Unreserved,
    "stdout" => Keyword::Unreserved,
    "storage" => Keyword::Unreserved,
    "stored" => Keyword::Unreserved,
    "strict" => Keyword::Unreserved,
    "strip" => Keyword::Unreserved,
    "subscription" => Keyword::Unreserved,
    "substring" => Keyword::Substring,
    "symmetric" => Keyword::Symmetric,
    "sysid" => Keyword::Unreserved,
    "system" => Keyword::Unreserved,
    "table" => Keyword::Table,
    "tables" => Keyword::Unreserved,
    "tablesample" => Keyword::Tablesample,
    "tablespace" => Keyword::Unreserved,
    "temp" => Keyword::Temp,
    "template" => Keyword::Unreserved,
    "temporary" => Keyword::Temporary,
    "text" => Keyword::Text,
    "then" => Keyword::Then,
    "ties" => Keyword::Ties,
    "time" => Keyword::Time,
    "timestamp" => Keyword::Timestamp,
    "to" => Keyword::To,
    "trailing" => Keyword::Trailing,
    "transaction" => Keyword::Unreserved,
    "transform" => Keyword::Unreserved,
    "treat" => Keyword::Unreserved,
    "trigger" => Keyword::Unreserved,
    "trim" => Keyword::Trim,
    "true" => Keyword::True,
    "truncate" => Keyword::Unreserved,
    "trusted" => Keyword::Unreserved,
    "type" => Keyword::Unreserved,
    "types" => Keyword::Unreserved,
    "unbounded" => Keyword::Unbounded,
    "uncommitted" => Keyword::Unreserved,
    "unencrypted" => Keyword::Unreserved,
    "union" => Keyword::Union,
    "unique" => Keyword::Unique,
    "unknown" => Keyword::Unreserved,
    "unlisten" => Keyword::Unreserved,
    "unlogged" => Keyword::Unlogged,
    "until" => Keyword::Unreserved,
    "update" => Keyword::Update,
    "user" => Keyword::User,
    "using" => Keyword::Using,
    "vacuum" => Keyword::Unreserved,
    "valid" => Keyword::Unreserved,
    "validate" => Keyword::Unreserved,
    "validator" => Keyword::Unreserved,
    "value" => Keyword::Unreserved,
    "values" => Keyword::Values,
    "varchar" => Keyword::Varchar,
    "variadic" => Keyword::Unreserved,
    "varying" => Keyword::Varying,
    "verbose" => Keyword::Unreserved,
    "version" => Keyword::Unreserved,
    "view" => Keyword::View,
    "views" => Keyword::Unreserved,
    "volatile" => Keyword::Unreserved,
    "when" => Keyword::When,
    "where" => Keyword::Where,
    "window" => Keyword::Window,
    "with" => Keyword::With,
    "within" => Keyword::Unreserved,
    "without" => Keyword::Unreserved,
    "work" => Keyword::Unreserved,
    "wrapper" => Keyword::Unreserved,
    "write" => Keyword::Unreserved,
    "xml" => Keyword::Unreserved,
    "year" => Keyword::Year,
    "yes" => Keyword::Unreserved,
    "zone" => Keyword::Zone,
};


impl Keyword {
    /// The keyword text, lowercase. Empty for [`Keyword::Unreserved`].
    pub fn text(&self) -> &'static str {
        match self {
            Keyword::Unreserved => "",
            Keyword::Action => "action",
            Keyword::All => "all",
            Keyword::And => "and",
            Keyword::Any => "any",
            Keyword::Array => "array",
            Keyword::As => "as",
            Keyword::Asc => "asc",
            Keyword::Asymmetric => "asymmetric",
            Keyword::At => "at",
            Keyword::Between => "between",
            Keyword::Bigint => "bigint",
            Keyword::Bit => "bit",
            Keyword::Boolean => "boolean",
            Keyword::Both => "both",
            Keyword::By => "by",
            Keyword::Cascade => "cascade",
            Keyword::Case => "case",
            Keyword::Cast => "cast",
            Keyword::Char => "char",
            Keyword::Character => "character",
            Keyword::Check => "check",
            Keyword::Coalesce => "coalesce",
            Keyword::Collate => "collate",
            Keyword::Column => "column",
            Keyword::Commit => "commit",
            Keyword::Constraint => "constraint",
            Keyword::Create => "create",
            Keyword::Cross => "cross",
            Keyword::Cube => "cube",
            Keyword::Current => "current",
            Keyword::CurrentCatalog => "current_catalog",
            Keyword::CurrentDate => "current_date",
            Keyword::CurrentRole => "current_role",
            Keyword::CurrentSchema => "current_schema",
            Keyword::CurrentTime => "current_time",
            Keyword::CurrentTimestamp => "current_timestamp",
            Keyword::CurrentUser => "current_user",
            Keyword::Day => "day",
            Keyword::Dec => "dec",
            Keyword::Decimal => "decimal",
            Keyword::Default => "default",
            Keyword::Deferrable => "deferrable",
            Keyword::Deferred => "deferred",
            Keyword::Delete => "delete",
            Keyword::Desc => "desc",
            Keyword::Distinct => "distinct",
            Keyword::Double => "double",
            Keyword::Drop => "drop",
            Keyword::Else => "else",
            Keyword::End => "end",
            Keyword::Escape => "escape",
            Keyword::Except => "except",
            Keyword::Exclude => "exclude",
            Keyword::Exists => "exists",
            Keyword::Extract => "extract",
            Keyword::False => "false",
            Keyword::Filter => "filter",
            Keyword::First => "first",
            Keyword::Float => "float",
            Keyword::Following => "following",
            Keyword::For => "for",
            Keyword::Foreign => "foreign",
            Keyword::From => "from",
            Keyword::Full => "full",
            Keyword::Global => "global",
            Keyword::Greatest => "greatest",
            Keyword::Group => "group",
            Keyword::Grouping => "grouping",
            Keyword::Groups => "groups",
            Keyword::Having => "having",
            Keyword::Hour => "hour",
            Keyword::If => "if",
            Keyword::Ilike => "ilike",
            Keyword::Immediate => "immediate",
            Keyword::In => "in",
            Keyword::Initially => "initially",
            Keyword::Inner => "inner",
            Keyword::Int => "int",
            Keyword::Integer => "integer",
            Keyword::Intersect => "intersect",
            Keyword::Interval => "interval",
            Keyword::Into => "into",
            Keyword::Is => "is",
            Keyword::Isnull => "isnull",
            Keyword::Join => "join",
            Keyword::Key => "key",
            Keyword::Last => "last",
            Keyword::Lateral => "lateral",
            Keyword::Leading => "leading",
            Keyword::Least => "least",
            Keyword::Left => "left",
            Keyword::Like => "like",
            Keyword::Limit => "limit",
            Keyword::Local => "local",
            Keyword::Locked => "locked",
            Keyword::Match => "match",
            Keyword::Minute => "minute",
            Keyword::Month => "month",
            Keyword::National => "national",
            Keyword::Natural => "natural",
            Keyword::Nchar => "nchar",
            Keyword::No => "no",
            Keyword::Not => "not",
            Keyword::Nothing => "nothing",
            Keyword::Notnull => "notnull",
            Keyword::Nowait => "nowait",
            Keyword::Null => "null",
            Keyword::Nullif => "nullif",
            Keyword::Nulls => "nulls",
            Keyword::Numeric => "numeric",
            Keyword::Of => "of",
            Keyword::Offset => "offset",
            Keyword::On => "on",
            Keyword::Only => "only",
            Keyword::Or => "or",
            Keyword::Order => "order",
            Keyword::Others => "others",
            Keyword::Outer => "outer",
            Keyword::Over => "over",
            Keyword::Overlay => "overlay",
            Keyword::Partial => "partial",
            Keyword::Partition => "partition",
            Keyword::Position => "position",
            Keyword::Preceding => "preceding",
            Keyword::Precision => "precision",
            Keyword::Preserve => "preserve",
            Keyword::Primary => "primary",
            Keyword::Range => "range",
            Keyword::Real => "real",
            Keyword::Recursive => "recursive",
            Keyword::References => "references",
            Keyword::Repeatable => "repeatable",
            Keyword::Restrict => "restrict",
            Keyword::Right => "right",
            Keyword::Rollup => "rollup",
            Keyword::Row => "row",
            Keyword::Rows => "rows",
            Keyword::Second => "second",
            Keyword::Select => "select",
            Keyword::SessionUser => "session_user",
            Keyword::Set => "set",
            Keyword::Sets => "sets",
            Keyword::Share => "share",
            Keyword::Similar => "similar",
            Keyword::Simple => "simple",
            Keyword::Skip => "skip",
            Keyword::Smallint => "smallint",
            Keyword::Some => "some",
            Keyword::Substring => "substring",
            Keyword::Symmetric => "symmetric",
            Keyword::Table => "table",
            Keyword::Tablesample => "tablesample",
            Keyword::Temp => "temp",
            Keyword::Temporary => "temporary",
            Keyword::Text => "text",
            Keyword::Then => "then",
            Keyword::Ties => "ties",
            Keyword::Time => "time",
            Keyword::Timestamp => "timestamp",
            Keyword::To => "to",
            Keyword::Trailing => "trailing",
            Keyword::Trim => "trim",
            Keyword::True => "true",
            Keyword::Unbounded => "unbounded",
            Keyword::Union => "union",
            Keyword::Unique => "unique",
            Keyword::Unlogged => "unlogged",
            Keyword::Update => "update",
            Keyword::User => "user",
            Keyword::Using => "using",
            Keyword::Values => "values",
            Keyword::Varchar => "varchar",
            Keyword::Varying => "varying",
            Keyword::View => "view",
            Keyword::When => "when",
            Keyword::Where => "where",
            Keyword::Window => "window",
            Keyword::With => "with",
            Keyword::Year => "year",
            Keyword::Zone => "zone",
        }
    }
}

/// Look up a lowercase-folded identifier.
#[inline]
pub fn lookup(lowercased: &str) -> Option<Keyword> {
    KEYWORDS.get(lowercased).copied()
}

/// Iterate over every keyword string in the table.
pub fn all() -> impl Iterator<Item = &'static str> {
    KEYWORDS.keys().copied()
}

/// Number of keywords in the table.
pub fn count() -> usize {
    KEYWORDS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_and_unreserved() {
        assert_eq!(lookup("select"), Some(Keyword::Select));
        assert_eq!(lookup("abort"), Some(Keyword::Unreserved));
        assert_eq!(lookup("not_a_keyword"), None);
        // Lookup expects pre-folded input.
        assert_eq!(lookup("SELECT"), None);
    }

    #[test]
    fn table_size_is_fixed() {
        assert_eq!(count(), 440);
        let total_chars: usize = all().map(str::len).sum();
        assert_eq!(total_chars, 2875);
    }
}
