//! Scanner tokens and the packed highlighting format.

use serde::{Deserialize, Serialize};
use sql_ast::Location;

use crate::keywords::Keyword;

/// The type of a scanner token.
///
/// Doubles as the highlighting token type consumed by editors, so the
/// discriminants are wire-stable and serialize numerically. `None` marks
/// gaps in the packed highlighting arrays, never a real token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TokenType {
    #[default]
    None = 0,
    Keyword = 1,
    Identifier = 2,
    QuotedIdentifier = 3,
    LiteralInteger = 4,
    LiteralFloat = 5,
    LiteralString = 6,
    LiteralHexString = 7,
    LiteralBitString = 8,
    LiteralDollarString = 9,
    Operator = 10,
    Dot = 11,
    Comma = 12,
    Semicolon = 13,
    LeftParen = 14,
    RightParen = 15,
    LeftBracket = 16,
    RightBracket = 17,
    NamedParameter = 18,
    PositionalParameter = 19,
}

impl From<TokenType> for u8 {
    #[inline]
    fn from(value: TokenType) -> u8 {
        value as u8
    }
}

impl TryFrom<u8> for TokenType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        use TokenType::*;
        Ok(match value {
            0 => None,
            1 => Keyword,
            2 => Identifier,
            3 => QuotedIdentifier,
            4 => LiteralInteger,
            5 => LiteralFloat,
            6 => LiteralString,
            7 => LiteralHexString,
            8 => LiteralBitString,
            9 => LiteralDollarString,
            10 => Operator,
            11 => Dot,
            12 => Comma,
            13 => Semicolon,
            14 => LeftParen,
            15 => RightParen,
            16 => LeftBracket,
            17 => RightBracket,
            18 => NamedParameter,
            19 => PositionalParameter,
            other => return Err(other),
        })
    }
}

impl Serialize for TokenType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for TokenType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        TokenType::try_from(raw)
            .map_err(|v| serde::de::Error::custom(format!("invalid token type {v}")))
    }
}

/// The operator spelled by an [`TokenType::Operator`] token.
///
/// Highlighting does not care which operator a token is, the parser does;
/// the scanner resolves the spelling once so the parser never re-reads
/// source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Concat,
    TypeCast,
    Assign,
    Tilde,
    Bang,
    Ampersand,
    Pipe,
    Hash,
    Question,
}

/// Name id of tokens that carry no dictionary entry.
pub const NO_NAME: u32 = u32::MAX;

/// A scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The source location
    pub location: Location,
    /// The token type
    pub token_type: TokenType,
    /// Name-dictionary id for identifiers and keywords, else [`NO_NAME`]
    pub name_id: u32,
    /// Grammar keyword, if the token is one
    #[serde(skip)]
    pub keyword: Option<Keyword>,
    /// Operator spelling, if the token is an operator
    #[serde(skip)]
    pub op: Option<Operator>,
}

impl Token {
    pub fn new(location: Location, token_type: TokenType) -> Self {
        Self { location, token_type, name_id: NO_NAME, keyword: None, op: None }
    }
}

/// Packed syntax highlighting: parallel arrays of entry offsets and types.
///
/// Gaps between tokens become entries with [`TokenType::None`]; a trailing
/// sentinel entry marks the end of the last token. `token_breaks` holds the
/// indices of the packed entries containing each line break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlighting {
    pub token_offsets: Vec<u32>,
    pub token_types: Vec<TokenType>,
    pub token_breaks: Vec<u32>,
}
