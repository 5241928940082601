//! SQL scanner: text to typed tokens.
//!
//! The scanner is the first pipeline stage. It reads the script rope once,
//! produces the token stream the parser consumes, and records everything an
//! editor needs besides: line breaks, comment ranges, recoverable errors,
//! and the name dictionary (original-case identifiers, keyword names, usage
//! tags).
//!
//! Nested balanced constructs - block comments and dollar-quoted strings -
//! run through an extended state (`ext_depth` + `ext_begin`): normal
//! tokenization is suspended until the construct balances, and an
//! unbalanced end of input fails the stage.
//!
//! Malformed tokens do not fail the stage. They are reported into
//! [`ScannedScript::errors`] and scanning continues at the next plausible
//! token start, because editors want highlighting for the well-formed rest.

mod dictionary;
pub mod keywords;
mod scanned;
mod scanner;
mod token;

pub use dictionary::NameDictionary;
pub use keywords::Keyword;
pub use scanned::ScannedScript;
pub use scanner::{ScanError, scan, scan_text};
pub use token::{Highlighting, NO_NAME, Operator, Token, TokenType};
