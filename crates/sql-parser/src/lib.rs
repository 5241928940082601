//! Deterministic SQL parser emitting the flat AST.
//!
//! The parser is a reducer over the scanner's symbol stream: each
//! production appends its children to the shared node buffer in post-order
//! and records the attribute key on every parent-child edge. Statement
//! boundaries land at every top-level `;` and at EOF; an error inside a
//! statement is captured and parsing resumes at the next `;`.
//!
//! [`parse_until`] runs the same grammar but halts at a chosen scanner
//! symbol and reports the set of grammar symbols with a defined action at
//! that point, which is what grammar-aware completion consumes.

mod context;
mod grammar;
mod stream;

pub use context::{NodeValue, ParseContext, ParsedScript};
pub use grammar::{parse, parse_until};
pub use stream::{ExpectedSymbol, TokenStream};
