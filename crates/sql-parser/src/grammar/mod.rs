//! The SQL grammar: a deterministic single-lookahead reducer.
//!
//! Each production reduces to a [`NodeValue`](crate::context::NodeValue)
//! through the [`ParseContext`], which appends children in post-order. A
//! parse error inside a statement is captured into the error vector and
//! the parser resumes after the next top-level `;`, so editors always get
//! an AST for the statements that do parse.

mod create;
mod expression;
mod name;
mod select;

use sql_ast::{Location, StatementType};
use sql_scanner::{Keyword, ScannedScript, TokenType};

use crate::context::{ParseContext, ParsedScript};
use crate::stream::{ExpectedSymbol, TokenStream};

/// Parse a scanned script into the flat AST.
pub fn parse(scanned: &ScannedScript) -> ParsedScript {
    let mut parser = Parser {
        stream: TokenStream::new(&scanned.tokens),
        scanned,
        ctx: ParseContext::new(),
    };
    parser.run();
    let parsed = parser.ctx.finish(scanned.context_id, scanned.text_version);
    tracing::debug!(
        context_id = scanned.context_id,
        nodes = parsed.nodes.len(),
        statements = parsed.statements.len(),
        errors = parsed.errors.len(),
        "parsed script"
    );
    parsed
}

/// Run the parser until the scanner symbol at `symbol_id` and return the
/// grammar symbols acceptable at that point.
///
/// This powers grammar-aware completion: the halt token never matches, so
/// every terminal the grammar tests against it is collected.
pub fn parse_until(scanned: &ScannedScript, symbol_id: usize) -> Vec<ExpectedSymbol> {
    let mut parser = Parser {
        stream: TokenStream::with_stop(&scanned.tokens, symbol_id),
        scanned,
        ctx: ParseContext::new(),
    };
    parser.run();
    parser.stream.into_expected()
}

pub(crate) struct Parser<'a> {
    pub(crate) stream: TokenStream<'a>,
    pub(crate) scanned: &'a ScannedScript,
    pub(crate) ctx: ParseContext,
}

impl Parser<'_> {
    fn run(&mut self) {
        while self.stream.pos() < self.scanned.tokens.len() {
            if self.stream.eat(TokenType::Semicolon).is_some() {
                continue;
            }
            let before = self.stream.pos();
            self.statement();
            if self.stream.pos() == before {
                // Halted for parse_until, or unable to make progress.
                break;
            }
        }
    }

    /// One top-level statement plus its terminator.
    fn statement(&mut self) {
        let before = self.stream.pos();
        let reduced = if self.stream.at_keyword(Keyword::Create) {
            self.create_statement()
        } else if self.stream.at_keyword(Keyword::Select)
            || self.stream.at_keyword(Keyword::With)
            || self.stream.at(TokenType::LeftParen)
        {
            self.select_statement().map(|root| {
                let statement_type = match root.node_type() {
                    sql_ast::NodeType::ObjectSqlCombine => StatementType::SetOperation,
                    _ => StatementType::Select,
                };
                (root, statement_type)
            })
        } else {
            self.ctx.add_error(self.stream.location(), "expected a statement");
            None
        };
        match reduced {
            Some((root, statement_type)) => {
                self.ctx.finish_statement(root, statement_type);
                if !self.stream.at_end() && !self.stream.at(TokenType::Semicolon) {
                    self.ctx
                        .add_error(self.stream.location(), "expected ';' after statement");
                    self.stream.recover_to_next_statement();
                }
            }
            None => self.stream.recover_to_next_statement(),
        }
        // Guard against productions that consumed nothing.
        if self.stream.pos() == before && !self.stream.at_end() {
            self.stream.advance();
        }
    }

    /// Location from `begin` through the end of the last consumed token.
    pub(crate) fn span_from(&self, begin: Location) -> Location {
        let end = self.prev_end().max(begin.end());
        Location::new(begin.offset, end - begin.offset)
    }

    /// End offset of the most recently consumed token.
    pub(crate) fn prev_end(&self) -> u32 {
        let pos = self.stream.pos();
        if pos == 0 {
            return 0;
        }
        self.scanned.tokens.get(pos - 1).map(|t| t.location.end()).unwrap_or(0)
    }

    /// Record an "expected X" error at the current token.
    pub(crate) fn error_expected(&mut self, what: &str) {
        let location = self.stream.location();
        self.ctx.add_error(location, format!("expected {what}"));
    }
}
