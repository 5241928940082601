//! Token stream with halt-point symbol tracking.

use sql_ast::Location;
use sql_scanner::{Keyword, Operator, Token, TokenType};

/// A grammar symbol the parser would accept at the halt token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedSymbol {
    /// A keyword terminal
    Keyword(Keyword),
    /// A punctuation/operator terminal
    Token(TokenType),
}

/// Cursor over the scanned symbol stream.
///
/// `parse_until` support: when `stop_at` is set, the stream reports
/// end-of-input at that token and records every terminal the grammar tests
/// against it. The recorded set is exactly "the symbols with a defined
/// action at this point" and feeds grammar-aware completion.
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
    stop_at: Option<usize>,
    expected: Vec<ExpectedSymbol>,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, stop_at: None, expected: Vec::new() }
    }

    /// A stream that halts at token index `stop_at`.
    pub fn with_stop(tokens: &'a [Token], stop_at: usize) -> Self {
        Self { tokens, pos: 0, stop_at: Some(stop_at), expected: Vec::new() }
    }

    /// The symbols tested at the halt token, in test order.
    pub fn into_expected(self) -> Vec<ExpectedSymbol> {
        self.expected
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True when positioned at the halt token.
    #[inline]
    fn halted(&self) -> bool {
        self.stop_at == Some(self.pos)
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.halted() || self.pos >= self.tokens.len()
    }

    fn record(&mut self, symbol: ExpectedSymbol) {
        if self.halted() && !self.expected.contains(&symbol) {
            self.expected.push(symbol);
        }
    }

    /// The current token, ignoring the halt point. For error locations.
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Location of the current token, or an empty location at the end of
    /// the last one.
    pub fn location(&self) -> Location {
        match self.current() {
            Some(token) => token.location,
            None => {
                Location::at(self.tokens.last().map(|t| t.location.end()).unwrap_or_default())
            }
        }
    }

    /// Test the current token's type.
    pub fn at(&mut self, token_type: TokenType) -> bool {
        self.record(ExpectedSymbol::Token(token_type));
        !self.halted() && self.current().map(|t| t.token_type == token_type).unwrap_or(false)
    }

    /// Test for a grammar keyword.
    pub fn at_keyword(&mut self, keyword: Keyword) -> bool {
        self.record(ExpectedSymbol::Keyword(keyword));
        !self.halted() && self.current().map(|t| t.keyword == Some(keyword)).unwrap_or(false)
    }

    /// Test for any keyword token, without recording a symbol. Used where
    /// unreserved keywords double as identifiers.
    pub fn at_any_keyword(&mut self) -> bool {
        !self.halted()
            && self.current().map(|t| t.token_type == TokenType::Keyword).unwrap_or(false)
    }

    /// Test for a specific operator spelling.
    pub fn at_op(&mut self, op: Operator) -> bool {
        self.record(ExpectedSymbol::Token(TokenType::Operator));
        !self.halted() && self.current().map(|t| t.op == Some(op)).unwrap_or(false)
    }

    /// Consume the current token if it is the given operator.
    pub fn eat_op(&mut self, op: Operator) -> Option<Token> {
        if self.at_op(op) { self.advance() } else { None }
    }

    /// Advance unconditionally. Returns the consumed token.
    pub fn advance(&mut self) -> Option<Token> {
        if self.at_end() {
            return None;
        }
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        token
    }

    /// Consume the current token if it has the given type.
    pub fn eat(&mut self, token_type: TokenType) -> Option<Token> {
        if self.at(token_type) { self.advance() } else { None }
    }

    /// Consume the current token if it is the given keyword.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> Option<Token> {
        if self.at_keyword(keyword) { self.advance() } else { None }
    }

    /// Return to an earlier position. The only backtracking point in the
    /// grammar is the NOT DEFERRABLE two-token lookahead.
    pub fn rewind_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    /// Skip ahead past the next top-level semicolon. Error recovery.
    pub fn recover_to_next_statement(&mut self) {
        while let Some(token) = self.current() {
            if self.halted() {
                break;
            }
            let is_semicolon = token.token_type == TokenType::Semicolon;
            self.pos += 1;
            if is_semicolon {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens() -> Vec<Token> {
        use sql_scanner::scan_text;
        scan_text("select 1", 1, 0).map(|s| s.tokens).unwrap_or_default()
    }

    #[test]
    fn eat_and_advance() {
        let tokens = tokens();
        let mut stream = TokenStream::new(&tokens);
        assert!(stream.at_keyword(Keyword::Select));
        assert!(stream.eat_keyword(Keyword::Select).is_some());
        assert!(stream.eat(TokenType::LiteralInteger).is_some());
        assert!(stream.at_end());
    }

    #[test]
    fn halt_point_records_tested_symbols() {
        let tokens = tokens();
        let mut stream = TokenStream::with_stop(&tokens, 1);
        assert!(stream.eat_keyword(Keyword::Select).is_some());
        // At the halt token every test fails and is recorded.
        assert!(!stream.at_keyword(Keyword::From));
        assert!(!stream.at(TokenType::LiteralInteger));
        assert!(!stream.at_keyword(Keyword::From));
        assert!(stream.at_end());
        let expected = stream.into_expected();
        assert_eq!(
            expected,
            vec![
                ExpectedSymbol::Keyword(Keyword::From),
                ExpectedSymbol::Token(TokenType::LiteralInteger)
            ]
        );
    }
}
