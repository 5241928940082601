//! Qualified names, aliases, and column reference paths.

use sql_ast::{AttributeKey, Location, NodeType};
use sql_scanner::{Keyword, Token, TokenType};

use crate::context::NodeValue;

use super::Parser;

impl Parser<'_> {
    /// A token usable as a name: identifier, quoted identifier, or an
    /// unreserved keyword.
    pub(crate) fn eat_name(&mut self) -> Option<Token> {
        if self.stream.at(TokenType::Identifier) || self.stream.at(TokenType::QuotedIdentifier) {
            return self.stream.advance();
        }
        if self.stream.at_any_keyword()
            && self.stream.current().and_then(|t| t.keyword) == Some(Keyword::Unreserved)
        {
            return self.stream.advance();
        }
        None
    }

    pub(crate) fn name_value(&mut self, token: Token) -> NodeValue {
        self.ctx.name(token.location, token.name_id)
    }

    /// A qualified name with up to three parts and an optional trailing
    /// indirection index.
    ///
    /// `a` / `a.b` / `a.b.c` map to relation / schema.relation /
    /// catalog.schema.relation. A fourth part is an error spanning the
    /// excess parts; it is reported, never silently truncated away.
    pub(crate) fn qualified_name(&mut self) -> Option<NodeValue> {
        let first = match self.eat_name() {
            Some(token) => token,
            None => {
                self.error_expected("a name");
                return None;
            }
        };
        let begin = first.location;
        let mut parts = vec![first];
        while self.stream.at(TokenType::Dot) {
            self.stream.advance();
            match self.eat_name() {
                Some(token) => parts.push(token),
                None => {
                    self.error_expected("a name after '.'");
                    break;
                }
            }
        }
        if parts.len() > 3 {
            let excess = Location::spanning(parts[3..].iter().map(|t| t.location));
            self.ctx.add_error(excess, "qualified name has more than three parts");
            parts.truncate(3);
        }
        let indirection = self.indirection_index();

        let mut children: Vec<(AttributeKey, Option<NodeValue>)> = Vec::with_capacity(4);
        let keys: &[AttributeKey] = match parts.len() {
            1 => &[AttributeKey::SqlQualifiedNameRelation],
            2 => &[AttributeKey::SqlQualifiedNameSchema, AttributeKey::SqlQualifiedNameRelation],
            _ => &[
                AttributeKey::SqlQualifiedNameCatalog,
                AttributeKey::SqlQualifiedNameSchema,
                AttributeKey::SqlQualifiedNameRelation,
            ],
        };
        for (token, &key) in parts.iter().zip(keys) {
            let name = self.name_value(*token);
            children.push((key, Some(name)));
        }
        children.push((AttributeKey::SqlQualifiedNameIndex, indirection));
        let location = self.span_from(begin);
        Some(self.ctx.object(location, NodeType::ObjectSqlQualifiedName, children))
    }

    /// `[ expr ]` after a qualified name.
    fn indirection_index(&mut self) -> Option<NodeValue> {
        let open = self.stream.eat(TokenType::LeftBracket)?;
        let value = self.expression();
        if self.stream.eat(TokenType::RightBracket).is_none() {
            self.error_expected("']'");
        }
        let location = self.span_from(open.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlIndirectionIndex,
            vec![(AttributeKey::SqlIndirectionIndexValue, value)],
        ))
    }

    /// A column reference path: `x`, `t.x`, `s.t.x`.
    pub(crate) fn column_ref(&mut self, first: Token) -> NodeValue {
        let begin = first.location;
        let mut path = vec![self.name_value(first)];
        while self.stream.at(TokenType::Dot) {
            self.stream.advance();
            match self.eat_name() {
                Some(token) => {
                    let name = self.name_value(token);
                    path.push(name);
                }
                None => {
                    self.error_expected("a name after '.'");
                    break;
                }
            }
        }
        let location = self.span_from(begin);
        let path = self.ctx.array(location, path);
        self.ctx.object(
            location,
            NodeType::ObjectSqlColumnRef,
            vec![(AttributeKey::SqlColumnRefPath, Some(path))],
        )
    }

    /// `AS name` or a bare identifier alias.
    pub(crate) fn alias(&mut self) -> Option<NodeValue> {
        if self.stream.eat_keyword(Keyword::As).is_some() {
            match self.eat_name() {
                Some(token) => {
                    let name = self.name_value(token);
                    return Some(name);
                }
                None => {
                    self.error_expected("an alias after AS");
                    return None;
                }
            }
        }
        // A bare alias must be a plain or quoted identifier so that clause
        // keywords terminate the production.
        if self.stream.at(TokenType::Identifier) || self.stream.at(TokenType::QuotedIdentifier) {
            let token = self.stream.advance()?;
            return Some(self.name_value(token));
        }
        None
    }

    /// A parenthesized list of plain names, e.g. view column lists.
    pub(crate) fn name_list(&mut self) -> Option<NodeValue> {
        let open = self.stream.eat(TokenType::LeftParen)?;
        let mut names = Vec::new();
        loop {
            match self.eat_name() {
                Some(token) => {
                    let name = self.name_value(token);
                    names.push(name);
                }
                None => {
                    self.error_expected("a name");
                    break;
                }
            }
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let location = self.span_from(open.location);
        Some(self.ctx.array(location, names))
    }
}
