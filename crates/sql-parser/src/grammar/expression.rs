//! Scalar expressions: precedence climbing over the operator table.

use sql_ast::enums::{
    ExpressionOperator, ExtractTarget, IntervalType, KnownFunction, SubqueryQuantifier,
    TrimDirection,
};
use sql_ast::{AttributeKey, Location, NodeType};
use sql_scanner::{Keyword, Operator, Token, TokenType};

use crate::context::NodeValue;

use super::Parser;

/// Binding powers, loosest to tightest.
pub(crate) mod bp {
    pub const OR: u8 = 1;
    pub const AND: u8 = 2;
    pub const NOT: u8 = 3;
    pub const IS: u8 = 4;
    pub const COMPARISON: u8 = 5;
    pub const CONCAT: u8 = 6;
    pub const ADDITIVE: u8 = 7;
    pub const MULTIPLICATIVE: u8 = 8;
    pub const POWER: u8 = 9;
    pub const UNARY: u8 = 10;
    pub const COLLATE: u8 = 11;
    pub const CAST: u8 = 12;
}

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> Option<NodeValue> {
        self.expression_bp(0)
    }

    pub(crate) fn expression_bp(&mut self, min_bp: u8) -> Option<NodeValue> {
        let begin = self.stream.location();
        let mut lhs = self.prefix()?;
        loop {
            let Some((op, op_location, left_bp, right_bp)) = self.peek_infix(min_bp) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            lhs = self.infix(lhs, begin, op, op_location, right_bp)?;
        }
        Some(lhs)
    }

    /// A prefix expression: literal, unary operator, or primary.
    fn prefix(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        if let Some(not_token) = self.stream.eat_keyword(Keyword::Not) {
            let operand = self.expression_bp(bp::NOT)?;
            return Some(self.nary(
                self.span_from(begin),
                ExpressionOperator::Not,
                not_token.location,
                vec![operand],
            ));
        }
        if let Some(minus) = self.stream.eat_op(Operator::Minus) {
            let operand = self.expression_bp(bp::UNARY)?;
            return Some(self.nary(
                self.span_from(begin),
                ExpressionOperator::Negate,
                minus.location,
                vec![operand],
            ));
        }
        if self.stream.eat_op(Operator::Plus).is_some() {
            return self.expression_bp(bp::UNARY);
        }
        self.primary()
    }

    /// Peek the infix operator at the cursor without consuming it.
    fn peek_infix(&mut self, min_bp: u8) -> Option<(InfixOp, Location, u8, u8)> {
        use InfixOp::*;
        let location = self.stream.location();
        let entry = if self.stream.at_keyword(Keyword::Or) {
            (Binary(ExpressionOperator::Or), bp::OR, bp::OR + 1)
        } else if self.stream.at_keyword(Keyword::And) {
            (Binary(ExpressionOperator::And), bp::AND, bp::AND + 1)
        } else if self.stream.at_keyword(Keyword::Is) {
            (Is, bp::IS, bp::IS + 1)
        } else if self.stream.at_keyword(Keyword::Isnull) {
            (PostfixIs(ExpressionOperator::IsNull), bp::IS, bp::IS)
        } else if self.stream.at_keyword(Keyword::Notnull) {
            (PostfixIs(ExpressionOperator::IsNotNull), bp::IS, bp::IS)
        } else if self.stream.at_keyword(Keyword::Between) {
            (Between { negated: false }, bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_keyword(Keyword::In) {
            (In { negated: false }, bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_keyword(Keyword::Like) {
            (Like { operator: ExpressionOperator::Like }, bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_keyword(Keyword::Ilike) {
            (Like { operator: ExpressionOperator::Ilike }, bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_keyword(Keyword::Similar) {
            (Like { operator: ExpressionOperator::SimilarTo }, bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_keyword(Keyword::Collate) {
            (Collate, bp::COLLATE, bp::COLLATE + 1)
        } else if self.stream.at_keyword(Keyword::At) {
            (AtTimeZone, bp::CONCAT, bp::CONCAT + 1)
        } else if self.stream.at_keyword(Keyword::Not) && min_bp <= bp::COMPARISON {
            // NOT BETWEEN / NOT IN / NOT LIKE need one more token of
            // lookahead, resolved when the arm executes.
            (NegatedComparison, bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::Equal) {
            (Binary(ExpressionOperator::Equal), bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::NotEqual) {
            (Binary(ExpressionOperator::NotEqual), bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::Less) {
            (Binary(ExpressionOperator::LessThan), bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::LessEqual) {
            (Binary(ExpressionOperator::LessEqual), bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::Greater) {
            (Binary(ExpressionOperator::GreaterThan), bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::GreaterEqual) {
            (Binary(ExpressionOperator::GreaterEqual), bp::COMPARISON, bp::COMPARISON + 1)
        } else if self.stream.at_op(Operator::Concat) {
            (Binary(ExpressionOperator::Concat), bp::CONCAT, bp::CONCAT + 1)
        } else if self.stream.at_op(Operator::Plus) {
            (Binary(ExpressionOperator::Plus), bp::ADDITIVE, bp::ADDITIVE + 1)
        } else if self.stream.at_op(Operator::Minus) {
            (Binary(ExpressionOperator::Minus), bp::ADDITIVE, bp::ADDITIVE + 1)
        } else if self.stream.at_op(Operator::Star) {
            (Binary(ExpressionOperator::Multiply), bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1)
        } else if self.stream.at_op(Operator::Slash) {
            (Binary(ExpressionOperator::Divide), bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1)
        } else if self.stream.at_op(Operator::Percent) {
            (Binary(ExpressionOperator::Modulus), bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1)
        } else if self.stream.at_op(Operator::Caret) {
            (Binary(ExpressionOperator::Power), bp::POWER, bp::POWER + 1)
        } else if self.stream.at_op(Operator::TypeCast) {
            (CastOp, bp::CAST, bp::CAST)
        } else {
            return None;
        };
        let (op, left_bp, right_bp) = entry;
        Some((op, location, left_bp, right_bp))
    }

    /// Reduce one infix/postfix construct over `lhs`.
    fn infix(
        &mut self,
        lhs: NodeValue,
        begin: Location,
        op: InfixOp,
        op_location: Location,
        right_bp: u8,
    ) -> Option<NodeValue> {
        match op {
            InfixOp::Binary(operator) => {
                self.stream.advance();
                let rhs = self.comparison_rhs(operator, right_bp)?;
                Some(self.nary(self.span_from(begin), operator, op_location, vec![lhs, rhs]))
            }
            InfixOp::CastOp => {
                self.stream.advance();
                let type_spec = self.type_name()?;
                let location = self.span_from(begin);
                Some(self.ctx.object(
                    location,
                    NodeType::ObjectSqlCast,
                    vec![
                        (AttributeKey::SqlCastValue, Some(lhs)),
                        (AttributeKey::SqlCastType, Some(type_spec)),
                    ],
                ))
            }
            InfixOp::Collate => {
                self.stream.advance();
                let collation = self.qualified_name()?;
                Some(self.nary(
                    self.span_from(begin),
                    ExpressionOperator::Collate,
                    op_location,
                    vec![lhs, collation],
                ))
            }
            InfixOp::AtTimeZone => {
                self.stream.advance();
                if self.stream.eat_keyword(Keyword::Time).is_none() {
                    self.error_expected("TIME ZONE after AT");
                    return Some(lhs);
                }
                self.stream.eat_keyword(Keyword::Zone);
                let rhs = self.expression_bp(right_bp)?;
                Some(self.nary(
                    self.span_from(begin),
                    ExpressionOperator::AtTimeZone,
                    op_location,
                    vec![lhs, rhs],
                ))
            }
            InfixOp::Is => {
                self.stream.advance();
                let negated = self.stream.eat_keyword(Keyword::Not).is_some();
                let operator = if self.stream.eat_keyword(Keyword::Null).is_some() {
                    if negated {
                        ExpressionOperator::IsNotNull
                    } else {
                        ExpressionOperator::IsNull
                    }
                } else if self.stream.eat_keyword(Keyword::True).is_some() {
                    ExpressionOperator::IsTrue
                } else if self.stream.eat_keyword(Keyword::False).is_some() {
                    ExpressionOperator::IsFalse
                } else if self.stream.eat_keyword(Keyword::Distinct).is_some() {
                    self.stream.eat_keyword(Keyword::From);
                    let rhs = self.expression_bp(bp::IS + 1)?;
                    let operator = if negated {
                        ExpressionOperator::IsNotDistinctFrom
                    } else {
                        ExpressionOperator::IsDistinctFrom
                    };
                    return Some(self.nary(
                        self.span_from(begin),
                        operator,
                        op_location,
                        vec![lhs, rhs],
                    ));
                } else {
                    self.error_expected("NULL, TRUE, FALSE, or DISTINCT FROM after IS");
                    return Some(lhs);
                };
                Some(self.nary(self.span_from(begin), operator, op_location, vec![lhs]))
            }
            InfixOp::PostfixIs(operator) => {
                self.stream.advance();
                Some(self.nary(self.span_from(begin), operator, op_location, vec![lhs]))
            }
            InfixOp::NegatedComparison => {
                self.stream.advance();
                if self.stream.at_keyword(Keyword::Between) {
                    return self.infix(
                        lhs,
                        begin,
                        InfixOp::Between { negated: true },
                        op_location,
                        right_bp,
                    );
                }
                if self.stream.at_keyword(Keyword::In) {
                    return self.infix(
                        lhs,
                        begin,
                        InfixOp::In { negated: true },
                        op_location,
                        right_bp,
                    );
                }
                let operator = if self.stream.at_keyword(Keyword::Like) {
                    ExpressionOperator::NotLike
                } else if self.stream.at_keyword(Keyword::Ilike) {
                    ExpressionOperator::NotIlike
                } else if self.stream.at_keyword(Keyword::Similar) {
                    ExpressionOperator::NotSimilarTo
                } else {
                    self.error_expected("BETWEEN, IN, LIKE, ILIKE, or SIMILAR after NOT");
                    return Some(lhs);
                };
                self.infix(lhs, begin, InfixOp::Like { operator }, op_location, right_bp)
            }
            InfixOp::Between { negated } => {
                self.stream.advance();
                self.stream.eat_keyword(Keyword::Symmetric);
                let low = self.expression_bp(bp::COMPARISON + 1)?;
                if self.stream.eat_keyword(Keyword::And).is_none() {
                    self.error_expected("AND in BETWEEN");
                }
                let high = self.expression_bp(bp::COMPARISON + 1)?;
                let operator = if negated {
                    ExpressionOperator::NotBetween
                } else {
                    ExpressionOperator::Between
                };
                Some(self.nary(
                    self.span_from(begin),
                    operator,
                    op_location,
                    vec![lhs, low, high],
                ))
            }
            InfixOp::In { negated } => {
                self.stream.advance();
                let operator =
                    if negated { ExpressionOperator::NotIn } else { ExpressionOperator::In };
                if self.stream.eat(TokenType::LeftParen).is_none() {
                    self.error_expected("'(' after IN");
                    return Some(lhs);
                }
                let rhs = if self.stream.at_keyword(Keyword::Select)
                    || self.stream.at_keyword(Keyword::With)
                {
                    let statement = self.select_statement();
                    let location = self.span_from(op_location);
                    self.ctx.object(
                        location,
                        NodeType::ObjectSqlSubquery,
                        vec![(AttributeKey::SqlSubqueryStatement, statement)],
                    )
                } else {
                    let list_begin = self.stream.location();
                    let mut values = Vec::new();
                    loop {
                        match self.expression() {
                            Some(value) => values.push(value),
                            None => break,
                        }
                        if self.stream.eat(TokenType::Comma).is_none() {
                            break;
                        }
                    }
                    let location = self.span_from(list_begin);
                    self.ctx.array(location, values)
                };
                if self.stream.eat(TokenType::RightParen).is_none() {
                    self.error_expected("')'");
                }
                Some(self.nary(self.span_from(begin), operator, op_location, vec![lhs, rhs]))
            }
            InfixOp::Like { operator } => {
                self.stream.advance();
                if operator == ExpressionOperator::SimilarTo
                    || operator == ExpressionOperator::NotSimilarTo
                {
                    self.stream.eat_keyword(Keyword::To);
                }
                let pattern = self.expression_bp(right_bp)?;
                let mut args = vec![lhs, pattern];
                if self.stream.eat_keyword(Keyword::Escape).is_some()
                    && let Some(escape) = self.expression_bp(right_bp)
                {
                    args.push(escape);
                }
                Some(self.nary(self.span_from(begin), operator, op_location, args))
            }
        }
    }

    /// The right-hand side of a comparison, allowing a quantified subquery
    /// (`= ANY (select ...)`).
    fn comparison_rhs(
        &mut self,
        operator: ExpressionOperator,
        right_bp: u8,
    ) -> Option<NodeValue> {
        let is_comparison = matches!(
            operator,
            ExpressionOperator::Equal
                | ExpressionOperator::NotEqual
                | ExpressionOperator::LessThan
                | ExpressionOperator::LessEqual
                | ExpressionOperator::GreaterThan
                | ExpressionOperator::GreaterEqual
        );
        if is_comparison {
            let quantifier = if self.stream.at_keyword(Keyword::Any) {
                Some(SubqueryQuantifier::Any)
            } else if self.stream.at_keyword(Keyword::Some) {
                Some(SubqueryQuantifier::Some)
            } else if self.stream.at_keyword(Keyword::All) {
                Some(SubqueryQuantifier::All)
            } else {
                None
            };
            if let Some(quantifier) = quantifier {
                let quantifier_token = self.stream.advance()?;
                return self.quantified_subquery(quantifier, quantifier_token.location);
            }
        }
        self.expression_bp(right_bp)
    }

    fn quantified_subquery(
        &mut self,
        quantifier: SubqueryQuantifier,
        begin: Location,
    ) -> Option<NodeValue> {
        if self.stream.eat(TokenType::LeftParen).is_none() {
            self.error_expected("'(' after the subquery quantifier");
            return None;
        }
        let statement = self.select_statement();
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let quantifier_node =
            self.ctx.enum_value(begin, NodeType::EnumSqlSubqueryQuantifier, quantifier);
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlSubquery,
            vec![
                (AttributeKey::SqlSubqueryQuantifier, Some(quantifier_node)),
                (AttributeKey::SqlSubqueryStatement, statement),
            ],
        ))
    }

    /// Reduce an n-ary expression node.
    pub(crate) fn nary(
        &mut self,
        location: Location,
        operator: ExpressionOperator,
        operator_location: Location,
        args: Vec<NodeValue>,
    ) -> NodeValue {
        let operator_node = self.ctx.enum_value(
            operator_location,
            NodeType::EnumSqlExpressionOperator,
            operator,
        );
        let args_location = Location::spanning(args.iter().map(|a| a.location()));
        let args_array = self.ctx.array(args_location, args);
        self.ctx.object(
            location,
            NodeType::ObjectSqlNaryExpression,
            vec![
                (AttributeKey::SqlExpressionOperator, Some(operator_node)),
                (AttributeKey::SqlExpressionArgs, Some(args_array)),
            ],
        )
    }

    /// Primary expressions.
    fn primary(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();

        // Literals
        if let Some(token) = self.stream.eat(TokenType::LiteralInteger) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralInteger, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::LiteralFloat) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralFloat, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::LiteralString) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralString, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::LiteralHexString) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralString, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::LiteralBitString) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralString, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::LiteralDollarString) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralString, 0));
        }
        if let Some(token) = self.stream.eat_keyword(Keyword::True) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralBool, 1));
        }
        if let Some(token) = self.stream.eat_keyword(Keyword::False) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralBool, 0));
        }
        if let Some(token) = self.stream.eat_keyword(Keyword::Null) {
            return Some(self.ctx.literal(token.location, NodeType::LiteralNull, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::NamedParameter) {
            return Some(self.ctx.literal(token.location, NodeType::Parameter, 0));
        }
        if let Some(token) = self.stream.eat(TokenType::PositionalParameter) {
            return Some(self.ctx.literal(token.location, NodeType::Parameter, 0));
        }

        // Keyword-introduced constructs
        if self.stream.at_keyword(Keyword::Case) {
            return self.case_expression();
        }
        if self.stream.at_keyword(Keyword::Cast) {
            return self.cast_expression();
        }
        if self.stream.at_keyword(Keyword::Exists) {
            let exists_token = self.stream.advance()?;
            return self.quantified_subquery(SubqueryQuantifier::Exists, exists_token.location);
        }
        if self.stream.at_keyword(Keyword::Interval) {
            return self.interval_literal();
        }
        if self.stream.at_keyword(Keyword::Extract) {
            return self.extract_expression();
        }
        if self.stream.at_keyword(Keyword::Trim) {
            return self.trim_expression();
        }
        if let Some(known) = self.peek_known_function() {
            return self.known_function(known);
        }

        // Parenthesized expression or subquery
        if self.stream.eat(TokenType::LeftParen).is_some() {
            if self.stream.at_keyword(Keyword::Select) || self.stream.at_keyword(Keyword::With) {
                let statement = self.select_statement();
                if self.stream.eat(TokenType::RightParen).is_none() {
                    self.error_expected("')'");
                }
                let location = self.span_from(begin);
                return Some(self.ctx.object(
                    location,
                    NodeType::ObjectSqlSubquery,
                    vec![(AttributeKey::SqlSubqueryStatement, statement)],
                ));
            }
            let inner = self.expression();
            if self.stream.eat(TokenType::RightParen).is_none() {
                self.error_expected("')'");
            }
            return inner;
        }

        // Names: column references or function calls
        if let Some(first) = self.eat_name() {
            if self.function_call_follows(&first) {
                return self.function_call(first);
            }
            return Some(self.column_ref(first));
        }

        self.error_expected("an expression");
        None
    }

    /// True when the name at hand starts a function call (`name(` or
    /// `a.b(`).
    fn function_call_follows(&mut self, _first: &Token) -> bool {
        // Only a direct '(' makes a call; qualified calls re-enter through
        // column_ref's path handling below, so peek one token.
        self.stream.at(TokenType::LeftParen)
    }

    /// `name(args)` with DISTINCT, *, FILTER, and OVER support.
    fn function_call(&mut self, name_token: Token) -> Option<NodeValue> {
        let begin = name_token.location;
        let name = self.name_value(name_token);
        let name_location = name.location();
        let name_path = self.ctx.array(name_location, vec![name]);
        self.stream.advance(); // the '('
        let distinct = self.stream.eat_keyword(Keyword::Distinct).map(|token| {
            self.ctx.literal(token.location, NodeType::LiteralBool, 1)
        });
        let args = if let Some(star) = self.stream.eat_op(Operator::Star) {
            let star_node = self.ctx.literal(star.location, NodeType::LiteralBool, 1);
            Some(self.ctx.array(star.location, vec![star_node]))
        } else if self.stream.at(TokenType::RightParen) {
            None
        } else {
            let list_begin = self.stream.location();
            let mut args = Vec::new();
            loop {
                match self.expression() {
                    Some(arg) => args.push(arg),
                    None => break,
                }
                if self.stream.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
            let location = self.span_from(list_begin);
            Some(self.ctx.array(location, args))
        };
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let over = if self.stream.eat_keyword(Keyword::Over).is_some() {
            if self.stream.at(TokenType::LeftParen) {
                self.window_definition(None)
            } else {
                match self.eat_name() {
                    Some(window_name) => {
                        let value = self.name_value(window_name);
                        Some(value)
                    }
                    None => {
                        self.error_expected("a window name or '(' after OVER");
                        None
                    }
                }
            }
        } else {
            None
        };
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlFunctionCall,
            vec![
                (AttributeKey::SqlFunctionName, Some(name_path)),
                (AttributeKey::SqlFunctionDistinct, distinct),
                (AttributeKey::SqlFunctionArguments, args),
                (AttributeKey::SqlFunctionOver, over),
            ],
        ))
    }

    /// Keyword-named functions (COALESCE, NULLIF, CURRENT_DATE, ...).
    fn peek_known_function(&mut self) -> Option<KnownFunction> {
        let known = [
            (Keyword::Coalesce, KnownFunction::Coalesce),
            (Keyword::Greatest, KnownFunction::Greatest),
            (Keyword::Least, KnownFunction::Least),
            (Keyword::Nullif, KnownFunction::Nullif),
            (Keyword::Substring, KnownFunction::Substring),
            (Keyword::Position, KnownFunction::Position),
            (Keyword::Overlay, KnownFunction::Overlay),
            (Keyword::CurrentDate, KnownFunction::CurrentDate),
            (Keyword::CurrentTime, KnownFunction::CurrentTime),
            (Keyword::CurrentTimestamp, KnownFunction::CurrentTimestamp),
            (Keyword::CurrentCatalog, KnownFunction::CurrentCatalog),
            (Keyword::CurrentSchema, KnownFunction::CurrentSchema),
            (Keyword::CurrentRole, KnownFunction::CurrentRole),
            (Keyword::CurrentUser, KnownFunction::CurrentUser),
            (Keyword::SessionUser, KnownFunction::SessionUser),
        ];
        known
            .iter()
            .find(|(keyword, _)| self.stream.at_keyword(*keyword))
            .map(|&(_, function)| function)
    }

    fn known_function(&mut self, function: KnownFunction) -> Option<NodeValue> {
        let keyword_token = self.stream.advance()?;
        let begin = keyword_token.location;
        let known_node =
            self.ctx.enum_value(begin, NodeType::EnumSqlKnownFunction, function);
        let args = if self.stream.eat(TokenType::LeftParen).is_some() {
            let list_begin = self.stream.location();
            let mut args = Vec::new();
            if !self.stream.at(TokenType::RightParen) {
                loop {
                    match self.expression() {
                        Some(arg) => args.push(arg),
                        None => break,
                    }
                    // SUBSTRING(x FROM y FOR z) and friends join arguments
                    // with FROM/FOR instead of commas.
                    if self.stream.eat(TokenType::Comma).is_none()
                        && self.stream.eat_keyword(Keyword::From).is_none()
                        && self.stream.eat_keyword(Keyword::For).is_none()
                        && self.stream.eat_keyword(Keyword::In).is_none()
                    {
                        break;
                    }
                }
            }
            if self.stream.eat(TokenType::RightParen).is_none() {
                self.error_expected("')'");
            }
            let location = self.span_from(list_begin);
            Some(self.ctx.array(location, args))
        } else {
            None
        };
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlFunctionCall,
            vec![
                (AttributeKey::SqlFunctionKnown, Some(known_node)),
                (AttributeKey::SqlFunctionArguments, args),
            ],
        ))
    }

    /// `CASE [arg] WHEN .. THEN .. [ELSE ..] END`
    fn case_expression(&mut self) -> Option<NodeValue> {
        let case_token = self.stream.advance()?;
        let argument = if self.stream.at_keyword(Keyword::When) {
            None
        } else {
            self.expression()
        };
        let clauses_begin = self.stream.location();
        let mut clauses = Vec::new();
        while let Some(when_token) = self.stream.eat_keyword(Keyword::When) {
            let when_value = self.expression();
            if self.stream.eat_keyword(Keyword::Then).is_none() {
                self.error_expected("THEN");
            }
            let then_value = self.expression();
            let location = self.span_from(when_token.location);
            let clause = self.ctx.object(
                location,
                NodeType::ObjectSqlCaseClause,
                vec![
                    (AttributeKey::SqlCaseClauseWhen, when_value),
                    (AttributeKey::SqlCaseClauseThen, then_value),
                ],
            );
            clauses.push(clause);
        }
        let default = if self.stream.eat_keyword(Keyword::Else).is_some() {
            self.expression()
        } else {
            None
        };
        if self.stream.eat_keyword(Keyword::End).is_none() {
            self.error_expected("END");
        }
        let clauses_location = self.span_from(clauses_begin);
        let clauses = self.ctx.array(clauses_location, clauses);
        let location = self.span_from(case_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlCase,
            vec![
                (AttributeKey::SqlCaseArgument, argument),
                (AttributeKey::SqlCaseClauses, Some(clauses)),
                (AttributeKey::SqlCaseDefault, default),
            ],
        ))
    }

    /// `CAST(expr AS type)`
    fn cast_expression(&mut self) -> Option<NodeValue> {
        let cast_token = self.stream.advance()?;
        if self.stream.eat(TokenType::LeftParen).is_none() {
            self.error_expected("'(' after CAST");
            return None;
        }
        let value = self.expression();
        if self.stream.eat_keyword(Keyword::As).is_none() {
            self.error_expected("AS in CAST");
        }
        let type_spec = self.type_name();
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let location = self.span_from(cast_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlCast,
            vec![
                (AttributeKey::SqlCastValue, value),
                (AttributeKey::SqlCastType, type_spec),
            ],
        ))
    }

    /// `INTERVAL 'value' [unit [TO unit]] [(precision)]`
    fn interval_literal(&mut self) -> Option<NodeValue> {
        let interval_token = self.stream.advance()?;
        let value = self
            .stream
            .eat(TokenType::LiteralString)
            .map(|token| self.ctx.literal(token.location, NodeType::LiteralString, 0));
        if value.is_none() {
            self.error_expected("a string after INTERVAL");
        }
        let unit_begin = self.stream.location();
        let head = self.interval_unit();
        let interval_type = match head {
            Some(head) => {
                if self.stream.eat_keyword(Keyword::To).is_some() {
                    let tail = self.interval_unit();
                    Some(match (head, tail) {
                        (IntervalType::Year, Some(IntervalType::Month)) => {
                            IntervalType::YearToMonth
                        }
                        (IntervalType::Day, Some(IntervalType::Hour)) => IntervalType::DayToHour,
                        (IntervalType::Day, Some(IntervalType::Minute)) => {
                            IntervalType::DayToMinute
                        }
                        (IntervalType::Day, Some(IntervalType::Second)) => {
                            IntervalType::DayToSecond
                        }
                        (IntervalType::Hour, Some(IntervalType::Minute)) => {
                            IntervalType::HourToMinute
                        }
                        (IntervalType::Hour, Some(IntervalType::Second)) => {
                            IntervalType::HourToSecond
                        }
                        (IntervalType::Minute, Some(IntervalType::Second)) => {
                            IntervalType::MinuteToSecond
                        }
                        (head, _) => {
                            self.error_expected("a valid interval range");
                            head
                        }
                    })
                } else {
                    Some(head)
                }
            }
            None => None,
        };
        let interval_type = interval_type.map(|t| {
            let location = self.span_from(unit_begin);
            self.ctx.enum_value(location, NodeType::EnumSqlIntervalType, t)
        });
        let precision = if self.stream.eat(TokenType::LeftParen).is_some() {
            let precision = self
                .stream
                .eat(TokenType::LiteralInteger)
                .map(|token| self.ctx.literal(token.location, NodeType::LiteralInteger, 0));
            if self.stream.eat(TokenType::RightParen).is_none() {
                self.error_expected("')'");
            }
            precision
        } else {
            None
        };
        let location = self.span_from(interval_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlInterval,
            vec![
                (AttributeKey::SqlIntervalValue, value),
                (AttributeKey::SqlIntervalType, interval_type),
                (AttributeKey::SqlIntervalPrecision, precision),
            ],
        ))
    }

    fn interval_unit(&mut self) -> Option<IntervalType> {
        let unit = if self.stream.at_keyword(Keyword::Year) {
            IntervalType::Year
        } else if self.stream.at_keyword(Keyword::Month) {
            IntervalType::Month
        } else if self.stream.at_keyword(Keyword::Day) {
            IntervalType::Day
        } else if self.stream.at_keyword(Keyword::Hour) {
            IntervalType::Hour
        } else if self.stream.at_keyword(Keyword::Minute) {
            IntervalType::Minute
        } else if self.stream.at_keyword(Keyword::Second) {
            IntervalType::Second
        } else {
            return None;
        };
        self.stream.advance();
        Some(unit)
    }

    /// `EXTRACT(target FROM expr)`
    fn extract_expression(&mut self) -> Option<NodeValue> {
        let extract_token = self.stream.advance()?;
        if self.stream.eat(TokenType::LeftParen).is_none() {
            self.error_expected("'(' after EXTRACT");
            return None;
        }
        let target_location = self.stream.location();
        let target = self.extract_target();
        let target = target.map(|t| {
            self.ctx.enum_value(target_location, NodeType::EnumSqlExtractTarget, t)
        });
        if target.is_none() {
            self.error_expected("an extract target");
        }
        if self.stream.eat_keyword(Keyword::From).is_none() {
            self.error_expected("FROM in EXTRACT");
        }
        let value = self.expression();
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let location = self.span_from(extract_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlExtract,
            vec![
                (AttributeKey::SqlExtractTarget, target),
                (AttributeKey::SqlExtractValue, value),
            ],
        ))
    }

    fn extract_target(&mut self) -> Option<ExtractTarget> {
        let keyword_target = if self.stream.at_keyword(Keyword::Year) {
            Some(ExtractTarget::Year)
        } else if self.stream.at_keyword(Keyword::Month) {
            Some(ExtractTarget::Month)
        } else if self.stream.at_keyword(Keyword::Day) {
            Some(ExtractTarget::Day)
        } else if self.stream.at_keyword(Keyword::Hour) {
            Some(ExtractTarget::Hour)
        } else if self.stream.at_keyword(Keyword::Minute) {
            Some(ExtractTarget::Minute)
        } else if self.stream.at_keyword(Keyword::Second) {
            Some(ExtractTarget::Second)
        } else {
            None
        };
        if let Some(target) = keyword_target {
            self.stream.advance();
            return Some(target);
        }
        // Unreserved targets (epoch, dow, ...) arrive as identifiers.
        if !self.stream.at(TokenType::Identifier) {
            return None;
        }
        let token = self.stream.current().copied()?;
        let target = match self.scanned.names.text(token.name_id) {
            Some("century") => ExtractTarget::Century,
            Some("decade") => ExtractTarget::Decade,
            Some("dow") => ExtractTarget::Dow,
            Some("doy") => ExtractTarget::Doy,
            Some("epoch") => ExtractTarget::Epoch,
            Some("millennium") => ExtractTarget::Millennium,
            Some("microseconds") => ExtractTarget::Microseconds,
            Some("milliseconds") => ExtractTarget::Milliseconds,
            Some("quarter") => ExtractTarget::Quarter,
            Some("timezone") => ExtractTarget::Timezone,
            Some("week") => ExtractTarget::Week,
            _ => return None,
        };
        self.stream.advance();
        Some(target)
    }

    /// `TRIM([BOTH|LEADING|TRAILING] [chars FROM] expr)`
    fn trim_expression(&mut self) -> Option<NodeValue> {
        let trim_token = self.stream.advance()?;
        if self.stream.eat(TokenType::LeftParen).is_none() {
            self.error_expected("'(' after TRIM");
            return None;
        }
        let direction_location = self.stream.location();
        let direction = if self.stream.eat_keyword(Keyword::Leading).is_some() {
            Some(TrimDirection::Leading)
        } else if self.stream.eat_keyword(Keyword::Trailing).is_some() {
            Some(TrimDirection::Trailing)
        } else if self.stream.eat_keyword(Keyword::Both).is_some() {
            Some(TrimDirection::Both)
        } else {
            None
        };
        let direction = direction.map(|d| {
            self.ctx.enum_value(direction_location, NodeType::EnumSqlTrimTarget, d)
        });
        let first = if self.stream.at_keyword(Keyword::From) {
            None
        } else {
            self.expression()
        };
        let (characters, input) = if self.stream.eat_keyword(Keyword::From).is_some() {
            (first, self.expression())
        } else {
            (None, first)
        };
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let location = self.span_from(trim_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlTrim,
            vec![
                (AttributeKey::SqlTrimDirection, direction),
                (AttributeKey::SqlTrimCharacters, characters),
                (AttributeKey::SqlTrimInput, input),
            ],
        ))
    }
}

/// The infix constructs of the expression grammar.
#[derive(Debug, Clone, Copy)]
enum InfixOp {
    Binary(ExpressionOperator),
    CastOp,
    Collate,
    AtTimeZone,
    Is,
    PostfixIs(ExpressionOperator),
    NegatedComparison,
    Between { negated: bool },
    In { negated: bool },
    Like { operator: ExpressionOperator },
}
