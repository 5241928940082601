//! SELECT statements: set operations, clauses, table references, windows.

use sql_ast::enums::{
    CombineModifier, CombineOperation, JoinType, OrderDirection, OrderNullRule,
    RowLockingBlockBehavior, RowLockingStrength, SampleCountUnit, WindowBoundDirection,
    WindowBoundMode, WindowExclusionMode, WindowRangeMode,
};
use sql_ast::{AttributeKey, NodeType};
use sql_scanner::{Keyword, Operator, TokenType};

use crate::context::NodeValue;

use super::Parser;

impl Parser<'_> {
    /// A full select statement, including trailing set operations.
    pub(crate) fn select_statement(&mut self) -> Option<NodeValue> {
        let mut left = self.select_operand()?;
        loop {
            let operation = if self.stream.at_keyword(Keyword::Union) {
                CombineOperation::Union
            } else if self.stream.at_keyword(Keyword::Except) {
                CombineOperation::Except
            } else if self.stream.at_keyword(Keyword::Intersect) {
                CombineOperation::Intersect
            } else {
                break;
            };
            let op_token = self.stream.advance()?;
            let modifier = if let Some(token) = self.stream.eat_keyword(Keyword::All) {
                Some(self.ctx.enum_value(
                    token.location,
                    NodeType::EnumSqlCombineModifier,
                    CombineModifier::All,
                ))
            } else if let Some(token) = self.stream.eat_keyword(Keyword::Distinct) {
                Some(self.ctx.enum_value(
                    token.location,
                    NodeType::EnumSqlCombineModifier,
                    CombineModifier::Distinct,
                ))
            } else {
                None
            };
            let Some(right) = self.select_operand() else {
                self.error_expected("a select after the set operation");
                return Some(left);
            };
            let begin = left.location();
            let operation_node = self.ctx.enum_value(
                op_token.location,
                NodeType::EnumSqlCombineOperation,
                operation,
            );
            let input_location = left.location().union(right.location());
            let input = self.ctx.array(input_location, vec![left, right]);
            let location = self.span_from(begin);
            left = self.ctx.object(
                location,
                NodeType::ObjectSqlCombine,
                vec![
                    (AttributeKey::SqlCombineOperation, Some(operation_node)),
                    (AttributeKey::SqlCombineModifier, modifier),
                    (AttributeKey::SqlCombineInput, Some(input)),
                ],
            );
        }
        Some(left)
    }

    /// One operand of a set operation: a select core or a parenthesized
    /// select statement.
    fn select_operand(&mut self) -> Option<NodeValue> {
        if self.stream.at(TokenType::LeftParen) {
            self.stream.advance();
            let inner = self.select_statement();
            if self.stream.eat(TokenType::RightParen).is_none() {
                self.error_expected("')'");
            }
            return inner;
        }
        self.select_core()
    }

    /// `[WITH ctes] SELECT ...` with all clauses.
    fn select_core(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        let ctes = self.with_clause();

        let Some(select_token) = self.stream.eat_keyword(Keyword::Select) else {
            self.error_expected("SELECT");
            return None;
        };
        let begin = if ctes.is_some() { begin } else { select_token.location };

        let distinct = self.stream.eat_keyword(Keyword::Distinct).map(|token| {
            self.ctx.literal(token.location, NodeType::LiteralBool, 1)
        });
        if distinct.is_none() {
            self.stream.eat_keyword(Keyword::All);
        }

        let targets = self.result_targets();
        let from = self.from_clause();
        let where_clause = if self.stream.eat_keyword(Keyword::Where).is_some() {
            self.expression()
        } else {
            None
        };
        let group_by = self.group_by_clause();
        let having = if self.stream.eat_keyword(Keyword::Having).is_some() {
            self.expression()
        } else {
            None
        };
        let windows = self.window_clause();
        let order_by = self.order_by_clause();
        let (limit, offset) = self.limit_clause();
        let row_locking = self.row_locking_clause();

        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlSelect,
            vec![
                (AttributeKey::SqlSelectWithCtes, ctes),
                (AttributeKey::SqlSelectDistinct, distinct),
                (AttributeKey::SqlSelectTargets, targets),
                (AttributeKey::SqlSelectFrom, from),
                (AttributeKey::SqlSelectWhere, where_clause),
                (AttributeKey::SqlSelectGroupBy, group_by),
                (AttributeKey::SqlSelectHaving, having),
                (AttributeKey::SqlSelectWindows, windows),
                (AttributeKey::SqlSelectOrderBy, order_by),
                (AttributeKey::SqlSelectLimit, limit),
                (AttributeKey::SqlSelectOffset, offset),
                (AttributeKey::SqlSelectRowLocking, row_locking),
            ],
        ))
    }

    /// `WITH [RECURSIVE] name [(cols)] AS (select), ...`
    fn with_clause(&mut self) -> Option<NodeValue> {
        let with_token = self.stream.eat_keyword(Keyword::With)?;
        self.stream.eat_keyword(Keyword::Recursive);
        let mut ctes = Vec::new();
        loop {
            let Some(name_token) = self.eat_name() else {
                self.error_expected("a CTE name");
                break;
            };
            let name = self.name_value(name_token);
            let columns =
                if self.stream.at(TokenType::LeftParen) { self.name_list() } else { None };
            if self.stream.eat_keyword(Keyword::As).is_none() {
                self.error_expected("AS in CTE");
            }
            let statement = if self.stream.eat(TokenType::LeftParen).is_some() {
                let inner = self.select_statement();
                if self.stream.eat(TokenType::RightParen).is_none() {
                    self.error_expected("')'");
                }
                inner
            } else {
                self.error_expected("'(' before the CTE body");
                None
            };
            let location = self.span_from(name_token.location);
            let cte = self.ctx.object(
                location,
                NodeType::ObjectSqlCte,
                vec![
                    (AttributeKey::SqlCteName, Some(name)),
                    (AttributeKey::SqlCteColumns, columns),
                    (AttributeKey::SqlCteStatement, statement),
                ],
            );
            ctes.push(cte);
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        let location = self.span_from(with_token.location);
        Some(self.ctx.array(location, ctes))
    }

    /// The projection list.
    fn result_targets(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        let mut targets = Vec::new();
        loop {
            let target_begin = self.stream.location();
            let target = if let Some(star) = self.stream.eat_op(Operator::Star) {
                let star_node =
                    self.ctx.literal(star.location, NodeType::LiteralBool, 1);
                self.ctx.object(
                    star.location,
                    NodeType::ObjectSqlResultTarget,
                    vec![(AttributeKey::SqlResultTargetStar, Some(star_node))],
                )
            } else {
                let value = self.expression()?;
                let alias = self.alias();
                let location = self.span_from(target_begin);
                self.ctx.object(
                    location,
                    NodeType::ObjectSqlResultTarget,
                    vec![
                        (AttributeKey::SqlResultTargetValue, Some(value)),
                        (AttributeKey::SqlResultTargetAlias, alias),
                    ],
                )
            };
            targets.push(target);
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        let location = self.span_from(begin);
        Some(self.ctx.array(location, targets))
    }

    /// `FROM ref, ref, ...`; the array location includes the keyword.
    fn from_clause(&mut self) -> Option<NodeValue> {
        let from_token = self.stream.eat_keyword(Keyword::From)?;
        let mut refs = Vec::new();
        loop {
            match self.table_ref() {
                Some(table_ref) => refs.push(table_ref),
                None => break,
            }
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        let location = self.span_from(from_token.location);
        Some(self.ctx.array(location, refs))
    }

    /// A table reference with any number of chained joins.
    fn table_ref(&mut self) -> Option<NodeValue> {
        let mut left = self.table_base()?;
        loop {
            let natural = self.stream.eat_keyword(Keyword::Natural).is_some();
            let join_begin = self.stream.location();
            let join_type = if self.stream.eat_keyword(Keyword::Cross).is_some() {
                Some(JoinType::Cross)
            } else if self.stream.eat_keyword(Keyword::Inner).is_some() {
                Some(JoinType::Inner)
            } else if self.stream.eat_keyword(Keyword::Left).is_some() {
                self.stream.eat_keyword(Keyword::Outer);
                Some(JoinType::Left)
            } else if self.stream.eat_keyword(Keyword::Right).is_some() {
                self.stream.eat_keyword(Keyword::Outer);
                Some(JoinType::Right)
            } else if self.stream.eat_keyword(Keyword::Full).is_some() {
                self.stream.eat_keyword(Keyword::Outer);
                Some(JoinType::Full)
            } else if self.stream.at_keyword(Keyword::Join) {
                Some(JoinType::Inner)
            } else {
                if natural {
                    self.error_expected("a join after NATURAL");
                }
                break;
            };
            let Some(join_type) = join_type else { break };
            if self.stream.eat_keyword(Keyword::Join).is_none() {
                self.error_expected("JOIN");
                break;
            }
            let Some(right) = self.table_base() else {
                self.error_expected("a table reference after JOIN");
                break;
            };
            let join_type_node =
                self.ctx.enum_value(join_begin, NodeType::EnumSqlJoinType, join_type);
            let on_clause = if self.stream.eat_keyword(Keyword::On).is_some() {
                self.expression()
            } else {
                None
            };
            let using_clause = if on_clause.is_none()
                && self.stream.eat_keyword(Keyword::Using).is_some()
            {
                self.name_list()
            } else {
                None
            };
            let begin = left.location();
            let location = self.span_from(begin);
            left = self.ctx.object(
                location,
                NodeType::ObjectSqlJoinedTable,
                vec![
                    (AttributeKey::SqlJoinType, Some(join_type_node)),
                    (AttributeKey::SqlJoinLeft, Some(left)),
                    (AttributeKey::SqlJoinRight, Some(right)),
                    (AttributeKey::SqlJoinOn, on_clause),
                    (AttributeKey::SqlJoinUsing, using_clause),
                ],
            );
        }
        Some(left)
    }

    /// A base table reference: relation, derived table, or parenthesized
    /// join tree.
    fn table_base(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        let lateral = self.stream.eat_keyword(Keyword::Lateral).map(|token| {
            self.ctx.literal(token.location, NodeType::LiteralBool, 1)
        });
        if self.stream.at(TokenType::LeftParen) {
            self.stream.advance();
            if self.stream.at_keyword(Keyword::Select) || self.stream.at_keyword(Keyword::With) {
                let subquery = self.select_statement();
                if self.stream.eat(TokenType::RightParen).is_none() {
                    self.error_expected("')'");
                }
                let alias = self.alias();
                let column_aliases = if alias.is_some() && self.stream.at(TokenType::LeftParen) {
                    self.name_list()
                } else {
                    None
                };
                let location = self.span_from(begin);
                return Some(self.ctx.object(
                    location,
                    NodeType::ObjectSqlTableRef,
                    vec![
                        (AttributeKey::SqlTablerefLateral, lateral),
                        (AttributeKey::SqlTablerefSubquery, subquery),
                        (AttributeKey::SqlTablerefAlias, alias),
                        (AttributeKey::SqlTablerefColumnAliases, column_aliases),
                    ],
                ));
            }
            let inner = self.table_ref();
            if self.stream.eat(TokenType::RightParen).is_none() {
                self.error_expected("')'");
            }
            return inner;
        }
        let name = self.qualified_name()?;
        let alias = self.alias();
        let sample = self.table_sample();
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlTableRef,
            vec![
                (AttributeKey::SqlTablerefLateral, lateral),
                (AttributeKey::SqlTablerefName, Some(name)),
                (AttributeKey::SqlTablerefAlias, alias),
                (AttributeKey::SqlTablerefSample, sample),
            ],
        ))
    }

    /// `TABLESAMPLE count [ROWS | PERCENT]`
    fn table_sample(&mut self) -> Option<NodeValue> {
        let sample_token = self.stream.eat_keyword(Keyword::Tablesample)?;
        let count = self.expression();
        let at_percent_word = self.stream.at(TokenType::Identifier)
            && self
                .stream
                .current()
                .and_then(|t| self.scanned.names.text(t.name_id))
                .is_some_and(|text| text.eq_ignore_ascii_case("percent"));
        let unit = if let Some(token) = self.stream.eat_keyword(Keyword::Rows) {
            Some(self.ctx.enum_value(
                token.location,
                NodeType::EnumSqlSampleUnitType,
                SampleCountUnit::Rows,
            ))
        } else if self.stream.at_op(Operator::Percent) || at_percent_word {
            let token = self.stream.advance()?;
            Some(self.ctx.enum_value(
                token.location,
                NodeType::EnumSqlSampleUnitType,
                SampleCountUnit::Percent,
            ))
        } else {
            None
        };
        let location = self.span_from(sample_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlSample,
            vec![
                (AttributeKey::SqlSampleCount, count),
                (AttributeKey::SqlSampleUnit, unit),
            ],
        ))
    }

    /// `GROUP BY item, ...` with CUBE/ROLLUP/() items.
    fn group_by_clause(&mut self) -> Option<NodeValue> {
        let group_token = self.stream.eat_keyword(Keyword::Group)?;
        if self.stream.eat_keyword(Keyword::By).is_none() {
            self.error_expected("BY after GROUP");
        }
        let mut items = Vec::new();
        loop {
            let item_begin = self.stream.location();
            let item_type = if self.stream.eat_keyword(Keyword::Cube).is_some() {
                sql_ast::enums::GroupByItemType::Cube
            } else if self.stream.eat_keyword(Keyword::Rollup).is_some() {
                sql_ast::enums::GroupByItemType::Rollup
            } else {
                sql_ast::enums::GroupByItemType::Expression
            };
            let args = match item_type {
                sql_ast::enums::GroupByItemType::Expression => {
                    self.expression().map(|expr| {
                        let location = expr.location();
                        self.ctx.array(location, vec![expr])
                    })
                }
                _ => {
                    if self.stream.eat(TokenType::LeftParen).is_some() {
                        let mut args = Vec::new();
                        loop {
                            match self.expression() {
                                Some(expr) => args.push(expr),
                                None => break,
                            }
                            if self.stream.eat(TokenType::Comma).is_none() {
                                break;
                            }
                        }
                        if self.stream.eat(TokenType::RightParen).is_none() {
                            self.error_expected("')'");
                        }
                        let location = self.span_from(item_begin);
                        Some(self.ctx.array(location, args))
                    } else {
                        self.error_expected("'('");
                        None
                    }
                }
            };
            let type_node = self.ctx.enum_value(
                item_begin,
                NodeType::EnumSqlGroupByItemType,
                item_type,
            );
            let location = self.span_from(item_begin);
            let item = self.ctx.object(
                location,
                NodeType::ObjectSqlGroupByItem,
                vec![
                    (AttributeKey::SqlGroupByItemType, Some(type_node)),
                    (AttributeKey::SqlGroupByItemArgs, args),
                ],
            );
            items.push(item);
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        let location = self.span_from(group_token.location);
        Some(self.ctx.array(location, items))
    }

    /// `WINDOW name AS (def), ...`
    fn window_clause(&mut self) -> Option<NodeValue> {
        let window_token = self.stream.eat_keyword(Keyword::Window)?;
        let mut defs = Vec::new();
        loop {
            let Some(name_token) = self.eat_name() else {
                self.error_expected("a window name");
                break;
            };
            let name = self.name_value(name_token);
            if self.stream.eat_keyword(Keyword::As).is_none() {
                self.error_expected("AS in window definition");
            }
            match self.window_definition(Some(name)) {
                Some(def) => defs.push(def),
                None => break,
            }
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        let location = self.span_from(window_token.location);
        Some(self.ctx.array(location, defs))
    }

    /// `( [PARTITION BY exprs] [ORDER BY specs] [frame] )`
    pub(crate) fn window_definition(&mut self, name: Option<NodeValue>) -> Option<NodeValue> {
        let Some(open) = self.stream.eat(TokenType::LeftParen) else {
            self.error_expected("'('");
            return None;
        };
        let begin = name.map(|n| n.location()).unwrap_or(open.location);
        let partition_by = if self.stream.eat_keyword(Keyword::Partition).is_some() {
            if self.stream.eat_keyword(Keyword::By).is_none() {
                self.error_expected("BY after PARTITION");
            }
            let list_begin = self.stream.location();
            let mut exprs = Vec::new();
            loop {
                match self.expression() {
                    Some(expr) => exprs.push(expr),
                    None => break,
                }
                if self.stream.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
            let location = self.span_from(list_begin);
            Some(self.ctx.array(location, exprs))
        } else {
            None
        };
        let order_by = self.order_by_clause();
        let frame = self.window_frame();
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlWindowDef,
            vec![
                (AttributeKey::SqlWindowDefName, name),
                (AttributeKey::SqlWindowDefPartitionBy, partition_by),
                (AttributeKey::SqlWindowDefOrderBy, order_by),
                (AttributeKey::SqlWindowDefFrame, frame),
            ],
        ))
    }

    /// `(RANGE|ROWS|GROUPS) bound` or `... BETWEEN bound AND bound`, with
    /// an optional EXCLUDE clause.
    fn window_frame(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        let mode = if self.stream.eat_keyword(Keyword::Range).is_some() {
            WindowRangeMode::Range
        } else if self.stream.eat_keyword(Keyword::Rows).is_some() {
            WindowRangeMode::Rows
        } else if self.stream.eat_keyword(Keyword::Groups).is_some() {
            WindowRangeMode::Groups
        } else {
            return None;
        };
        let mode_node = self.ctx.enum_value(begin, NodeType::EnumSqlWindowRangeMode, mode);
        let (start, end) = if self.stream.eat_keyword(Keyword::Between).is_some() {
            let start = self.frame_bound();
            if self.stream.eat_keyword(Keyword::And).is_none() {
                self.error_expected("AND between frame bounds");
            }
            let end = self.frame_bound();
            (start, end)
        } else {
            (self.frame_bound(), None)
        };
        let exclusion = if self.stream.eat_keyword(Keyword::Exclude).is_some() {
            let excl_begin = self.stream.location();
            let mode = if self.stream.eat_keyword(Keyword::Current).is_some() {
                self.stream.eat_keyword(Keyword::Row);
                Some(WindowExclusionMode::CurrentRow)
            } else if self.stream.eat_keyword(Keyword::Group).is_some() {
                Some(WindowExclusionMode::Group)
            } else if self.stream.eat_keyword(Keyword::Ties).is_some() {
                Some(WindowExclusionMode::Ties)
            } else if self.stream.eat_keyword(Keyword::No).is_some() {
                self.stream.eat_keyword(Keyword::Others);
                Some(WindowExclusionMode::NoOthers)
            } else {
                self.error_expected("an exclusion mode");
                None
            };
            mode.map(|m| {
                let location = self.span_from(excl_begin);
                self.ctx.enum_value(location, NodeType::EnumSqlWindowExclusionMode, m)
            })
        } else {
            None
        };
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlWindowFrame,
            vec![
                (AttributeKey::SqlWindowFrameMode, Some(mode_node)),
                (AttributeKey::SqlWindowFrameStart, start),
                (AttributeKey::SqlWindowFrameEnd, end),
                (AttributeKey::SqlWindowFrameExclusion, exclusion),
            ],
        ))
    }

    /// `UNBOUNDED PRECEDING/FOLLOWING | CURRENT ROW | expr PRECEDING/FOLLOWING`
    fn frame_bound(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        if self.stream.eat_keyword(Keyword::Unbounded).is_some() {
            let mode = if self.stream.eat_keyword(Keyword::Preceding).is_some() {
                WindowBoundMode::UnboundedPreceding
            } else {
                if self.stream.eat_keyword(Keyword::Following).is_none() {
                    self.error_expected("PRECEDING or FOLLOWING");
                }
                WindowBoundMode::UnboundedFollowing
            };
            let mode_node =
                self.ctx.enum_value(self.span_from(begin), NodeType::EnumSqlWindowBoundMode, mode);
            let location = self.span_from(begin);
            return Some(self.ctx.object(
                location,
                NodeType::ObjectSqlWindowBound,
                vec![(AttributeKey::SqlWindowBoundMode, Some(mode_node))],
            ));
        }
        if self.stream.eat_keyword(Keyword::Current).is_some() {
            self.stream.eat_keyword(Keyword::Row);
            let mode_node = self.ctx.enum_value(
                self.span_from(begin),
                NodeType::EnumSqlWindowBoundMode,
                WindowBoundMode::CurrentRow,
            );
            let location = self.span_from(begin);
            return Some(self.ctx.object(
                location,
                NodeType::ObjectSqlWindowBound,
                vec![(AttributeKey::SqlWindowBoundMode, Some(mode_node))],
            ));
        }
        // Stop below AND so a BETWEEN frame keeps its bound separator.
        let value = self.expression_bp(super::expression::bp::NOT)?;
        let direction = if self.stream.eat_keyword(Keyword::Preceding).is_some() {
            WindowBoundDirection::Preceding
        } else {
            if self.stream.eat_keyword(Keyword::Following).is_none() {
                self.error_expected("PRECEDING or FOLLOWING");
            }
            WindowBoundDirection::Following
        };
        let mode_node = self.ctx.enum_value(
            self.span_from(begin),
            NodeType::EnumSqlWindowBoundMode,
            WindowBoundMode::Value,
        );
        let direction_node = self.ctx.enum_value(
            self.span_from(begin),
            NodeType::EnumSqlWindowBoundDirection,
            direction,
        );
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlWindowBound,
            vec![
                (AttributeKey::SqlWindowBoundMode, Some(mode_node)),
                (AttributeKey::SqlWindowBoundDirection, Some(direction_node)),
                (AttributeKey::SqlWindowBoundValue, Some(value)),
            ],
        ))
    }

    /// `ORDER BY expr [ASC|DESC] [NULLS FIRST|LAST], ...`
    pub(crate) fn order_by_clause(&mut self) -> Option<NodeValue> {
        let order_token = self.stream.eat_keyword(Keyword::Order)?;
        if self.stream.eat_keyword(Keyword::By).is_none() {
            self.error_expected("BY after ORDER");
        }
        let mut specs = Vec::new();
        loop {
            let spec_begin = self.stream.location();
            let Some(value) = self.expression() else {
                break;
            };
            let direction = if let Some(token) = self.stream.eat_keyword(Keyword::Asc) {
                Some(self.ctx.enum_value(
                    token.location,
                    NodeType::EnumSqlOrderDirection,
                    OrderDirection::Ascending,
                ))
            } else if let Some(token) = self.stream.eat_keyword(Keyword::Desc) {
                Some(self.ctx.enum_value(
                    token.location,
                    NodeType::EnumSqlOrderDirection,
                    OrderDirection::Descending,
                ))
            } else {
                None
            };
            let null_rule = if let Some(nulls_token) = self.stream.eat_keyword(Keyword::Nulls) {
                let rule = if self.stream.eat_keyword(Keyword::First).is_some() {
                    OrderNullRule::NullsFirst
                } else {
                    if self.stream.eat_keyword(Keyword::Last).is_none() {
                        self.error_expected("FIRST or LAST after NULLS");
                    }
                    OrderNullRule::NullsLast
                };
                let location = self.span_from(nulls_token.location);
                Some(self.ctx.enum_value(location, NodeType::EnumSqlOrderNullRule, rule))
            } else {
                None
            };
            let location = self.span_from(spec_begin);
            let spec = self.ctx.object(
                location,
                NodeType::ObjectSqlOrderSpec,
                vec![
                    (AttributeKey::SqlOrderValue, Some(value)),
                    (AttributeKey::SqlOrderDirection, direction),
                    (AttributeKey::SqlOrderNullRule, null_rule),
                ],
            );
            specs.push(spec);
            if self.stream.eat(TokenType::Comma).is_none() {
                break;
            }
        }
        let location = self.span_from(order_token.location);
        Some(self.ctx.array(location, specs))
    }

    /// `LIMIT n` and `OFFSET n`, either order.
    fn limit_clause(&mut self) -> (Option<NodeValue>, Option<NodeValue>) {
        let mut limit = None;
        let mut offset = None;
        loop {
            if limit.is_none() && self.stream.eat_keyword(Keyword::Limit).is_some() {
                limit = if self.stream.eat_keyword(Keyword::All).is_some() {
                    None
                } else {
                    self.expression()
                };
            } else if offset.is_none() && self.stream.eat_keyword(Keyword::Offset).is_some() {
                offset = self.expression();
            } else {
                break;
            }
        }
        (limit, offset)
    }

    /// `FOR UPDATE/SHARE [OF names] [NOWAIT | SKIP LOCKED]`
    fn row_locking_clause(&mut self) -> Option<NodeValue> {
        let for_token = self.stream.eat_keyword(Keyword::For)?;
        let strength_begin = self.stream.location();
        let strength = if self.stream.eat_keyword(Keyword::Update).is_some() {
            RowLockingStrength::Update
        } else if self.stream.eat_keyword(Keyword::No).is_some() {
            self.stream.eat_keyword(Keyword::Key);
            self.stream.eat_keyword(Keyword::Update);
            RowLockingStrength::NoKeyUpdate
        } else if self.stream.eat_keyword(Keyword::Share).is_some() {
            RowLockingStrength::Share
        } else if self.stream.eat_keyword(Keyword::Key).is_some() {
            self.stream.eat_keyword(Keyword::Share);
            RowLockingStrength::KeyShare
        } else {
            self.error_expected("a row locking strength");
            return None;
        };
        let strength_node = self.ctx.enum_value(
            self.span_from(strength_begin),
            NodeType::EnumSqlRowLockingStrength,
            strength,
        );
        let of_names = if self.stream.eat_keyword(Keyword::Of).is_some() {
            let list_begin = self.stream.location();
            let mut names = Vec::new();
            while let Some(name) = self.qualified_name() {
                names.push(name);
                if self.stream.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
            let location = self.span_from(list_begin);
            Some(self.ctx.array(location, names))
        } else {
            None
        };
        let behavior = if let Some(token) = self.stream.eat_keyword(Keyword::Nowait) {
            Some(self.ctx.enum_value(
                token.location,
                NodeType::EnumSqlRowLockingBlockBehavior,
                RowLockingBlockBehavior::Nowait,
            ))
        } else if let Some(token) = self.stream.eat_keyword(Keyword::Skip) {
            self.stream.eat_keyword(Keyword::Locked);
            let location = self.span_from(token.location);
            Some(self.ctx.enum_value(
                location,
                NodeType::EnumSqlRowLockingBlockBehavior,
                RowLockingBlockBehavior::SkipLocked,
            ))
        } else {
            None
        };
        let location = self.span_from(for_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlRowLocking,
            vec![
                (AttributeKey::SqlRowLockingStrength, Some(strength_node)),
                (AttributeKey::SqlRowLockingOf, of_names),
                (AttributeKey::SqlRowLockingBlockBehavior, behavior),
            ],
        ))
    }
}
