//! CREATE TABLE / CREATE VIEW and type specifications.

use sql_ast::enums::{
    CharacterType, ColumnConstraint, ConstraintAttribute, KeyActionCommand, KeyActionTrigger,
    KeyMatch, NumericType, OnCommitOption, TableConstraint, TempType,
};
use sql_ast::{AttributeKey, NodeType, StatementType};
use sql_scanner::{Keyword, TokenType};

use crate::context::NodeValue;

use super::Parser;

impl Parser<'_> {
    /// `CREATE [temp] TABLE ...` or `CREATE [temp] VIEW ...`
    pub(crate) fn create_statement(&mut self) -> Option<(NodeValue, StatementType)> {
        let create_token = self.stream.eat_keyword(Keyword::Create)?;
        let begin = create_token.location;

        let temp_begin = self.stream.location();
        let temp = if self.stream.eat_keyword(Keyword::Temp).is_some()
            || self.stream.eat_keyword(Keyword::Temporary).is_some()
        {
            Some(TempType::Local)
        } else if self.stream.eat_keyword(Keyword::Global).is_some() {
            self.stream.eat_keyword(Keyword::Temp);
            self.stream.eat_keyword(Keyword::Temporary);
            Some(TempType::Global)
        } else if self.stream.eat_keyword(Keyword::Local).is_some() {
            self.stream.eat_keyword(Keyword::Temp);
            self.stream.eat_keyword(Keyword::Temporary);
            Some(TempType::Local)
        } else if self.stream.eat_keyword(Keyword::Unlogged).is_some() {
            Some(TempType::Unlogged)
        } else {
            None
        };
        let temp = temp.map(|t| {
            let location = self.span_from(temp_begin);
            self.ctx.enum_value(location, NodeType::EnumSqlTempType, t)
        });

        if self.stream.eat_keyword(Keyword::Table).is_some() {
            let node = self.create_table_tail(begin, temp)?;
            return Some((node, StatementType::CreateTable));
        }
        if self.stream.eat_keyword(Keyword::View).is_some() {
            let node = self.create_view_tail(begin, temp)?;
            return Some((node, StatementType::CreateView));
        }
        self.error_expected("TABLE or VIEW after CREATE");
        None
    }

    fn create_table_tail(
        &mut self,
        begin: sql_ast::Location,
        temp: Option<NodeValue>,
    ) -> Option<NodeValue> {
        let if_not_exists = if let Some(if_token) = self.stream.eat_keyword(Keyword::If) {
            if self.stream.eat_keyword(Keyword::Not).is_none()
                || self.stream.eat_keyword(Keyword::Exists).is_none()
            {
                self.error_expected("NOT EXISTS after IF");
            }
            let location = self.span_from(if_token.location);
            Some(self.ctx.literal(location, NodeType::LiteralBool, 1))
        } else {
            None
        };
        let name = self.qualified_name()?;

        if self.stream.eat(TokenType::LeftParen).is_none() {
            self.error_expected("'(' after the table name");
            return None;
        }
        let elements_begin = self.stream.location();
        let mut elements = Vec::new();
        if !self.stream.at(TokenType::RightParen) {
            loop {
                match self.table_element() {
                    Some(element) => elements.push(element),
                    None => break,
                }
                if self.stream.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
        }
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let elements_location = self.span_from(elements_begin);
        let elements = self.ctx.array(elements_location, elements);

        let on_commit = if self.stream.eat_keyword(Keyword::On).is_some() {
            let on_begin = self.stream.location();
            if self.stream.eat_keyword(Keyword::Commit).is_none() {
                self.error_expected("COMMIT after ON");
            }
            let option = if self.stream.eat_keyword(Keyword::Preserve).is_some() {
                self.stream.eat_keyword(Keyword::Rows);
                Some(OnCommitOption::PreserveRows)
            } else if self.stream.eat_keyword(Keyword::Delete).is_some() {
                self.stream.eat_keyword(Keyword::Rows);
                Some(OnCommitOption::DeleteRows)
            } else if self.stream.eat_keyword(Keyword::Drop).is_some() {
                Some(OnCommitOption::Drop)
            } else {
                self.error_expected("PRESERVE ROWS, DELETE ROWS, or DROP");
                None
            };
            option.map(|o| {
                let location = self.span_from(on_begin);
                self.ctx.enum_value(location, NodeType::EnumSqlOnCommitOption, o)
            })
        } else {
            None
        };

        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlCreateTable,
            vec![
                (AttributeKey::SqlCreateTableTemp, temp),
                (AttributeKey::SqlCreateTableIfNotExists, if_not_exists),
                (AttributeKey::SqlCreateTableName, Some(name)),
                (AttributeKey::SqlCreateTableElements, Some(elements)),
                (AttributeKey::SqlCreateTableOnCommit, on_commit),
            ],
        ))
    }

    fn create_view_tail(
        &mut self,
        begin: sql_ast::Location,
        temp: Option<NodeValue>,
    ) -> Option<NodeValue> {
        let name = self.qualified_name()?;
        let columns =
            if self.stream.at(TokenType::LeftParen) { self.name_list() } else { None };
        if self.stream.eat_keyword(Keyword::As).is_none() {
            self.error_expected("AS in CREATE VIEW");
        }
        let statement = self.select_statement();
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlCreateView,
            vec![
                (AttributeKey::SqlCreateViewTemp, temp),
                (AttributeKey::SqlCreateViewName, Some(name)),
                (AttributeKey::SqlCreateViewColumns, columns),
                (AttributeKey::SqlCreateViewStatement, statement),
            ],
        ))
    }

    /// A table element: a column definition or a table constraint.
    fn table_element(&mut self) -> Option<NodeValue> {
        if self.stream.at_keyword(Keyword::Constraint)
            || self.stream.at_keyword(Keyword::Primary)
            || self.stream.at_keyword(Keyword::Unique)
            || self.stream.at_keyword(Keyword::Check)
            || self.stream.at_keyword(Keyword::Foreign)
        {
            return self.table_constraint();
        }
        self.column_def()
    }

    /// `name type [column_constraint ...]`
    fn column_def(&mut self) -> Option<NodeValue> {
        let Some(name_token) = self.eat_name() else {
            self.error_expected("a column name");
            return None;
        };
        let name = self.name_value(name_token);
        let type_spec = self.type_name();
        let constraints_begin = self.stream.location();
        let mut constraints = Vec::new();
        while let Some(constraint) = self.column_constraint() {
            constraints.push(constraint);
        }
        let constraints = if constraints.is_empty() {
            None
        } else {
            let location = self.span_from(constraints_begin);
            Some(self.ctx.array(location, constraints))
        };
        let location = self.span_from(name_token.location);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlColumnDef,
            vec![
                (AttributeKey::SqlColumnDefName, Some(name)),
                (AttributeKey::SqlColumnDefType, type_spec),
                (AttributeKey::SqlColumnDefConstraints, constraints),
            ],
        ))
    }

    /// One column constraint, or `None` when the cursor leaves the
    /// constraint grammar.
    fn column_constraint(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        let constraint_name = if self.stream.eat_keyword(Keyword::Constraint).is_some() {
            match self.eat_name() {
                Some(token) => {
                    let name = self.name_value(token);
                    Some(name)
                }
                None => {
                    self.error_expected("a constraint name");
                    None
                }
            }
        } else {
            None
        };
        let (constraint, value) = if self.stream.eat_keyword(Keyword::Not).is_some() {
            if self.stream.eat_keyword(Keyword::Null).is_none() {
                self.error_expected("NULL after NOT");
            }
            (ColumnConstraint::NotNull, None)
        } else if self.stream.eat_keyword(Keyword::Null).is_some() {
            (ColumnConstraint::Null, None)
        } else if self.stream.eat_keyword(Keyword::Default).is_some() {
            (ColumnConstraint::Default, self.expression())
        } else if self.stream.eat_keyword(Keyword::Primary).is_some() {
            self.stream.eat_keyword(Keyword::Key);
            (ColumnConstraint::PrimaryKey, None)
        } else if self.stream.eat_keyword(Keyword::Unique).is_some() {
            (ColumnConstraint::Unique, None)
        } else if self.stream.eat_keyword(Keyword::Check).is_some() {
            let value = if self.stream.eat(TokenType::LeftParen).is_some() {
                let value = self.expression();
                if self.stream.eat(TokenType::RightParen).is_none() {
                    self.error_expected("')'");
                }
                value
            } else {
                self.error_expected("'(' after CHECK");
                None
            };
            (ColumnConstraint::Check, value)
        } else if self.stream.eat_keyword(Keyword::References).is_some() {
            let target = self.qualified_name();
            let target = target.map(|name| {
                if self.stream.at(TokenType::LeftParen) {
                    // Referenced column list rides along in the value slot.
                    if let Some(columns) = self.name_list() {
                        let location = name.location().union(columns.location());
                        return self.ctx.array(location, vec![name, columns]);
                    }
                }
                name
            });
            self.key_match();
            while self.key_action().is_some() {}
            (ColumnConstraint::References, target)
        } else if self.stream.eat_keyword(Keyword::Collate).is_some() {
            (ColumnConstraint::Collate, self.qualified_name())
        } else {
            if constraint_name.is_some() {
                self.error_expected("a constraint after CONSTRAINT name");
            }
            return None;
        };
        self.constraint_attributes();
        let type_node = self.ctx.enum_value(
            self.span_from(begin),
            NodeType::EnumSqlColumnConstraint,
            constraint,
        );
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlColumnConstraintSpec,
            vec![
                (AttributeKey::SqlColumnConstraintName, constraint_name),
                (AttributeKey::SqlColumnConstraintType, Some(type_node)),
                (AttributeKey::SqlColumnConstraintValue, value),
            ],
        ))
    }

    /// `[CONSTRAINT name] PRIMARY KEY (..) | UNIQUE (..) | CHECK (..) |
    /// FOREIGN KEY (..) REFERENCES ...`
    fn table_constraint(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();
        let constraint_name = if self.stream.eat_keyword(Keyword::Constraint).is_some() {
            self.eat_name().map(|token| self.name_value(token))
        } else {
            None
        };
        let (constraint, columns, argument) =
            if self.stream.eat_keyword(Keyword::Primary).is_some() {
                self.stream.eat_keyword(Keyword::Key);
                (TableConstraint::PrimaryKey, self.name_list(), None)
            } else if self.stream.eat_keyword(Keyword::Unique).is_some() {
                (TableConstraint::Unique, self.name_list(), None)
            } else if self.stream.eat_keyword(Keyword::Check).is_some() {
                let value = if self.stream.eat(TokenType::LeftParen).is_some() {
                    let value = self.expression();
                    if self.stream.eat(TokenType::RightParen).is_none() {
                        self.error_expected("')'");
                    }
                    value
                } else {
                    self.error_expected("'(' after CHECK");
                    None
                };
                (TableConstraint::Check, None, value)
            } else if self.stream.eat_keyword(Keyword::Foreign).is_some() {
                self.stream.eat_keyword(Keyword::Key);
                let columns = self.name_list();
                let argument = if self.stream.eat_keyword(Keyword::References).is_some() {
                    let target = self.qualified_name();
                    if self.stream.at(TokenType::LeftParen) {
                        self.name_list();
                    }
                    self.key_match();
                    while self.key_action().is_some() {}
                    target
                } else {
                    self.error_expected("REFERENCES in FOREIGN KEY");
                    None
                };
                (TableConstraint::ForeignKey, columns, argument)
            } else {
                self.error_expected("a table constraint");
                return None;
            };
        self.constraint_attributes();
        let type_node = self.ctx.enum_value(
            self.span_from(begin),
            NodeType::EnumSqlTableConstraint,
            constraint,
        );
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlTableConstraintSpec,
            vec![
                (AttributeKey::SqlTableConstraintName, constraint_name),
                (AttributeKey::SqlTableConstraintType, Some(type_node)),
                (AttributeKey::SqlTableConstraintColumns, columns),
                (AttributeKey::SqlTableConstraintArgument, argument),
            ],
        ))
    }

    /// `MATCH FULL | PARTIAL | SIMPLE`, discarded beyond validation.
    fn key_match(&mut self) -> Option<KeyMatch> {
        self.stream.eat_keyword(Keyword::Match)?;
        if self.stream.eat_keyword(Keyword::Partial).is_some() {
            Some(KeyMatch::Partial)
        } else if self.stream.eat_keyword(Keyword::Simple).is_some() {
            Some(KeyMatch::Simple)
        } else {
            self.stream.eat_keyword(Keyword::Full);
            Some(KeyMatch::Full)
        }
    }

    /// `ON DELETE/UPDATE <action>`, discarded beyond validation.
    fn key_action(&mut self) -> Option<(KeyActionTrigger, KeyActionCommand)> {
        if !self.stream.at_keyword(Keyword::On) {
            return None;
        }
        self.stream.advance();
        let trigger = if self.stream.eat_keyword(Keyword::Delete).is_some() {
            KeyActionTrigger::Delete
        } else if self.stream.eat_keyword(Keyword::Update).is_some() {
            KeyActionTrigger::Update
        } else {
            self.error_expected("DELETE or UPDATE after ON");
            return None;
        };
        let command = if self.stream.eat_keyword(Keyword::Restrict).is_some() {
            KeyActionCommand::Restrict
        } else if self.stream.eat_keyword(Keyword::Cascade).is_some() {
            KeyActionCommand::Cascade
        } else if self.stream.eat_keyword(Keyword::Set).is_some() {
            if self.stream.eat_keyword(Keyword::Null).is_some() {
                KeyActionCommand::SetNull
            } else {
                self.stream.eat_keyword(Keyword::Default);
                KeyActionCommand::SetDefault
            }
        } else {
            self.stream.eat_keyword(Keyword::No);
            self.stream.eat_keyword(Keyword::Action);
            KeyActionCommand::NoAction
        };
        Some((trigger, command))
    }

    /// `[NOT] DEFERRABLE [INITIALLY DEFERRED/IMMEDIATE]`, discarded.
    fn constraint_attributes(&mut self) -> Option<ConstraintAttribute> {
        let mut last = None;
        loop {
            if self.stream.eat_keyword(Keyword::Deferrable).is_some() {
                last = Some(ConstraintAttribute::Deferrable);
            } else if self.stream.at_keyword(Keyword::Not) {
                // Two tokens of lookahead: NOT NULL belongs to the next
                // column constraint, only NOT DEFERRABLE is ours.
                let before = self.stream.pos();
                self.stream.advance();
                if self.stream.eat_keyword(Keyword::Deferrable).is_none() {
                    self.stream.rewind_to(before);
                    return last;
                }
                last = Some(ConstraintAttribute::NotDeferrable);
            } else if self.stream.eat_keyword(Keyword::Initially).is_some() {
                if self.stream.eat_keyword(Keyword::Deferred).is_some() {
                    last = Some(ConstraintAttribute::InitiallyDeferred);
                } else {
                    self.stream.eat_keyword(Keyword::Immediate);
                    last = Some(ConstraintAttribute::InitiallyImmediate);
                }
            } else {
                return last;
            }
        }
    }

    /// A type specification.
    pub(crate) fn type_name(&mut self) -> Option<NodeValue> {
        let begin = self.stream.location();

        // Numeric types
        let numeric = if self.stream.eat_keyword(Keyword::Smallint).is_some() {
            Some(NumericType::Int2)
        } else if self.stream.eat_keyword(Keyword::Int).is_some()
            || self.stream.eat_keyword(Keyword::Integer).is_some()
        {
            Some(NumericType::Int4)
        } else if self.stream.eat_keyword(Keyword::Bigint).is_some() {
            Some(NumericType::Int8)
        } else if self.stream.eat_keyword(Keyword::Real).is_some() {
            Some(NumericType::Float4)
        } else if self.stream.eat_keyword(Keyword::Double).is_some() {
            self.stream.eat_keyword(Keyword::Precision);
            Some(NumericType::Float8)
        } else if self.stream.eat_keyword(Keyword::Float).is_some() {
            Some(NumericType::Float8)
        } else if self.stream.eat_keyword(Keyword::Numeric).is_some()
            || self.stream.eat_keyword(Keyword::Decimal).is_some()
            || self.stream.eat_keyword(Keyword::Dec).is_some()
        {
            Some(NumericType::Numeric)
        } else if self.stream.eat_keyword(Keyword::Boolean).is_some() {
            Some(NumericType::Bool)
        } else {
            None
        };
        if let Some(numeric) = numeric {
            let base = self.ctx.enum_value(
                self.span_from(begin),
                NodeType::EnumSqlNumericType,
                numeric,
            );
            let modifiers = self.type_modifiers();
            let location = self.span_from(begin);
            return Some(self.ctx.object(
                location,
                NodeType::ObjectSqlNumericTypeSpec,
                vec![
                    (AttributeKey::SqlNumericTypeBase, Some(base)),
                    (AttributeKey::SqlNumericTypeModifiers, modifiers),
                ],
            ));
        }

        // Character types
        let character = if self.stream.eat_keyword(Keyword::Varchar).is_some() {
            Some(CharacterType::VaryingChar)
        } else if self.stream.eat_keyword(Keyword::Char).is_some()
            || self.stream.eat_keyword(Keyword::Character).is_some()
            || self.stream.eat_keyword(Keyword::Nchar).is_some()
            || self.stream.eat_keyword(Keyword::National).is_some()
        {
            if self.stream.eat_keyword(Keyword::Character).is_some() {
                // NATIONAL CHARACTER
            }
            if self.stream.eat_keyword(Keyword::Varying).is_some() {
                Some(CharacterType::VaryingChar)
            } else {
                Some(CharacterType::BlankPaddedChar)
            }
        } else {
            None
        };
        if let Some(character) = character {
            let base = self.ctx.enum_value(
                self.span_from(begin),
                NodeType::EnumSqlCharacterType,
                character,
            );
            let length = self.type_modifiers();
            let location = self.span_from(begin);
            return Some(self.ctx.object(
                location,
                NodeType::ObjectSqlCharacterTypeSpec,
                vec![
                    (AttributeKey::SqlCharacterTypeBase, Some(base)),
                    (AttributeKey::SqlCharacterTypeLength, length),
                ],
            ));
        }

        // Generic types: a qualified name plus optional modifiers
        let name = self.qualified_name()?;
        let modifiers = self.type_modifiers();
        let location = self.span_from(begin);
        Some(self.ctx.object(
            location,
            NodeType::ObjectSqlGenericType,
            vec![
                (AttributeKey::SqlGenericTypeName, Some(name)),
                (AttributeKey::SqlGenericTypeModifiers, modifiers),
            ],
        ))
    }

    /// `( expr, ... )` after a type name.
    fn type_modifiers(&mut self) -> Option<NodeValue> {
        if !self.stream.at(TokenType::LeftParen) {
            return None;
        }
        let open = self.stream.advance()?;
        let mut modifiers = Vec::new();
        if !self.stream.at(TokenType::RightParen) {
            loop {
                match self.expression() {
                    Some(modifier) => modifiers.push(modifier),
                    None => break,
                }
                if self.stream.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
        }
        if self.stream.eat(TokenType::RightParen).is_none() {
            self.error_expected("')'");
        }
        let location = self.span_from(open.location);
        Some(self.ctx.array(location, modifiers))
    }
}
