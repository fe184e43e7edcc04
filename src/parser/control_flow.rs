// CCAL - A semantic analyser and three-address code generator for CCAL
//
// Copyright (C) 2026 Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Control flow statement parsing for the parser.
//!
//! This module provides control flow statement parsing:
//! - If/else statements (the else branch is mandatory)
//! - While loops

use super::blocks::BlockParser;
use super::conditions::ConditionParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{IfElseStatement, LoopStatement, Statement, StatementKind};
use crate::error::CompileError;
use crate::lexer::Token;

/// Extension trait for control flow parsing.
pub trait ControlFlowParser {
    /// Parse an if/else statement.
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a while statement.
    fn parse_while_statement(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> ControlFlowParser for Parser<'a> {
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::If, "Expected 'if'")?;

        let condition = self.parse_condition()?;
        let then_block = self.parse_block()?;

        self.expect(&Token::Else, "Expected 'else' after if block")?;
        let else_block = self.parse_block()?;

        let span = start_span.merge(&else_block.span);
        let if_stmt = IfElseStatement {
            condition,
            then_block,
            else_block,
        };

        Ok(Statement::new(StatementKind::IfElse(if_stmt), span))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start_span) = self.expect(&Token::While, "Expected 'while'")?;

        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        let span = start_span.merge(&body.span);
        let loop_stmt = LoopStatement { condition, body };

        Ok(Statement::new(StatementKind::Loop(loop_stmt), span))
    }
}
