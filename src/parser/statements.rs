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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing functionality:
//! - Variable and constant declarations
//! - Assignment statements
//! - Call statements
//! - Nested blocks and `skip`

use super::blocks::BlockParser;
use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Assignment, ConstDecl, Declaration, Statement, StatementKind, VarDecl};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse a statement.
    fn parse_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a statement starting with an identifier.
    fn parse_identifier_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse statements until `}` or `return`.
    fn parse_statements(&mut self) -> Result<Vec<Statement>, CompileError>;

    /// Parse `var` and `const` declarations while they appear.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, CompileError>;

    /// Parse a variable declaration.
    fn parse_var_decl(&mut self) -> Result<VarDecl, CompileError>;

    /// Parse a constant declaration.
    fn parse_const_decl(&mut self) -> Result<ConstDecl, CompileError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        match self.peek() {
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::Skip) => {
                let (_, start_span) = self.expect(&Token::Skip, "Expected 'skip'")?;
                self.expect(&Token::Semicolon, "Expected ';' after 'skip'")?;
                let span = self.span_from(&start_span);
                Ok(Statement::new(StatementKind::Skip, span))
            }
            Some(Token::LeftBrace) => {
                let block = self.parse_block()?;
                let span = block.span.clone();
                Ok(Statement::new(StatementKind::Brackets(block), span))
            }
            Some(Token::Identifier(_)) => self.parse_identifier_statement(),
            Some(Token::Var) | Some(Token::Const) => Err(self.error(
                ErrorCode::ExpectedStatement,
                "Declarations must come before the first statement",
            )),
            Some(found) => Err(self.error(
                ErrorCode::ExpectedStatement,
                format!("Expected statement, found '{}'", found),
            )),
            None => Err(self.error(
                ErrorCode::UnexpectedEndOfFile,
                "Expected statement, found end of file",
            )),
        }
    }

    fn parse_identifier_statement(&mut self) -> Result<Statement, CompileError> {
        let (name, start_span) = self.expect_identifier("Expected identifier")?;

        match self.peek() {
            Some(Token::Assign) => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect(&Token::Semicolon, "Expected ';' after assignment")?;
                let span = self.span_from(&start_span);
                let assign = Assignment {
                    target: name,
                    value,
                    span: span.clone(),
                };
                Ok(Statement::new(StatementKind::Assignment(assign), span))
            }
            Some(Token::LeftParen) => {
                let call = self.parse_call(name, start_span.clone())?;
                self.expect(&Token::Semicolon, "Expected ';' after function call")?;
                let span = self.span_from(&start_span);
                Ok(Statement::new(StatementKind::Call(call), span))
            }
            _ => Err(self.error(
                ErrorCode::UnexpectedToken,
                format!("Expected '=' or '(' after '{}'", name),
            )),
        }
    }

    fn parse_statements(&mut self) -> Result<Vec<Statement>, CompileError> {
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.check_any(&[Token::RightBrace, Token::Return]) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, CompileError> {
        let mut declarations = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Var) => declarations.push(Declaration::Var(self.parse_var_decl()?)),
                Some(Token::Const) => {
                    declarations.push(Declaration::Const(self.parse_const_decl()?))
                }
                _ => break,
            }
        }
        Ok(declarations)
    }

    fn parse_var_decl(&mut self) -> Result<VarDecl, CompileError> {
        let (_, start_span) = self.expect(&Token::Var, "Expected 'var'")?;
        let (name, _) = self.expect_identifier("Expected variable name after 'var'")?;
        self.expect(&Token::Colon, "Expected ':' after variable name")?;
        let var_type = self.parse_type()?;
        self.expect(&Token::Semicolon, "Expected ';' after variable declaration")?;

        let span = self.span_from(&start_span);
        Ok(VarDecl::new(name, var_type, span))
    }

    fn parse_const_decl(&mut self) -> Result<ConstDecl, CompileError> {
        let (_, start_span) = self.expect(&Token::Const, "Expected 'const'")?;
        let (name, _) = self.expect_identifier("Expected constant name after 'const'")?;
        self.expect(&Token::Colon, "Expected ':' after constant name")?;
        let const_type = self.parse_type()?;
        self.expect(&Token::Assign, "Expected '=' in constant declaration")?;
        let value = self.parse_expression()?;
        self.expect(&Token::Semicolon, "Expected ';' after constant declaration")?;

        let span = self.span_from(&start_span);
        Ok(ConstDecl::new(name, const_type, value, span))
    }
}
