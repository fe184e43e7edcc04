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

//! Block and function parsing for the parser.
//!
//! This module provides block and function parsing functionality:
//! - Function definitions with their trailing `return (...)`
//! - Parameter lists
//! - The `main` section
//! - Braced statement blocks

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Block, Func, Main, Param};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for block and function parsing.
pub trait BlockParser {
    /// Parse a function definition.
    fn parse_function_def(&mut self) -> Result<Func, CompileError>;

    /// Parse a parameter list.
    fn parse_parameter_list(&mut self) -> Result<Vec<Param>, CompileError>;

    /// Parse a single parameter.
    fn parse_parameter(&mut self) -> Result<Param, CompileError>;

    /// Parse the `main` section.
    fn parse_main(&mut self) -> Result<Main, CompileError>;

    /// Parse a braced block of statements.
    fn parse_block(&mut self) -> Result<Block, CompileError>;
}

impl<'a> BlockParser for Parser<'a> {
    fn parse_function_def(&mut self) -> Result<Func, CompileError> {
        let start_span = self.peek_span().unwrap_or_else(|| self.previous_span());
        let return_type = self.parse_type()?;
        let (name, _) = self.expect_identifier("Expected function name")?;

        self.expect(&Token::LeftParen, "Expected '(' after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect(&Token::RightParen, "Expected ')' after parameters")?;

        let (_, body_start) = self.expect(&Token::LeftBrace, "Expected '{' before function body")?;
        let declarations = self.parse_declarations()?;
        let statements = self.parse_statements()?;
        let body = Block::new(statements, self.span_from(&body_start));

        self.expect(&Token::Return, "Expected 'return' at the end of the function body")?;
        self.expect(&Token::LeftParen, "Expected '(' after 'return'")?;
        let return_value = if self.check(&Token::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&Token::RightParen, "Expected ')' after return value")?;
        self.expect(&Token::Semicolon, "Expected ';' after return")?;
        self.expect(&Token::RightBrace, "Expected '}' after return")?;

        Ok(Func {
            name,
            params,
            declarations,
            body,
            return_type,
            return_value,
            span: self.span_from(&start_span),
        })
    }

    fn parse_parameter_list(&mut self) -> Result<Vec<Param>, CompileError> {
        let mut params = Vec::new();

        if !self.check(&Token::RightParen) {
            params.push(self.parse_parameter()?);
            while self.match_token(&Token::Comma) {
                params.push(self.parse_parameter()?);
            }
        }

        Ok(params)
    }

    fn parse_parameter(&mut self) -> Result<Param, CompileError> {
        let (name, start_span) = self.expect_identifier("Expected parameter name")?;
        self.expect(&Token::Colon, "Expected ':' after parameter name")?;
        let param_type = self.parse_type()?;
        let span = self.span_from(&start_span);
        Ok(Param::new(name, param_type, span))
    }

    fn parse_main(&mut self) -> Result<Main, CompileError> {
        if !self.check(&Token::Main) {
            let message = match self.peek() {
                Some(found) => format!("Expected 'main', found '{}'", found),
                None => "Expected 'main', found end of file".to_string(),
            };
            return Err(self.error(ErrorCode::ExpectedMain, message));
        }
        let (_, start_span) = self.expect(&Token::Main, "Expected 'main'")?;

        let (_, body_start) = self.expect(&Token::LeftBrace, "Expected '{' after 'main'")?;
        let declarations = self.parse_declarations()?;
        let statements = self.parse_statements()?;
        if self.check(&Token::Return) {
            return Err(self.error(
                ErrorCode::ExpectedStatement,
                "'main' cannot contain a return",
            ));
        }
        self.expect(&Token::RightBrace, "Expected '}' after main body")?;

        let body = Block::new(statements, self.span_from(&body_start));
        Ok(Main::new(declarations, body, self.span_from(&start_span)))
    }

    fn parse_block(&mut self) -> Result<Block, CompileError> {
        let (_, start_span) = self.expect(&Token::LeftBrace, "Expected '{'")?;
        let statements = self.parse_statements()?;
        if self.check(&Token::Return) {
            return Err(self.error(
                ErrorCode::ExpectedStatement,
                "'return' is only allowed at the end of a function body",
            ));
        }
        self.expect(&Token::RightBrace, "Expected '}' after block")?;
        Ok(Block::new(statements, self.span_from(&start_span)))
    }
}
