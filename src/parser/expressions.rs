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

//! Expression parsing for the parser.
//!
//! This module provides expression parsing functionality:
//! - Logical chains (`&&`, `||`) over arithmetic chains (`+`, `-`)
//! - Terms (grouping, function calls, fragments)
//! - Fragments (identifiers, numerals, `-x`, `!x`, booleans)
//! - Call argument lists
//!
//! All binary operators are left-associative.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{
    ArithOp, Argument, Expr, ExprKind, Fragment, FuncCall, LogicalOp, Operand,
};
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// Parse an expression.
    fn parse_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an arithmetic chain.
    fn parse_arith_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a term.
    fn parse_term(&mut self) -> Result<Expr, CompileError>;

    /// Parse a fragment.
    fn parse_fragment(&mut self) -> Result<Expr, CompileError>;

    /// Parse a function call after its name.
    fn parse_call(&mut self, name: String, start: Span) -> Result<FuncCall, CompileError>;

    /// Parse a single call argument.
    fn parse_argument(&mut self) -> Result<Argument, CompileError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_arith_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::And) => LogicalOp::And,
                Some(Token::Or) => LogicalOp::Or,
                _ => break,
            };
            self.advance();
            let right = self.parse_arith_expression()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::LogOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_arith_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => ArithOp::Add,
                Some(Token::Minus) => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            let span = left.span.merge(&right.span);
            left = Expr::new(
                ExprKind::ArithOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, CompileError> {
        match self.peek() {
            Some(Token::LeftParen) => {
                let (_, start) = self.expect(&Token::LeftParen, "Expected '('")?;
                let inner = self.parse_expression()?;
                self.expect(&Token::RightParen, "Expected ')' after expression")?;
                let span = self.span_from(&start);
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }
            Some(Token::Identifier(_)) if matches!(self.peek_ahead(1), Some(Token::LeftParen)) => {
                let (name, start) = self.expect_identifier("Expected function name")?;
                let call = self.parse_call(name, start)?;
                let span = call.span.clone();
                Ok(Expr::new(ExprKind::Call(call), span))
            }
            _ => self.parse_fragment(),
        }
    }

    fn parse_fragment(&mut self) -> Result<Expr, CompileError> {
        let Some((token, start)) = self.advance() else {
            return Err(self.error(
                ErrorCode::UnexpectedEndOfFile,
                "Expected expression, found end of file",
            ));
        };

        let fragment = match token {
            Token::Identifier(name) => Fragment::IdNum {
                operand: Operand::Ident(name),
                negated: false,
            },
            Token::Number(text) if text == "0" => Fragment::Zero,
            Token::Number(text) => Fragment::IdNum {
                operand: Operand::Number(text),
                negated: false,
            },
            Token::True => Fragment::Bool(true),
            Token::False => Fragment::Bool(false),
            Token::Minus => {
                let operand = match self.peek() {
                    Some(Token::Identifier(name)) => Operand::Ident(name.clone()),
                    Some(Token::Number(text)) => Operand::Number(text.clone()),
                    _ => {
                        return Err(self.error(
                            ErrorCode::ExpectedExpression,
                            "Expected identifier or number after '-'",
                        ));
                    }
                };
                self.advance();
                Fragment::IdNum {
                    operand,
                    negated: true,
                }
            }
            Token::Not => {
                let (name, _) = self.expect_identifier("Expected identifier after '!'")?;
                Fragment::NotId(name)
            }
            other => {
                self.position -= 1;
                return Err(self.error(
                    ErrorCode::ExpectedExpression,
                    format!("Expected expression, found '{}'", other),
                ));
            }
        };

        let span = self.span_from(&start);
        Ok(Expr::fragment(fragment, span))
    }

    fn parse_call(&mut self, name: String, start: Span) -> Result<FuncCall, CompileError> {
        self.expect(&Token::LeftParen, "Expected '(' after function name")?;

        let mut args = Vec::new();
        if !self.check(&Token::RightParen) {
            args.push(self.parse_argument()?);
            while self.match_token(&Token::Comma) {
                args.push(self.parse_argument()?);
            }
        }

        self.expect(&Token::RightParen, "Expected ')' after arguments")?;
        let span = self.span_from(&start);
        Ok(FuncCall::new(name, args, span))
    }

    fn parse_argument(&mut self) -> Result<Argument, CompileError> {
        match self.peek() {
            Some(Token::Identifier(_)) | Some(Token::Number(_)) => match self.advance() {
                Some((Token::Identifier(name), span)) => {
                    Ok(Argument::new(Operand::Ident(name), span))
                }
                Some((Token::Number(text), span)) => Ok(Argument::new(Operand::Number(text), span)),
                _ => Err(self.error(ErrorCode::ExpectedExpression, "Expected argument")),
            },
            Some(found) => Err(self.error(
                ErrorCode::ExpectedExpression,
                format!("Expected identifier or number as argument, found '{}'", found),
            )),
            None => Err(self.error(
                ErrorCode::UnexpectedEndOfFile,
                "Expected argument, found end of file",
            )),
        }
    }
}
