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

//! Condition parsing for `if` and `while`.
//!
//! Comparison operands are arithmetic chains, so `&&` and `||` inside a
//! condition always connect conditions. An atom starting with `(`, `!`,
//! `true` or `false` is first tried as a comparison and falls back to the
//! grouped, negated or literal form.

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{CompOp, Condition, ConditionKind, EqualityOp, LogicalOp};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for condition parsing.
pub trait ConditionParser {
    /// Parse a condition.
    fn parse_condition(&mut self) -> Result<Condition, CompileError>;

    /// Parse a single condition atom.
    fn parse_condition_atom(&mut self) -> Result<Condition, CompileError>;

    /// Parse `arith compop arith`.
    fn parse_comparison(&mut self) -> Result<Condition, CompileError>;
}

impl<'a> ConditionParser for Parser<'a> {
    fn parse_condition(&mut self) -> Result<Condition, CompileError> {
        let mut left = self.parse_condition_atom()?;

        loop {
            let op = match self.peek() {
                Some(Token::And) => LogicalOp::And,
                Some(Token::Or) => LogicalOp::Or,
                _ => break,
            };
            self.advance();
            let right = self.parse_condition_atom()?;
            let span = left.span.merge(&right.span);
            left = Condition::new(
                ConditionKind::BinOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_condition_atom(&mut self) -> Result<Condition, CompileError> {
        let checkpoint = self.position;
        let comparison_error = match self.parse_comparison() {
            Ok(cond) => return Ok(cond),
            Err(err) => err,
        };
        self.position = checkpoint;

        let Some(start) = self.peek_span() else {
            return Err(comparison_error);
        };

        match self.peek() {
            Some(Token::Not) => {
                self.advance();
                let inner = self.parse_condition_atom()?;
                let span = self.span_from(&start);
                Ok(Condition::new(ConditionKind::Neg(Box::new(inner)), span))
            }
            Some(Token::LeftParen) => {
                self.advance();
                let inner = self.parse_condition()?;
                self.expect(&Token::RightParen, "Expected ')' after condition")?;
                let span = self.span_from(&start);
                Ok(Condition::new(ConditionKind::Paren(Box::new(inner)), span))
            }
            Some(Token::True) => {
                self.advance();
                Ok(Condition::new(ConditionKind::Bool(true), start))
            }
            Some(Token::False) => {
                self.advance();
                Ok(Condition::new(ConditionKind::Bool(false), start))
            }
            _ => Err(comparison_error),
        }
    }

    fn parse_comparison(&mut self) -> Result<Condition, CompileError> {
        let left = self.parse_arith_expression()?;

        enum Op {
            Comp(CompOp),
            Eq(EqualityOp),
        }

        let op = match self.peek() {
            Some(Token::Less) => Op::Comp(CompOp::Less),
            Some(Token::Greater) => Op::Comp(CompOp::Greater),
            Some(Token::LessEqual) => Op::Comp(CompOp::LessEqual),
            Some(Token::GreaterEqual) => Op::Comp(CompOp::GreaterEqual),
            Some(Token::EqualEqual) => Op::Eq(EqualityOp::Equal),
            Some(Token::BangEqual) => Op::Eq(EqualityOp::NotEqual),
            Some(found) => {
                return Err(self.error(
                    ErrorCode::ExpectedCondition,
                    format!("Expected comparison operator, found '{}'", found),
                ))
            }
            None => {
                return Err(self.error(
                    ErrorCode::UnexpectedEndOfFile,
                    "Expected comparison operator, found end of file",
                ))
            }
        };
        self.advance();

        let right = self.parse_arith_expression()?;
        let span = left.span.merge(&right.span);
        let kind = match op {
            Op::Comp(op) => ConditionKind::Comp { left, op, right },
            Op::Eq(op) => ConditionKind::EqualDif { left, op, right },
        };
        Ok(Condition::new(kind, span))
    }
}
