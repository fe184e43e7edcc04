// CCAL - A semantic analyser and three-address code generator for CCAL
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Operator checking for the semantic analyzer.
//!
//! This module provides type checking for binary operators:
//! - Arithmetic operators (+, -)
//! - Logical operators (&&, ||)
//! - Relational operators (<, >, <=, >=)
//! - Equality operators (==, !=)

use super::type_check::{ExprType, TypeChecker};
use super::Analyzer;
use crate::ast::{ArithOp, CompOp, EqualityOp, Expr, LogicalOp, Type};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for operator type checking.
pub trait OperatorChecker {
    /// Check the operands of `+` or `-` and return the result type.
    fn check_arith_operands(
        &mut self,
        op: ArithOp,
        left: ExprType,
        right: ExprType,
        expr: &Expr,
    ) -> ExprType;

    /// Check the operands of `&&` or `||` in an expression and return the result type.
    fn check_logical_operands(
        &mut self,
        op: LogicalOp,
        left: ExprType,
        right: ExprType,
        expr: &Expr,
    ) -> ExprType;

    /// Check the operands of a relational comparison.
    fn check_comparison(
        &mut self,
        op: CompOp,
        left: ExprType,
        right: ExprType,
        span: &Span,
        hint: &str,
    );

    /// Check the operands of `==` or `!=`.
    fn check_equality(
        &mut self,
        op: EqualityOp,
        left: ExprType,
        right: ExprType,
        span: &Span,
        hint: &str,
    );
}

impl OperatorChecker for Analyzer {
    fn check_arith_operands(
        &mut self,
        op: ArithOp,
        left: ExprType,
        right: ExprType,
        expr: &Expr,
    ) -> ExprType {
        let hint = expr.to_string();
        for operand in [left, right] {
            self.expect_type(
                Type::Integer,
                operand,
                format!(
                    "Operator '{}' requires integer operands, found {}",
                    op.symbol(),
                    operand
                ),
                &expr.span,
                &hint,
            );
        }
        ExprType::Value(Type::Integer)
    }

    fn check_logical_operands(
        &mut self,
        op: LogicalOp,
        left: ExprType,
        right: ExprType,
        expr: &Expr,
    ) -> ExprType {
        let hint = expr.to_string();
        for operand in [left, right] {
            self.expect_type(
                Type::Boolean,
                operand,
                format!(
                    "Operator '{}' requires boolean operands, found {}",
                    op.symbol(),
                    operand
                ),
                &expr.span,
                &hint,
            );
        }
        ExprType::Value(Type::Boolean)
    }

    fn check_comparison(
        &mut self,
        op: CompOp,
        left: ExprType,
        right: ExprType,
        span: &Span,
        hint: &str,
    ) {
        for operand in [left, right] {
            self.expect_type(
                Type::Integer,
                operand,
                format!(
                    "Comparison '{}' requires integer operands, found {}",
                    op.symbol(),
                    operand
                ),
                span,
                hint,
            );
        }
    }

    fn check_equality(
        &mut self,
        op: EqualityOp,
        left: ExprType,
        right: ExprType,
        span: &Span,
        hint: &str,
    ) {
        if left.is_unknown() || right.is_unknown() || left == right {
            return;
        }
        self.error(
            CompileError::new(
                ErrorCode::TypeMismatch,
                format!(
                    "Cannot compare {} and {} with '{}'",
                    left,
                    right,
                    op.symbol()
                ),
                span.clone(),
            )
            .with_hint(hint),
        );
    }
}
