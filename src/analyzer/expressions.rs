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

//! Expression analysis for the semantic analyzer.
//!
//! This module provides expression analysis functionality:
//! - Resolution of identifiers in value position
//! - Typing of fragments, arithmetic and logical chains
//! - Delegation of calls to the function analyzer

use super::entity::State;
use super::functions::FunctionAnalyzer;
use super::operators::OperatorChecker;
use super::type_check::{ExprType, TypeChecker};
use super::Analyzer;
use crate::ast::{Expr, ExprKind, Fragment, Operand, Type};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for expression analysis.
pub trait ExpressionAnalyzer {
    /// Analyze an expression and return its type.
    fn analyze_expression(&mut self, expr: &Expr) -> ExprType;

    /// Analyze a fragment and return its type.
    fn analyze_fragment(&mut self, fragment: &Fragment, span: &Span) -> ExprType;

    /// Resolve an identifier used as a value.
    fn resolve_value(&mut self, name: &str, span: &Span, hint: &str) -> ExprType;
}

impl ExpressionAnalyzer for Analyzer {
    fn analyze_expression(&mut self, expr: &Expr) -> ExprType {
        match &expr.kind {
            ExprKind::ArithOp { left, op, right } => {
                let left_type = self.analyze_expression(left);
                let right_type = self.analyze_expression(right);
                self.check_arith_operands(*op, left_type, right_type, expr)
            }
            ExprKind::LogOp { left, op, right } => {
                let left_type = self.analyze_expression(left);
                let right_type = self.analyze_expression(right);
                self.check_logical_operands(*op, left_type, right_type, expr)
            }
            ExprKind::Paren(inner) => self.analyze_expression(inner),
            ExprKind::Call(call) => self.analyze_function_call(call),
            ExprKind::Frag(fragment) => self.analyze_fragment(fragment, &expr.span),
        }
    }

    fn analyze_fragment(&mut self, fragment: &Fragment, span: &Span) -> ExprType {
        let hint = fragment.to_string();
        match fragment {
            Fragment::IdNum {
                operand: Operand::Number(_),
                ..
            }
            | Fragment::Zero => ExprType::Value(Type::Integer),
            Fragment::Bool(_) => ExprType::Value(Type::Boolean),
            Fragment::IdNum {
                operand: Operand::Ident(name),
                negated: false,
            } => self.resolve_value(name, span, &hint),
            Fragment::IdNum {
                operand: Operand::Ident(name),
                negated: true,
            } => {
                let ty = self.resolve_value(name, span, &hint);
                if ty.is_unknown() {
                    return ty;
                }
                self.expect_type(
                    Type::Integer,
                    ty,
                    format!("Unary '-' requires an integer operand, found {}", ty),
                    span,
                    &hint,
                );
                ExprType::Value(Type::Integer)
            }
            Fragment::NotId(name) => {
                let ty = self.resolve_value(name, span, &hint);
                if ty.is_unknown() {
                    return ty;
                }
                self.expect_type(
                    Type::Boolean,
                    ty,
                    format!("Operator '!' requires a boolean operand, found {}", ty),
                    span,
                    &hint,
                );
                ExprType::Value(Type::Boolean)
            }
        }
    }

    fn resolve_value(&mut self, name: &str, span: &Span, hint: &str) -> ExprType {
        let Some((value_type, state)) = self
            .symbols
            .lookup(name)
            .map(|entity| (entity.value_type(), entity.state))
        else {
            self.error(
                CompileError::new(
                    ErrorCode::UndefinedVariable,
                    format!("Undefined variable '{}'", name),
                    span.clone(),
                )
                .with_hint(hint),
            );
            return ExprType::Unknown;
        };

        match value_type {
            None => {
                self.error(
                    CompileError::new(
                        ErrorCode::FunctionUsedAsValue,
                        format!("'{}' is a function and cannot be used as a value", name),
                        span.clone(),
                    )
                    .with_hint(hint),
                );
                ExprType::Unknown
            }
            Some(ty) => {
                if state == State::Declared {
                    self.error(
                        CompileError::new(
                            ErrorCode::UnassignedVariable,
                            format!("Variable '{}' is used before it was assigned a value", name),
                            span.clone(),
                        )
                        .with_hint(hint),
                    );
                }
                ExprType::Value(ty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::entity::Entity;

    fn span() -> Span {
        Span::new(0, 1)
    }

    #[test]
    fn test_literal_fragments() {
        let mut analyzer = Analyzer::new();
        assert_eq!(
            analyzer.analyze_expression(&Expr::number("7", span())),
            ExprType::Value(Type::Integer)
        );
        assert_eq!(
            analyzer.analyze_fragment(&Fragment::Zero, &span()),
            ExprType::Value(Type::Integer)
        );
        assert_eq!(
            analyzer.analyze_fragment(&Fragment::Bool(true), &span()),
            ExprType::Value(Type::Boolean)
        );
        assert!(analyzer.errors.is_empty());
    }

    #[test]
    fn test_undefined_identifier_is_unknown() {
        let mut analyzer = Analyzer::new();
        let ty = analyzer.analyze_expression(&Expr::ident("missing", span()));
        assert_eq!(ty, ExprType::Unknown);
        assert_eq!(analyzer.errors.len(), 1);
        assert_eq!(analyzer.errors[0].code, ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_unassigned_identifier_keeps_its_type() {
        let mut analyzer = Analyzer::new();
        analyzer
            .symbols
            .define(Entity::variable("x", Type::Boolean, span()))
            .unwrap();
        let ty = analyzer.analyze_expression(&Expr::ident("x", span()));
        assert_eq!(ty, ExprType::Value(Type::Boolean));
        assert_eq!(analyzer.errors[0].code, ErrorCode::UnassignedVariable);
    }

    #[test]
    fn test_not_requires_boolean() {
        let mut analyzer = Analyzer::new();
        analyzer
            .symbols
            .define(Entity::constant("k", Type::Integer, span()))
            .unwrap();
        let ty = analyzer.analyze_fragment(&Fragment::NotId("k".to_string()), &span());
        assert_eq!(ty, ExprType::Value(Type::Boolean));
        assert_eq!(analyzer.errors.len(), 1);
        assert_eq!(analyzer.errors[0].code, ErrorCode::TypeMismatch);
    }
}
