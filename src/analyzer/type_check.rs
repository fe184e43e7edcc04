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

//! Type checking utilities for the semantic analyzer.
//!
//! This module provides:
//! - The result type of expression analysis ([`ExprType`])
//! - Compatibility checks between a declared type and an expression
//! - Detection of identifiers that collide with generated names

use super::Analyzer;
use crate::ast::Type;
use crate::error::{CompileError, ErrorCode, Span};

/// The type an expression resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprType {
    /// A plain value of the given type.
    Value(Type),
    /// The result of calling a function declared to return the given type.
    Call(Type),
    /// An error was already reported for this expression.
    Unknown,
}

impl ExprType {
    /// Check if this resolves to the given type, as a value or as a call result.
    ///
    /// `Unknown` resolves to every type.
    pub fn resolves_to(&self, ty: Type) -> bool {
        match self {
            ExprType::Value(t) | ExprType::Call(t) => *t == ty,
            ExprType::Unknown => true,
        }
    }

    /// Get the underlying type, if known.
    pub fn ty(&self) -> Option<Type> {
        match self {
            ExprType::Value(t) | ExprType::Call(t) => Some(*t),
            ExprType::Unknown => None,
        }
    }

    /// Check if an error was already reported.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ExprType::Unknown)
    }
}

impl std::fmt::Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprType::Value(t) => write!(f, "{}", t),
            ExprType::Call(t) => write!(f, "call returning {}", t),
            ExprType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Check if an identifier is spelled like a generated temporary or label.
pub fn is_reserved_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some('t') | Some('c') | Some('L') => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Extension trait for type checking utilities.
pub trait TypeChecker {
    /// Report a mismatch unless `actual` resolves to `expected`.
    fn expect_type(
        &mut self,
        expected: Type,
        actual: ExprType,
        message: impl Into<String>,
        span: &Span,
        hint: &str,
    ) -> bool;

    /// Report a declaration whose name collides with generated names.
    fn check_reserved_identifier(&mut self, name: &str, span: &Span);
}

impl TypeChecker for Analyzer {
    fn expect_type(
        &mut self,
        expected: Type,
        actual: ExprType,
        message: impl Into<String>,
        span: &Span,
        hint: &str,
    ) -> bool {
        if actual.resolves_to(expected) {
            return true;
        }
        self.error(
            CompileError::new(ErrorCode::TypeMismatch, message, span.clone()).with_hint(hint),
        );
        false
    }

    fn check_reserved_identifier(&mut self, name: &str, span: &Span) {
        if is_reserved_identifier(name) {
            self.error(
                CompileError::new(
                    ErrorCode::ReservedIdentifier,
                    format!("Identifier '{}' is reserved for generated code", name),
                    span.clone(),
                )
                .with_hint("Names of the form t<number>, c<number> and L<number> are reserved"),
            );
        }
    }
}
