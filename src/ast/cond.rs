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

//! Condition AST nodes, the predicates of `if` and `while`.

use crate::error::Span;

use super::{Expr, LogicalOp};

/// A condition in the CCAL language.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The kind of condition.
    pub kind: ConditionKind,
    /// The source span of this condition.
    pub span: Span,
}

impl Condition {
    /// Create a new condition.
    pub fn new(kind: ConditionKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionKind {
    /// A relational comparison of two integers.
    Comp {
        left: Expr,
        op: CompOp,
        right: Expr,
    },

    /// `==` or `!=`.
    EqualDif {
        left: Expr,
        op: EqualityOp,
        right: Expr,
    },

    /// `!condition`.
    Neg(Box<Condition>),

    /// A parenthesized condition.
    Paren(Box<Condition>),

    /// `left && right` or `left || right`.
    BinOp {
        left: Box<Condition>,
        op: LogicalOp,
        right: Box<Condition>,
    },

    /// `true` or `false`.
    Bool(bool),
}

/// A relational operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl CompOp {
    /// Get the operator as written in source code.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompOp::Less => "<",
            CompOp::Greater => ">",
            CompOp::LessEqual => "<=",
            CompOp::GreaterEqual => ">=",
        }
    }
}

/// An equality operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityOp {
    Equal,
    NotEqual,
}

impl EqualityOp {
    /// Get the operator as written in source code.
    pub fn symbol(&self) -> &'static str {
        match self {
            EqualityOp::Equal => "==",
            EqualityOp::NotEqual => "!=",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ConditionKind::Comp { left, op, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            ConditionKind::EqualDif { left, op, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            ConditionKind::Neg(inner) => write!(f, "!{}", inner),
            ConditionKind::Paren(inner) => write!(f, "({})", inner),
            ConditionKind::BinOp { left, op, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            ConditionKind::Bool(value) => write!(f, "{}", value),
        }
    }
}
