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

//! Expression AST nodes for the CCAL compiler.

use crate::error::Span;

/// An expression in the CCAL language.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source span of this expression.
    pub span: Span,
}

impl Expr {
    /// Create a new expression.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create a fragment expression.
    pub fn fragment(fragment: Fragment, span: Span) -> Self {
        Self::new(ExprKind::Frag(fragment), span)
    }

    /// Create a plain identifier reference.
    pub fn ident(name: impl Into<String>, span: Span) -> Self {
        Self::fragment(
            Fragment::IdNum {
                operand: Operand::Ident(name.into()),
                negated: false,
            },
            span,
        )
    }

    /// Create a plain numeral.
    pub fn number(text: impl Into<String>, span: Span) -> Self {
        Self::fragment(
            Fragment::IdNum {
                operand: Operand::Number(text.into()),
                negated: false,
            },
            span,
        )
    }

    /// Get the symbol this expression refers to when it is a lone (possibly negated) reference.
    pub fn referenced_symbol(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Frag(Fragment::IdNum {
                operand: Operand::Ident(name),
                negated: false,
            }) => Some(name),
            ExprKind::Frag(Fragment::NotId(name)) => Some(name),
            ExprKind::Paren(inner) => inner.referenced_symbol(),
            _ => None,
        }
    }
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `left + right` or `left - right`.
    ArithOp {
        left: Box<Expr>,
        op: ArithOp,
        right: Box<Expr>,
    },

    /// `left && right` or `left || right` on boolean values.
    LogOp {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },

    /// A parenthesized expression.
    Paren(Box<Expr>),

    /// A function call used as a value.
    Call(FuncCall),

    /// A single operand.
    Frag(Fragment),
}

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
}

impl ArithOp {
    /// Get the operator as written in source code.
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
        }
    }
}

/// A boolean connective, shared by expressions and conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Get the operator as written in source code.
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

/// An identifier or a numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Ident(String),
    Number(String),
}

impl Operand {
    /// Get the source text of this operand.
    pub fn text(&self) -> &str {
        match self {
            Operand::Ident(name) => name,
            Operand::Number(text) => text,
        }
    }
}

/// The leaves of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// An identifier or numeral, optionally negated with unary minus.
    IdNum { operand: Operand, negated: bool },
    /// `!id`.
    NotId(String),
    /// The numeral `0`.
    Zero,
    /// `true` or `false`.
    Bool(bool),
}

/// A call of a named function.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    /// The callee name.
    pub name: String,
    /// The supplied arguments, in order.
    pub args: Vec<Argument>,
    /// The source span of the whole call.
    pub span: Span,
}

impl FuncCall {
    /// Create a new call.
    pub fn new(name: impl Into<String>, args: Vec<Argument>, span: Span) -> Self {
        Self {
            name: name.into(),
            args,
            span,
        }
    }
}

/// A call argument: an identifier or a numeral.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub value: Operand,
    pub span: Span,
}

impl Argument {
    /// Create a new argument.
    pub fn new(value: Operand, span: Span) -> Self {
        Self { value, span }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::ArithOp { left, op, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            ExprKind::LogOp { left, op, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            ExprKind::Paren(inner) => write!(f, "({})", inner),
            ExprKind::Call(call) => write!(f, "{}", call),
            ExprKind::Frag(fragment) => write!(f, "{}", fragment),
        }
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fragment::IdNum { operand, negated } => {
                if *negated {
                    write!(f, "-")?;
                }
                write!(f, "{}", operand.text())
            }
            Fragment::NotId(name) => write!(f, "!{}", name),
            Fragment::Zero => write!(f, "0"),
            Fragment::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl std::fmt::Display for FuncCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg.value.text())?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(0, 1)
    }

    #[test]
    fn test_display_arith_op() {
        let expr = Expr::new(
            ExprKind::ArithOp {
                left: Box::new(Expr::ident("a", span())),
                op: ArithOp::Sub,
                right: Box::new(Expr::number("3", span())),
            },
            span(),
        );
        assert_eq!(expr.to_string(), "a - 3");
    }

    #[test]
    fn test_display_fragments() {
        let negated = Fragment::IdNum {
            operand: Operand::Ident("x".to_string()),
            negated: true,
        };
        assert_eq!(negated.to_string(), "-x");
        assert_eq!(Fragment::NotId("flag".to_string()).to_string(), "!flag");
        assert_eq!(Fragment::Zero.to_string(), "0");
        assert_eq!(Fragment::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_display_call() {
        let call = FuncCall::new(
            "add",
            vec![
                Argument::new(Operand::Number("1".to_string()), span()),
                Argument::new(Operand::Ident("y".to_string()), span()),
            ],
            span(),
        );
        assert_eq!(call.to_string(), "add(1, y)");
    }

    #[test]
    fn test_referenced_symbol() {
        assert_eq!(Expr::ident("x", span()).referenced_symbol(), Some("x"));
        let paren = Expr::new(ExprKind::Paren(Box::new(Expr::ident("y", span()))), span());
        assert_eq!(paren.referenced_symbol(), Some("y"));
        assert_eq!(Expr::number("4", span()).referenced_symbol(), None);
    }
}
