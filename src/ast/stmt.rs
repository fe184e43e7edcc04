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

//! Statement and declaration AST nodes for the CCAL compiler.

use crate::error::Span;

use super::{Block, Condition, Expr, FuncCall, Type};

/// A statement in the CCAL language.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The kind of statement.
    pub kind: StatementKind,
    /// The source span of this statement.
    pub span: Span,
}

impl Statement {
    /// Create a new statement.
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of statement.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// `id = expr;`
    Assignment(Assignment),

    /// `if cond { ... } else { ... }`
    IfElse(IfElseStatement),

    /// `while cond { ... }`
    Loop(LoopStatement),

    /// A function call whose result is discarded.
    Call(FuncCall),

    /// A nested `{ ... }` block.
    Brackets(Block),

    /// `skip;`
    Skip,
}

/// An assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The assigned identifier.
    pub target: String,
    /// The right-hand side.
    pub value: Expr,
    /// The source span.
    pub span: Span,
}

/// An if/else statement. Both branches are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct IfElseStatement {
    pub condition: Condition,
    pub then_block: Block,
    pub else_block: Block,
}

/// A while loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStatement {
    pub condition: Condition,
    pub body: Block,
}

/// A declaration, either global or local to a function or `main`.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Var(VarDecl),
    Const(ConstDecl),
}

impl Declaration {
    /// Get the declared identifier.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Var(decl) => &decl.name,
            Declaration::Const(decl) => &decl.name,
        }
    }
}

/// A variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The variable name.
    pub name: String,
    /// The declared type.
    pub var_type: Type,
    /// The source span.
    pub span: Span,
}

impl VarDecl {
    /// Create a new variable declaration.
    pub fn new(name: impl Into<String>, var_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            var_type,
            span,
        }
    }
}

/// A constant declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    /// The constant name.
    pub name: String,
    /// The declared type.
    pub const_type: Type,
    /// The initializer.
    pub value: Expr,
    /// The source span.
    pub span: Span,
}

impl ConstDecl {
    /// Create a new constant declaration.
    pub fn new(name: impl Into<String>, const_type: Type, value: Expr, span: Span) -> Self {
        Self {
            name: name.into(),
            const_type,
            value,
            span,
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name.
    pub name: String,
    /// The parameter type.
    pub param_type: Type,
    /// The source span.
    pub span: Span,
}

impl Param {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, param_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            param_type,
            span,
        }
    }
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    /// The function name.
    pub name: String,
    /// The parameters, in declaration order.
    pub params: Vec<Param>,
    /// Local declarations.
    pub declarations: Vec<Declaration>,
    /// The function body.
    pub body: Block,
    /// The declared return type.
    pub return_type: Type,
    /// The trailing `return (expr);` value, absent for `return ();`.
    pub return_value: Option<Expr>,
    /// The source span.
    pub span: Span,
}

impl Func {
    /// Get the number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StatementKind::Assignment(assign) => write!(f, "{}", assign),
            StatementKind::IfElse(if_else) => write!(f, "if {} {{ ... }} else {{ ... }}", if_else.condition),
            StatementKind::Loop(loop_stmt) => write!(f, "while {} {{ ... }}", loop_stmt.condition),
            StatementKind::Call(call) => write!(f, "{};", call),
            StatementKind::Brackets(_) => write!(f, "{{ ... }}"),
            StatementKind::Skip => write!(f, "skip;"),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {};", self.target, self.value)
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Declaration::Var(decl) => write!(f, "{}", decl),
            Declaration::Const(decl) => write!(f, "{}", decl),
        }
    }
}

impl std::fmt::Display for VarDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {}: {};", self.name, self.var_type)
    }
}

impl std::fmt::Display for ConstDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "const {}: {} = {};", self.name, self.const_type, self.value)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.param_type)
    }
}

impl std::fmt::Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}
