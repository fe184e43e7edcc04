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

//! Parse tree definitions for the CCAL compiler.
//!
//! This module defines the data structures that represent a parsed CCAL program.
//! Both compiler passes walk this tree read-only.

mod cond;
mod expr;
mod stmt;
mod types;

pub use cond::*;
pub use expr::*;
pub use stmt::*;
pub use types::*;

use crate::error::Span;

/// A complete CCAL program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Global declarations.
    pub declarations: Vec<Declaration>,
    /// Function definitions, in source order.
    pub functions: Vec<Func>,
    /// The `main` body.
    pub main: Main,
}

impl Program {
    /// Create a program with only a `main` body.
    pub fn new(main: Main) -> Self {
        Self {
            declarations: Vec::new(),
            functions: Vec::new(),
            main,
        }
    }

    /// Find a function by name.
    pub fn function(&self, name: &str) -> Option<&Func> {
        self.functions.iter().find(|func| func.name == name)
    }

    /// Iterate over the global constant declarations.
    pub fn global_constants(&self) -> impl Iterator<Item = &ConstDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Const(constant) => Some(constant),
            Declaration::Var(_) => None,
        })
    }
}

/// The `main { ... }` section.
#[derive(Debug, Clone, PartialEq)]
pub struct Main {
    /// Local declarations.
    pub declarations: Vec<Declaration>,
    /// The statements.
    pub body: Block,
    /// The source span.
    pub span: Span,
}

impl Main {
    /// Create a new main section.
    pub fn new(declarations: Vec<Declaration>, body: Block, span: Span) -> Self {
        Self {
            declarations,
            body,
            span,
        }
    }
}

/// A block of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements in this block.
    pub statements: Vec<Statement>,
    /// The source span of this block.
    pub span: Span,
}

impl Block {
    /// Create a new block.
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Create an empty block.
    pub fn empty(span: Span) -> Self {
        Self {
            statements: Vec::new(),
            span,
        }
    }

    /// Check if this block is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for decl in &self.declarations {
            writeln!(f, "{}", decl)?;
        }
        for func in &self.functions {
            writeln!(f, "{} {{ ... }}", func)?;
        }
        write!(f, "main {{ ... }}")
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            write!(f, "skip;")
        } else {
            for (i, stmt) in self.statements.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "    {}", stmt)?;
            }
            Ok(())
        }
    }
}
