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

//! Three-address instructions and the helpers that append them.
//!
//! This module defines the instruction set of the generated code:
//! - `Instruction`: one line of output
//! - `Rvalue`: the right-hand side of an assignment or predicate
//! - `TacOp`: the binary operators an `Rvalue` can combine with
//! - `EmitHelpers`: appends instructions to the generator's buffer

use super::CodeGenerator;
use crate::ast::{ArithOp, CompOp, EqualityOp, LogicalOp};
use std::fmt;

/// A binary operator of the three-address code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacOp {
    Add,
    Sub,
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl TacOp {
    /// Get the operator as it appears in the output.
    pub fn symbol(&self) -> &'static str {
        match self {
            TacOp::Add => "+",
            TacOp::Sub => "-",
            TacOp::And => "&&",
            TacOp::Or => "||",
            TacOp::Equal => "==",
            TacOp::NotEqual => "!=",
            TacOp::Less => "<",
            TacOp::Greater => ">",
            TacOp::LessEqual => "<=",
            TacOp::GreaterEqual => ">=",
        }
    }
}

impl From<ArithOp> for TacOp {
    fn from(op: ArithOp) -> Self {
        match op {
            ArithOp::Add => TacOp::Add,
            ArithOp::Sub => TacOp::Sub,
        }
    }
}

impl From<LogicalOp> for TacOp {
    fn from(op: LogicalOp) -> Self {
        match op {
            LogicalOp::And => TacOp::And,
            LogicalOp::Or => TacOp::Or,
        }
    }
}

impl From<CompOp> for TacOp {
    fn from(op: CompOp) -> Self {
        match op {
            CompOp::Less => TacOp::Less,
            CompOp::Greater => TacOp::Greater,
            CompOp::LessEqual => TacOp::LessEqual,
            CompOp::GreaterEqual => TacOp::GreaterEqual,
        }
    }
}

impl From<EqualityOp> for TacOp {
    fn from(op: EqualityOp) -> Self {
        match op {
            EqualityOp::Equal => TacOp::Equal,
            EqualityOp::NotEqual => TacOp::NotEqual,
        }
    }
}

impl fmt::Display for TacOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A value computed by at most one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rvalue {
    /// A name, temporary or literal.
    Atom(String),
    /// `left op right`.
    Binary {
        left: String,
        op: TacOp,
        right: String,
    },
    /// `call name, argc`, the result of a call.
    Call { name: String, argc: usize },
    /// `!operand`.
    Not(String),
}

impl Rvalue {
    /// Create an atom.
    pub fn atom(text: impl Into<String>) -> Self {
        Rvalue::Atom(text.into())
    }

    /// Create a binary value.
    pub fn binary(left: impl Into<String>, op: TacOp, right: impl Into<String>) -> Self {
        Rvalue::Binary {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    /// Get the atom text if this value needs no computation.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Rvalue::Atom(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Rvalue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rvalue::Atom(text) => f.write_str(text),
            Rvalue::Binary { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Rvalue::Call { name, argc } => write!(f, "call {}, {}", name, argc),
            Rvalue::Not(operand) => write!(f, "!{}", operand),
        }
    }
}

/// One line of three-address code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `name:`
    Label(String),
    /// `dest = value`
    Assign { dest: String, value: Rvalue },
    /// `ifz cond goto target`, jumps when `cond` is false.
    IfZ { cond: Rvalue, target: String },
    /// `goto target`
    Goto(String),
    /// `param value`
    Param(String),
    /// `call name, argc` as a statement.
    Call { name: String, argc: usize },
    /// `dest = getparam index`, with 1-based `index`.
    GetParam { dest: String, index: usize },
    /// `return` or `return value`.
    Return(Option<Rvalue>),
}

impl Instruction {
    /// Get the name this instruction assigns, if any.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Instruction::Assign { dest, .. } | Instruction::GetParam { dest, .. } => Some(dest),
            _ => None,
        }
    }

    /// Check if this instruction is a label definition.
    pub fn is_label(&self) -> bool {
        matches!(self, Instruction::Label(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Label(name) => write!(f, "{}:", name),
            Instruction::Assign { dest, value } => write!(f, "{} = {}", dest, value),
            Instruction::IfZ { cond, target } => write!(f, "ifz {} goto {}", cond, target),
            Instruction::Goto(target) => write!(f, "goto {}", target),
            Instruction::Param(value) => write!(f, "param {}", value),
            Instruction::Call { name, argc } => write!(f, "call {}, {}", name, argc),
            Instruction::GetParam { dest, index } => write!(f, "{} = getparam {}", dest, index),
            Instruction::Return(None) => write!(f, "return"),
            Instruction::Return(Some(value)) => write!(f, "return {}", value),
        }
    }
}

/// Extension trait for instruction emission.
///
/// This trait appends instructions to the code buffer of a `CodeGenerator`.
/// Every lowering routine goes through it so the buffer only ever grows.
pub trait EmitHelpers {
    /// Append an instruction.
    fn emit(&mut self, instruction: Instruction);

    /// Define a label at the current position.
    fn emit_label(&mut self, label: &str);

    /// Emit `dest = value`.
    fn emit_assign(&mut self, dest: impl Into<String>, value: Rvalue);

    /// Emit `ifz cond goto target`.
    fn emit_ifz(&mut self, cond: Rvalue, target: &str);

    /// Emit `goto target`.
    fn emit_goto(&mut self, target: &str);
}

impl EmitHelpers for CodeGenerator {
    fn emit(&mut self, instruction: Instruction) {
        self.code.push(instruction);
    }

    fn emit_label(&mut self, label: &str) {
        self.emit(Instruction::Label(label.to_string()));
    }

    fn emit_assign(&mut self, dest: impl Into<String>, value: Rvalue) {
        self.emit(Instruction::Assign {
            dest: dest.into(),
            value,
        });
    }

    fn emit_ifz(&mut self, cond: Rvalue, target: &str) {
        self.emit(Instruction::IfZ {
            cond,
            target: target.to_string(),
        });
    }

    fn emit_goto(&mut self, target: &str) {
        self.emit(Instruction::Goto(target.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_instructions() {
        assert_eq!(Instruction::Label("L1".to_string()).to_string(), "L1:");
        assert_eq!(
            Instruction::Assign {
                dest: "t1".to_string(),
                value: Rvalue::binary("a.1", TacOp::Add, "b.1"),
            }
            .to_string(),
            "t1 = a.1 + b.1"
        );
        assert_eq!(
            Instruction::IfZ {
                cond: Rvalue::binary("c3", TacOp::Equal, "true"),
                target: "L2".to_string(),
            }
            .to_string(),
            "ifz c3 == true goto L2"
        );
        assert_eq!(Instruction::Goto("L1".to_string()).to_string(), "goto L1");
        assert_eq!(Instruction::Param("x.2".to_string()).to_string(), "param x.2");
        assert_eq!(
            Instruction::Call {
                name: "_exit".to_string(),
                argc: 0,
            }
            .to_string(),
            "call _exit, 0"
        );
        assert_eq!(
            Instruction::GetParam {
                dest: "a.1".to_string(),
                index: 1,
            }
            .to_string(),
            "a.1 = getparam 1"
        );
        assert_eq!(Instruction::Return(None).to_string(), "return");
    }

    #[test]
    fn test_display_rvalues() {
        assert_eq!(Rvalue::atom("42").to_string(), "42");
        assert_eq!(Rvalue::Not("flag.1".to_string()).to_string(), "!flag.1");
        assert_eq!(
            Rvalue::Call {
                name: "add".to_string(),
                argc: 2,
            }
            .to_string(),
            "call add, 2"
        );
    }

    #[test]
    fn test_operator_conversions() {
        assert_eq!(TacOp::from(ArithOp::Sub), TacOp::Sub);
        assert_eq!(TacOp::from(LogicalOp::Or).symbol(), "||");
        assert_eq!(TacOp::from(CompOp::LessEqual).symbol(), "<=");
        assert_eq!(TacOp::from(EqualityOp::NotEqual).symbol(), "!=");
    }

    #[test]
    fn test_destination() {
        let assign = Instruction::Assign {
            dest: "t1".to_string(),
            value: Rvalue::atom("0"),
        };
        assert_eq!(assign.destination(), Some("t1"));
        assert_eq!(Instruction::Goto("L1".to_string()).destination(), None);
        assert!(Instruction::Label("main".to_string()).is_label());
    }
}
