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

//! Code generation module for the CCAL compiler.
//!
//! This module lowers an analyzed parse tree to three-address code.
//! It handles:
//! - Renaming of function-local identifiers
//! - Expression and condition flattening
//! - Control flow with generated labels
//! - Function bodies, parameters and calls
//!
//! The tree must have passed semantic analysis; generation itself cannot
//! fail. Names the generator does not know (globals and literals) are
//! emitted verbatim.
//!
//! # Module Structure
//!
//! - `conditions` - Condition lowering (ConditionEmitter trait)
//! - `control_flow` - If/else and while (ControlFlowEmitter trait)
//! - `declarations` - Local and global declarations (DeclarationEmitter trait)
//! - `emit` - Instructions and buffer helpers (EmitHelpers trait)
//! - `expressions` - Expression lowering and calls (ExpressionEmitter trait)
//! - `functions` - Function bodies and `main` (FunctionEmitter trait)
//! - `ids` - Label and temporary counters
//! - `names` - Local renaming (NameResolver trait)

mod conditions;
mod control_flow;
mod declarations;
mod emit;
mod expressions;
mod functions;
mod ids;
mod names;

pub use emit::{Instruction, Rvalue, TacOp};
pub use functions::EXIT_ROUTINE;
pub use ids::IdGenerator;
pub use names::{LocalSymbol, RenameTable, SymbolArena, SymbolId};

use control_flow::ControlFlowEmitter;
use emit::EmitHelpers;
use expressions::ExpressionEmitter;
use functions::FunctionEmitter;
use names::NameResolver;

use crate::ast::{Assignment, Block, Program, Statement, StatementKind};
use std::fmt;

/// A generated three-address program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TacProgram {
    instructions: Vec<Instruction>,
}

impl TacProgram {
    /// Create a program from a list of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Get the instructions in emission order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over the instructions.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl fmt::Display for TacProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TacProgram {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// The three-address code generator.
pub struct CodeGenerator {
    /// The generated instructions.
    code: Vec<Instruction>,
    /// Label, temporary and ordinal counters.
    ids: IdGenerator,
    /// Every local symbol seen so far.
    arena: SymbolArena,
    /// Rename tables, innermost last.
    scopes: Vec<RenameTable>,
}

impl CodeGenerator {
    /// Create a new code generator.
    pub fn new() -> Self {
        Self {
            code: Vec::new(),
            ids: IdGenerator::new(),
            arena: SymbolArena::new(),
            scopes: Vec::new(),
        }
    }

    /// Generate three-address code for a program.
    ///
    /// Functions are emitted first, in source order, followed by `main`.
    pub fn generate(&mut self, program: &Program) -> TacProgram {
        for func in &program.functions {
            self.generate_function(func);
        }
        self.generate_main(program);

        TacProgram::new(std::mem::take(&mut self.code))
    }

    /// Generate code for a block of statements.
    fn generate_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.generate_statement(stmt);
        }
    }

    /// Generate code for a statement.
    fn generate_statement(&mut self, stmt: &Statement) {
        match &stmt.kind {
            StatementKind::Assignment(assign) => self.generate_assignment(assign),
            StatementKind::IfElse(if_else) => self.generate_if(if_else),
            StatementKind::Loop(loop_stmt) => self.generate_while(loop_stmt),
            StatementKind::Call(call) => self.generate_call_statement(call),
            StatementKind::Brackets(block) => self.generate_block(block),
            StatementKind::Skip => {}
        }
    }

    /// Generate code for an assignment.
    fn generate_assignment(&mut self, assign: &Assignment) {
        let value = self.lower_expression(&assign.value);
        let dest = self.resolve(&assign.target);
        self.emit_assign(dest, value);
    }

    /// Get the instructions emitted so far.
    pub fn code(&self) -> &[Instruction] {
        &self.code
    }

    /// Get the number of local symbols registered so far.
    pub fn local_count(&self) -> usize {
        self.arena.len()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate three-address code for an analyzed program.
pub fn generate(program: &Program) -> TacProgram {
    let mut generator = CodeGenerator::new();
    generator.generate(program)
}
