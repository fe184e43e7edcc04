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

//! Control flow code generation.
//!
//! This module provides code generation for control flow statements:
//! - if/else statements
//! - while loops
//!
//! Each statement takes a pair of consecutive labels before its condition
//! is lowered.

use super::conditions::ConditionEmitter;
use super::emit::EmitHelpers;
use super::CodeGenerator;
use crate::ast::{IfElseStatement, LoopStatement};

/// Extension trait for control flow code generation.
pub trait ControlFlowEmitter {
    /// Generate code for an if/else statement.
    fn generate_if(&mut self, if_else: &IfElseStatement);

    /// Generate code for a while loop.
    fn generate_while(&mut self, loop_stmt: &LoopStatement);
}

impl ControlFlowEmitter for CodeGenerator {
    fn generate_if(&mut self, if_else: &IfElseStatement) {
        let (else_label, end_label) = self.ids.label_pair();

        let predicate = self.lower_condition(&if_else.condition);
        self.emit_ifz(predicate, &else_label);

        self.generate_block(&if_else.then_block);
        self.emit_goto(&end_label);

        self.emit_label(&else_label);
        self.generate_block(&if_else.else_block);

        self.emit_label(&end_label);
    }

    fn generate_while(&mut self, loop_stmt: &LoopStatement) {
        let (start_label, end_label) = self.ids.label_pair();

        self.emit_label(&start_label);
        let predicate = self.lower_condition(&loop_stmt.condition);
        self.emit_ifz(predicate, &end_label);

        self.generate_block(&loop_stmt.body);
        self.emit_goto(&start_label);

        self.emit_label(&end_label);
    }
}
