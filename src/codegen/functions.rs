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

//! Function code generation.
//!
//! This module provides code generation for function bodies and `main`.
//! Every body gets its own rename table, keyed by the ordinal of the
//! function; `main` takes the ordinal after the last function.

use super::declarations::DeclarationEmitter;
use super::emit::{EmitHelpers, Instruction, Rvalue};
use super::expressions::ExpressionEmitter;
use super::names::NameResolver;
use super::CodeGenerator;
use crate::ast::{Func, Program};

/// Name of the runtime routine that ends the program.
pub const EXIT_ROUTINE: &str = "_exit";

/// Extension trait for function code generation.
pub trait FunctionEmitter {
    /// Generate code for a function definition.
    fn generate_function(&mut self, func: &Func);

    /// Generate code for the `main` section of a program.
    fn generate_main(&mut self, program: &Program);
}

impl FunctionEmitter for CodeGenerator {
    fn generate_function(&mut self, func: &Func) {
        self.emit_label(&func.name);
        self.push_rename_scope();

        let params: Vec<String> = func
            .params
            .iter()
            .map(|param| self.register_local(&param.name))
            .collect();
        for (index, dest) in params.into_iter().enumerate() {
            self.emit(Instruction::GetParam {
                dest,
                index: index + 1,
            });
        }

        self.generate_declarations(&func.declarations);
        self.generate_block(&func.body);

        let value = func.return_value.as_ref().map(|expr| {
            match self.lower_expression(expr) {
                call @ Rvalue::Call { .. } => Rvalue::Atom(self.materialize(call)),
                value => value,
            }
        });
        self.emit(Instruction::Return(value));

        self.pop_rename_scope();
        self.ids.advance_ordinal();
    }

    fn generate_main(&mut self, program: &Program) {
        self.emit_label("main");
        self.push_rename_scope();

        self.generate_global_constants(program);
        self.generate_declarations(&program.main.declarations);
        self.generate_block(&program.main.body);

        self.emit(Instruction::Call {
            name: EXIT_ROUTINE.to_string(),
            argc: 0,
        });
        self.pop_rename_scope();
    }
}
