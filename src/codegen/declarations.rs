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

//! Declaration code generation.
//!
//! This module provides code generation for declarations:
//! - Local variable declarations, which only register a renamed local
//! - Local constant declarations, assigned where they are declared
//! - Global constants, flushed at the start of `main`

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::names::NameResolver;
use super::CodeGenerator;
use crate::ast::{ConstDecl, Declaration, Program, VarDecl};

/// Extension trait for declaration code generation.
pub trait DeclarationEmitter {
    /// Generate code for the declarations of a function body or `main`.
    fn generate_declarations(&mut self, declarations: &[Declaration]);

    /// Generate code for a local variable declaration.
    fn generate_var_decl(&mut self, decl: &VarDecl);

    /// Generate code for a local constant declaration.
    fn generate_const_decl(&mut self, decl: &ConstDecl);

    /// Assign every global constant, in declaration order.
    fn generate_global_constants(&mut self, program: &Program);
}

impl DeclarationEmitter for CodeGenerator {
    fn generate_declarations(&mut self, declarations: &[Declaration]) {
        for decl in declarations {
            match decl {
                Declaration::Var(var) => self.generate_var_decl(var),
                Declaration::Const(constant) => self.generate_const_decl(constant),
            }
        }
    }

    fn generate_var_decl(&mut self, decl: &VarDecl) {
        self.register_local(&decl.name);
    }

    fn generate_const_decl(&mut self, decl: &ConstDecl) {
        // The value may mention an outer name spelled like the constant.
        let value = self.lower_expression(&decl.value);
        let dest = self.register_local(&decl.name);
        self.emit_assign(dest, value);
    }

    fn generate_global_constants(&mut self, program: &Program) {
        for constant in program.global_constants() {
            let value = self.lower_expression(&constant.value);
            self.emit_assign(constant.name.clone(), value);
        }
    }
}
