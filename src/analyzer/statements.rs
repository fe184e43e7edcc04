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

//! Statement analysis for the semantic analyzer.
//!
//! This module provides statement analysis functionality:
//! - Variable and constant declarations
//! - Statement blocks
//! - Assignments and the state changes they cause

use super::control_flow::ControlFlowAnalyzer;
use super::entity::{Entity, State};
use super::expressions::ExpressionAnalyzer;
use super::functions::FunctionAnalyzer;
use super::type_check::TypeChecker;
use super::Analyzer;
use crate::ast::{
    Assignment, Block, ConstDecl, Declaration, Statement, StatementKind, VarDecl,
};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for statement analysis.
pub trait StatementAnalyzer {
    /// Analyze a list of declarations in the current scope.
    fn analyze_declarations(&mut self, declarations: &[Declaration]);

    /// Analyze a variable declaration.
    fn analyze_var_decl(&mut self, decl: &VarDecl);

    /// Analyze a constant declaration.
    fn analyze_const_decl(&mut self, decl: &ConstDecl);

    /// Report a redeclaration in the current scope.
    fn report_redeclaration(&mut self, name: &str, span: &Span, existing: &Entity);

    /// Analyze a block of statements.
    fn analyze_block(&mut self, block: &Block);

    /// Analyze a statement.
    fn analyze_statement(&mut self, stmt: &Statement);

    /// Analyze an assignment.
    fn analyze_assignment(&mut self, assign: &Assignment);
}

impl StatementAnalyzer for Analyzer {
    fn analyze_declarations(&mut self, declarations: &[Declaration]) {
        for decl in declarations {
            match decl {
                Declaration::Var(var) => self.analyze_var_decl(var),
                Declaration::Const(constant) => self.analyze_const_decl(constant),
            }
        }
    }

    fn analyze_var_decl(&mut self, decl: &VarDecl) {
        self.check_reserved_identifier(&decl.name, &decl.span);

        let entity = Entity::variable(decl.name.clone(), decl.var_type, decl.span.clone());
        if let Err(existing) = self.symbols.define(entity) {
            self.report_redeclaration(&decl.name, &decl.span, &existing);
        }
    }

    fn analyze_const_decl(&mut self, decl: &ConstDecl) {
        let value_type = self.analyze_expression(&decl.value);

        self.check_reserved_identifier(&decl.name, &decl.span);

        let entity = Entity::constant(decl.name.clone(), decl.const_type, decl.span.clone());
        if let Err(existing) = self.symbols.define(entity) {
            self.report_redeclaration(&decl.name, &decl.span, &existing);
        }

        self.expect_type(
            decl.const_type,
            value_type,
            format!(
                "Constant '{}' is declared as {} but its value is {}",
                decl.name, decl.const_type, value_type
            ),
            &decl.span,
            &decl.to_string(),
        );
    }

    fn report_redeclaration(&mut self, name: &str, span: &Span, existing: &Entity) {
        self.error(
            CompileError::new(
                ErrorCode::AlreadyDeclared,
                format!("'{}' is already declared in this scope", name),
                span.clone(),
            )
            .with_hint(format!(
                "Previously declared at position {}",
                existing.span.start
            )),
        );
    }

    fn analyze_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.analyze_statement(stmt);
        }
    }

    fn analyze_statement(&mut self, stmt: &Statement) {
        match &stmt.kind {
            StatementKind::Assignment(assign) => self.analyze_assignment(assign),
            StatementKind::IfElse(if_else) => self.analyze_if_statement(if_else),
            StatementKind::Loop(loop_stmt) => self.analyze_while_statement(loop_stmt),
            StatementKind::Call(call) => {
                self.analyze_function_call(call);
            }
            StatementKind::Brackets(block) => self.analyze_block(block),
            StatementKind::Skip => {}
        }
    }

    fn analyze_assignment(&mut self, assign: &Assignment) {
        let value_type = self.analyze_expression(&assign.value);

        // A bare symbol on the right-hand side counts as used.
        if let Some(symbol) = assign.value.referenced_symbol() {
            let is_variable = self
                .symbols
                .lookup(symbol)
                .is_some_and(|e| !e.is_function() && !e.is_constant());
            if is_variable {
                self.symbols.set_state(symbol, State::Used);
            }
        }

        let hint = assign.to_string();
        let Some(target) = self.symbols.lookup(&assign.target).cloned() else {
            self.error(
                CompileError::new(
                    ErrorCode::UndeclaredAssignment,
                    format!(
                        "'{}' is assigned but was not previously declared",
                        assign.target
                    ),
                    assign.span.clone(),
                )
                .with_hint(hint),
            );
            return;
        };

        let Some(target_type) = target.value_type() else {
            self.error(
                CompileError::new(
                    ErrorCode::FunctionUsedAsValue,
                    format!("Cannot assign to function '{}'", assign.target),
                    assign.span.clone(),
                )
                .with_hint(hint),
            );
            return;
        };

        if target.is_constant() {
            self.error(
                CompileError::new(
                    ErrorCode::CannotAssignToConstant,
                    format!("Cannot assign to constant '{}'", assign.target),
                    assign.span.clone(),
                )
                .with_hint(hint),
            );
            return;
        }

        self.expect_type(
            target_type,
            value_type,
            format!(
                "Cannot assign {} to '{}' of type {}",
                value_type, assign.target, target_type
            ),
            &assign.span,
            &hint,
        );

        self.symbols.set_state(&assign.target, State::Assigned);
    }
}
