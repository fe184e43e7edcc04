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

//! Control flow analysis for the semantic analyzer.
//!
//! This module analyzes `if`/`else` statements, `while` loops and their
//! conditions. Blocks do not open a scope of their own.

use super::expressions::ExpressionAnalyzer;
use super::operators::OperatorChecker;
use super::statements::StatementAnalyzer;
use super::Analyzer;
use crate::ast::{Condition, ConditionKind, IfElseStatement, LoopStatement};

/// Extension trait for control flow analysis.
pub trait ControlFlowAnalyzer {
    /// Analyze an if/else statement.
    fn analyze_if_statement(&mut self, if_else: &IfElseStatement);

    /// Analyze a while statement.
    fn analyze_while_statement(&mut self, loop_stmt: &LoopStatement);

    /// Analyze a condition.
    fn analyze_condition(&mut self, cond: &Condition);
}

impl ControlFlowAnalyzer for Analyzer {
    fn analyze_if_statement(&mut self, if_else: &IfElseStatement) {
        self.analyze_condition(&if_else.condition);
        self.analyze_block(&if_else.then_block);
        self.analyze_block(&if_else.else_block);
    }

    fn analyze_while_statement(&mut self, loop_stmt: &LoopStatement) {
        self.analyze_condition(&loop_stmt.condition);
        self.analyze_block(&loop_stmt.body);
    }

    fn analyze_condition(&mut self, cond: &Condition) {
        match &cond.kind {
            ConditionKind::Comp { left, op, right } => {
                let left_type = self.analyze_expression(left);
                let right_type = self.analyze_expression(right);
                self.check_comparison(*op, left_type, right_type, &cond.span, &cond.to_string());
            }
            ConditionKind::EqualDif { left, op, right } => {
                let left_type = self.analyze_expression(left);
                let right_type = self.analyze_expression(right);
                self.check_equality(*op, left_type, right_type, &cond.span, &cond.to_string());
            }
            ConditionKind::Neg(inner) | ConditionKind::Paren(inner) => {
                self.analyze_condition(inner)
            }
            ConditionKind::BinOp { left, right, .. } => {
                self.analyze_condition(left);
                self.analyze_condition(right);
            }
            ConditionKind::Bool(_) => {}
        }
    }
}
