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

//! Semantic analyzer module for the CCAL compiler.
//!
//! This module performs semantic analysis on the parse tree:
//! - Symbol resolution through a stack of scopes
//! - Type checking of expressions, conditions, assignments and returns
//! - Assignment and usage tracking, reported as warnings
//!
//! The analyzer never stops at the first problem. Every error and warning
//! is collected in discovery order.
//!
//! # Module Structure
//!
//! - `control_flow` - If/else, while and conditions (ControlFlowAnalyzer trait)
//! - `entity` - Symbol table entries and their lifecycle state
//! - `expressions` - Expressions and fragments (ExpressionAnalyzer trait)
//! - `functions` - Functions, parameters, returns and calls (FunctionAnalyzer trait)
//! - `operators` - Operator operand checks (OperatorChecker trait)
//! - `scope` - A single scope
//! - `statements` - Declarations, blocks and assignments (StatementAnalyzer trait)
//! - `symbol_table` - The scope stack
//! - `type_check` - Expression types and reserved names (TypeChecker trait)

mod control_flow;
mod entity;
mod expressions;
mod functions;
mod operators;
mod scope;
mod statements;
mod symbol_table;
mod type_check;

pub use entity::{Entity, EntityKind, State};
pub use scope::Scope;
pub use symbol_table::SymbolTable;
pub use type_check::{is_reserved_identifier, ExprType};

use functions::FunctionAnalyzer;
use statements::StatementAnalyzer;

use crate::ast::Program;
use crate::error::{CompileError, ErrorCode, Warning, WarningCode};

/// The outcome of semantic analysis.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Errors, in discovery order.
    pub errors: Vec<CompileError>,
    /// Warnings, in discovery order.
    pub warnings: Vec<Warning>,
}

impl Analysis {
    /// Check if the program is free of errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if an error with the given code was reported.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Count the errors with the given code.
    pub fn count_errors(&self, code: ErrorCode) -> usize {
        self.errors.iter().filter(|e| e.code == code).count()
    }
}

/// The semantic analyzer.
pub struct Analyzer {
    /// The symbol table.
    pub symbols: SymbolTable,
    /// Collected errors.
    errors: Vec<CompileError>,
    /// Collected warnings.
    warnings: Vec<Warning>,
}

impl Analyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Analyze a program.
    pub fn analyze(&mut self, program: &Program) -> Analysis {
        self.analyze_declarations(&program.declarations);

        for func in &program.functions {
            self.analyze_function(func);
        }

        self.symbols.push_scope();
        self.analyze_declarations(&program.main.declarations);
        self.analyze_block(&program.main.body);
        if let Some(scope) = self.symbols.pop_scope() {
            self.warn_unassigned(&scope);
        }

        let globals: Vec<Entity> = self.symbols.global_scope().iter().cloned().collect();
        for entity in &globals {
            self.warn_if_unassigned(entity);
        }

        Analysis {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    /// Record an error.
    pub(crate) fn error(&mut self, error: CompileError) {
        self.errors.push(error);
    }

    /// Warn about every entity of a closing scope that is still only declared.
    pub(crate) fn warn_unassigned(&mut self, scope: &Scope) {
        for entity in scope.iter() {
            self.warn_if_unassigned(entity);
        }
    }

    fn warn_if_unassigned(&mut self, entity: &Entity) {
        if entity.state != State::Declared {
            return;
        }
        let warning = if entity.is_function() {
            Warning::new(
                WarningCode::NeverUsed,
                format!("Function '{}' is never used", entity.name),
                entity.span.clone(),
            )
        } else {
            Warning::new(
                WarningCode::NeverAssigned,
                format!("'{}' is never assigned", entity.name),
                entity.span.clone(),
            )
        };
        self.warnings.push(warning);
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a program and collect its errors and warnings.
pub fn analyze(program: &Program) -> Analysis {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    /// Helper to analyze source code directly.
    fn analyze_source(source: &str) -> Analysis {
        let tokens = tokenize(source).unwrap();
        let program = parse(&tokens).unwrap();
        analyze(&program)
    }

    fn warning_messages(analysis: &Analysis) -> Vec<String> {
        analysis.warnings.iter().map(|w| w.message.clone()).collect()
    }

    // ========================================
    // Valid Programs
    // ========================================

    #[test]
    fn test_empty_program() {
        let analysis = analyze_source("main { }");
        assert!(analysis.is_ok());
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn test_function_round_trip() {
        let source = r#"
            integer add(a: integer, b: integer) {
                return (a + b);
            }
            main {
                var x: integer;
                x = add(1, 2);
            }
        "#;
        let analysis = analyze_source(source);
        assert!(analysis.is_ok(), "{:?}", analysis.errors);
        assert!(analysis.warnings.is_empty(), "{:?}", analysis.warnings);
    }

    #[test]
    fn test_recursive_call() {
        let source = r#"
            integer down(n: integer) {
                var r: integer;
                if n > 0 { r = down(n); } else { r = 0; }
                return (r);
            }
            main { var x: integer; x = down(3); }
        "#;
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_global_constants_visible_in_functions() {
        let source = r#"
            const limit: integer = 10;
            integer bump(n: integer) {
                return (n + limit);
            }
            main { var x: integer; x = bump(1); }
        "#;
        assert!(analyze_source(source).is_ok());
    }

    // ========================================
    // Declarations
    // ========================================

    #[test]
    fn test_redeclaration_in_same_scope() {
        let analysis = analyze_source("main { var x: integer; var x: integer; x = 1; }");
        assert_eq!(analysis.count_errors(ErrorCode::AlreadyDeclared), 1);
    }

    #[test]
    fn test_shadowing_outer_scope_is_allowed() {
        let source = "var x: integer; main { var x: boolean; x = true; }";
        let analysis = analyze_source(source);
        assert!(!analysis.has_error(ErrorCode::AlreadyDeclared));
        assert!(analysis.is_ok());
    }

    #[test]
    fn test_const_type_mismatch() {
        let analysis = analyze_source("main { const x: boolean = 1 + 1; }");
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_const_accepts_call_result() {
        let source = r#"
            integer one() { return (1); }
            main { const k: integer = one(); }
        "#;
        assert!(analyze_source(source).is_ok());
    }

    #[test]
    fn test_reserved_identifiers() {
        let analysis = analyze_source("main { var t1: integer; const L2: integer = 0; t1 = 1; }");
        assert_eq!(analysis.count_errors(ErrorCode::ReservedIdentifier), 2);
    }

    // ========================================
    // Functions
    // ========================================

    #[test]
    fn test_function_redefinition() {
        let source = r#"
            integer f() { return (1); }
            boolean f() { return (true); }
            main { var x: integer; x = f(); }
        "#;
        let analysis = analyze_source(source);
        assert_eq!(analysis.count_errors(ErrorCode::FunctionAlreadyDefined), 1);
        // The first definition wins.
        assert!(!analysis.has_error(ErrorCode::TypeMismatch));
    }

    #[test]
    fn test_duplicate_parameter() {
        let source = r#"
            integer f(a: integer, a: integer) { return (a); }
            main { var x: integer; x = f(1, 2); }
        "#;
        let analysis = analyze_source(source);
        assert_eq!(analysis.count_errors(ErrorCode::DuplicateParameterName), 1);
    }

    #[test]
    fn test_return_type_mismatch() {
        let analysis = analyze_source("integer f() { return (true); } main { f(); }");
        assert_eq!(analysis.count_errors(ErrorCode::ReturnTypeMismatch), 1);
    }

    #[test]
    fn test_missing_return_value() {
        let analysis = analyze_source("boolean f() { return (); } main { f(); }");
        assert_eq!(analysis.count_errors(ErrorCode::ReturnTypeMismatch), 1);
    }

    #[test]
    fn test_void_function_without_value() {
        let analysis = analyze_source("void f() { return (); } main { f(); }");
        assert!(analysis.is_ok());
    }

    #[test]
    fn test_too_few_and_too_many_arguments() {
        let source = r#"
            integer add(a: integer, b: integer) { return (a + b); }
            main { var x: integer; x = add(1); x = add(1, 2, 3); }
        "#;
        let analysis = analyze_source(source);
        assert_eq!(analysis.count_errors(ErrorCode::TooFewArguments), 1);
        assert_eq!(analysis.count_errors(ErrorCode::TooManyArguments), 1);
        assert_eq!(analysis.errors.len(), 2);
    }

    #[test]
    fn test_undefined_function() {
        let analysis = analyze_source("main { g(); }");
        assert_eq!(analysis.count_errors(ErrorCode::UndefinedFunction), 1);
    }

    #[test]
    fn test_forward_call_is_undefined() {
        let source = r#"
            void a() { b(); return (); }
            void b() { return (); }
            main { a(); }
        "#;
        let analysis = analyze_source(source);
        assert_eq!(analysis.count_errors(ErrorCode::UndefinedFunction), 1);
    }

    #[test]
    fn test_not_a_function() {
        let analysis = analyze_source("var g: integer; main { g(); }");
        assert!(analysis.has_error(ErrorCode::NotAFunction));
    }

    #[test]
    fn test_argument_errors() {
        let source = r#"
            integer id(n: integer) { return (n); }
            main {
                var u: integer;
                var x: integer;
                var flag: boolean;
                flag = true;
                x = id(u);
                x = id(missing);
                x = id(id);
                x = id(flag);
            }
        "#;
        let analysis = analyze_source(source);
        assert!(analysis.has_error(ErrorCode::UnassignedVariable));
        assert!(analysis.has_error(ErrorCode::UndefinedVariable));
        assert!(analysis.has_error(ErrorCode::FunctionUsedAsValue));
        assert!(analysis.has_error(ErrorCode::ArgumentTypeMismatch));
    }

    // ========================================
    // Expressions and Conditions
    // ========================================

    #[test]
    fn test_arithmetic_on_boolean() {
        let analysis = analyze_source("main { var x: integer; x = true + 1; }");
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_logical_on_integer() {
        let analysis = analyze_source("main { var b: boolean; b = true && 3; }");
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_relational_on_boolean() {
        let analysis = analyze_source("main { if true < 1 { skip; } else { skip; } }");
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_equality_of_value_and_call() {
        let source = r#"
            integer one() { return (1); }
            main {
                var x: integer;
                x = 1;
                if x == one() { skip; } else { skip; }
            }
        "#;
        let analysis = analyze_source(source);
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_unknown_does_not_cascade() {
        let analysis = analyze_source("main { var x: integer; x = missing + 1; }");
        assert_eq!(analysis.errors.len(), 1);
        assert_eq!(analysis.errors[0].code, ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_unassigned_variable_in_expression() {
        let analysis = analyze_source("main { var a: integer; var b: integer; b = a + 1; }");
        assert_eq!(analysis.count_errors(ErrorCode::UnassignedVariable), 1);
    }

    #[test]
    fn test_function_used_as_value() {
        let source = "integer f() { return (1); } main { var x: integer; x = f + 1; }";
        let analysis = analyze_source(source);
        assert!(analysis.has_error(ErrorCode::FunctionUsedAsValue));
    }

    // ========================================
    // Assignments
    // ========================================

    #[test]
    fn test_assignment_to_undeclared() {
        let analysis = analyze_source("main { y = 1; }");
        assert_eq!(analysis.count_errors(ErrorCode::UndeclaredAssignment), 1);
        assert_eq!(
            analysis.errors[0].message,
            "'y' is assigned but was not previously declared"
        );
    }

    #[test]
    fn test_assignment_type_mismatch() {
        let analysis = analyze_source("main { var x: integer; x = true; }");
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_assignment_to_constant() {
        let analysis = analyze_source("main { const k: integer = 1; k = 2; }");
        assert_eq!(analysis.count_errors(ErrorCode::CannotAssignToConstant), 1);
    }

    #[test]
    fn test_assignment_of_void_call() {
        let source = "void f() { return (); } main { var x: integer; x = f(); }";
        let analysis = analyze_source(source);
        assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
    }

    #[test]
    fn test_parameters_can_be_assigned() {
        let source = "integer f(n: integer) { n = n + 1; return (n); } main { f(1); }";
        assert!(analyze_source(source).is_ok());
    }

    // ========================================
    // Warnings
    // ========================================

    #[test]
    fn test_never_assigned_warnings_in_declaration_order() {
        let analysis = analyze_source("main { var b: integer; var a: integer; var c: integer; c = 1; }");
        assert!(analysis.is_ok());
        assert_eq!(
            warning_messages(&analysis),
            vec!["'b' is never assigned", "'a' is never assigned"]
        );
    }

    #[test]
    fn test_never_used_function_warning() {
        let analysis = analyze_source("void f() { return (); } main { }");
        assert!(analysis.is_ok());
        assert_eq!(analysis.warnings.len(), 1);
        assert_eq!(analysis.warnings[0].code, WarningCode::NeverUsed);
        assert_eq!(analysis.warnings[0].message, "Function 'f' is never used");
    }

    #[test]
    fn test_warning_order_follows_scope_exit() {
        let source = r#"
            var g: integer;
            void f() { var inner: integer; return (); }
            main { var m: integer; f(); }
        "#;
        let analysis = analyze_source(source);
        assert_eq!(
            warning_messages(&analysis),
            vec![
                "'inner' is never assigned",
                "'m' is never assigned",
                "'g' is never assigned",
            ]
        );
    }

    #[test]
    fn test_bare_rhs_marks_used() {
        // `a` is read before assignment: one error, but no warning for it.
        let analysis = analyze_source("main { var a: integer; var b: integer; b = a; }");
        assert_eq!(analysis.count_errors(ErrorCode::UnassignedVariable), 1);
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn test_constants_and_parameters_never_warn() {
        let source = "const k: integer = 1; integer f(p: integer) { return (1); } main { f(k); }";
        let analysis = analyze_source(source);
        assert!(analysis.is_ok());
        assert!(analysis.warnings.is_empty());
    }
}
