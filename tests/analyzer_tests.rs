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

//! Semantic analysis tests for the CCAL compiler.
//!
//! These tests run whole programs through the lexer, parser and analyzer
//! and check the reported errors and warnings.

use ccal::analyzer::{self, Analysis};
use ccal::{lexer, parser, ErrorCode};
use pretty_assertions::assert_eq;

fn analyze(source: &str) -> Analysis {
    let tokens = lexer::tokenize(source).expect("Failed to tokenize");
    let program = parser::parse(&tokens).expect("Failed to parse");
    analyzer::analyze(&program)
}

fn warning_messages(analysis: &Analysis) -> Vec<String> {
    analysis.warnings.iter().map(|w| w.message.clone()).collect()
}

// ============================================================================
// Valid Programs
// ============================================================================

#[test]
fn test_clean_program() {
    let analysis = analyze(
        r#"
        integer add(a: integer, b: integer) {
            return (a + b);
        }
        main {
            var x: integer;
            x = add(1, 2);
        }
        "#,
    );
    assert!(analysis.is_ok(), "Unexpected errors: {:?}", analysis.errors);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn test_clean_program_with_control_flow() {
    let analysis = analyze(
        r#"
        const limit: integer = 10;
        var total: integer;

        void bump(n: integer) {
            total = n;
            return ();
        }

        main {
            var i: integer;
            var done: boolean;
            i = 0;
            total = 0;
            done = false;
            while (i < limit && !(done == true)) {
                bump(i);
                i = i + 1;
                if (i >= 5) {
                    done = true;
                } else {
                    skip;
                }
            }
        }
        "#,
    );
    assert!(analysis.is_ok(), "Unexpected errors: {:?}", analysis.errors);
}

#[test]
fn test_nested_scope_may_shadow_global() {
    let analysis = analyze(
        r#"
        var x: integer;
        integer f(x: integer) {
            return (x);
        }
        main {
            var x: integer;
            x = f(1);
        }
        "#,
    );
    assert!(analysis.is_ok(), "Unexpected errors: {:?}", analysis.errors);
    assert_eq!(warning_messages(&analysis), vec!["'x' is never assigned"]);
}

#[test]
fn test_call_result_feeds_arithmetic() {
    let analysis = analyze(
        r#"
        integer one() { return (1); }
        main {
            var x: integer;
            x = one() + one() - 2;
        }
        "#,
    );
    assert!(analysis.is_ok(), "Unexpected errors: {:?}", analysis.errors);
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_same_scope_redeclaration_reported_once() {
    let analysis = analyze("main { var x: integer; var x: integer; x = 1; }");
    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(analysis.count_errors(ErrorCode::AlreadyDeclared), 1);
}

#[test]
fn test_constant_type_mismatch() {
    let analysis = analyze("main { const x: boolean = 1 + 1; }");
    assert!(analysis.has_error(ErrorCode::TypeMismatch));
}

#[test]
fn test_assignment_to_constant() {
    let analysis = analyze("const k: integer = 1; main { k = 2; }");
    assert_eq!(analysis.count_errors(ErrorCode::CannotAssignToConstant), 1);
}

#[test]
fn test_reserved_identifier() {
    let analysis = analyze("main { var t1: integer; t1 = 0; }");
    assert!(analysis.has_error(ErrorCode::ReservedIdentifier));
}

#[test]
fn test_undeclared_assignment() {
    let analysis = analyze("main { y = 1; }");
    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(
        analysis.errors[0].message,
        "'y' is assigned but was not previously declared"
    );
}

// ============================================================================
// References
// ============================================================================

#[test]
fn test_undefined_variable() {
    let analysis = analyze("main { var x: integer; x = y; }");
    assert!(analysis.has_error(ErrorCode::UndefinedVariable));
}

#[test]
fn test_unknown_operand_does_not_cascade() {
    let analysis = analyze("main { var x: integer; x = missing + 1; }");
    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(analysis.errors[0].code, ErrorCode::UndefinedVariable);
}

#[test]
fn test_use_before_assignment() {
    let analysis = analyze("main { var x: integer; var y: integer; y = x; }");
    assert!(analysis.has_error(ErrorCode::UnassignedVariable));
}

#[test]
fn test_function_used_as_value() {
    let analysis = analyze("integer f() { return (1); } main { var x: integer; x = f; }");
    assert!(analysis.has_error(ErrorCode::FunctionUsedAsValue));
}

#[test]
fn test_undefined_function() {
    let analysis = analyze("main { g(); }");
    assert!(analysis.has_error(ErrorCode::UndefinedFunction));
}

#[test]
fn test_forward_call_is_undefined() {
    let analysis = analyze(
        r#"
        integer a() { return (b()); }
        integer b() { return (1); }
        main { var x: integer; x = a(); }
        "#,
    );
    assert_eq!(analysis.count_errors(ErrorCode::UndefinedFunction), 1);
}

#[test]
fn test_calling_a_variable() {
    let analysis = analyze("var g: integer; main { g(); }");
    assert!(analysis.has_error(ErrorCode::NotAFunction));
}

// ============================================================================
// Functions and Calls
// ============================================================================

#[test]
fn test_too_few_arguments() {
    let analysis = analyze(
        "integer f(a: integer, b: integer) { return (a); } main { var x: integer; x = f(1); }",
    );
    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(analysis.errors[0].code, ErrorCode::TooFewArguments);
}

#[test]
fn test_too_many_arguments() {
    let analysis = analyze(
        "integer f(a: integer) { return (a); } main { var x: integer; x = f(1, 2); }",
    );
    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(analysis.errors[0].code, ErrorCode::TooManyArguments);
}

#[test]
fn test_argument_type_mismatch() {
    let analysis = analyze(
        r#"
        integer f(a: integer) { return (a); }
        main {
            var b: boolean;
            var x: integer;
            b = true;
            x = f(b);
        }
        "#,
    );
    assert_eq!(analysis.count_errors(ErrorCode::ArgumentTypeMismatch), 1);
}

#[test]
fn test_return_type_mismatch() {
    let analysis = analyze("boolean f() { return (1); } main { }");
    assert!(analysis.has_error(ErrorCode::ReturnTypeMismatch));
}

#[test]
fn test_function_redefinition() {
    let analysis = analyze(
        "integer f() { return (1); } integer f() { return (2); } main { }",
    );
    assert_eq!(analysis.count_errors(ErrorCode::FunctionAlreadyDefined), 1);
}

#[test]
fn test_duplicate_parameter() {
    let analysis = analyze("integer f(a: integer, a: integer) { return (a); } main { }");
    assert!(analysis.has_error(ErrorCode::DuplicateParameterName));
}

// ============================================================================
// Operators and Conditions
// ============================================================================

#[test]
fn test_arithmetic_on_boolean() {
    let analysis = analyze(
        "main { var b: boolean; var x: integer; b = true; x = b + 1; }",
    );
    assert!(analysis.has_error(ErrorCode::TypeMismatch));
}

#[test]
fn test_comparison_on_boolean() {
    let analysis = analyze("main { var b: boolean; b = true; while (b < 1) { skip; } }");
    assert!(analysis.has_error(ErrorCode::TypeMismatch));
}

#[test]
fn test_equality_between_types() {
    let analysis = analyze(
        r#"
        main {
            var x: integer;
            var b: boolean;
            x = 1;
            b = true;
            if (x == b) { skip; } else { skip; }
        }
        "#,
    );
    assert_eq!(analysis.count_errors(ErrorCode::TypeMismatch), 1);
}

// ============================================================================
// Warnings
// ============================================================================

#[test]
fn test_warnings_in_scope_exit_order() {
    let analysis = analyze(
        r#"
        var g: integer;
        integer f() {
            var local: integer;
            return (1);
        }
        main {
            var x: integer;
        }
        "#,
    );
    assert!(analysis.is_ok());
    assert_eq!(
        warning_messages(&analysis),
        vec![
            "'local' is never assigned",
            "'x' is never assigned",
            "'g' is never assigned",
            "Function 'f' is never used",
        ]
    );
}
