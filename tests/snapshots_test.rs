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

//! Snapshot tests for the CCAL compiler.
//!
//! These tests use the `insta` crate to capture and verify output
//! from various compiler stages.

use ccal::{compile, lexer, Span, Token};

// ============================================================================
// Lexer Snapshot Tests
// ============================================================================

/// Format tokens for snapshot comparison.
fn format_tokens(tokens: &[(Token, Span)]) -> String {
    let mut output = String::new();
    for (token, span) in tokens {
        output.push_str(&format!("{:?} @ {}..{}\n", token, span.start, span.end));
    }
    output
}

#[test]
fn test_lexer_snapshot_assignment() {
    let tokens = lexer::tokenize("main { x = -1; }").unwrap();
    insta::assert_snapshot!(format_tokens(&tokens).trim_end(), @r###"
    Main @ 0..4
    LeftBrace @ 5..6
    Identifier("x") @ 7..8
    Assign @ 9..10
    Minus @ 11..12
    Number("1") @ 12..13
    Semicolon @ 13..14
    RightBrace @ 15..16
    "###);
}

// ============================================================================
// Code Generation Snapshot Tests
// ============================================================================

fn compile_fixture(source: &str) -> String {
    match compile(source) {
        Ok(result) => result.code.trim_end().to_string(),
        Err(e) => panic!("Compilation failed: {:?}", e.errors),
    }
}

#[test]
fn test_codegen_snapshot_add() {
    let code = compile_fixture(include_str!("fixtures/add.ccl"));
    insta::assert_snapshot!(code, @r###"
    add:
    a.1 = getparam 1
    b.1 = getparam 2
    return a.1 + b.1
    main:
    param 1
    param 2
    x.2 = call add, 2
    call _exit, 0
    "###);
}

#[test]
fn test_codegen_snapshot_countdown() {
    let code = compile_fixture(include_str!("fixtures/countdown.ccl"));
    insta::assert_snapshot!(code, @r###"
    is_zero:
    n.1 = getparam 1
    c1 = false
    ifz n.1 == 0 goto L3
    c1 = true
    L3:
    ifz c1 == true goto L1
    result.1 = true
    goto L2
    L1:
    result.1 = false
    L2:
    return result.1
    decrement:
    n.2 = getparam 1
    return n.2 - 1
    main:
    start = 5
    current.3 = start
    steps = 0
    done.3 = false
    L4:
    c2 = false
    ifz done.3 == true goto L6
    c2 = true
    L6:
    c3 = false
    ifz c2 == false goto L7
    c3 = true
    L7:
    ifz c3 == true goto L5
    param current.3
    current.3 = call decrement, 1
    steps = steps + 1
    param current.3
    done.3 = call is_zero, 1
    goto L4
    L5:
    call _exit, 0
    "###);
}

#[test]
fn test_codegen_snapshot_flags() {
    let code = compile_fixture(include_str!("fixtures/flags.ccl"));
    insta::assert_snapshot!(code, @r###"
    main:
    p.1 = true
    q.1 = !p.1
    t1 = 1 + 2
    t2 = t1 - 3
    t3 = t2 + 4
    total.1 = t3
    t4 = p.1 && q.1
    t5 = t4 || false
    p.1 = t5
    call _exit, 0
    "###);
}

// ============================================================================
// Diagnostic Snapshot Tests
// ============================================================================

#[test]
fn test_error_snapshot_bad_types() {
    let errors = compile(include_str!("fixtures/bad_types.ccl")).unwrap_err();
    let messages: Vec<String> = errors.errors.iter().map(|e| e.to_string()).collect();
    insta::assert_snapshot!(messages.join("\n"), @r###"
    [E210] Cannot assign integer to 'flag' of type boolean
    [E210] Operator '+' requires integer operands, found boolean
    "###);
}
