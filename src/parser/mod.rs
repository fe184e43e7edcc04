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

//! Parser module for the CCAL compiler.
//!
//! This module parses a token stream into the parse tree of [`crate::ast`].
//! It is a recursive descent parser; the first syntax error aborts parsing.
//!
//! # Module Structure
//!
//! - `blocks` - Functions, `main` and braced blocks (BlockParser trait)
//! - `conditions` - `if`/`while` conditions (ConditionParser trait)
//! - `control_flow` - If/else and while statements (ControlFlowParser trait)
//! - `expressions` - Expressions, fragments and calls (ExpressionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Statements and declarations (StatementParser trait)
//! - `types` - Type keywords (TypeParser trait)

// Submodules
pub mod blocks;
pub mod conditions;
pub mod control_flow;
pub mod expressions;
pub mod helpers;
pub mod statements;
pub mod types;

// Internal imports from submodules
use blocks::BlockParser;
use helpers::ParserHelpers;
use statements::StatementParser;

use crate::ast::Program;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [(Token, Span)],
    /// Current position in the token stream.
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program: global declarations, functions, then `main`.
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let declarations = self.parse_declarations()?;

        let mut functions = Vec::new();
        while self.peek().is_some_and(Token::is_type) {
            functions.push(self.parse_function_def()?);
        }

        let main = self.parse_main()?;

        if let Some(found) = self.peek() {
            return Err(self.error(
                ErrorCode::UnexpectedToken,
                format!("Unexpected '{}' after main", found),
            ));
        }

        Ok(Program {
            declarations,
            functions,
            main,
        })
    }
}

/// Parse a token stream into a program AST.
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program, CompileError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}
