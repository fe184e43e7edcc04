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

//! Lexer module for the CCAL compiler.
//!
//! This module tokenizes CCAL source code into a stream of tokens.
//! Whitespace, `// line` comments and `/* block */` comments are skipped.

mod tokens;

pub use tokens::Token;

use crate::error::{CompileError, ErrorCode, Span};
use logos::Logos;

/// Tokenize source code into a vector of tokens with their spans.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    let mut tokens = Vec::new();

    for (result, range) in Token::lexer(source).spanned() {
        let span = Span::from_range(range);
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let text = source.get(span.start..span.end).unwrap_or_default();
                if text.starts_with("/*") {
                    return Err(CompileError::new(
                        ErrorCode::UnterminatedComment,
                        "Unterminated block comment",
                        Span::new(span.start, span.start + 2),
                    ));
                }
                return Err(CompileError::new(
                    ErrorCode::InvalidCharacter,
                    format!("Invalid character '{}'", text),
                    span,
                ));
            }
        }
    }

    Ok(tokens)
}
