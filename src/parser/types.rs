// CCAL - A semantic analyser and three-address code generator for CCAL
//
// Copyright (C) 2026 Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Type parsing for the parser.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::Type;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Trait for type parsing operations.
pub trait TypeParser<'a> {
    /// Parse a type keyword.
    fn parse_type(&mut self) -> Result<Type, CompileError>;
}

impl<'a> TypeParser<'a> for Parser<'a> {
    fn parse_type(&mut self) -> Result<Type, CompileError> {
        let ty = match self.peek() {
            Some(Token::Integer) => Type::Integer,
            Some(Token::Boolean) => Type::Boolean,
            Some(Token::Void) => Type::Void,
            Some(found) => {
                return Err(self.error(
                    ErrorCode::ExpectedType,
                    format!("Expected type, found '{}'", found),
                ))
            }
            None => {
                return Err(self.error(
                    ErrorCode::UnexpectedEndOfFile,
                    "Expected type, found end of file",
                ))
            }
        };
        self.advance();
        Ok(ty)
    }
}
