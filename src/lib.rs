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

//! CCAL Compiler Library
//!
//! This library checks CCAL programs and lowers them to three-address code.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Parsing tokens into a parse tree
//! - [`ast`] - Parse tree definitions
//! - [`analyzer`] - Semantic analysis and type checking
//! - [`codegen`] - Three-address code generation
//!
//! # Example
//!
//! ```no_run
//! use ccal::{analyzer, codegen, lexer, parser};
//!
//! fn lower(source: &str) -> Result<String, Box<dyn std::error::Error>> {
//!     // Tokenize
//!     let tokens = lexer::tokenize(source)?;
//!
//!     // Parse
//!     let program = parser::parse(&tokens)?;
//!
//!     // Analyze
//!     let analysis = analyzer::analyze(&program);
//!     if let Some(error) = analysis.errors.into_iter().next() {
//!         return Err(error.into());
//!     }
//!
//!     // Generate code
//!     Ok(codegen::generate(&program).to_string())
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{Program, Type};
pub use codegen::TacProgram;
pub use error::{
    format_error, format_warning, CompileError, CompileErrors, ErrorCode, Result, Span, Warning,
};
pub use lexer::Token;

/// The version of the CCAL compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "CCAL";

/// The outcome of a successful compilation.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// The generated three-address code, one instruction per line.
    pub code: String,
    /// Warnings reported by the analyzer.
    pub warnings: Vec<Warning>,
}

/// Compile source code to three-address code.
///
/// This is the main entry point for compiling CCAL source code.
/// It performs all compilation stages: lexing, parsing, analysis, and code generation.
/// Code is only generated when the analysis reports no errors.
///
/// # Arguments
///
/// * `source` - The source code to compile
///
/// # Returns
///
/// Returns the generated code and the analyzer's warnings, or every error
/// (together with the warnings) if compilation fails.
///
/// # Example
///
/// ```no_run
/// let source = r#"
/// main {
///     var x: integer;
///     x = 1 + 2;
/// }
/// "#;
///
/// match ccal::compile(source) {
///     Ok(result) => print!("{}", result.code),
///     Err(e) => eprintln!("Compilation error: {}", e),
/// }
/// ```
pub fn compile(source: &str) -> std::result::Result<Compilation, CompileErrors> {
    // Tokenize
    let tokens = lexer::tokenize(source)?;

    // Parse
    let program = parser::parse(&tokens)?;

    // Analyze
    let analysis = analyzer::analyze(&program);
    if !analysis.is_ok() {
        return Err(CompileErrors {
            errors: analysis.errors,
            warnings: analysis.warnings,
        });
    }

    // Generate code
    let code = codegen::generate(&program).to_string();

    Ok(Compilation {
        code,
        warnings: analysis.warnings,
    })
}
