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

//! Error types for the CCAL compiler.
//!
//! This module defines the diagnostics produced by every stage:
//! lexical and syntax errors abort their stage, while the semantic
//! analyser collects any number of errors and warnings.

use ariadne::{Config, Label, Report, ReportKind, Source};
use std::ops::Range;
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span from a range.
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Clamp this span into a source of the given length.
    fn clamped(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = self.end.min(len).max(start);
        start..end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E002)
    InvalidCharacter,
    UnterminatedComment,

    // Syntax errors (E100-E108)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedStatement,
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedType,
    ExpectedCondition,
    ExpectedMain,

    // Semantic errors (E200-E227)
    UndefinedVariable,
    AlreadyDeclared,
    CannotAssignToConstant,
    UnassignedVariable,
    UndeclaredAssignment,
    ReservedIdentifier,
    TypeMismatch,
    FunctionUsedAsValue,
    UndefinedFunction,
    FunctionAlreadyDefined,
    TooFewArguments,
    TooManyArguments,
    ArgumentTypeMismatch,
    ReturnTypeMismatch,
    NotAFunction,
    DuplicateParameterName,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidCharacter => "E001",
            ErrorCode::UnterminatedComment => "E002",

            // Syntax errors
            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::UnexpectedEndOfFile => "E101",
            ErrorCode::ExpectedStatement => "E102",
            ErrorCode::ExpectedExpression => "E103",
            ErrorCode::ExpectedIdentifier => "E105",
            ErrorCode::ExpectedType => "E106",
            ErrorCode::ExpectedCondition => "E107",
            ErrorCode::ExpectedMain => "E108",

            // Semantic errors
            ErrorCode::UndefinedVariable => "E200",
            ErrorCode::AlreadyDeclared => "E201",
            ErrorCode::CannotAssignToConstant => "E202",
            ErrorCode::UnassignedVariable => "E203",
            ErrorCode::UndeclaredAssignment => "E204",
            ErrorCode::ReservedIdentifier => "E205",
            ErrorCode::TypeMismatch => "E210",
            ErrorCode::FunctionUsedAsValue => "E211",
            ErrorCode::UndefinedFunction => "E220",
            ErrorCode::FunctionAlreadyDefined => "E221",
            ErrorCode::TooFewArguments => "E222",
            ErrorCode::TooManyArguments => "E223",
            ErrorCode::ArgumentTypeMismatch => "E224",
            ErrorCode::ReturnTypeMismatch => "E225",
            ErrorCode::NotAFunction => "E226",
            ErrorCode::DuplicateParameterName => "E227",
        }
    }

    /// Check whether this code belongs to the semantic analyser.
    pub fn is_semantic(&self) -> bool {
        self.code().starts_with("E2")
    }
}

/// A compiler error with source location.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Warning codes for advisory diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// A variable or constant that is never given a value.
    NeverAssigned,
    /// A function that is never called.
    NeverUsed,
}

impl WarningCode {
    /// Get the numeric code for this warning.
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NeverAssigned => "W001",
            WarningCode::NeverUsed => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
    pub span: Span,
}

impl Warning {
    /// Create a new warning.
    pub fn new(code: WarningCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Every diagnostic of a failed compilation.
#[derive(Debug, Default, Error)]
#[error("compilation failed with {} error(s)", .errors.len())]
pub struct CompileErrors {
    /// Errors in discovery order.
    pub errors: Vec<CompileError>,
    /// Warnings collected before the failure.
    pub warnings: Vec<Warning>,
}

impl CompileErrors {
    /// Get the first error, if any.
    pub fn first(&self) -> Option<&CompileError> {
        self.errors.first()
    }

    /// Check whether an error with the given code was reported.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Render every error and warning in source order.
    ///
    /// At the same position an error comes before a warning.
    pub fn format_all(&self, source: &str, filename: Option<&str>) -> String {
        let mut reports: Vec<(usize, u8, String)> = self
            .errors
            .iter()
            .map(|e| (e.span.start, 0, format_error(e, source, filename)))
            .chain(
                self.warnings
                    .iter()
                    .map(|w| (w.span.start, 1, format_warning(w, source, filename))),
            )
            .collect();
        reports.sort_by_key(|(start, rank, _)| (*start, *rank));
        reports.into_iter().map(|(_, _, text)| text).collect()
    }
}

impl From<CompileError> for CompileErrors {
    fn from(error: CompileError) -> Self {
        Self {
            errors: vec![error],
            warnings: Vec::new(),
        }
    }
}

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    render(
        ReportKind::Error,
        error.code_str(),
        &error.message,
        &error.span,
        error.hint.as_deref(),
        source,
        filename,
    )
}

/// Format a warning with source context.
pub fn format_warning(warning: &Warning, source: &str, filename: Option<&str>) -> String {
    render(
        ReportKind::Warning,
        warning.code.code(),
        &warning.message,
        &warning.span,
        None,
        source,
        filename,
    )
}

fn render(
    kind: ReportKind<'_>,
    code: &str,
    message: &str,
    span: &Span,
    hint: Option<&str>,
    source: &str,
    filename: Option<&str>,
) -> String {
    let filename = filename.unwrap_or("<input>");
    let range = span.clamped(source.len());

    let mut builder = Report::build(kind, filename, range.start)
        .with_config(Config::default().with_color(false))
        .with_code(code)
        .with_message(message)
        .with_label(Label::new((filename, range)).with_message(message));
    if let Some(hint) = hint {
        builder = builder.with_help(hint);
    }

    let mut buffer = Vec::new();
    match builder
        .finish()
        .write((filename, Source::from(source.to_string())), &mut buffer)
    {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => format!("[{}] {}\n", code, message),
    }
}
