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

//! Function analysis for the semantic analyzer.
//!
//! This module provides function-related analysis:
//! - Function registration and body analysis
//! - Parameter registration
//! - The trailing return expression
//! - Function calls and their arguments

use super::entity::{Entity, EntityKind, State};
use super::expressions::ExpressionAnalyzer;
use super::statements::StatementAnalyzer;
use super::type_check::{ExprType, TypeChecker};
use super::Analyzer;
use crate::ast::{Argument, Func, FuncCall, Operand, Type};
use crate::error::{CompileError, ErrorCode};

/// Extension trait for function analysis.
pub trait FunctionAnalyzer {
    /// Analyze a function definition.
    fn analyze_function(&mut self, func: &Func);

    /// Register a function in the global scope.
    fn register_function(&mut self, func: &Func);

    /// Check the trailing return expression against the declared return type.
    fn check_return(&mut self, func: &Func);

    /// Analyze a function call and return the type of its result.
    fn analyze_function_call(&mut self, call: &FuncCall) -> ExprType;

    /// Analyze a call argument and return its type.
    fn analyze_argument(&mut self, arg: &Argument, call: &FuncCall) -> ExprType;
}

impl FunctionAnalyzer for Analyzer {
    fn analyze_function(&mut self, func: &Func) {
        self.register_function(func);

        self.symbols.push_scope();

        for param in &func.params {
            self.check_reserved_identifier(&param.name, &param.span);
            let entity = Entity::parameter(param.name.clone(), param.param_type, param.span.clone());
            if let Err(existing) = self.symbols.define(entity) {
                self.error(
                    CompileError::new(
                        ErrorCode::DuplicateParameterName,
                        format!(
                            "Duplicate parameter name '{}' in function '{}'",
                            param.name, func.name
                        ),
                        param.span.clone(),
                    )
                    .with_hint(format!(
                        "Previously defined at position {}",
                        existing.span.start
                    )),
                );
            }
        }

        self.analyze_declarations(&func.declarations);
        self.analyze_block(&func.body);
        self.check_return(func);

        if let Some(scope) = self.symbols.pop_scope() {
            self.warn_unassigned(&scope);
        }
    }

    fn register_function(&mut self, func: &Func) {
        self.check_reserved_identifier(&func.name, &func.span);

        let params = func.params.iter().map(|p| p.param_type).collect();
        let entity = Entity::function(func.name.clone(), func.return_type, params, func.span.clone());

        if let Err(existing) = self.symbols.define_global(entity) {
            let (code, message) = if existing.is_function() {
                (
                    ErrorCode::FunctionAlreadyDefined,
                    format!("Function '{}' is already defined", func.name),
                )
            } else {
                (
                    ErrorCode::AlreadyDeclared,
                    format!("'{}' is already declared as a global", func.name),
                )
            };
            self.error(
                CompileError::new(code, message, func.span.clone()).with_hint(format!(
                    "Previously defined at position {}",
                    existing.span.start
                )),
            );
        }
    }

    fn check_return(&mut self, func: &Func) {
        match &func.return_value {
            Some(value) => {
                let ty = self.analyze_expression(value);
                if !ty.resolves_to(func.return_type) {
                    self.error(
                        CompileError::new(
                            ErrorCode::ReturnTypeMismatch,
                            format!(
                                "Function '{}' returns {} but its return expression is {}",
                                func.name, func.return_type, ty
                            ),
                            value.span.clone(),
                        )
                        .with_hint(format!("return ({});", value)),
                    );
                }
            }
            None if func.return_type != Type::Void => {
                self.error(
                    CompileError::new(
                        ErrorCode::ReturnTypeMismatch,
                        format!(
                            "Function '{}' must return a value of type {}",
                            func.name, func.return_type
                        ),
                        func.span.clone(),
                    )
                    .with_hint("return ();"),
                );
            }
            None => {}
        }
    }

    fn analyze_function_call(&mut self, call: &FuncCall) -> ExprType {
        let hint = call.to_string();

        let (return_type, params) = match self.symbols.lookup_global(&call.name).map(|e| &e.kind) {
            Some(EntityKind::Function {
                return_type,
                params,
            }) => (*return_type, params.clone()),
            Some(EntityKind::Value(_)) => {
                self.error(
                    CompileError::new(
                        ErrorCode::NotAFunction,
                        format!("'{}' is not a function", call.name),
                        call.span.clone(),
                    )
                    .with_hint(hint),
                );
                return ExprType::Unknown;
            }
            None => {
                self.error(
                    CompileError::new(
                        ErrorCode::UndefinedFunction,
                        format!("Undefined function '{}'", call.name),
                        call.span.clone(),
                    )
                    .with_hint(hint),
                );
                return ExprType::Unknown;
            }
        };

        let arity = params.len();
        let count = call.args.len();
        if count < arity {
            self.error(
                CompileError::new(
                    ErrorCode::TooFewArguments,
                    format!(
                        "Too few arguments for '{}': expected {}, found {}",
                        call.name, arity, count
                    ),
                    call.span.clone(),
                )
                .with_hint(hint.clone()),
            );
        } else if count > arity {
            self.error(
                CompileError::new(
                    ErrorCode::TooManyArguments,
                    format!(
                        "Too many arguments for '{}': expected {}, found {}",
                        call.name, arity, count
                    ),
                    call.span.clone(),
                )
                .with_hint(hint.clone()),
            );
        }

        self.symbols.set_global_state(&call.name, State::Used);

        let arg_types: Vec<ExprType> = call
            .args
            .iter()
            .map(|arg| self.analyze_argument(arg, call))
            .collect();

        if count == arity {
            for (i, (arg_type, param_type)) in arg_types.iter().zip(&params).enumerate() {
                if !arg_type.resolves_to(*param_type) {
                    self.error(
                        CompileError::new(
                            ErrorCode::ArgumentTypeMismatch,
                            format!(
                                "Argument {} of '{}' expects {}, found {}",
                                i + 1,
                                call.name,
                                param_type,
                                arg_type
                            ),
                            call.args[i].span.clone(),
                        )
                        .with_hint(hint.clone()),
                    );
                }
            }
        }

        ExprType::Call(return_type)
    }

    fn analyze_argument(&mut self, arg: &Argument, call: &FuncCall) -> ExprType {
        let name = match &arg.value {
            Operand::Number(_) => return ExprType::Value(Type::Integer),
            Operand::Ident(name) => name,
        };

        let Some((value_type, state)) = self
            .symbols
            .lookup(name)
            .map(|entity| (entity.value_type(), entity.state))
        else {
            self.error(
                CompileError::new(
                    ErrorCode::UndefinedVariable,
                    format!("'{}' is passed as an argument but was never declared", name),
                    arg.span.clone(),
                )
                .with_hint(call.to_string()),
            );
            return ExprType::Unknown;
        };

        match value_type {
            None => {
                self.error(
                    CompileError::new(
                        ErrorCode::FunctionUsedAsValue,
                        format!("'{}' is passed as an argument but is a function", name),
                        arg.span.clone(),
                    )
                    .with_hint(call.to_string()),
                );
                ExprType::Unknown
            }
            Some(ty) => {
                if state == State::Declared {
                    self.error(
                        CompileError::new(
                            ErrorCode::UnassignedVariable,
                            format!("'{}' is passed as an argument but was never assigned", name),
                            arg.span.clone(),
                        )
                        .with_hint(call.to_string()),
                    );
                }
                ExprType::Value(ty)
            }
        }
    }
}
