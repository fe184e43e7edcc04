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

//! Entity definitions for the semantic analyzer.
//!
//! An entity is a snapshot of one resolved symbol: a variable, constant,
//! parameter or function, together with its usage state. State changes
//! replace the snapshot held by the owning scope.

use crate::ast::Type;
use crate::error::Span;

/// The lifecycle state of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Declared but never assigned (variables) or never called (functions).
    Declared,
    /// Target of at least one assignment.
    Assigned,
    /// Read as the bare right-hand side of an assignment, or called.
    Used,
    /// A constant; never changes.
    Constant,
    /// A function parameter that was not reassigned.
    Parameter,
}

/// What kind of symbol an entity is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// A variable, constant or parameter of the given type.
    Value(Type),
    /// A function.
    Function { return_type: Type, params: Vec<Type> },
}

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The symbol name.
    pub name: String,
    /// The kind of symbol.
    pub kind: EntityKind,
    /// The usage state.
    pub state: State,
    /// The span where this symbol was declared.
    pub span: Span,
}

impl Entity {
    /// Create a new variable entity.
    pub fn variable(name: impl Into<String>, var_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Value(var_type),
            state: State::Declared,
            span,
        }
    }

    /// Create a new constant entity.
    pub fn constant(name: impl Into<String>, const_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Value(const_type),
            state: State::Constant,
            span,
        }
    }

    /// Create a new parameter entity.
    pub fn parameter(name: impl Into<String>, param_type: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Value(param_type),
            state: State::Parameter,
            span,
        }
    }

    /// Create a new function entity.
    pub fn function(
        name: impl Into<String>,
        return_type: Type,
        params: Vec<Type>,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Function {
                return_type,
                params,
            },
            state: State::Declared,
            span,
        }
    }

    /// Get the value type of a variable, constant or parameter.
    pub fn value_type(&self) -> Option<Type> {
        match &self.kind {
            EntityKind::Value(ty) => Some(*ty),
            EntityKind::Function { .. } => None,
        }
    }

    /// Check if this entity is a function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, EntityKind::Function { .. })
    }

    /// Check if this entity is a constant.
    pub fn is_constant(&self) -> bool {
        self.state == State::Constant
    }

    /// Get the number of parameters of a function, 0 for values.
    pub fn arity(&self) -> usize {
        match &self.kind {
            EntityKind::Function { params, .. } => params.len(),
            EntityKind::Value(_) => 0,
        }
    }

    /// Return a copy of this entity in the given state.
    pub fn with_state(&self, state: State) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EntityKind::Function {
                return_type,
                params,
            } => write!(
                f,
                "function {} ({}, args: {}, {:?})",
                self.name,
                return_type,
                params.len(),
                self.state
            ),
            EntityKind::Value(ty) if self.is_constant() => {
                write!(f, "constant {} ({})", self.name, ty)
            }
            EntityKind::Value(ty) => write!(f, "variable {} ({}, {:?})", self.name, ty, self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states() {
        let span = Span::new(0, 1);
        assert_eq!(Entity::variable("x", Type::Integer, span.clone()).state, State::Declared);
        assert_eq!(Entity::constant("k", Type::Boolean, span.clone()).state, State::Constant);
        assert_eq!(Entity::parameter("p", Type::Integer, span.clone()).state, State::Parameter);
        assert_eq!(
            Entity::function("f", Type::Void, vec![], span).state,
            State::Declared
        );
    }

    #[test]
    fn test_with_state_keeps_identity() {
        let var = Entity::variable("x", Type::Integer, Span::new(3, 4));
        let assigned = var.with_state(State::Assigned);
        assert_eq!(assigned.name, "x");
        assert_eq!(assigned.value_type(), Some(Type::Integer));
        assert_eq!(assigned.span, Span::new(3, 4));
        assert_eq!(assigned.state, State::Assigned);
    }

    #[test]
    fn test_function_arity() {
        let func = Entity::function(
            "add",
            Type::Integer,
            vec![Type::Integer, Type::Integer],
            Span::new(0, 3),
        );
        assert!(func.is_function());
        assert_eq!(func.arity(), 2);
        assert_eq!(func.value_type(), None);
        assert_eq!(func.to_string(), "function add (integer, args: 2, Declared)");
    }
}
