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

//! Symbol table for the semantic analyzer.
//!
//! The symbol table manages a stack of scopes. The bottom scope is the
//! global scope, which also holds every function.

use super::entity::{Entity, State};
use super::scope::Scope;

/// The symbol table for semantic analysis.
#[derive(Debug)]
pub struct SymbolTable {
    /// The scope stack (innermost scope last).
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Create a new symbol table with a global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    /// Push a new scope onto the stack.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the current scope from the stack. The global scope is never popped.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Define an entity in the current scope.
    pub fn define(&mut self, entity: Entity) -> Result<(), Entity> {
        match self.scopes.last_mut() {
            Some(scope) => scope.define(entity),
            None => Err(entity),
        }
    }

    /// Define an entity in the global scope.
    pub fn define_global(&mut self, entity: Entity) -> Result<(), Entity> {
        self.scopes[0].define(entity)
    }

    /// Look up an entity, searching from innermost to outermost scope.
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }

    /// Look up an entity in the global scope only.
    pub fn lookup_global(&self, name: &str) -> Option<&Entity> {
        self.scopes[0].lookup(name)
    }

    /// Check if a name is bound in the current scope.
    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.scopes.last().is_some_and(|scope| scope.contains(name))
    }

    /// Move the innermost entity with this name to a new state.
    pub fn set_state(&mut self, name: &str, state: State) {
        if let Some(scope) = self.scopes.iter_mut().rev().find(|s| s.contains(name)) {
            if let Some(updated) = scope.lookup(name).map(|e| e.with_state(state)) {
                scope.replace(updated);
            }
        }
    }

    /// Move a global entity to a new state.
    pub fn set_global_state(&mut self, name: &str, state: State) {
        let scope = &mut self.scopes[0];
        if let Some(updated) = scope.lookup(name).map(|e| e.with_state(state)) {
            scope.replace(updated);
        }
    }

    /// Get the global scope.
    pub fn global_scope(&self) -> &Scope {
        &self.scopes[0]
    }

    /// Check if we're in the global scope.
    pub fn is_global_scope(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
