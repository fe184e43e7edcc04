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

//! Scope management for the semantic analyzer.
//!
//! A scope represents a lexical region where symbols are defined.
//! Entities are kept in declaration order so diagnostics issued when a
//! scope closes come out in a stable order.

use super::entity::Entity;
use std::collections::HashMap;

/// A scope in the symbol table.
#[derive(Debug, Default)]
pub struct Scope {
    /// Entities in declaration order.
    entities: Vec<Entity>,
    /// Name to position in `entities`.
    index: HashMap<String, usize>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define an entity in this scope.
    pub fn define(&mut self, entity: Entity) -> Result<(), Entity> {
        if let Some(existing) = self.lookup(&entity.name) {
            return Err(existing.clone());
        }
        self.index.insert(entity.name.clone(), self.entities.len());
        self.entities.push(entity);
        Ok(())
    }

    /// Look up an entity in this scope.
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&i| &self.entities[i])
    }

    /// Check if a name is bound in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Replace the entity bound to the same name. Returns false if unbound.
    pub fn replace(&mut self, entity: Entity) -> bool {
        match self.index.get(&entity.name) {
            Some(&i) => {
                self.entities[i] = entity;
                true
            }
            None => false,
        }
    }

    /// Iterate over the entities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Get the number of entities in this scope.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if this scope is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::entity::State;
    use crate::ast::Type;
    use crate::error::Span;

    #[test]
    fn test_define_rejects_duplicates() {
        let mut scope = Scope::new();
        scope
            .define(Entity::variable("x", Type::Integer, Span::new(0, 1)))
            .unwrap();
        let existing = scope
            .define(Entity::variable("x", Type::Boolean, Span::new(5, 6)))
            .unwrap_err();
        assert_eq!(existing.span, Span::new(0, 1));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut scope = Scope::new();
        for name in ["b", "a", "c"] {
            scope
                .define(Entity::variable(name, Type::Integer, Span::new(0, 1)))
                .unwrap();
        }
        let a = scope.lookup("a").unwrap().with_state(State::Assigned);
        assert!(scope.replace(a));
        let names: Vec<_> = scope.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(scope.lookup("a").unwrap().state, State::Assigned);
    }

    #[test]
    fn test_replace_unbound() {
        let mut scope = Scope::new();
        assert!(!scope.replace(Entity::variable("x", Type::Integer, Span::new(0, 1))));
        assert!(scope.is_empty());
    }
}
