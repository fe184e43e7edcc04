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

//! Renaming of function-local identifiers.
//!
//! Locals and parameters are interned in a `SymbolArena` and rendered as
//! `<name>.<ordinal>`, where the ordinal is unique per function. Since `.`
//! never occurs in a source identifier, mangled names cannot clash with
//! globals or with each other. Names with no entry in the innermost
//! `RenameTable` (globals and literals) are emitted verbatim.

use super::CodeGenerator;
use std::collections::HashMap;

/// Index of an interned local symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(usize);

/// An interned local symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSymbol {
    /// The source name.
    pub name: String,
    /// Ordinal of the owning function.
    pub ordinal: usize,
    /// Position among the locals of the owning function.
    pub index: usize,
}

impl LocalSymbol {
    /// Get the spelling used in the generated code.
    pub fn mangled(&self) -> String {
        format!("{}.{}", self.name, self.ordinal)
    }
}

/// Storage for every local symbol of one compilation.
#[derive(Debug, Clone, Default)]
pub struct SymbolArena {
    symbols: Vec<LocalSymbol>,
}

impl SymbolArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a symbol and return its id.
    pub fn intern(&mut self, symbol: LocalSymbol) -> SymbolId {
        self.symbols.push(symbol);
        SymbolId(self.symbols.len() - 1)
    }

    /// Get an interned symbol.
    pub fn get(&self, id: SymbolId) -> Option<&LocalSymbol> {
        self.symbols.get(id.0)
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if nothing was interned.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The locals of one function body (or `main`).
#[derive(Debug, Clone)]
pub struct RenameTable {
    ordinal: usize,
    entries: HashMap<String, SymbolId>,
}

impl RenameTable {
    /// Create an empty table for the function with the given ordinal.
    pub fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            entries: HashMap::new(),
        }
    }

    /// Get the ordinal of the owning function.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Look up a source name.
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.entries.get(name).copied()
    }

    /// Number of locals registered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no local was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, id: SymbolId) {
        self.entries.insert(name, id);
    }
}

/// Extension trait for local renaming.
pub trait NameResolver {
    /// Open the rename table of a function body.
    fn push_rename_scope(&mut self);

    /// Close the innermost rename table.
    fn pop_rename_scope(&mut self) -> Option<RenameTable>;

    /// Register a local or parameter and return its mangled name.
    fn register_local(&mut self, name: &str) -> String;

    /// Get the output spelling of a source name.
    fn resolve(&self, name: &str) -> String;
}

impl NameResolver for CodeGenerator {
    fn push_rename_scope(&mut self) {
        self.scopes.push(RenameTable::new(self.ids.ordinal()));
    }

    fn pop_rename_scope(&mut self) -> Option<RenameTable> {
        self.scopes.pop()
    }

    fn register_local(&mut self, name: &str) -> String {
        let Some(table) = self.scopes.last_mut() else {
            return name.to_string();
        };

        let symbol = LocalSymbol {
            name: name.to_string(),
            ordinal: table.ordinal(),
            index: table.len(),
        };
        let mangled = symbol.mangled();
        let id = self.arena.intern(symbol);
        table.insert(name.to_string(), id);
        mangled
    }

    fn resolve(&self, name: &str) -> String {
        self.scopes
            .last()
            .and_then(|table| table.get(name))
            .and_then(|id| self.arena.get(id))
            .map(LocalSymbol::mangled)
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mangled_spelling() {
        let symbol = LocalSymbol {
            name: "count".to_string(),
            ordinal: 3,
            index: 0,
        };
        assert_eq!(symbol.mangled(), "count.3");
    }

    #[test]
    fn test_arena_interning() {
        let mut arena = SymbolArena::new();
        assert!(arena.is_empty());
        let id = arena.intern(LocalSymbol {
            name: "x".to_string(),
            ordinal: 1,
            index: 0,
        });
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(id).map(|s| s.name.as_str()), Some("x"));
    }

    #[test]
    fn test_resolve_uses_innermost_scope_only() {
        let mut gen = CodeGenerator::new();
        assert_eq!(gen.resolve("g"), "g");

        gen.push_rename_scope();
        assert_eq!(gen.register_local("x"), "x.1");
        assert_eq!(gen.resolve("x"), "x.1");
        assert_eq!(gen.resolve("g"), "g");

        gen.ids.advance_ordinal();
        gen.push_rename_scope();
        assert_eq!(gen.resolve("x"), "x");
        assert_eq!(gen.register_local("x"), "x.2");

        gen.pop_rename_scope();
        assert_eq!(gen.resolve("x"), "x.1");
        gen.pop_rename_scope();
        assert_eq!(gen.resolve("x"), "x");
    }

    #[test]
    fn test_local_indices_follow_registration_order() {
        let mut gen = CodeGenerator::new();
        gen.push_rename_scope();
        gen.register_local("a");
        gen.register_local("b");
        let table = gen.pop_rename_scope().unwrap();
        let id = table.get("b").unwrap();
        assert_eq!(gen.arena.get(id).unwrap().index, 1);
    }
}
