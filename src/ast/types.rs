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

//! Type definitions for the CCAL language.

/// A declared type in the CCAL language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed integer.
    Integer,
    /// Boolean value.
    Boolean,
    /// Void (no value, for functions).
    Void,
}

impl Type {
    /// Get the keyword that spells this type in source code.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Boolean => "boolean",
            Type::Void => "void",
        }
    }

    /// Check if values of this type can be stored in a variable.
    pub fn is_value(&self) -> bool {
        !matches!(self, Type::Void)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Type::Integer.name(), "integer");
        assert_eq!(Type::Boolean.to_string(), "boolean");
        assert_eq!(format!("{}", Type::Void), "void");
    }

    #[test]
    fn test_is_value() {
        assert!(Type::Integer.is_value());
        assert!(Type::Boolean.is_value());
        assert!(!Type::Void.is_value());
    }
}
