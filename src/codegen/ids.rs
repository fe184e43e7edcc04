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

//! Fresh names for labels and temporaries.
//!
//! Every counter starts at 1 and only grows, so each generated name is
//! unique within one compilation.

/// Monotonic counters for labels, temporaries and function ordinals.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    label: usize,
    temp: usize,
    cond: usize,
    ordinal: usize,
}

impl IdGenerator {
    /// Create a generator with every counter at 1.
    pub fn new() -> Self {
        Self {
            label: 1,
            temp: 1,
            cond: 1,
            ordinal: 1,
        }
    }

    /// Take a single label (`L<n>`).
    pub fn next_label(&mut self) -> String {
        let label = format!("L{}", self.label);
        self.label += 1;
        label
    }

    /// Take two consecutive labels for a loop or conditional.
    pub fn label_pair(&mut self) -> (String, String) {
        let first = format!("L{}", self.label);
        let second = format!("L{}", self.label + 1);
        self.label += 2;
        (first, second)
    }

    /// Take a fresh integer temporary (`t<n>`).
    pub fn next_temp(&mut self) -> String {
        let temp = format!("t{}", self.temp);
        self.temp += 1;
        temp
    }

    /// Take a fresh boolean temporary (`c<n>`).
    pub fn next_cond(&mut self) -> String {
        let cond = format!("c{}", self.cond);
        self.cond += 1;
        cond
    }

    /// Get the ordinal of the function being generated.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Move on to the next function.
    pub fn advance_ordinal(&mut self) {
        self.ordinal += 1;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_one() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_label(), "L1");
        assert_eq!(ids.next_temp(), "t1");
        assert_eq!(ids.next_cond(), "c1");
        assert_eq!(ids.ordinal(), 1);
    }

    #[test]
    fn test_label_pair_advances_by_two() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.label_pair(), ("L1".to_string(), "L2".to_string()));
        assert_eq!(ids.next_label(), "L3");
        assert_eq!(ids.label_pair(), ("L4".to_string(), "L5".to_string()));
    }

    #[test]
    fn test_counters_are_independent() {
        let mut ids = IdGenerator::new();
        ids.next_temp();
        ids.next_temp();
        assert_eq!(ids.next_cond(), "c1");
        assert_eq!(ids.next_label(), "L1");
        ids.advance_ordinal();
        assert_eq!(ids.ordinal(), 2);
        assert_eq!(ids.next_temp(), "t3");
    }
}
