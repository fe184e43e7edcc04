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

//! Condition lowering.
//!
//! A condition is split into its atomic conditions and the `&& ||`
//! operators between them; parentheses do not group. Each atomic condition
//! is stored in a fresh boolean temporary, then the temporaries are combined
//! pairwise, most recent first, with the most recent pending operator.

use super::emit::{EmitHelpers, Rvalue, TacOp};
use super::expressions::ExpressionEmitter;
use super::CodeGenerator;
use crate::ast::{Condition, ConditionKind};

/// Extension trait for condition lowering.
pub trait ConditionEmitter {
    /// Lower a condition to the predicate of an `ifz` instruction.
    fn lower_condition(&mut self, cond: &Condition) -> Rvalue;

    /// Lower a condition and return the boolean temporary holding its result.
    fn lower_condition_temp(&mut self, cond: &Condition) -> String;

    /// Store an atomic condition in a fresh boolean temporary.
    fn lower_atomic_condition(&mut self, cond: &Condition) -> String;

    /// Lower the operands of an atomic condition and return its predicate.
    fn atomic_predicate(&mut self, cond: &Condition) -> Rvalue;
}

/// Collect the atomic conditions and connectives of a condition in order.
fn flatten_condition<'c>(
    cond: &'c Condition,
    atomics: &mut Vec<&'c Condition>,
    ops: &mut Vec<TacOp>,
) {
    match &cond.kind {
        ConditionKind::BinOp { left, op, right } => {
            flatten_condition(left, atomics, ops);
            ops.push((*op).into());
            flatten_condition(right, atomics, ops);
        }
        ConditionKind::Paren(inner) => flatten_condition(inner, atomics, ops),
        _ => atomics.push(cond),
    }
}

impl ConditionEmitter for CodeGenerator {
    fn lower_condition(&mut self, cond: &Condition) -> Rvalue {
        let result = self.lower_condition_temp(cond);
        Rvalue::binary(result, TacOp::Equal, "true")
    }

    fn lower_condition_temp(&mut self, cond: &Condition) -> String {
        let mut atomics = Vec::new();
        let mut ops = Vec::new();
        flatten_condition(cond, &mut atomics, &mut ops);

        let mut temps: Vec<String> = atomics
            .into_iter()
            .map(|atomic| self.lower_atomic_condition(atomic))
            .collect();

        while temps.len() > 1 {
            let (Some(op), Some(recent), Some(previous)) = (ops.pop(), temps.pop(), temps.pop())
            else {
                break;
            };
            let combined = self.ids.next_cond();
            self.emit_assign(combined.clone(), Rvalue::binary(recent, op, previous));
            temps.push(combined);
        }

        temps.pop().unwrap_or_default()
    }

    fn lower_atomic_condition(&mut self, cond: &Condition) -> String {
        let predicate = self.atomic_predicate(cond);
        let temp = self.ids.next_cond();
        let skip = self.ids.next_label();

        self.emit_assign(temp.clone(), Rvalue::atom("false"));
        self.emit_ifz(predicate, &skip);
        self.emit_assign(temp.clone(), Rvalue::atom("true"));
        self.emit_label(&skip);

        temp
    }

    fn atomic_predicate(&mut self, cond: &Condition) -> Rvalue {
        match &cond.kind {
            ConditionKind::Comp { left, op, right } => {
                let left = self.lower_atom(left);
                let right = self.lower_atom(right);
                Rvalue::binary(left, (*op).into(), right)
            }
            ConditionKind::EqualDif { left, op, right } => {
                let left = self.lower_atom(left);
                let right = self.lower_atom(right);
                Rvalue::binary(left, (*op).into(), right)
            }
            ConditionKind::Bool(value) => Rvalue::Atom(value.to_string()),
            ConditionKind::Neg(inner) => {
                let result = self.lower_condition_temp(inner);
                Rvalue::binary(result, TacOp::Equal, "false")
            }
            ConditionKind::Paren(_) | ConditionKind::BinOp { .. } => self.lower_condition(cond),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CompOp, EqualityOp, Expr, LogicalOp};
    use crate::error::Span;
    use pretty_assertions::assert_eq;

    fn span() -> Span {
        Span::new(0, 1)
    }

    fn comp(left: &str, op: CompOp, right: &str) -> Condition {
        Condition::new(
            ConditionKind::Comp {
                left: Expr::ident(left, span()),
                op,
                right: Expr::number(right, span()),
            },
            span(),
        )
    }

    fn bin(left: Condition, op: LogicalOp, right: Condition) -> Condition {
        Condition::new(
            ConditionKind::BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span(),
        )
    }

    fn lines(gen: &CodeGenerator) -> Vec<String> {
        gen.code.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_single_atomic_condition() {
        let mut gen = CodeGenerator::new();
        let predicate = gen.lower_condition(&comp("a", CompOp::Less, "3"));
        assert_eq!(predicate.to_string(), "c1 == true");
        assert_eq!(
            lines(&gen),
            vec!["c1 = false", "ifz a < 3 goto L1", "c1 = true", "L1:"]
        );
    }

    #[test]
    fn test_two_atomics_combine_most_recent_first() {
        let mut gen = CodeGenerator::new();
        let cond = bin(
            comp("a", CompOp::Less, "3"),
            LogicalOp::And,
            comp("b", CompOp::Greater, "0"),
        );
        let predicate = gen.lower_condition(&cond);
        assert_eq!(predicate.to_string(), "c3 == true");
        assert_eq!(
            lines(&gen),
            vec![
                "c1 = false",
                "ifz a < 3 goto L1",
                "c1 = true",
                "L1:",
                "c2 = false",
                "ifz b > 0 goto L2",
                "c2 = true",
                "L2:",
                "c3 = c2 && c1",
            ]
        );
    }

    #[test]
    fn test_operators_are_consumed_last_in_first_out() {
        let mut gen = CodeGenerator::new();
        let cond = bin(
            bin(
                comp("a", CompOp::Less, "1"),
                LogicalOp::Or,
                comp("b", CompOp::Less, "2"),
            ),
            LogicalOp::And,
            comp("c", CompOp::Less, "3"),
        );
        assert_eq!(gen.lower_condition(&cond).to_string(), "c5 == true");
        let code = lines(&gen);
        assert_eq!(code[code.len() - 2], "c4 = c3 && c2");
        assert_eq!(code[code.len() - 1], "c5 = c4 || c1");
    }

    #[test]
    fn test_negated_condition() {
        let mut gen = CodeGenerator::new();
        let cond = Condition::new(
            ConditionKind::Neg(Box::new(Condition::new(
                ConditionKind::EqualDif {
                    left: Expr::ident("x", span()),
                    op: EqualityOp::Equal,
                    right: Expr::number("0", span()),
                },
                span(),
            ))),
            span(),
        );
        assert_eq!(gen.lower_condition(&cond).to_string(), "c2 == true");
        assert_eq!(
            lines(&gen),
            vec![
                "c1 = false",
                "ifz x == 0 goto L1",
                "c1 = true",
                "L1:",
                "c2 = false",
                "ifz c1 == false goto L2",
                "c2 = true",
                "L2:",
            ]
        );
    }

    #[test]
    fn test_boolean_literal_condition() {
        let mut gen = CodeGenerator::new();
        gen.lower_condition(&Condition::new(ConditionKind::Bool(true), span()));
        assert_eq!(lines(&gen)[1], "ifz true goto L1");
    }
}
