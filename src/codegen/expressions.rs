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

//! Expression lowering.
//!
//! An expression is flattened into the in-order chain of its operands and
//! `+ - && ||` operators. Parentheses do not interrupt the chain. A chain of
//! one or two operands needs no instruction of its own; longer chains are
//! folded from the left into fresh temporaries.

use super::emit::{EmitHelpers, Instruction, Rvalue, TacOp};
use super::names::NameResolver;
use super::CodeGenerator;
use crate::ast::{Expr, ExprKind, Fragment, FuncCall, Operand};

/// Extension trait for expression lowering.
pub trait ExpressionEmitter {
    /// Lower an expression to a value computed by at most one operator.
    fn lower_expression(&mut self, expr: &Expr) -> Rvalue;

    /// Lower an expression to a name, temporary or literal.
    fn lower_atom(&mut self, expr: &Expr) -> String;

    /// Lower a single chain operand.
    fn lower_operand(&mut self, expr: &Expr) -> Rvalue;

    /// Emit the `param` instructions of a call and return the call value.
    fn lower_call(&mut self, call: &FuncCall) -> Rvalue;

    /// Emit a call whose result is discarded.
    fn generate_call_statement(&mut self, call: &FuncCall);

    /// Store a value in a fresh temporary unless it already is an atom.
    fn materialize(&mut self, value: Rvalue) -> String;

    /// Get the output spelling of an identifier or numeral.
    fn operand_text(&self, operand: &Operand) -> String;
}

/// Collect the operands and operators of nested binary expressions in order.
fn flatten_chain<'e>(expr: &'e Expr, operands: &mut Vec<&'e Expr>, ops: &mut Vec<TacOp>) {
    match &expr.kind {
        ExprKind::ArithOp { left, op, right } => {
            flatten_chain(left, operands, ops);
            ops.push((*op).into());
            flatten_chain(right, operands, ops);
        }
        ExprKind::LogOp { left, op, right } => {
            flatten_chain(left, operands, ops);
            ops.push((*op).into());
            flatten_chain(right, operands, ops);
        }
        ExprKind::Paren(inner) => flatten_chain(inner, operands, ops),
        ExprKind::Call(_) | ExprKind::Frag(_) => operands.push(expr),
    }
}

impl ExpressionEmitter for CodeGenerator {
    fn lower_expression(&mut self, expr: &Expr) -> Rvalue {
        let mut operands = Vec::new();
        let mut ops = Vec::new();
        flatten_chain(expr, &mut operands, &mut ops);

        if let [single] = operands.as_slice() {
            return self.lower_operand(single);
        }

        let atoms: Vec<String> = operands
            .iter()
            .map(|operand| {
                let value = self.lower_operand(operand);
                self.materialize(value)
            })
            .collect();

        let folds = ops.len();
        let mut atoms = atoms.into_iter();
        let mut acc = atoms.next().unwrap_or_default();
        for (op, right) in ops.into_iter().zip(atoms) {
            let value = Rvalue::binary(acc, op, right);
            if folds == 1 {
                return value;
            }
            acc = self.materialize(value);
        }
        Rvalue::Atom(acc)
    }

    fn lower_atom(&mut self, expr: &Expr) -> String {
        let value = self.lower_expression(expr);
        self.materialize(value)
    }

    fn lower_operand(&mut self, expr: &Expr) -> Rvalue {
        match &expr.kind {
            ExprKind::Call(call) => self.lower_call(call),
            ExprKind::Frag(Fragment::IdNum { operand, negated }) => {
                let text = self.operand_text(operand);
                if *negated {
                    Rvalue::binary("0", TacOp::Sub, text)
                } else {
                    Rvalue::Atom(text)
                }
            }
            ExprKind::Frag(Fragment::NotId(name)) => Rvalue::Not(self.resolve(name)),
            ExprKind::Frag(Fragment::Zero) => Rvalue::atom("0"),
            ExprKind::Frag(Fragment::Bool(value)) => Rvalue::Atom(value.to_string()),
            ExprKind::ArithOp { .. } | ExprKind::LogOp { .. } | ExprKind::Paren(_) => {
                self.lower_expression(expr)
            }
        }
    }

    fn lower_call(&mut self, call: &FuncCall) -> Rvalue {
        for arg in &call.args {
            let value = self.operand_text(&arg.value);
            self.emit(Instruction::Param(value));
        }
        Rvalue::Call {
            name: call.name.clone(),
            argc: call.args.len(),
        }
    }

    fn generate_call_statement(&mut self, call: &FuncCall) {
        if let Rvalue::Call { name, argc } = self.lower_call(call) {
            self.emit(Instruction::Call { name, argc });
        }
    }

    fn materialize(&mut self, value: Rvalue) -> String {
        match value {
            Rvalue::Atom(text) => text,
            value => {
                let temp = self.ids.next_temp();
                self.emit_assign(temp.clone(), value);
                temp
            }
        }
    }

    fn operand_text(&self, operand: &Operand) -> String {
        match operand {
            Operand::Ident(name) => self.resolve(name),
            Operand::Number(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ArithOp, Argument, LogicalOp};
    use crate::error::Span;

    fn span() -> Span {
        Span::new(0, 1)
    }

    fn arith(left: Expr, op: ArithOp, right: Expr) -> Expr {
        Expr::new(
            ExprKind::ArithOp {
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
    fn test_single_operand_emits_nothing() {
        let mut gen = CodeGenerator::new();
        let value = gen.lower_expression(&Expr::number("5", span()));
        assert_eq!(value, Rvalue::atom("5"));
        assert!(gen.code.is_empty());
    }

    #[test]
    fn test_two_operands_compose() {
        let mut gen = CodeGenerator::new();
        let expr = arith(Expr::ident("a", span()), ArithOp::Add, Expr::number("1", span()));
        assert_eq!(gen.lower_expression(&expr).to_string(), "a + 1");
        assert!(gen.code.is_empty());
    }

    #[test]
    fn test_long_chain_folds_left() {
        let mut gen = CodeGenerator::new();
        let expr = arith(
            arith(Expr::ident("a", span()), ArithOp::Add, Expr::ident("b", span())),
            ArithOp::Sub,
            Expr::ident("c", span()),
        );
        assert_eq!(gen.lower_expression(&expr), Rvalue::atom("t2"));
        assert_eq!(lines(&gen), vec!["t1 = a + b", "t2 = t1 - c"]);
    }

    #[test]
    fn test_parentheses_are_transparent() {
        let mut gen = CodeGenerator::new();
        let grouped = Expr::new(
            ExprKind::Paren(Box::new(arith(
                Expr::ident("b", span()),
                ArithOp::Sub,
                Expr::ident("c", span()),
            ))),
            span(),
        );
        let expr = arith(Expr::ident("a", span()), ArithOp::Sub, grouped);
        gen.lower_expression(&expr);
        assert_eq!(lines(&gen), vec!["t1 = a - b", "t2 = t1 - c"]);
    }

    #[test]
    fn test_negated_fragment_is_materialized_in_chain() {
        let mut gen = CodeGenerator::new();
        let negated = Expr::fragment(
            Fragment::IdNum {
                operand: Operand::Ident("x".to_string()),
                negated: true,
            },
            span(),
        );
        let expr = arith(Expr::number("2", span()), ArithOp::Add, negated);
        assert_eq!(gen.lower_expression(&expr).to_string(), "2 + t1");
        assert_eq!(lines(&gen), vec!["t1 = 0 - x"]);
    }

    #[test]
    fn test_standalone_fragments() {
        let mut gen = CodeGenerator::new();
        let negated = Expr::fragment(
            Fragment::IdNum {
                operand: Operand::Number("4".to_string()),
                negated: true,
            },
            span(),
        );
        assert_eq!(gen.lower_expression(&negated).to_string(), "0 - 4");
        let not = Expr::fragment(Fragment::NotId("flag".to_string()), span());
        assert_eq!(gen.lower_expression(&not).to_string(), "!flag");
        let zero = Expr::fragment(Fragment::Zero, span());
        assert_eq!(gen.lower_expression(&zero).to_string(), "0");
        let truth = Expr::fragment(Fragment::Bool(true), span());
        assert_eq!(gen.lower_expression(&truth).to_string(), "true");
    }

    #[test]
    fn test_logical_chain() {
        let mut gen = CodeGenerator::new();
        let expr = Expr::new(
            ExprKind::LogOp {
                left: Box::new(Expr::ident("p", span())),
                op: LogicalOp::Or,
                right: Box::new(Expr::ident("q", span())),
            },
            span(),
        );
        assert_eq!(gen.lower_expression(&expr).to_string(), "p || q");
    }

    #[test]
    fn test_call_inside_chain_is_materialized() {
        let mut gen = CodeGenerator::new();
        let call = FuncCall::new(
            "f",
            vec![Argument::new(Operand::Number("3".to_string()), span())],
            span(),
        );
        let expr = arith(
            Expr::new(ExprKind::Call(call), span()),
            ArithOp::Add,
            Expr::number("1", span()),
        );
        assert_eq!(gen.lower_expression(&expr).to_string(), "t1 + 1");
        assert_eq!(lines(&gen), vec!["param 3", "t1 = call f, 1"]);
    }

    #[test]
    fn test_call_statement() {
        let mut gen = CodeGenerator::new();
        let call = FuncCall::new(
            "show",
            vec![
                Argument::new(Operand::Ident("a".to_string()), span()),
                Argument::new(Operand::Number("7".to_string()), span()),
            ],
            span(),
        );
        gen.generate_call_statement(&call);
        assert_eq!(lines(&gen), vec!["param a", "param 7", "call show, 2"]);
    }
}
