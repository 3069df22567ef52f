//! Local rewrite rules and the bottom-up rewrite pass.

use crate::syntax::{BinOp, Expr};
use num_bigint::BigUint;
use std::borrow::Cow;

/// A local rewrite rule, examined against one interior node and its two
/// immediate children.
///
/// Variants are declared in priority order; see [`Rule::ALL`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `x + 0 => x`
    ///
    /// Like every rule testing for `0` or `1`, this matches the literal as
    /// written: `x + 00` is left alone.
    AddZeroRight,
    /// `0 + x => x`
    AddZeroLeft,
    /// `x * 1 => x`
    MulOneRight,
    /// `1 * x => x`
    MulOneLeft,
    /// `x * 0 => 0`, `0 * x => 0`
    MulZero,
    /// `n + m`, `n * m` over two literals
    ConstantFold,
    /// `a * (b + c) => (a * b) + (a * c)`
    ///
    /// Only a sum on the right is expanded; `(b + c) * a` is left as is.
    Distribute,
}

impl Rule {
    /// All rules, in the order they are tried.
    pub const ALL: [Rule; 7] = [
        Rule::AddZeroRight,
        Rule::AddZeroLeft,
        Rule::MulOneRight,
        Rule::MulOneLeft,
        Rule::MulZero,
        Rule::ConstantFold,
        Rule::Distribute,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::AddZeroRight => "add-zero-right",
            Rule::AddZeroLeft => "add-zero-left",
            Rule::MulOneRight => "mul-one-right",
            Rule::MulOneLeft => "mul-one-left",
            Rule::MulZero => "mul-zero",
            Rule::ConstantFold => "constant-fold",
            Rule::Distribute => "distribute",
        }
    }

    pub fn matches(self, op: BinOp, lhs: &Expr, rhs: &Expr) -> bool {
        match self {
            Rule::AddZeroRight => op == BinOp::Add && rhs.is_zero(),
            Rule::AddZeroLeft => op == BinOp::Add && lhs.is_zero(),
            Rule::MulOneRight => op == BinOp::Mul && rhs.is_one(),
            Rule::MulOneLeft => op == BinOp::Mul && lhs.is_one(),
            Rule::MulZero => op == BinOp::Mul && (lhs.is_zero() || rhs.is_zero()),
            Rule::ConstantFold => {
                matches!(op, BinOp::Add | BinOp::Mul)
                    && lhs.as_literal().is_some()
                    && rhs.as_literal().is_some()
            }
            Rule::Distribute => op == BinOp::Mul && rhs.op() == Some(BinOp::Add),
        }
    }

    /// Build the replacement for a node this rule matches.
    ///
    /// The result is unspecified when `matches` would return `false`.
    pub fn apply(self, op: BinOp, lhs: Box<Expr>, rhs: Box<Expr>) -> Expr {
        match self {
            Rule::AddZeroRight | Rule::MulOneRight => *lhs,
            Rule::AddZeroLeft | Rule::MulOneLeft => *rhs,
            Rule::MulZero => Expr::literal(BigUint::from(0u32)),
            Rule::ConstantFold => {
                let folded = match (op, lhs.as_literal(), rhs.as_literal()) {
                    (BinOp::Add, Some(n), Some(m)) => Some(n.value() + m.value()),
                    (BinOp::Mul, Some(n), Some(m)) => Some(n.value() * m.value()),
                    _ => None,
                };
                match folded {
                    Some(n) => Expr::literal(n),
                    None => Expr::Binary { op, lhs, rhs },
                }
            }
            Rule::Distribute => match *rhs {
                Expr::Binary {
                    op: BinOp::Add,
                    lhs: b,
                    rhs: c,
                } => Expr::add(
                    Expr::Binary {
                        op: BinOp::Mul,
                        lhs: lhs.clone(),
                        rhs: b,
                    },
                    Expr::Binary {
                        op: BinOp::Mul,
                        lhs,
                        rhs: c,
                    },
                ),
                rhs => Expr::Binary {
                    op,
                    lhs,
                    rhs: Box::new(rhs),
                },
            },
        }
    }
}

/// Run one rewrite pass over the whole tree.
///
/// Children are rewritten before their parent, and at each node only the
/// first matching rule of [`Rule::ALL`] fires. The input is left untouched:
/// a subtree where no rule fired comes back borrowed, and only the nodes on
/// the path to a rewrite are rebuilt.
pub fn rewrite(expr: &Expr) -> Cow<'_, Expr> {
    match expr {
        Expr::Atom(..) => Cow::Borrowed(expr),
        Expr::Binary { op, lhs, rhs } => {
            let new_lhs = rewrite(lhs);
            let new_rhs = rewrite(rhs);
            if let (Cow::Borrowed(..), Cow::Borrowed(..)) = (&new_lhs, &new_rhs) {
                if select(*op, lhs, rhs).is_none() {
                    return Cow::Borrowed(expr);
                }
            }
            let lhs = Box::new(new_lhs.into_owned());
            let rhs = Box::new(new_rhs.into_owned());
            Cow::Owned(rewrite_node(*op, lhs, rhs))
        }
    }
}

/// The first rule of [`Rule::ALL`] matching the node, if any.
fn select(op: BinOp, lhs: &Expr, rhs: &Expr) -> Option<Rule> {
    Rule::ALL.into_iter().find(|rule| rule.matches(op, lhs, rhs))
}

fn rewrite_node(op: BinOp, lhs: Box<Expr>, rhs: Box<Expr>) -> Expr {
    match select(op, &lhs, &rhs) {
        Some(rule) => {
            tracing::trace!("rewrite: {} ({} {} {})", rule.name(), lhs, op, rhs);
            rule.apply(op, lhs, rhs)
        }
        None => Expr::Binary { op, lhs, rhs },
    }
}
