//! Algebraic simplification of arithmetic expressions by rewriting to a
//! fixpoint.
//!
//! The input is tokenized, parsed into a binary expression tree, and the
//! local rewrite rules in [`rewrite::Rule`] are applied pass after pass until
//! the tree stops changing. The node count of the tree before and after is
//! reported as its cost.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod rewrite;
pub mod saturate;
pub mod syntax;

pub use crate::{
    error::{Error, ParseError, SaturationError},
    parser::parse,
    saturate::{saturate, Saturation, Saturator},
    syntax::{Atom, BinOp, Expr, Literal},
};

/// The outcome of optimizing one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    pub original: Expr,
    pub optimized: Expr,
    pub cost_before: usize,
    pub cost_after: usize,
    pub passes: usize,
}

impl Optimized {
    /// `cost_before - cost_after`; negative when the tree grew.
    pub fn reduction(&self) -> isize {
        self.cost_before as isize - self.cost_after as isize
    }
}

/// Parse and saturate a single expression.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    saturator: Saturator,
}

impl Optimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saturator(saturator: Saturator) -> Self {
        Self { saturator }
    }

    pub fn saturator_mut(&mut self) -> &mut Saturator {
        &mut self.saturator
    }

    pub fn optimize(&self, input: &str) -> Result<Optimized, Error> {
        let original = parse(input)?;
        let cost_before = original.cost();

        let Saturation { expr, passes } = self.saturator.run(original.clone())?;
        let cost_after = expr.cost();
        tracing::debug!(
            "optimized {} -> {} (cost: {} -> {})",
            original,
            expr,
            cost_before,
            cost_after
        );

        Ok(Optimized {
            original,
            optimized: expr,
            cost_before,
            cost_after,
            passes,
        })
    }
}

/// Parse and saturate `input` with no pass limit.
pub fn optimize(input: &str) -> Result<Optimized, Error> {
    Optimizer::new().optimize(input)
}
