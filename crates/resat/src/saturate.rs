//! Saturation: rewrite passes repeated until a fixpoint.
//!
//! A pass is applied to the whole tree and its output compared structurally
//! against its input. The loop ends once a pass changes nothing. Nothing in
//! the loop itself guarantees termination; the built-in rule set happens to
//! reach a fixpoint, and [`Saturator::max_passes`] is available as an opt-in
//! guard.

use crate::{error::SaturationError, rewrite::rewrite, syntax::Expr};
use std::borrow::Cow;

/// Rewrite `expr` until a pass leaves it unchanged.
///
/// There is no pass limit.
pub fn saturate(expr: Expr) -> Expr {
    match drive(expr, None) {
        Ok(saturation) => saturation.expr,
        Err(SaturationError::PassLimit(..)) => unreachable!("pass limit without a limit"),
    }
}

/// The result of a saturation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saturation {
    /// The fixpoint.
    pub expr: Expr,
    /// Number of passes run, including the final one that changed nothing.
    pub passes: usize,
}

/// Configurable saturation driver.
#[derive(Debug, Clone, Default)]
pub struct Saturator {
    max_passes: Option<usize>,
}

impl Saturator {
    /// Create a driver with no pass limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up once `n` passes have run without reaching a fixpoint.
    pub fn max_passes(&mut self, n: usize) -> &mut Self {
        self.max_passes = Some(n);
        self
    }

    /// Remove the pass limit.
    pub fn unbounded(&mut self) -> &mut Self {
        self.max_passes = None;
        self
    }

    /// The pass limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.max_passes
    }

    pub fn run(&self, expr: Expr) -> Result<Saturation, SaturationError> {
        drive(expr, self.limit())
    }
}

fn drive(expr: Expr, max_passes: Option<usize>) -> Result<Saturation, SaturationError> {
    let span = tracing::debug_span!("saturate", max_passes = ?max_passes);
    let _entered = span.enter();

    let mut current = expr;
    let mut passes = 0usize;
    loop {
        if let Some(limit) = max_passes {
            if passes >= limit {
                tracing::debug!("pass limit reached: {}", limit);
                return Err(SaturationError::PassLimit(limit));
            }
        }

        let changed = match rewrite(&current) {
            Cow::Borrowed(..) => None,
            Cow::Owned(next) => (next != current).then_some(next),
        };
        passes += 1;
        match changed {
            Some(next) => {
                tracing::trace!("pass {}: {}", passes, next);
                current = next;
            }
            None => {
                tracing::debug!("fixpoint after {} pass(es)", passes);
                return Ok(Saturation {
                    expr: current,
                    passes,
                });
            }
        }
    }
}
