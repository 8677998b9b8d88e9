//! Core types for the optimizer library.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    Minimize,
    /// Maximize the objective value.
    #[default]
    Maximize,
}

impl Direction {
    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    #[must_use]
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Maximize => candidate > incumbent,
            Self::Minimize => candidate < incumbent,
        }
    }
}

/// Lifecycle phase of a [`BayesianOptimizer`](crate::BayesianOptimizer).
///
/// There is no terminal phase: the caller decides when to stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizerPhase {
    /// No observations yet; suggestions are uniform random draws.
    Ready,
    /// At least one observation has been registered.
    Iterating,
}
