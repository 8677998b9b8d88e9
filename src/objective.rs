//! The [`Objective`] trait defines what gets optimized.
//!
//! For simple closures, pass them directly to
//! [`BayesianOptimizer::run`](crate::BayesianOptimizer::run):
//!
//! ```
//! use bayesopt::prelude::*;
//!
//! let mut optimizer = BayesianOptimizer::builder()
//!     .bounds(vec![(0.0, 10.0)])
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! optimizer
//!     .run(|x: &[f64]| Ok::<_, Error>(-(x[0] - 5.0).powi(2)), 10)
//!     .unwrap();
//! ```
//!
//! For richer control (early stopping, per-iteration logging),
//! implement [`Objective`] on a struct and pass it to
//! the same [`run`](crate::BayesianOptimizer::run) method:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use bayesopt::prelude::*;
//!
//! struct StopWhenClose {
//!     target: f64,
//! }
//!
//! impl Objective for StopWhenClose {
//!     type Error = Error;
//!
//!     fn evaluate(&self, x: &[f64]) -> Result<f64> {
//!         Ok(-(x[0] - 5.0).powi(2))
//!     }
//!
//!     fn after_iteration(&self, _optimizer: &BayesianOptimizer, obs: &Observation) -> ControlFlow<()> {
//!         if obs.y > self.target {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let mut optimizer = BayesianOptimizer::builder()
//!     .bounds(vec![(0.0, 10.0)])
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let result = optimizer.run(StopWhenClose { target: -1.0 }, 200).unwrap();
//! assert!(result.best.y > -1.0);
//! ```

use core::fmt::Display;
use core::ops::ControlFlow;

use crate::observation::Observation;
use crate::optimizer::BayesianOptimizer;

/// An expensive black-box function with optional lifecycle hooks.
///
/// The only required method is [`evaluate`](Objective::evaluate). Any
/// closure `Fn(&[f64]) -> Result<f64, E>` with `E: Display` implements this
/// trait.
///
/// Failures are never masked: an `Err` from `evaluate` aborts the run and
/// the point is not recorded.
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: Display;

    /// Evaluate the objective at `x`.
    ///
    /// # Errors
    ///
    /// Any error the objective chooses to report. It is surfaced to the
    /// caller as [`Error::Objective`](crate::Error::Objective) with `x`
    /// attached.
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;

    /// Called before each suggestion is made.
    ///
    /// Return `ControlFlow::Break(())` to stop the loop before the next
    /// iteration starts.
    ///
    /// Default: always continues.
    fn before_iteration(&self, _optimizer: &BayesianOptimizer) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after each observation has been registered.
    ///
    /// Return `ControlFlow::Break(())` to stop the loop.
    ///
    /// Default: always continues.
    fn after_iteration(
        &self,
        _optimizer: &BayesianOptimizer,
        _observation: &Observation,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: Display,
{
    type Error = E;

    fn evaluate(&self, x: &[f64]) -> Result<f64, E> {
        self(x)
    }
}
