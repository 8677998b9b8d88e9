#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Sequential Bayesian optimization for expensive black-box objectives.
//!
//! A Gaussian Process surrogate with a squared-exponential kernel models
//! the objective from every point evaluated so far, and the Expected
//! Improvement acquisition function picks the next point to sample. Built
//! for single-objective problems over a bounded continuous box where each
//! evaluation is costly: lab assays, long simulations, hyperparameter runs.
//!
//! # Getting Started
//!
//! Maximize a function in a few lines:
//!
//! ```
//! use bayesopt::prelude::*;
//!
//! let mut optimizer = BayesianOptimizer::builder()
//!     .bounds(vec![(0.0, 10.0)])
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = optimizer
//!     .run(|x: &[f64]| Ok::<_, Error>(-(x[0] - 5.0).powi(2)), 30)
//!     .unwrap();
//!
//! println!("x = {:?}, f(x) = {:.4}", result.best.x, result.best.y);
//! ```
//!
//! When the objective cannot be called from Rust (a wet-lab experiment, a
//! job on another machine), use ask-and-tell instead:
//! [`suggest_next_point`](BayesianOptimizer::suggest_next_point) returns a
//! candidate without evaluating anything and
//! [`register_observation`](BayesianOptimizer::register_observation)
//! records the result.
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`BayesianOptimizer`] | Owns the history, fits the surrogate, suggests points, runs the loop. |
//! | [`SearchSpace`] | Per-dimension `(low, high)` bounds. |
//! | [`ObservationHistory`] | Append-only list of evaluated [`Observation`]s. |
//! | [`GaussianProcess`] | Posterior mean and variance at any point, given the history. |
//! | [`ExpectedImprovement`] | Scores candidates by how much they are expected to beat the incumbent. |
//! | [`Objective`] | The expensive function, optionally with early-stopping hooks. |
//! | [`Direction`] | Whether larger or smaller objective values are better. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types, [`BayesianOptimizer::save`]/[`BayesianOptimizer::load`] | off |
//! | `journal` | `ObservationJournal`: JSONL checkpointing with file locking (enables `serde`) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key optimization points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod acquisition;
mod config;
mod error;
mod gp;
#[cfg(feature = "journal")]
mod journal;
mod kernel;
pub mod objective;
mod observation;
mod optimizer;
mod rng_util;
mod search;
mod space;
mod types;

pub use acquisition::ExpectedImprovement;
pub use config::OptimizerConfig;
pub use error::{Error, Result};
pub use gp::{GaussianProcess, GpConfig, Prediction};
#[cfg(feature = "journal")]
pub use journal::ObservationJournal;
pub use kernel::RbfKernel;
pub use objective::Objective;
pub use observation::{Observation, ObservationHistory};
#[cfg(feature = "serde")]
pub use optimizer::OptimizerSnapshot;
pub use optimizer::{BayesianOptimizer, OptimizationResult, OptimizerBuilder};
pub use space::SearchSpace;
pub use types::{Direction, OptimizerPhase};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use bayesopt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::objective::Objective;
    pub use crate::observation::{Observation, ObservationHistory};
    pub use crate::optimizer::{BayesianOptimizer, OptimizationResult, OptimizerBuilder};
    pub use crate::space::SearchSpace;
    pub use crate::types::Direction;
}
