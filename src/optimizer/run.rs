use core::ops::ControlFlow;

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::observation::{Observation, ObservationHistory};

use super::BayesianOptimizer;

/// Outcome of [`BayesianOptimizer::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationResult {
    /// Every observation, including any registered before the run.
    pub history: ObservationHistory,
    /// The best observation for the optimizer's direction.
    pub best: Observation,
    /// Iterations completed by this run; less than requested only when a
    /// hook stopped the loop.
    pub iterations: usize,
}

impl BayesianOptimizer {
    /// Run the suggest / evaluate / register loop.
    ///
    /// Accepts any [`Objective`] implementation, including plain closures
    /// (`Fn(&[f64]) -> Result<f64, E>`) thanks to the blanket impl.
    /// Struct-based objectives can override
    /// [`before_iteration`](Objective::before_iteration) and
    /// [`after_iteration`](Objective::after_iteration) to stop early.
    ///
    /// Runs up to `n_iterations` evaluations sequentially.
    ///
    /// # Errors
    ///
    /// - [`Error::Objective`] with the failing point attached if the
    ///   objective returns an error or a non-finite value. The point is not
    ///   recorded and the loop stops.
    /// - [`Error::Numerical`] if the surrogate cannot be fitted.
    /// - [`Error::NoObservations`] if the history is still empty at the end
    ///   (for example `n_iterations == 0` on a fresh optimizer).
    ///
    /// # Examples
    ///
    /// ```
    /// use bayesopt::{BayesianOptimizer, Error};
    ///
    /// let mut optimizer = BayesianOptimizer::builder()
    ///     .bounds(vec![(0.0, 10.0)])
    ///     .seed(42)
    ///     .build()
    ///     .unwrap();
    ///
    /// let result = optimizer
    ///     .run(|x: &[f64]| Ok::<_, Error>(-(x[0] - 5.0).powi(2)), 20)
    ///     .unwrap();
    ///
    /// assert_eq!(result.history.len(), 20);
    /// assert!(result.best.y <= 0.0);
    /// ```
    #[allow(clippy::needless_pass_by_value)]
    pub fn run(
        &mut self,
        objective: impl Objective,
        n_iterations: usize,
    ) -> Result<OptimizationResult> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("run", n_iterations, direction = ?self.config.direction)
            .entered();

        let mut iterations = 0;
        for _ in 0..n_iterations {
            if let ControlFlow::Break(()) = objective.before_iteration(self) {
                break;
            }

            let x = self.suggest_next_point()?;
            let y = match objective.evaluate(&x) {
                Ok(y) if y.is_finite() => y,
                Ok(y) => {
                    trace_debug!(?x, y, "objective returned a non-finite value");
                    return Err(Error::Objective {
                        x,
                        message: format!("objective returned non-finite value {y}"),
                    });
                }
                Err(e) => {
                    trace_debug!(?x, "objective failed");
                    return Err(Error::Objective {
                        x,
                        message: e.to_string(),
                    });
                }
            };

            self.register_observation(&x, y)?;
            iterations += 1;

            let flow = match self.history.last() {
                Some(last) => objective.after_iteration(self, last),
                None => ControlFlow::Continue(()),
            };
            if let ControlFlow::Break(()) = flow {
                break;
            }
        }

        let best = self.best().cloned().ok_or(Error::NoObservations)?;
        trace_info!(iterations, best = best.y, "run finished");

        Ok(OptimizationResult {
            history: self.history.clone(),
            best,
            iterations,
        })
    }
}
