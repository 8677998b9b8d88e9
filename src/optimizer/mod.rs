//! The sequential Bayesian optimization loop.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::acquisition::ExpectedImprovement;
use crate::config::OptimizerConfig;
use crate::error::{Error, Result};
use crate::gp::{GaussianProcess, GpConfig, Prediction};
use crate::observation::{Observation, ObservationHistory};
use crate::rng_util;
use crate::search::{self, SearchSettings};
use crate::space::SearchSpace;
use crate::types::{Direction, OptimizerPhase};

mod builder;
#[cfg(feature = "serde")]
mod persistence;
mod run;

pub use builder::OptimizerBuilder;
#[cfg(feature = "serde")]
pub use persistence::OptimizerSnapshot;
pub use run::OptimizationResult;

/// A sequential Bayesian optimizer over a bounded continuous box.
///
/// The optimizer owns the [`ObservationHistory`] and a Gaussian Process
/// surrogate derived from it. Each call to
/// [`suggest_next_point`](Self::suggest_next_point) maximizes Expected
/// Improvement over the search space; the caller evaluates the objective
/// and reports back through
/// [`register_observation`](Self::register_observation). [`run`](Self::run)
/// composes the two for objectives that can be called directly.
///
/// Suggesting takes `&self`: the RNG and the fitted-surrogate cache live
/// behind a mutex, so an optimizer can be shared for suggestions while
/// registering observations requires exclusive access.
///
/// # Examples
///
/// Ask-and-tell with an external experiment:
///
/// ```
/// use bayesopt::BayesianOptimizer;
///
/// let mut optimizer = BayesianOptimizer::builder()
///     .bounds(vec![(0.0, 10.0), (0.0, 10.0)])
///     .seed(42)
///     .build()
///     .unwrap();
///
/// for _ in 0..5 {
///     let x = optimizer.suggest_next_point().unwrap();
///     let y = -(x[0] - 2.0).powi(2) - (x[1] - 7.0).powi(2); // the experiment
///     optimizer.register_observation(&x, y).unwrap();
/// }
///
/// assert_eq!(optimizer.history().len(), 5);
/// ```
pub struct BayesianOptimizer {
    space: SearchSpace,
    config: OptimizerConfig,
    gp_config: GpConfig,
    acquisition: ExpectedImprovement,
    history: ObservationHistory,
    state: Mutex<SearchState>,
    #[cfg(feature = "journal")]
    journal: Option<crate::journal::ObservationJournal>,
}

/// Mutable state behind the `Mutex`.
struct SearchState {
    rng: fastrand::Rng,
    /// Surrogate fitted on the whole current history, if any.
    surrogate: Option<Arc<GaussianProcess>>,
}

impl BayesianOptimizer {
    /// Creates an optimizer over `bounds` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySearchSpace`] or [`Error::InvalidBounds`] for
    /// malformed bounds.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        Self::with_config(SearchSpace::new(bounds)?, OptimizerConfig::default())
    }

    /// Creates an optimizer from a search space and a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHyperparameter`] if `config` fails
    /// [`OptimizerConfig::validate`].
    pub fn with_config(space: SearchSpace, config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        let gp_config = config.gp_config()?;
        let acquisition = config.acquisition()?;
        let rng = rng_util::new_rng(config.seed);
        Ok(Self {
            space,
            config,
            gp_config,
            acquisition,
            history: ObservationHistory::new(),
            state: Mutex::new(SearchState {
                rng,
                surrogate: None,
            }),
            #[cfg(feature = "journal")]
            journal: None,
        })
    }

    /// Returns an [`OptimizerBuilder`] for fluent configuration.
    #[must_use]
    pub fn builder() -> OptimizerBuilder {
        OptimizerBuilder::new()
    }

    /// The search space.
    #[must_use]
    pub fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    /// The configuration this optimizer was built with.
    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The optimization direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// All observations registered so far, in evaluation order.
    #[must_use]
    pub fn history(&self) -> &ObservationHistory {
        &self.history
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> OptimizerPhase {
        if self.history.is_empty() {
            OptimizerPhase::Ready
        } else {
            OptimizerPhase::Iterating
        }
    }

    /// The best observation so far (earliest on ties).
    #[must_use]
    pub fn best(&self) -> Option<&Observation> {
        self.history.best(self.config.direction)
    }

    /// Proposes the next point to evaluate.
    ///
    /// While fewer than `n_initial_points` observations exist the point is a
    /// uniform random draw. Afterwards `n_acquisition_samples` uniform
    /// candidates are scored by Expected Improvement under the surrogate and
    /// the first maximizer is returned, optionally polished by compass
    /// search. Neither the history nor the objective is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Numerical`] if the surrogate cannot be fitted.
    pub fn suggest_next_point(&self) -> Result<Vec<f64>> {
        let mut state = self.state.lock();

        if self.history.len() < self.config.n_initial_points {
            let x = self.space.sample_uniform(&mut state.rng);
            trace_debug!(n_observations = self.history.len(), "random initial suggestion");
            return Ok(x);
        }

        let model = self.fitted_surrogate(&mut state)?;
        let best = self
            .history
            .best_value(self.config.direction)
            .ok_or(Error::NoObservations)?;
        let settings = SearchSettings {
            n_samples: self.config.n_acquisition_samples,
            refine_steps: self.config.refine_steps,
        };
        let candidate = search::maximize_acquisition(
            &model,
            &self.acquisition,
            best,
            &self.space,
            settings,
            &mut state.rng,
        )?;

        trace_debug!(ei = candidate.ei, "suggestion made");
        Ok(candidate.x)
    }

    /// Records the objective value `y` observed at `x`.
    ///
    /// On error nothing is recorded.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `x` has the wrong length.
    /// - [`Error::Domain`] if a coordinate lies outside its bounds.
    /// - [`Error::NonFiniteValue`] if `y` is NaN or infinite.
    /// - `Error::Storage` (feature `journal`) if an attached journal cannot
    ///   be written.
    pub fn register_observation(&mut self, x: &[f64], y: f64) -> Result<()> {
        self.space.validate(x)?;
        if !y.is_finite() {
            return Err(Error::NonFiniteValue(y));
        }

        let observation = Observation::new(x.to_vec(), y);

        #[cfg(feature = "journal")]
        {
            if let Some(journal) = &self.journal {
                journal.append(&observation)?;
            }
        }

        #[cfg(feature = "tracing")]
        let is_new_best = self
            .history
            .best_value(self.config.direction)
            .is_none_or(|best| self.config.direction.is_better(y, best));

        self.history.push(observation);
        self.state.get_mut().surrogate = None;

        trace_debug!(index = self.history.len() - 1, y, "observation registered");
        #[cfg(feature = "tracing")]
        {
            if is_new_best {
                tracing::info!(index = self.history.len() - 1, y, "new best value found");
            }
        }
        Ok(())
    }

    /// Registers observations evaluated in an earlier session.
    ///
    /// The RNG is moved past one uniform draw per observation, so a resumed
    /// campaign still inside its random initial phase continues the draw
    /// sequence instead of re-proposing points it has already evaluated.
    #[cfg(feature = "serde")]
    pub(crate) fn replay(&mut self, observations: &[Observation]) -> Result<()> {
        for obs in observations {
            self.register_observation(&obs.x, obs.y)?;
            let _ = self.space.sample_uniform(&mut self.state.get_mut().rng);
        }
        Ok(())
    }

    /// [`replay`](Self::replay) for lines read from the journal at `source`.
    ///
    /// If that same file is attached for write-through it is detached while
    /// replaying, so the lines are not appended a second time.
    #[cfg(feature = "journal")]
    pub(crate) fn replay_journal(
        &mut self,
        observations: &[Observation],
        source: &std::path::Path,
    ) -> Result<()> {
        let detached = self.journal.take_if(|j| j.path() == source);
        let result = self.replay(observations);
        if let Some(journal) = detached {
            self.journal = Some(journal);
        }
        result
    }

    /// The surrogate conditioned on the current history.
    ///
    /// The returned snapshot is immutable and can be sent to other threads
    /// for parallel [`predict`](GaussianProcess::predict) calls; it does not
    /// follow later observations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Numerical`] if the kernel matrix cannot be
    /// factorized.
    pub fn surrogate(&self) -> Result<Arc<GaussianProcess>> {
        let mut state = self.state.lock();
        self.fitted_surrogate(&mut state)
    }

    /// Posterior mean and variance at `x` under the current history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for a malformed point and
    /// [`Error::Numerical`] if the surrogate cannot be fitted.
    pub fn predict(&self, x: &[f64]) -> Result<Prediction> {
        self.space.check_dims(x)?;
        self.surrogate()?.predict(x)
    }

    /// Expected Improvement at `x` over the current best observation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoObservations`] when there is no incumbent yet,
    /// plus any error of [`predict`](Self::predict).
    pub fn expected_improvement(&self, x: &[f64]) -> Result<f64> {
        let best = self
            .history
            .best_value(self.config.direction)
            .ok_or(Error::NoObservations)?;
        let prediction = self.predict(x)?;
        Ok(self.acquisition.score(&prediction, best))
    }

    /// Return the cached surrogate or fit a fresh one on the whole history.
    fn fitted_surrogate(&self, state: &mut SearchState) -> Result<Arc<GaussianProcess>> {
        if let Some(model) = &state.surrogate
            && model.n_train() == self.history.len()
        {
            return Ok(Arc::clone(model));
        }

        let observations = self.history.as_slice();
        let fitted = if observations.len() >= 2 {
            GaussianProcess::fit_select_length_scale(
                self.gp_config,
                self.space.dims(),
                observations,
                &self.config.length_scale_candidates,
            )
        } else {
            GaussianProcess::fit(self.gp_config, self.space.dims(), observations)
        };
        let model = Arc::new(fitted.inspect_err(|_e| {
            trace_info!(error = %_e, "surrogate fit failed");
        })?);

        state.surrogate = Some(Arc::clone(&model));
        Ok(model)
    }
}

impl core::fmt::Debug for BayesianOptimizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BayesianOptimizer")
            .field("space", &self.space)
            .field("config", &self.config)
            .field("n_observations", &self.history.len())
            .finish_non_exhaustive()
    }
}
