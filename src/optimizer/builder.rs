use crate::config::OptimizerConfig;
use crate::error::{Error, Result};
use crate::space::SearchSpace;
use crate::types::Direction;

use super::BayesianOptimizer;

/// A builder for constructing [`BayesianOptimizer`] instances with a fluent API.
///
/// Created via [`BayesianOptimizer::builder()`]. Only the bounds are
/// required; every other option falls back to the default documented on
/// [`OptimizerConfig`].
///
/// # Examples
///
/// ```
/// use bayesopt::prelude::*;
///
/// let optimizer = BayesianOptimizer::builder()
///     .bounds(vec![(-5.0, 5.0), (0.0, 1.0)])
///     .minimize()
///     .length_scale(0.5)
///     .xi(0.05)
///     .n_acquisition_samples(500)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(optimizer.direction(), Direction::Minimize);
/// assert_eq!(optimizer.search_space().dims(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OptimizerBuilder {
    bounds: Option<Vec<(f64, f64)>>,
    config: OptimizerConfig,
    #[cfg(feature = "journal")]
    journal: Option<std::path::PathBuf>,
}

impl OptimizerBuilder {
    /// Create a new builder with default settings.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Set the per-dimension `(low, high)` bounds (required).
    #[must_use]
    pub fn bounds(mut self, bounds: Vec<(f64, f64)>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the bounds from an existing [`SearchSpace`].
    #[must_use]
    pub fn search_space(mut self, space: &SearchSpace) -> Self {
        self.bounds = Some(space.bounds().to_vec());
        self
    }

    /// Replace every option at once.
    #[must_use]
    pub fn config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the optimization direction to maximize (the default).
    #[must_use]
    pub fn maximize(mut self) -> Self {
        self.config.direction = Direction::Maximize;
        self
    }

    /// Set the optimization direction to minimize.
    #[must_use]
    pub fn minimize(mut self) -> Self {
        self.config.direction = Direction::Minimize;
        self
    }

    /// Set the optimization direction explicitly.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Sets the RBF length-scale `ℓ`.
    ///
    /// Default: 1.0.
    #[must_use]
    pub fn length_scale(mut self, length_scale: f64) -> Self {
        self.config.length_scale = length_scale;
        self
    }

    /// Sets the RBF signal variance `σ_f²`, which is also the prior
    /// variance.
    ///
    /// Default: 1.0.
    #[must_use]
    pub fn signal_variance(mut self, signal_variance: f64) -> Self {
        self.config.signal_variance = signal_variance;
        self
    }

    /// Sets the diagonal jitter, relative to the signal variance.
    ///
    /// Larger values tolerate near-duplicate points at the price of no
    /// longer interpolating the data exactly.
    ///
    /// Default: 1e-6.
    #[must_use]
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.config.jitter = jitter;
        self
    }

    /// Sets the constant prior mean.
    ///
    /// Default: 0.0.
    #[must_use]
    pub fn prior_mean(mut self, prior_mean: f64) -> Self {
        self.config.prior_mean = prior_mean;
        self
    }

    /// Sets the exploration bonus `ξ` of Expected Improvement.
    ///
    /// Default: 0.01.
    #[must_use]
    pub fn xi(mut self, xi: f64) -> Self {
        self.config.xi = xi;
        self
    }

    /// Sets the number of uniform candidates scored per suggestion.
    ///
    /// Default: 200.
    #[must_use]
    pub fn n_acquisition_samples(mut self, n: usize) -> Self {
        self.config.n_acquisition_samples = n;
        self
    }

    /// Sets how many observations are collected by uniform random sampling
    /// before the surrogate guides suggestions.
    ///
    /// Default: 1.
    #[must_use]
    pub fn n_initial_points(mut self, n: usize) -> Self {
        self.config.n_initial_points = n;
        self
    }

    /// Sets the number of compass-search iterations that polish the best
    /// sampled candidate.
    ///
    /// Default: 0 (pure random search).
    #[must_use]
    pub fn refine_steps(mut self, steps: usize) -> Self {
        self.config.refine_steps = steps;
        self
    }

    /// Select the length-scale from `candidates` by maximum marginal
    /// likelihood whenever the surrogate is refitted.
    ///
    /// Default: empty (the fixed `length_scale` is used).
    #[must_use]
    pub fn length_scale_candidates(mut self, candidates: Vec<f64>) -> Self {
        self.config.length_scale_candidates = candidates;
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Append every registered observation to a JSONL journal at `path`.
    ///
    /// Observations already in the file are replayed into the optimizer by
    /// [`build`](Self::build), so a campaign interrupted by a crash resumes
    /// where it stopped.
    #[cfg(feature = "journal")]
    #[must_use]
    pub fn journal(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.journal = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the [`BayesianOptimizer`] with the configured options.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySearchSpace`] if no bounds were given.
    /// - [`Error::InvalidBounds`] for malformed bounds.
    /// - [`Error::InvalidHyperparameter`] for an out-of-range option.
    /// - With a journal: `Error::Storage` if the file cannot be read and
    ///   any error from replaying its observations.
    pub fn build(self) -> Result<BayesianOptimizer> {
        let space = SearchSpace::new(self.bounds.ok_or(Error::EmptySearchSpace)?)?;
        #[allow(unused_mut)]
        let mut optimizer = BayesianOptimizer::with_config(space, self.config)?;

        #[cfg(feature = "journal")]
        {
            if let Some(path) = self.journal {
                let journal = crate::journal::ObservationJournal::new(path);
                journal.replay_into(&mut optimizer)?;
                optimizer.journal = Some(journal);
            }
        }

        trace_info!(
            dims = optimizer.search_space().dims(),
            n_observations = optimizer.history().len(),
            "optimizer built"
        );
        Ok(optimizer)
    }
}
