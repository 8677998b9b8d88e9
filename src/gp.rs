//! Gaussian Process surrogate.
//!
//! A zero-noise GP regressor over an [`RbfKernel`]: the training matrix
//! `K + εσ_f²I` is factorized once with a Cholesky decomposition and every
//! prediction is a pair of triangular solves against that factor.
//!
//! The model is an immutable snapshot of the observations it was fitted on.
//! Refitting after every new observation is the caller's responsibility
//! ([`BayesianOptimizer`](crate::BayesianOptimizer) does this through its
//! cache), and a fitted model can be shared freely across threads for
//! read-only prediction.
//!
//! # Examples
//!
//! ```
//! use bayesopt::{GaussianProcess, GpConfig, Observation};
//!
//! let observations = vec![
//!     Observation::new(vec![0.0], 1.0),
//!     Observation::new(vec![2.0], -1.0),
//! ];
//! let gp = GaussianProcess::fit(GpConfig::default(), 1, &observations).unwrap();
//!
//! let at_data = gp.predict(&[0.0]).unwrap();
//! assert!((at_data.mean - 1.0).abs() < 1e-3);
//! assert!(at_data.variance < 1e-3);
//!
//! let far_away = gp.predict(&[50.0]).unwrap();
//! assert!(far_away.mean.abs() < 1e-6);
//! assert!((far_away.variance - 1.0).abs() < 1e-6);
//! ```

use nalgebra::linalg::Cholesky;
use nalgebra::{DVector, Dyn};

use crate::error::{Error, Result};
use crate::kernel::RbfKernel;
use crate::observation::Observation;

/// Default diagonal jitter, relative to the signal variance.
pub(crate) const DEFAULT_JITTER: f64 = 1e-6;

/// ln(2π), used by the log marginal likelihood.
const LN_2PI: f64 = 1.837_877_066_409_345_5;

/// Hyperparameters of the surrogate.
///
/// # Defaults
///
/// - `kernel`: `ℓ = 1.0`, `σ_f² = 1.0`
/// - `jitter`: 1e-6 (multiplied by `σ_f²` before it is added to the diagonal)
/// - `prior_mean`: 0.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpConfig {
    /// Covariance function.
    pub kernel: RbfKernel,
    /// Diagonal regularization, relative to the signal variance.
    pub jitter: f64,
    /// Constant prior mean of the objective.
    pub prior_mean: f64,
}

impl Default for GpConfig {
    fn default() -> Self {
        Self {
            kernel: RbfKernel::default(),
            jitter: DEFAULT_JITTER,
            prior_mean: 0.0,
        }
    }
}

impl GpConfig {
    fn validate(&self) -> Result<()> {
        if !(self.jitter.is_finite() && self.jitter > 0.0) {
            return Err(Error::InvalidHyperparameter {
                name: "jitter",
                value: self.jitter,
            });
        }
        if !self.prior_mean.is_finite() {
            return Err(Error::InvalidHyperparameter {
                name: "prior_mean",
                value: self.prior_mean,
            });
        }
        Ok(())
    }
}

/// Posterior predictive distribution at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    /// Posterior mean `μ(x*)`.
    pub mean: f64,
    /// Posterior variance `σ²(x*)`, never negative.
    pub variance: f64,
}

impl Prediction {
    /// Posterior standard deviation `σ(x*)`.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Cholesky state over the training points.
struct Posterior {
    /// Cholesky factor L of K + εσ_f²I.
    cholesky: Cholesky<f64, Dyn>,
    /// α = (K + εσ_f²I)^{-1} (y - m).
    alpha: DVector<f64>,
    /// y - m, kept for the marginal likelihood.
    residuals: DVector<f64>,
    /// Training inputs in evaluation order.
    x_train: Vec<Vec<f64>>,
}

/// A Gaussian Process conditioned on a set of observations.
pub struct GaussianProcess {
    config: GpConfig,
    dims: usize,
    posterior: Option<Posterior>,
}

impl core::fmt::Debug for GaussianProcess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GaussianProcess")
            .field("config", &self.config)
            .field("dims", &self.dims)
            .field("n_train", &self.n_train())
            .finish()
    }
}

impl GaussianProcess {
    /// Conditions a GP on `observations` in a `dims`-dimensional space.
    ///
    /// With no observations the result is the prior: mean `prior_mean` and
    /// variance `σ_f²` everywhere.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidHyperparameter`] for a non-positive jitter or a
    ///   non-finite prior mean.
    /// - [`Error::DimensionMismatch`] if an observation has the wrong length.
    /// - [`Error::Numerical`] if the kernel matrix is not positive-definite
    ///   even with jitter.
    pub fn fit(config: GpConfig, dims: usize, observations: &[Observation]) -> Result<Self> {
        config.validate()?;
        for obs in observations {
            if obs.x.len() != dims {
                return Err(Error::DimensionMismatch {
                    expected: dims,
                    got: obs.x.len(),
                });
            }
        }

        if observations.is_empty() {
            return Ok(Self {
                config,
                dims,
                posterior: None,
            });
        }

        let x_train: Vec<Vec<f64>> = observations.iter().map(|o| o.x.clone()).collect();
        let rows: Vec<&[f64]> = x_train.iter().map(Vec::as_slice).collect();
        let jitter = config.jitter * config.kernel.signal_variance();
        let k = config.kernel.matrix(&rows, jitter);

        let Some(cholesky) = Cholesky::new(k) else {
            trace_debug!(n_points = observations.len(), "kernel matrix factorization failed");
            return Err(Error::Numerical {
                n_points: observations.len(),
            });
        };

        let residuals = DVector::from_iterator(
            observations.len(),
            observations.iter().map(|o| o.y - config.prior_mean),
        );
        let alpha = cholesky.solve(&residuals);

        Ok(Self {
            config,
            dims,
            posterior: Some(Posterior {
                cholesky,
                alpha,
                residuals,
                x_train,
            }),
        })
    }

    /// Fits one GP per candidate length-scale and keeps the one with the
    /// highest log marginal likelihood.
    ///
    /// Candidates whose kernel matrix cannot be factorized are skipped.
    /// Ties go to the earliest candidate. With an empty candidate list this
    /// is [`fit`](Self::fit) with `config` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHyperparameter`] for a non-positive candidate
    /// and the last fitting error if no candidate could be fitted.
    pub fn fit_select_length_scale(
        config: GpConfig,
        dims: usize,
        observations: &[Observation],
        candidates: &[f64],
    ) -> Result<Self> {
        if candidates.is_empty() {
            return Self::fit(config, dims, observations);
        }

        let mut best: Option<(f64, Self)> = None;
        let mut last_err = None;
        for &length_scale in candidates {
            if !(length_scale.is_finite() && length_scale > 0.0) {
                return Err(Error::InvalidHyperparameter {
                    name: "length_scale_candidates",
                    value: length_scale,
                });
            }
            let candidate_config = GpConfig {
                kernel: config.kernel.with_length_scale(length_scale),
                ..config
            };
            match Self::fit(candidate_config, dims, observations) {
                Ok(gp) => {
                    let lml = gp.log_marginal_likelihood();
                    if best.as_ref().is_none_or(|(best_lml, _)| lml > *best_lml) {
                        best = Some((lml, gp));
                    }
                }
                Err(e @ Error::Numerical { .. }) => last_err = Some(e),
                Err(e) => return Err(e),
            }
        }

        match best {
            Some((_lml, gp)) => {
                trace_debug!(
                    length_scale = gp.config.kernel.length_scale(),
                    lml = _lml,
                    "selected length scale"
                );
                Ok(gp)
            }
            None => Err(last_err.unwrap_or(Error::Numerical {
                n_points: observations.len(),
            })),
        }
    }

    /// Hyperparameters this model was fitted with.
    #[must_use]
    pub fn config(&self) -> &GpConfig {
        &self.config
    }

    /// Dimensionality of the input space.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of training points.
    #[must_use]
    pub fn n_train(&self) -> usize {
        self.posterior.as_ref().map_or(0, |p| p.x_train.len())
    }

    /// Posterior mean and variance at `x`.
    ///
    /// The variance is clamped at zero; small negative values from
    /// round-off near training points are expected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x.len() != self.dims()`.
    pub fn predict(&self, x: &[f64]) -> Result<Prediction> {
        if x.len() != self.dims {
            return Err(Error::DimensionMismatch {
                expected: self.dims,
                got: x.len(),
            });
        }

        let k_self = self.config.kernel.signal_variance();
        let Some(posterior) = &self.posterior else {
            return Ok(Prediction {
                mean: self.config.prior_mean,
                variance: k_self,
            });
        };

        let rows: Vec<&[f64]> = posterior.x_train.iter().map(Vec::as_slice).collect();
        let k_star = self.config.kernel.vector(x, &rows);

        // Mean: m + k*^T α
        let mean = self.config.prior_mean + k_star.dot(&posterior.alpha);

        // Variance: k(x*, x*) - k*^T (K + εI)^{-1} k*
        let v = posterior.cholesky.solve(&k_star);
        let variance = (k_self - k_star.dot(&v)).max(0.0);

        Ok(Prediction { mean, variance })
    }

    /// [`predict`](Self::predict) over several points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for the first malformed point.
    pub fn predict_many(&self, points: &[Vec<f64>]) -> Result<Vec<Prediction>> {
        points.iter().map(|x| self.predict(x)).collect()
    }

    /// Log marginal likelihood `log p(y | X)` of the training data.
    ///
    /// `-½ rᵀα - Σ log Lᵢᵢ - n/2 log 2π` with `r = y - m`. Zero for the prior.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn log_marginal_likelihood(&self) -> f64 {
        let Some(posterior) = &self.posterior else {
            return 0.0;
        };
        let n = posterior.x_train.len() as f64;
        let data_fit = -0.5 * posterior.residuals.dot(&posterior.alpha);
        let log_det: f64 = posterior
            .cholesky
            .l_dirty()
            .diagonal()
            .iter()
            .map(|d| d.ln())
            .sum();
        data_fit - log_det - 0.5 * n * LN_2PI
    }
}
