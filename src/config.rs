//! Optimizer configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::acquisition::{DEFAULT_XI, ExpectedImprovement};
use crate::error::{Error, Result};
use crate::gp::{DEFAULT_JITTER, GpConfig};
use crate::kernel::RbfKernel;
use crate::types::Direction;

/// Default number of uniform candidates scored per suggestion.
const DEFAULT_N_ACQUISITION_SAMPLES: usize = 200;

/// Every tunable of a [`BayesianOptimizer`](crate::BayesianOptimizer)
/// except the search space.
///
/// Usually filled in through [`OptimizerBuilder`](crate::OptimizerBuilder);
/// construct it directly when the settings come from elsewhere (for example
/// a deserialized snapshot).
///
/// | Field | Default | Constraint |
/// |-------|---------|------------|
/// | `direction` | `Maximize` | |
/// | `length_scale` | 1.0 | `> 0` |
/// | `signal_variance` | 1.0 | `> 0` |
/// | `jitter` | 1e-6 | `> 0`, relative to `signal_variance` |
/// | `prior_mean` | 0.0 | finite |
/// | `xi` | 0.01 | `≥ 0` |
/// | `n_acquisition_samples` | 200 | `≥ 1` |
/// | `n_initial_points` | 1 | `≥ 1` |
/// | `refine_steps` | 0 | |
/// | `length_scale_candidates` | empty | each `> 0` |
/// | `seed` | random | |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Whether larger or smaller objective values are better.
    pub direction: Direction,
    /// RBF length-scale `ℓ`.
    pub length_scale: f64,
    /// RBF signal variance `σ_f²`.
    pub signal_variance: f64,
    /// Diagonal jitter, relative to the signal variance.
    pub jitter: f64,
    /// Constant prior mean of the objective.
    pub prior_mean: f64,
    /// Exploration bonus `ξ` of Expected Improvement.
    pub xi: f64,
    /// Uniform candidates scored per suggestion.
    pub n_acquisition_samples: usize,
    /// Observations collected by uniform random sampling before the
    /// surrogate takes over.
    pub n_initial_points: usize,
    /// Compass-search iterations applied to the best sampled candidate.
    pub refine_steps: usize,
    /// When non-empty, the length-scale is re-selected from these values
    /// by maximum marginal likelihood on every fit with at least two
    /// observations; `length_scale` is then only used below that.
    pub length_scale_candidates: Vec<f64>,
    /// RNG seed for reproducible suggestions.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Maximize,
            length_scale: 1.0,
            signal_variance: 1.0,
            jitter: DEFAULT_JITTER,
            prior_mean: 0.0,
            xi: DEFAULT_XI,
            n_acquisition_samples: DEFAULT_N_ACQUISITION_SAMPLES,
            n_initial_points: 1,
            refine_steps: 0,
            length_scale_candidates: Vec::new(),
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Checks every field against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHyperparameter`] naming the first invalid
    /// field.
    pub fn validate(&self) -> Result<()> {
        self.gp_config()?;
        self.acquisition()?;
        if self.n_acquisition_samples == 0 {
            return Err(Error::InvalidHyperparameter {
                name: "n_acquisition_samples",
                value: 0.0,
            });
        }
        if self.n_initial_points == 0 {
            return Err(Error::InvalidHyperparameter {
                name: "n_initial_points",
                value: 0.0,
            });
        }
        if let Some(&bad) = self
            .length_scale_candidates
            .iter()
            .find(|l| !(l.is_finite() && **l > 0.0))
        {
            return Err(Error::InvalidHyperparameter {
                name: "length_scale_candidates",
                value: bad,
            });
        }
        Ok(())
    }

    /// Surrogate hyperparameters.
    pub(crate) fn gp_config(&self) -> Result<GpConfig> {
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
        Ok(GpConfig {
            kernel: RbfKernel::new(self.length_scale, self.signal_variance)?,
            jitter: self.jitter,
            prior_mean: self.prior_mean,
        })
    }

    /// Acquisition function.
    pub(crate) fn acquisition(&self) -> Result<ExpectedImprovement> {
        ExpectedImprovement::new(self.xi, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = OptimizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.direction, Direction::Maximize);
        assert_eq!(config.n_acquisition_samples, 200);
        assert!((config.xi - 0.01).abs() < f64::EPSILON);
        assert!((config.jitter - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn names_the_first_invalid_field() {
        let cases: Vec<(OptimizerConfig, &str)> = vec![
            (
                OptimizerConfig {
                    length_scale: 0.0,
                    ..OptimizerConfig::default()
                },
                "length_scale",
            ),
            (
                OptimizerConfig {
                    signal_variance: -1.0,
                    ..OptimizerConfig::default()
                },
                "signal_variance",
            ),
            (
                OptimizerConfig {
                    jitter: 0.0,
                    ..OptimizerConfig::default()
                },
                "jitter",
            ),
            (
                OptimizerConfig {
                    xi: -0.5,
                    ..OptimizerConfig::default()
                },
                "xi",
            ),
            (
                OptimizerConfig {
                    n_acquisition_samples: 0,
                    ..OptimizerConfig::default()
                },
                "n_acquisition_samples",
            ),
            (
                OptimizerConfig {
                    n_initial_points: 0,
                    ..OptimizerConfig::default()
                },
                "n_initial_points",
            ),
            (
                OptimizerConfig {
                    length_scale_candidates: vec![0.5, f64::NAN],
                    ..OptimizerConfig::default()
                },
                "length_scale_candidates",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(Error::InvalidHyperparameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }
}
