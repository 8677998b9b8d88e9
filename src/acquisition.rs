//! Expected Improvement acquisition function.
//!
//! For maximization, with `y_best` the best observed value:
//!
//! ```text
//! z  = (μ - y_best - ξ) / σ
//! EI = (μ - y_best - ξ) Φ(z) + σ φ(z)      if σ > 0
//! EI = 0                                  if σ = 0
//! ```
//!
//! Minimization is the mirror case with the improvement `y_best - μ - ξ`.
//! The exploration bonus `ξ ≥ 0` shifts the threshold a candidate must beat.

use crate::error::{Error, Result};
use crate::gp::Prediction;
use crate::types::Direction;

/// Default exploration bonus `ξ`.
pub(crate) const DEFAULT_XI: f64 = 0.01;

// ---------------------------------------------------------------------------
// Normal distribution helpers (Abramowitz-Stegun approximation)
// ---------------------------------------------------------------------------

/// Standard normal PDF.
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF (Abramowitz-Stegun 26.2.17, absolute error below 7.5e-8).
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * abs_x);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly = 0.319_381_530 * t - 0.356_563_782 * t2 + 1.781_477_937 * t3 - 1.821_255_978 * t4
        + 1.330_274_429 * t5;
    let cdf = 1.0 - norm_pdf(abs_x) * poly;

    if x >= 0.0 { cdf } else { 1.0 - cdf }
}

// ---------------------------------------------------------------------------
// Expected Improvement
// ---------------------------------------------------------------------------

/// Expected Improvement over the incumbent for a given direction.
///
/// # Examples
///
/// ```
/// use bayesopt::{Direction, ExpectedImprovement, Prediction};
///
/// let ei = ExpectedImprovement::new(0.01, Direction::Maximize).unwrap();
///
/// // A point with no uncertainty cannot improve in expectation.
/// let certain = Prediction { mean: 10.0, variance: 0.0 };
/// assert_eq!(ei.score(&certain, 5.0), 0.0);
///
/// let uncertain = Prediction { mean: 5.0, variance: 1.0 };
/// assert!(ei.score(&uncertain, 5.0) > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpectedImprovement {
    xi: f64,
    direction: Direction,
}

impl ExpectedImprovement {
    /// Creates the acquisition with exploration bonus `xi`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHyperparameter`] if `xi` is negative or not
    /// finite.
    pub fn new(xi: f64, direction: Direction) -> Result<Self> {
        if !(xi.is_finite() && xi >= 0.0) {
            return Err(Error::InvalidHyperparameter {
                name: "xi",
                value: xi,
            });
        }
        Ok(Self { xi, direction })
    }

    /// The exploration bonus `ξ`.
    #[must_use]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// The optimization direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// EI of a posterior prediction against the incumbent value `best`.
    ///
    /// Exactly `0.0` when the predicted variance is zero. Never negative.
    #[must_use]
    pub fn score(&self, prediction: &Prediction, best: f64) -> f64 {
        let std = prediction.std_dev();
        if std <= 0.0 {
            return 0.0;
        }
        let improvement = match self.direction {
            Direction::Maximize => prediction.mean - best - self.xi,
            Direction::Minimize => best - prediction.mean - self.xi,
        };
        let z = improvement / std;
        (improvement * norm_cdf(z) + std * norm_pdf(z)).max(0.0)
    }
}

impl Default for ExpectedImprovement {
    fn default() -> Self {
        Self {
            xi: DEFAULT_XI,
            direction: Direction::Maximize,
        }
    }
}
