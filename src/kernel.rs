//! Squared-exponential covariance function.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Squared-exponential (RBF) kernel with an isotropic length-scale.
///
/// `k(x1, x2) = σ_f² exp(-‖x1 - x2‖² / (2ℓ²))`
///
/// # Examples
///
/// ```
/// use bayesopt::RbfKernel;
///
/// let kernel = RbfKernel::new(1.0, 2.0).unwrap();
/// assert!((kernel.eval(&[0.0], &[0.0]) - 2.0).abs() < 1e-12);
/// assert!(kernel.eval(&[0.0], &[10.0]) < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RbfKernel {
    length_scale: f64,
    signal_variance: f64,
}

impl RbfKernel {
    /// Creates a kernel with length-scale `ℓ` and signal variance `σ_f²`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHyperparameter`] unless both values are
    /// finite and strictly positive.
    pub fn new(length_scale: f64, signal_variance: f64) -> Result<Self> {
        if !(length_scale.is_finite() && length_scale > 0.0) {
            return Err(Error::InvalidHyperparameter {
                name: "length_scale",
                value: length_scale,
            });
        }
        if !(signal_variance.is_finite() && signal_variance > 0.0) {
            return Err(Error::InvalidHyperparameter {
                name: "signal_variance",
                value: signal_variance,
            });
        }
        Ok(Self {
            length_scale,
            signal_variance,
        })
    }

    /// The length-scale `ℓ`.
    #[must_use]
    pub fn length_scale(&self) -> f64 {
        self.length_scale
    }

    /// The signal variance `σ_f²`, which is also `k(x, x)`.
    #[must_use]
    pub fn signal_variance(&self) -> f64 {
        self.signal_variance
    }

    /// Same kernel with a different length-scale; the caller has already
    /// validated `length_scale`.
    pub(crate) fn with_length_scale(self, length_scale: f64) -> Self {
        Self {
            length_scale,
            ..self
        }
    }

    /// Evaluates `k(x1, x2)`.
    #[must_use]
    pub fn eval(&self, x1: &[f64], x2: &[f64]) -> f64 {
        let mut r_sq = 0.0;
        for (a, b) in x1.iter().zip(x2) {
            let diff = a - b;
            r_sq += diff * diff;
        }
        self.signal_variance * (-r_sq / (2.0 * self.length_scale * self.length_scale)).exp()
    }

    /// Build the training matrix `K + jitter·I`.
    pub(crate) fn matrix(&self, x: &[&[f64]], jitter: f64) -> DMatrix<f64> {
        let n = x.len();
        let mut k = DMatrix::zeros(n, n);
        for i in 0..n {
            k[(i, i)] = self.signal_variance + jitter;
            for j in 0..i {
                let v = self.eval(x[i], x[j]);
                k[(i, j)] = v;
                k[(j, i)] = v;
            }
        }
        k
    }

    /// Compute the kernel vector `k(x*, X)` for a test point.
    pub(crate) fn vector(&self, x_star: &[f64], x_train: &[&[f64]]) -> DVector<f64> {
        DVector::from_fn(x_train.len(), |i, _| self.eval(x_star, x_train[i]))
    }
}

impl Default for RbfKernel {
    fn default() -> Self {
        Self {
            length_scale: 1.0,
            signal_variance: 1.0,
        }
    }
}
