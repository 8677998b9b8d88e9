//! Continuous, bounded search space.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;

/// An ordered list of per-dimension `(low, high)` bounds.
///
/// The dimensionality is fixed at construction and the bounds never change
/// for the lifetime of an optimization run.
///
/// # Examples
///
/// ```
/// use bayesopt::SearchSpace;
///
/// let space = SearchSpace::new(vec![(0.0, 10.0), (-1.0, 1.0)]).unwrap();
/// assert_eq!(space.dims(), 2);
/// assert!(space.contains(&[5.0, 0.0]));
/// assert!(!space.contains(&[11.0, 0.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSpace {
    bounds: Vec<(f64, f64)>,
}

impl SearchSpace {
    /// Creates a search space from `(low, high)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySearchSpace`] if `bounds` is empty and
    /// [`Error::InvalidBounds`] if any pair is non-finite or has
    /// `low >= high`.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::EmptySearchSpace);
        }
        for (dim, &(low, high)) in bounds.iter().enumerate() {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(Error::InvalidBounds { dim, low, high });
            }
        }
        Ok(Self { bounds })
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.bounds.len()
    }

    /// The `(low, high)` pairs in dimension order.
    #[must_use]
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Returns `true` if `x` has the right length and every coordinate
    /// lies in its closed interval.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        self.validate(x).is_ok()
    }

    /// Checks that `x` is a point of this space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the length is wrong and
    /// [`Error::Domain`] for the first coordinate outside `[low, high]`
    /// (NaN coordinates are always outside).
    pub fn validate(&self, x: &[f64]) -> Result<()> {
        self.check_dims(x)?;
        for (dim, (&value, &(low, high))) in x.iter().zip(&self.bounds).enumerate() {
            if !(low..=high).contains(&value) {
                return Err(Error::Domain {
                    dim,
                    value,
                    low,
                    high,
                });
            }
        }
        Ok(())
    }

    /// Checks only the dimensionality of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x.len() != self.dims()`.
    pub fn check_dims(&self, x: &[f64]) -> Result<()> {
        if x.len() == self.bounds.len() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.bounds.len(),
                got: x.len(),
            })
        }
    }

    /// Midpoint of every dimension.
    #[must_use]
    pub fn center(&self) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|&(low, high)| low + 0.5 * (high - low))
            .collect()
    }

    /// Width of every dimension.
    #[must_use]
    pub fn widths(&self) -> Vec<f64> {
        self.bounds.iter().map(|&(low, high)| high - low).collect()
    }

    /// Projects `x` onto the box, coordinate by coordinate.
    pub fn clamp(&self, x: &mut [f64]) {
        for (v, &(low, high)) in x.iter_mut().zip(&self.bounds) {
            *v = v.clamp(low, high);
        }
    }

    /// Draws one point with independent uniform coordinates.
    pub(crate) fn sample_uniform(&self, rng: &mut fastrand::Rng) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|&(low, high)| rng_util::f64_range(rng, low, high))
            .collect()
    }
}
