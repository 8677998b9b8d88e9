//! Evaluated points and the append-only history that holds them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// A single evaluated point: the input `x` and the objective value `y`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// The evaluated point, one coordinate per search-space dimension.
    pub x: Vec<f64>,
    /// The objective value returned for `x`.
    pub y: f64,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub fn new(x: Vec<f64>, y: f64) -> Self {
        Self { x, y }
    }
}

/// Observations in evaluation order.
///
/// Entries are only ever appended. Repeated `x` values are legal (noisy
/// objectives are sampled more than once) and are treated as independent
/// rows by the surrogate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObservationHistory {
    observations: Vec<Observation>,
}

impl ObservationHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observation. Validation is the caller's job.
    pub(crate) fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if nothing has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observation at `index`, in evaluation order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// The most recent observation.
    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Iterates over observations in evaluation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// All observations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    /// Evaluated points in evaluation order.
    #[must_use]
    pub fn xs(&self) -> Vec<&[f64]> {
        self.observations.iter().map(|o| o.x.as_slice()).collect()
    }

    /// Objective values in evaluation order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.y).collect()
    }

    /// The best observation for `direction`.
    ///
    /// Ties go to the earliest observation.
    #[must_use]
    pub fn best(&self, direction: Direction) -> Option<&Observation> {
        let mut iter = self.observations.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, o| {
            if direction.is_better(o.y, best.y) {
                o
            } else {
                best
            }
        }))
    }

    /// The best objective value for `direction`.
    #[must_use]
    pub fn best_value(&self, direction: Direction) -> Option<f64> {
        self.best(direction).map(|o| o.y)
    }
}

impl<'a> IntoIterator for &'a ObservationHistory {
    type Item = &'a Observation;
    type IntoIter = core::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
