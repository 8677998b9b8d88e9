#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a search-space dimension has `low >= high` or a
    /// non-finite bound.
    #[error("invalid bounds for dimension {dim}: low ({low}) must be finite and less than high ({high})")]
    InvalidBounds {
        /// Index of the offending dimension.
        dim: usize,
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a search space is built without any dimensions.
    #[error("search space must have at least one dimension")]
    EmptySearchSpace,

    /// Returned when a configuration value is outside its valid range.
    #[error("invalid hyperparameter '{name}': {value}")]
    InvalidHyperparameter {
        /// The name of the offending option.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a point lies outside the search space.
    #[error("coordinate {dim} = {value} is outside [{low}, {high}]")]
    Domain {
        /// Index of the first coordinate that violates its bound.
        dim: usize,
        /// The offending coordinate.
        value: f64,
        /// The lower bound of that dimension.
        low: f64,
        /// The upper bound of that dimension.
        high: f64,
    },

    /// Returned when a point has the wrong number of coordinates.
    #[error("dimension mismatch: expected {expected} coordinates but got {got}")]
    DimensionMismatch {
        /// The dimensionality of the search space.
        expected: usize,
        /// The length of the supplied point.
        got: usize,
    },

    /// Returned when an objective value is NaN or infinite.
    #[error("objective value must be finite, got {0}")]
    NonFiniteValue(f64),

    /// Returned when the kernel matrix could not be factorized.
    ///
    /// The jitter is too small for the data: usually duplicate points at
    /// numerically identical coordinates. Increase `jitter` or
    /// `length_scale`, or inspect the history for degenerate rows.
    #[error(
        "kernel matrix over {n_points} observations is not positive-definite; increase jitter or length scale"
    )]
    Numerical {
        /// Number of training points in the matrix.
        n_points: usize,
    },

    /// Returned when the external objective fails during [`run`](crate::BayesianOptimizer::run).
    ///
    /// The point was not recorded.
    #[error("objective failed at {x:?}: {message}")]
    Objective {
        /// The candidate that was being evaluated.
        x: Vec<f64>,
        /// The objective's error message.
        message: String,
    },

    /// Returned when requesting the best observation but none exist.
    #[error("no observations available")]
    NoObservations,

    /// Returned when a journal operation fails.
    #[cfg(feature = "journal")]
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, Error>;
