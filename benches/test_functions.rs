//! Standard test functions for Bayesian optimization.

/// Concave quadratic with a single peak of height 0 at `center`.
pub fn peak(x: &[f64], center: &[f64]) -> f64 {
    -x.iter()
        .zip(center)
        .map(|(xi, ci)| (xi - ci) * (xi - ci))
        .sum::<f64>()
}

/// Sphere function: unimodal, convex. Global minimum f(0,...,0) = 0.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Forrester function (1D) on `[0, 1]`. Global minimum f(0.757249) ≈ -6.020740.
///
/// # Panics
///
/// Panics if `x` does not have exactly 1 element.
pub fn forrester(x: &[f64]) -> f64 {
    assert!(x.len() == 1, "Forrester requires exactly 1 dimension");
    let t = x[0];
    (6.0 * t - 2.0).powi(2) * (12.0 * t - 4.0).sin()
}

/// Branin function (2D only). Three global minima with f* ≈ 0.397887.
///
/// # Panics
///
/// Panics if `x` does not have exactly 2 elements.
pub fn branin(x: &[f64]) -> f64 {
    assert!(x.len() == 2, "Branin requires exactly 2 dimensions");
    let (x1, x2) = (x[0], x[1]);
    let pi = std::f64::consts::PI;
    let a = 1.0;
    let b = 5.1 / (4.0 * pi * pi);
    let c = 5.0 / pi;
    let r = 6.0;
    let s = 10.0;
    let t = 1.0 / (8.0 * pi);
    a * (x2 - b * x1 * x1 + c * x1 - r).powi(2) + s * (1.0 - t) * x1.cos() + s
}

/// Six-hump camel function (2D only). Two global minima with f* ≈ -1.031628.
///
/// # Panics
///
/// Panics if `x` does not have exactly 2 elements.
pub fn six_hump_camel(x: &[f64]) -> f64 {
    assert!(x.len() == 2, "six-hump camel requires exactly 2 dimensions");
    let (x1, x2) = (x[0], x[1]);
    let x1_sq = x1 * x1;
    (4.0 - 2.1 * x1_sq + x1_sq * x1_sq / 3.0) * x1_sq + x1 * x2 + (-4.0 + 4.0 * x2 * x2) * x2 * x2
}
