#[path = "../benches/test_functions.rs"]
mod test_functions;

use test_functions::*;

const TOL: f64 = 1e-10;

#[test]
fn peak_at_center() {
    assert!(peak(&[5.0], &[5.0]).abs() < TOL);
    assert!((peak(&[2.0, 7.0], &[2.0, 5.0]) + 4.0).abs() < TOL);
}

#[test]
fn sphere_at_optimum() {
    assert!(sphere(&[0.0, 0.0]).abs() < TOL);
    assert!(sphere(&[0.0; 10]).abs() < TOL);
}

#[test]
fn forrester_at_optimum() {
    let val = forrester(&[0.757_249]);
    assert!((val + 6.020_740).abs() < 1e-5);
}

#[test]
fn branin_at_optimum() {
    let target = 0.397_887_357_729_738_1;
    let val = branin(&[std::f64::consts::PI, 2.275]);
    assert!((val - target).abs() < 1e-3);
}

#[test]
fn six_hump_camel_at_optimum() {
    let val = six_hump_camel(&[0.0898, -0.7126]);
    assert!((val + 1.031_628).abs() < 1e-4);
}
