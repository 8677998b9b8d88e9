use bayesopt::prelude::*;

fn optimizer_0_10(seed: u64) -> BayesianOptimizer {
    BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0)])
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn first_suggestion_lies_in_bounds() {
    for seed in 0..50 {
        let opt = optimizer_0_10(seed);
        let x = opt.suggest_next_point().unwrap();
        assert_eq!(x.len(), 1);
        assert!((0.0..=10.0).contains(&x[0]), "seed {seed} suggested {x:?}");
    }
}

#[test]
fn suggestion_after_two_points_explores_between_them() {
    for seed in 0..20 {
        let mut opt = optimizer_0_10(seed);
        opt.register_observation(&[2.0], 5.0).unwrap();
        opt.register_observation(&[8.0], 1.0).unwrap();

        let x = opt.suggest_next_point().unwrap();
        assert!((0.0..=10.0).contains(&x[0]));
        assert!((x[0] - 2.0).abs() > 1e-3, "seed {seed} re-proposed x = 2");
        assert!((x[0] - 8.0).abs() > 1e-3, "seed {seed} re-proposed x = 8");
    }
}

#[test]
fn converges_on_concave_quadratic() {
    let mut opt = optimizer_0_10(42);
    let result = opt
        .run(|x: &[f64]| Ok::<_, Error>(-(x[0] - 5.0).powi(2)), 30)
        .unwrap();

    assert_eq!(result.iterations, 30);
    assert_eq!(result.history.len(), 30);
    assert!(result.best.y.abs() < 0.1, "best y = {}", result.best.y);
    assert!(
        (result.best.x[0] - 5.0).abs() < 0.5,
        "best x = {:?}",
        result.best.x
    );
}

#[test]
fn out_of_bounds_registration_is_rejected() {
    let mut opt = optimizer_0_10(0);
    opt.register_observation(&[3.0], 1.0).unwrap();

    let err = opt.register_observation(&[15.0], 1.0).unwrap_err();
    match err {
        Error::Domain {
            dim,
            value,
            low,
            high,
        } => {
            assert_eq!(dim, 0);
            assert!((value - 15.0).abs() < f64::EPSILON);
            assert!(low.abs() < f64::EPSILON);
            assert!((high - 10.0).abs() < f64::EPSILON);
        }
        other => panic!("expected Domain error, got {other:?}"),
    }
    assert_eq!(opt.history().len(), 1);
}

#[test]
fn wrong_dimension_is_rejected() {
    let mut opt = optimizer_0_10(0);
    assert!(matches!(
        opt.register_observation(&[1.0, 2.0], 0.0),
        Err(Error::DimensionMismatch {
            expected: 1,
            got: 2
        })
    ));
    assert!(opt.history().is_empty());
}

#[test]
fn boundary_points_are_accepted() {
    let mut opt = optimizer_0_10(0);
    opt.register_observation(&[0.0], 1.0).unwrap();
    opt.register_observation(&[10.0], 2.0).unwrap();
    assert_eq!(opt.history().len(), 2);
}

#[test]
fn duplicate_points_are_tolerated_with_default_jitter() {
    let mut opt = optimizer_0_10(9);
    for _ in 0..5 {
        opt.register_observation(&[4.0], 1.0).unwrap();
    }
    let x = opt.suggest_next_point().unwrap();
    assert!(opt.search_space().contains(&x));
}

#[test]
fn degenerate_bounds_are_rejected() {
    let result = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0), (3.0, 3.0)])
        .build();
    assert!(matches!(result, Err(Error::InvalidBounds { dim: 1, .. })));
}

#[test]
fn two_dimensional_optimization_improves_on_random_start() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0), (0.0, 10.0)])
        .length_scale(2.0)
        .n_initial_points(3)
        .seed(13)
        .build()
        .unwrap();
    let result = opt
        .run(
            |x: &[f64]| Ok::<_, Error>(-(x[0] - 2.0).powi(2) - (x[1] - 7.0).powi(2)),
            40,
        )
        .unwrap();

    let first_three = result
        .history
        .iter()
        .take(3)
        .map(|o| o.y)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(result.best.y >= first_three);
    assert!(result.best.y > -1.0, "best y = {}", result.best.y);
}
