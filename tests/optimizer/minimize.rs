use bayesopt::prelude::*;
use bayesopt::{ExpectedImprovement, Prediction};

#[test]
fn minimizes_convex_quadratic() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0)])
        .minimize()
        .seed(42)
        .build()
        .unwrap();
    let result = opt
        .run(|x: &[f64]| Ok::<_, Error>((x[0] - 3.0).powi(2)), 30)
        .unwrap();

    assert!(result.best.y < 0.1, "best y = {}", result.best.y);
    assert!((result.best.x[0] - 3.0).abs() < 0.5);
    let smallest = result
        .history
        .iter()
        .map(|o| o.y)
        .fold(f64::INFINITY, f64::min);
    assert!((result.best.y - smallest).abs() < f64::EPSILON);
}

#[test]
fn minimization_mirrors_maximization() {
    let max = ExpectedImprovement::new(0.01, Direction::Maximize).unwrap();
    let min = ExpectedImprovement::new(0.01, Direction::Minimize).unwrap();

    for (mean, variance, best) in [(1.0, 0.5, 0.2), (-2.0, 1.5, 0.0), (0.3, 0.01, 0.31)] {
        let up = max.score(&Prediction { mean, variance }, best);
        let down = min.score(
            &Prediction {
                mean: -mean,
                variance,
            },
            -best,
        );
        assert!((up - down).abs() < 1e-12, "{up} vs {down}");
    }
}

#[test]
fn best_respects_direction() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 1.0)])
        .minimize()
        .build()
        .unwrap();
    opt.register_observation(&[0.1], 3.0).unwrap();
    opt.register_observation(&[0.5], -2.0).unwrap();
    opt.register_observation(&[0.9], 1.0).unwrap();
    assert_eq!(opt.best().unwrap().x, vec![0.5]);
    assert_eq!(opt.direction(), Direction::Minimize);
}
