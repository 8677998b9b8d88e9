use bayesopt::OptimizerPhase;
use bayesopt::prelude::*;

#[test]
fn ask_and_tell_loop() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(-1.0, 1.0), (0.0, 4.0)])
        .seed(3)
        .build()
        .unwrap();
    assert_eq!(opt.phase(), OptimizerPhase::Ready);

    for i in 0..10 {
        let x = opt.suggest_next_point().unwrap();
        assert!(opt.search_space().contains(&x));
        let y = -x[0].powi(2) - (x[1] - 1.0).powi(2);
        opt.register_observation(&x, y).unwrap();
        assert_eq!(opt.history().len(), i + 1);
        assert_eq!(opt.history().last().unwrap().x, x);
    }
    assert_eq!(opt.phase(), OptimizerPhase::Iterating);
}

#[test]
fn suggesting_twice_without_telling_keeps_history() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 1.0)])
        .seed(8)
        .build()
        .unwrap();
    opt.register_observation(&[0.2], 1.0).unwrap();

    let a = opt.suggest_next_point().unwrap();
    let b = opt.suggest_next_point().unwrap();
    assert!(opt.search_space().contains(&a));
    assert!(opt.search_space().contains(&b));
    assert_eq!(opt.history().len(), 1);
}

#[test]
fn externally_chosen_points_are_accepted() {
    let mut opt = BayesianOptimizer::new(vec![(0.0, 100.0)]).unwrap();
    for (x, y) in [(10.0, 1.0), (50.0, 4.0), (90.0, 2.0)] {
        opt.register_observation(&[x], y).unwrap();
    }
    let best = opt.best().unwrap();
    assert_eq!(best.x, vec![50.0]);
    assert!((best.y - 4.0).abs() < f64::EPSILON);
}

#[test]
fn best_prefers_earliest_on_ties() {
    let mut opt = BayesianOptimizer::new(vec![(0.0, 1.0)]).unwrap();
    opt.register_observation(&[0.1], 2.0).unwrap();
    opt.register_observation(&[0.9], 2.0).unwrap();
    assert_eq!(opt.best().unwrap().x, vec![0.1]);
}

#[test]
fn predictions_follow_the_data() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0)])
        .jitter(1e-10)
        .build()
        .unwrap();
    opt.register_observation(&[2.0], 0.5).unwrap();
    opt.register_observation(&[8.0], 0.3).unwrap();

    let at_two = opt.predict(&[2.0]).unwrap();
    assert!((at_two.mean - 0.5).abs() < 1e-4);
    assert!(at_two.variance < 1e-6);

    // Far from both points the prior dominates.
    let between = opt.predict(&[5.0]).unwrap();
    assert!(between.mean.abs() < 0.05);
    assert!(between.variance > 0.9);

    let ei_mid = opt.expected_improvement(&[5.0]).unwrap();
    let ei_known = opt.expected_improvement(&[2.0]).unwrap();
    assert!(ei_mid > ei_known);
}
