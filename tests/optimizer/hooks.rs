use core::cell::Cell;
use core::ops::ControlFlow;

use bayesopt::prelude::*;

struct StopAfter<'a> {
    limit: usize,
    evaluations: &'a Cell<usize>,
}

impl Objective for StopAfter<'_> {
    type Error = Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        self.evaluations.set(self.evaluations.get() + 1);
        Ok(x[0])
    }

    fn before_iteration(&self, optimizer: &BayesianOptimizer) -> ControlFlow<()> {
        if optimizer.history().len() >= self.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

struct StopAboveTarget<'a> {
    target: f64,
    seen: &'a Cell<usize>,
}

impl Objective for StopAboveTarget<'_> {
    type Error = Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        Ok(-(x[0] - 5.0).powi(2))
    }

    fn after_iteration(&self, optimizer: &BayesianOptimizer, obs: &Observation) -> ControlFlow<()> {
        self.seen.set(self.seen.get() + 1);
        assert_eq!(optimizer.history().last(), Some(obs));
        if obs.y > self.target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn before_iteration_stops_the_loop() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 1.0)])
        .seed(4)
        .build()
        .unwrap();
    let evaluations = Cell::new(0);
    let objective = StopAfter {
        limit: 4,
        evaluations: &evaluations,
    };
    let result = opt.run(objective, 100).unwrap();

    assert_eq!(result.iterations, 4);
    assert_eq!(evaluations.get(), 4);
    assert_eq!(opt.history().len(), 4);
}

#[test]
fn after_iteration_stops_once_target_is_reached() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0)])
        .seed(7)
        .build()
        .unwrap();
    let seen = Cell::new(0);
    let objective = StopAboveTarget {
        target: -1.0,
        seen: &seen,
    };
    let result = opt.run(objective, 200).unwrap();

    assert!(result.best.y > -1.0);
    assert_eq!(seen.get(), result.iterations);
    assert!(result.iterations < 200);
    // The last observation is the one that triggered the stop.
    assert!(result.history.last().unwrap().y > -1.0);
}

#[test]
fn objective_errors_carry_the_failing_point() {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 1.0), (0.0, 1.0)])
        .seed(2)
        .build()
        .unwrap();
    let err = opt
        .run(|_: &[f64]| Err::<f64, _>("instrument offline"), 3)
        .unwrap_err();

    match err {
        Error::Objective { x, message } => {
            assert_eq!(x.len(), 2);
            assert_eq!(message, "instrument offline");
        }
        other => panic!("expected Objective error, got {other:?}"),
    }
    assert!(opt.history().is_empty());
}

#[test]
fn infinite_objective_value_is_an_error() {
    let mut opt = BayesianOptimizer::new(vec![(0.0, 1.0)]).unwrap();
    opt.register_observation(&[0.5], 1.0).unwrap();
    let err = opt
        .run(|_: &[f64]| Ok::<_, Error>(f64::INFINITY), 3)
        .unwrap_err();
    assert!(matches!(err, Error::Objective { .. }));
    assert_eq!(opt.history().len(), 1);
}
