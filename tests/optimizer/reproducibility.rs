use bayesopt::prelude::*;

fn suggestions(seed: u64, refine_steps: usize) -> Vec<Vec<f64>> {
    let mut opt = BayesianOptimizer::builder()
        .bounds(vec![(-3.0, 3.0), (0.0, 1.0)])
        .refine_steps(refine_steps)
        .seed(seed)
        .build()
        .unwrap();
    let mut out = Vec::new();
    for _ in 0..8 {
        let x = opt.suggest_next_point().unwrap();
        let y = (x[0] * 1.3).sin() + x[1];
        opt.register_observation(&x, y).unwrap();
        out.push(x);
    }
    out
}

fn bits(points: &[Vec<f64>]) -> Vec<Vec<u64>> {
    points
        .iter()
        .map(|p| p.iter().map(|v| v.to_bits()).collect())
        .collect()
}

#[test]
fn same_seed_same_suggestions() {
    assert_eq!(bits(&suggestions(21, 0)), bits(&suggestions(21, 0)));
    assert_eq!(bits(&suggestions(21, 10)), bits(&suggestions(21, 10)));
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(bits(&suggestions(1, 0)), bits(&suggestions(2, 0)));
}

#[test]
fn refinement_keeps_suggestions_in_bounds() {
    let space = SearchSpace::new(vec![(-3.0, 3.0), (0.0, 1.0)]).unwrap();
    for x in suggestions(5, 25) {
        assert!(space.contains(&x), "{x:?} escaped the box");
    }
}

#[test]
fn length_scale_selection_is_deterministic() {
    let run = || {
        let mut opt = BayesianOptimizer::builder()
            .bounds(vec![(0.0, 10.0)])
            .length_scale_candidates(vec![0.3, 1.0, 3.0])
            .seed(99)
            .build()
            .unwrap();
        opt.run(|x: &[f64]| Ok::<_, Error>((x[0] * 0.5).cos()), 12)
            .unwrap()
            .history
    };
    assert_eq!(run(), run());
}
