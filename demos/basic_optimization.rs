//! Basic optimization example: the "hello world" of the bayesopt crate.
//!
//! Maximizes f(x) = -(x - 5)² on [0, 10] with the closure-based `run` loop,
//! then continues the same campaign ask-and-tell style as if the evaluations
//! happened in a lab. No feature flags are required.
//!
//! Run with: `cargo run --example basic_optimization`

use bayesopt::prelude::*;

fn main() -> bayesopt::Result<()> {
    let mut optimizer = BayesianOptimizer::builder()
        .bounds(vec![(0.0, 10.0)])
        .seed(42)
        .build()?;

    // Let the optimizer call the objective directly for 20 rounds.
    let result = optimizer.run(|x: &[f64]| Ok::<_, Error>(-(x[0] - 5.0).powi(2)), 20)?;
    println!(
        "After {} iterations: best x = {:.4}, f(x) = {:.6}",
        result.iterations, result.best.x[0], result.best.y
    );

    // Ask-and-tell: the optimizer only proposes, we report back.
    for round in 0..5 {
        let x = optimizer.suggest_next_point()?;
        let y = -(x[0] - 5.0).powi(2);
        optimizer.register_observation(&x, y)?;

        let p = optimizer.predict(&x)?;
        println!(
            "round {round}: x = {:.4}, y = {y:.6}, posterior mean = {:.6} ± {:.2e}",
            x[0],
            p.mean,
            p.std_dev()
        );
    }

    if let Some(best) = optimizer.best() {
        println!("Best of {} observations:", optimizer.history().len());
        println!("  x     = {:.4}", best.x[0]);
        println!("  f(x)  = {:.6}", best.y);
    }
    Ok(())
}
