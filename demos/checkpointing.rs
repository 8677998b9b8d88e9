//! Checkpointing: journal every observation and resume after a crash.
//!
//! The builder's `journal` option appends each registered observation to a
//! JSONL file and replays the file when the optimizer is built again, so a
//! long campaign survives restarts. A JSON snapshot via `save`/`load` is
//! shown as the alternative for one-shot checkpoints.
//!
//! Run with: `cargo run --example checkpointing --features journal`

use bayesopt::prelude::*;

fn objective(x: &[f64]) -> bayesopt::Result<f64> {
    // Six-hump camel, negated so that maximizing finds its minima.
    let (a, b) = (x[0], x[1]);
    let a2 = a * a;
    Ok(-((4.0 - 2.1 * a2 + a2 * a2 / 3.0) * a2 + a * b + (-4.0 + 4.0 * b * b) * b * b))
}

fn build(path: &std::path::Path) -> bayesopt::Result<BayesianOptimizer> {
    BayesianOptimizer::builder()
        .bounds(vec![(-3.0, 3.0), (-2.0, 2.0)])
        .length_scale_candidates(vec![0.3, 0.6, 1.0, 2.0])
        .n_initial_points(5)
        .seed(7)
        .journal(path)
        .build()
}

fn main() -> bayesopt::Result<()> {
    let path = std::env::temp_dir().join("bayesopt_checkpointing_example.jsonl");

    // Clean up from any previous run
    let _ = std::fs::remove_file(&path);

    // --- First session: 15 evaluations, then "crash" ---
    {
        let mut optimizer = build(&path)?;
        optimizer.run(objective, 15)?;
        println!(
            "First session: {} observations written to {}",
            optimizer.history().len(),
            path.display()
        );
    }

    // --- Second session: the journal is replayed on build ---
    let mut optimizer = build(&path)?;
    let before = optimizer.history().len();
    let result = optimizer.run(objective, 15)?;
    println!(
        "Resumed: {before} → {} observations, best f({:.4}, {:.4}) = {:.6}",
        result.history.len(),
        result.best.x[0],
        result.best.x[1],
        -result.best.y,
    );

    // A single-file snapshot works too.
    let snapshot_path = std::env::temp_dir().join("bayesopt_checkpointing_example.json");
    optimizer
        .save(&snapshot_path)
        .map_err(|e| Error::Storage(e.to_string()))?;
    let restored =
        BayesianOptimizer::load(&snapshot_path).map_err(|e| Error::Storage(e.to_string()))?;
    println!(
        "Snapshot restored with {} observations",
        restored.history().len()
    );

    // Clean up
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(&snapshot_path);

    Ok(())
}
