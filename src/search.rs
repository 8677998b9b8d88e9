//! Approximate maximization of the acquisition function over the box.
//!
//! EI has no closed-form maximizer, so candidates are drawn uniformly at
//! random and the best one is kept (first-encountered wins ties, so the
//! result is deterministic for a seeded RNG). An optional compass search
//! then polishes the winner.

use crate::acquisition::ExpectedImprovement;
use crate::error::Result;
use crate::gp::GaussianProcess;
use crate::space::SearchSpace;

/// Initial compass step, as a fraction of each dimension's width.
const INITIAL_STEP_FRACTION: f64 = 0.05;

/// The winning point and its acquisition value.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) x: Vec<f64>,
    pub(crate) ei: f64,
}

/// Settings for one acquisition maximization.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchSettings {
    pub(crate) n_samples: usize,
    pub(crate) refine_steps: usize,
}

/// Find the point in the search space that maximizes EI via random search.
pub(crate) fn maximize_acquisition(
    model: &GaussianProcess,
    acquisition: &ExpectedImprovement,
    best: f64,
    space: &SearchSpace,
    settings: SearchSettings,
    rng: &mut fastrand::Rng,
) -> Result<Candidate> {
    let score = |x: &[f64]| -> Result<f64> { Ok(acquisition.score(&model.predict(x)?, best)) };

    let mut best_ei = f64::NEG_INFINITY;
    let mut best_x = space.center();

    for _ in 0..settings.n_samples.max(1) {
        let x = space.sample_uniform(rng);
        let ei = score(&x)?;
        if ei > best_ei {
            best_ei = ei;
            best_x = x;
        }
    }

    let mut candidate = Candidate {
        x: best_x,
        ei: best_ei,
    };
    if settings.refine_steps > 0 {
        candidate = compass_search(candidate, space, settings.refine_steps, score)?;
    }
    Ok(candidate)
}

/// Polls `±step` along every axis, moves to the best strict improvement,
/// and halves the step when no move improves.
fn compass_search<F>(
    start: Candidate,
    space: &SearchSpace,
    max_steps: usize,
    score: F,
) -> Result<Candidate>
where
    F: Fn(&[f64]) -> Result<f64>,
{
    let mut steps: Vec<f64> = space
        .widths()
        .iter()
        .map(|w| w * INITIAL_STEP_FRACTION)
        .collect();
    let mut current = start;

    for _ in 0..max_steps {
        let mut improved: Option<Candidate> = None;
        for dim in 0..space.dims() {
            for sign in [1.0, -1.0] {
                let mut x = current.x.clone();
                x[dim] += sign * steps[dim];
                space.clamp(&mut x);
                let ei = score(&x)?;
                let threshold = improved.as_ref().map_or(current.ei, |c| c.ei);
                if ei > threshold {
                    improved = Some(Candidate { x, ei });
                }
            }
        }
        match improved {
            Some(next) => current = next,
            None => {
                for s in &mut steps {
                    *s *= 0.5;
                }
            }
        }
    }

    Ok(current)
}
