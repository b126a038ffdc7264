//! Damped PageRank over a column-stochastic transition matrix.

use crate::{Error, Result};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// PageRank with convergence reporting.
///
/// `iterations` is the number of update steps performed.
/// `diff_l1` is the final \(L_1\) residual (sum of absolute deltas).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankRun {
    pub scores: DVector<f64>,
    pub iterations: usize,
    pub diff_l1: f64,
    pub converged: bool,
}

/// `damping` is the probability of following an edge; the remaining
/// `1 - damping` mass teleports uniformly. `damping = 1.0` is the undamped
/// edge case: the fixed point is the plain stationary distribution (degree /
/// twice the edge count on a connected undirected graph).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping: 0.85, max_iterations: 100, tolerance: 1e-6 }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidDampingFactor(self.damping));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter("max_iterations must be > 0".to_string()));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter("tolerance must be finite and > 0".to_string()));
        }
        Ok(())
    }
}

/// Damped PageRank scores of `transition`.
///
/// Iterates `π ← damping·P·π + (1 − damping)/n·1` from the uniform vector
/// until the \(L_1\) residual drops below `config.tolerance`. Exhausting the
/// iteration budget first is [`Error::NonConvergence`]; with `damping < 1.0`
/// the update is a contraction, so only the undamped case can fail this way
/// (periodic chains).
pub fn pagerank(transition: &DMatrix<f64>, config: PageRankConfig) -> Result<DVector<f64>> {
    let run = pagerank_run(transition, config)?;
    if !run.converged {
        return Err(Error::NonConvergence { iterations: run.iterations, residual: run.diff_l1 });
    }
    Ok(run.scores)
}

/// Damped PageRank with convergence reporting instead of a convergence error.
pub fn pagerank_run(transition: &DMatrix<f64>, config: PageRankConfig) -> Result<PageRankRun> {
    config.validate()?;
    if !transition.is_square() {
        return Err(Error::DimensionMismatch(format!(
            "transition matrix must be square (got {}x{})",
            transition.nrows(),
            transition.ncols()
        )));
    }
    let n = transition.nrows();
    if n == 0 {
        return Ok(PageRankRun {
            scores: DVector::zeros(0),
            iterations: 0,
            diff_l1: 0.0,
            converged: true,
        });
    }

    let n_f64 = n as f64;
    let teleport = (1.0 - config.damping) / n_f64;
    let mut scores = DVector::from_element(n, 1.0 / n_f64);
    let mut new_scores = DVector::zeros(n);

    let mut iterations = 0usize;
    let mut last_diff = f64::INFINITY;
    let mut converged = false;
    for _ in 0..config.max_iterations {
        iterations += 1;
        transition.mul_to(&scores, &mut new_scores);
        new_scores *= config.damping;
        new_scores.add_scalar_mut(teleport);

        let diff: f64 =
            scores.iter().zip(new_scores.iter()).map(|(old, new)| (old - new).abs()).sum();
        last_diff = diff;
        std::mem::swap(&mut scores, &mut new_scores);
        if diff < config.tolerance {
            converged = true;
            break;
        }
    }
    debug!(
        "pagerank: n={n} damping={} iters={iterations} diff_l1={last_diff:.3e} ok={converged}",
        config.damping
    );
    Ok(PageRankRun { scores, iterations, diff_l1: last_diff, converged })
}
