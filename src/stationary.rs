//! Stationary distributions by power iteration.
//!
//! A column-stochastic transition matrix `P` fixes its stationary distribution
//! `π = P·π`. Repeated application of `P` reaches it from any start when the
//! chain is irreducible and aperiodic; periodic chains (e.g. bipartite graphs
//! walked from a one-hot start) oscillate forever and surface as
//! [`Error::NonConvergence`].

use crate::{Error, Result};
use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerIterationConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self { max_iterations: 100, tolerance: 1e-6 }
    }
}

impl PowerIterationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter("max_iterations must be > 0".to_string()));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter("tolerance must be finite and > 0".to_string()));
        }
        Ok(())
    }
}

/// Converged state of a power iteration.
///
/// `residual_l1` is the final \(L_1\) residual (sum of absolute deltas between
/// the last two iterates); it is below the configured tolerance whenever a run
/// is returned.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationaryRun {
    pub distribution: DVector<f64>,
    pub iterations: usize,
    pub residual_l1: f64,
}

/// Stationary distribution of `transition`, iterated from the uniform vector.
///
/// Converges when the \(L_1\) residual between successive iterates drops below
/// `config.tolerance`; exhausting `config.max_iterations` first is
/// [`Error::NonConvergence`].
pub fn stationary_distribution(
    transition: &DMatrix<f64>,
    config: PowerIterationConfig,
) -> Result<StationaryRun> {
    config.validate()?;
    check_square(transition)?;
    let n = transition.nrows();
    if n == 0 {
        return Ok(empty_run());
    }
    power_iterate(transition, DVector::from_element(n, 1.0 / n as f64), config)
}

/// Stationary distribution iterated from an explicit start vector.
///
/// `start` must have non-negative finite entries with a positive sum; it is
/// normalized to total mass 1 before iterating (so a one-hot indicator vector
/// `i_x` can be passed as-is).
pub fn stationary_from(
    transition: &DMatrix<f64>,
    start: &DVector<f64>,
    config: PowerIterationConfig,
) -> Result<StationaryRun> {
    config.validate()?;
    check_square(transition)?;
    let n = transition.nrows();
    if start.len() != n {
        return Err(Error::DimensionMismatch(format!(
            "start length must equal node count (len={} n={n})",
            start.len()
        )));
    }
    if n == 0 {
        return Ok(empty_run());
    }
    for &x in start.iter() {
        if !x.is_finite() || x < 0.0 {
            return Err(Error::InvalidParameter(
                "start entries must be finite and non-negative".to_string(),
            ));
        }
    }
    let mass: f64 = start.sum();
    if mass <= 0.0 {
        return Err(Error::InvalidParameter("start sum must be > 0".to_string()));
    }
    power_iterate(transition, start.scale(1.0 / mass), config)
}

fn power_iterate(
    transition: &DMatrix<f64>,
    mut current: DVector<f64>,
    config: PowerIterationConfig,
) -> Result<StationaryRun> {
    let mut next = DVector::zeros(current.len());
    let mut iterations = 0usize;
    let mut residual = f64::INFINITY;
    for _ in 0..config.max_iterations {
        iterations += 1;
        transition.mul_to(&current, &mut next);
        residual = current.iter().zip(next.iter()).map(|(old, new)| (old - new).abs()).sum();
        std::mem::swap(&mut current, &mut next);
        trace!("power iteration {iterations}: residual_l1={residual:.3e}");
        if residual < config.tolerance {
            debug!("power iteration converged after {iterations} iterations ({residual:.3e})");
            return Ok(StationaryRun { distribution: current, iterations, residual_l1: residual });
        }
    }
    Err(Error::NonConvergence { iterations, residual })
}

fn empty_run() -> StationaryRun {
    StationaryRun { distribution: DVector::zeros(0), iterations: 0, residual_l1: 0.0 }
}

/// Stabilized matrix power: iterate `M ← P·M` until the max-abs entrywise
/// residual drops below `config.tolerance`, returning the limit `P_s`.
///
/// For an irreducible aperiodic chain every column of `P_s` equals the
/// stationary distribution; inspecting the columns is the matrix-power view of
/// [`stationary_distribution`].
pub fn stationary_matrix(
    transition: &DMatrix<f64>,
    config: PowerIterationConfig,
) -> Result<DMatrix<f64>> {
    config.validate()?;
    check_square(transition)?;
    let n = transition.nrows();
    let mut current = transition.clone();
    let mut next = DMatrix::zeros(n, n);
    let mut residual = f64::INFINITY;
    for iteration in 1..=config.max_iterations {
        transition.mul_to(&current, &mut next);
        residual = current
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut current, &mut next);
        trace!("matrix power {iteration}: residual_max={residual:.3e}");
        if residual < config.tolerance {
            debug!("matrix power stabilized after {iteration} iterations ({residual:.3e})");
            return Ok(current);
        }
    }
    Err(Error::NonConvergence { iterations: config.max_iterations, residual })
}

fn check_square(transition: &DMatrix<f64>) -> Result<()> {
    if !transition.is_square() {
        return Err(Error::DimensionMismatch(format!(
            "transition matrix must be square (got {}x{})",
            transition.nrows(),
            transition.ncols()
        )));
    }
    Ok(())
}
