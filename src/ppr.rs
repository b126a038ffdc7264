//! Personalized PageRank in closed form.
//!
//! With restart probability `r = 1 − damping` toward a single node `x`, the
//! personalized stationary vector solves the linear system
//! `(I − damping·P̄)·π = r·i_x` over the column-stochastic transition matrix
//! `P̄`. For `damping ∈ [0, 1)` the system matrix is strictly diagonally
//! dominant, so the solution exists and is unique; no iteration or tolerance
//! is involved.

use crate::{Error, Result};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Closed-form personalized PageRank from a single restart node.
///
/// Solves `π = (1 − damping)·(I − damping·P̄)⁻¹·i_x` by LU factorization.
/// The result is a probability vector whose mass concentrates around
/// `restart_node`; distinct restart nodes give distinct vectors, which is what
/// separates personalized from global PageRank.
///
/// `damping = 1.0` leaves no restart mass and makes the system singular; it is
/// rejected as [`Error::InvalidDampingFactor`]. `damping = 0.0` returns
/// `i_x` itself.
pub fn personalized_pagerank(
    transition: &DMatrix<f64>,
    restart_node: usize,
    damping: f64,
) -> Result<DVector<f64>> {
    check_damping(damping)?;
    check_square(transition)?;
    let n = transition.nrows();
    if restart_node >= n {
        return Err(Error::IndexOutOfBounds(restart_node));
    }

    let restart = 1.0 - damping;
    let mut rhs = DVector::zeros(n);
    rhs[restart_node] = restart;
    let solution = system_matrix(transition, damping)
        .lu()
        .solve(&rhs)
        .ok_or_else(|| Error::InvalidParameter("personalization system is singular".to_string()))?;
    debug!("personalized pagerank solved: n={n} restart_node={restart_node} damping={damping}");
    Ok(solution)
}

/// Closed-form personalized PageRank for every restart node at once.
///
/// Column `x` of the result equals [`personalized_pagerank`] from `x`:
/// the full matrix is `(1 − damping)·(I − damping·P̄)⁻¹`, the restart
/// indicator vectors being the identity columns.
pub fn personalized_pagerank_matrix(
    transition: &DMatrix<f64>,
    damping: f64,
) -> Result<DMatrix<f64>> {
    check_damping(damping)?;
    check_square(transition)?;
    let n = transition.nrows();

    let restart = 1.0 - damping;
    let inverse = system_matrix(transition, damping)
        .lu()
        .try_inverse()
        .ok_or_else(|| Error::InvalidParameter("personalization system is singular".to_string()))?;
    debug!("personalized pagerank matrix solved: n={n} damping={damping}");
    Ok(inverse.scale(restart))
}

fn system_matrix(transition: &DMatrix<f64>, damping: f64) -> DMatrix<f64> {
    let n = transition.nrows();
    let mut system = transition.scale(-damping);
    for i in 0..n {
        system[(i, i)] += 1.0;
    }
    system
}

fn check_damping(damping: f64) -> Result<()> {
    if !damping.is_finite() || !(0.0..1.0).contains(&damping) {
        return Err(Error::InvalidDampingFactor(damping));
    }
    Ok(())
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
