//! Column-stochastic transition-matrix construction.

use crate::{Error, Result};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Per-node degree vector: row sums of `adjacency`.
///
/// For a weighted graph this is the outgoing weight sum of each node.
pub fn degrees(adjacency: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_iterator(adjacency.nrows(), adjacency.row_iter().map(|row| row.sum()))
}

/// Build the one-step random-walk transition matrix `P = A·D⁻¹`.
///
/// Column `j` of the result is the probability distribution over the next node
/// given a walker at node `j`: `P[(i, j)] = A[(j, i)] / deg(j)`. For symmetric
/// `A` this is exactly `A·D⁻¹`; for directed inputs, row `j` of `A` (the
/// out-edges of `j`) becomes column `j` of `P`.
///
/// Every column of the result sums to 1. That requires every node to have a
/// positive degree; a zero-degree node is rejected as
/// [`Error::DegenerateGraph`] rather than patched with a self-loop or a
/// uniform row.
pub fn transition_matrix(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if !adjacency.is_square() {
        return Err(Error::DimensionMismatch(format!(
            "adjacency must be square (got {}x{})",
            adjacency.nrows(),
            adjacency.ncols()
        )));
    }
    for &w in adjacency.iter() {
        if !w.is_finite() || w < 0.0 {
            return Err(Error::InvalidParameter(
                "adjacency entries must be finite and non-negative".to_string(),
            ));
        }
    }

    let n = adjacency.nrows();
    let deg = degrees(adjacency);
    for (node, &d) in deg.iter().enumerate() {
        if d <= 0.0 {
            return Err(Error::DegenerateGraph(node));
        }
    }

    let mut transition = DMatrix::zeros(n, n);
    for j in 0..n {
        let inv_degree = 1.0 / deg[j];
        for i in 0..n {
            transition[(i, j)] = adjacency[(j, i)] * inv_degree;
        }
    }
    debug!("transition matrix built: n={n}");
    Ok(transition)
}
