//! Unnormalized graph Laplacian.

use crate::transition::degrees;
use log::debug;
use nalgebra::DMatrix;

/// Diagonal degree matrix `D = diag(row sums of A)`. `adjacency` must be square.
pub fn degree_matrix(adjacency: &DMatrix<f64>) -> DMatrix<f64> {
    DMatrix::from_diagonal(&degrees(adjacency))
}

/// Unnormalized Laplacian `L = D − A`.
///
/// For any square input, `L·1 = 0` (row sums cancel); for symmetric `A` with
/// non-negative entries, `L` is symmetric positive-semidefinite, which is what
/// [`crate::eigenmaps::spectral_embedding`] expects.
pub fn laplacian(adjacency: &DMatrix<f64>) -> DMatrix<f64> {
    let l = degree_matrix(adjacency) - adjacency;
    debug!("laplacian built: n={}", l.nrows());
    l
}
