//! Laplacian spectral embeddings (Laplacian Eigenmaps).
//!
//! The embedding of a graph is read off the low end of its Laplacian
//! spectrum: eigenvectors of small eigenvalue vary slowly across edges, so
//! their coordinates place tightly connected nodes near each other. The
//! constant eigenvector (eigenvalue 0) carries no discriminative information
//! and is always dropped.

use crate::{Error, Result};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Maximum absolute asymmetry tolerated in an input Laplacian.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A `k`-dimensional spectral embedding.
///
/// `coordinates` is n×k, one row per node; column `j` is the eigenvector of
/// `eigenvalues[j]`, the eigenvalues sorted ascending. Eigenvector sign is
/// arbitrary: two runs over equal inputs agree, but any comparison across
/// differently computed spectra must tolerate a global sign flip per column.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectralEmbedding {
    pub coordinates: DMatrix<f64>,
    pub eigenvalues: DVector<f64>,
}

/// Embed a graph into `k` dimensions from its unnormalized Laplacian.
///
/// Computes the full symmetric eigendecomposition, sorts eigenpairs ascending
/// by eigenvalue, discards the first (the zero-eigenvalue constant vector) and
/// takes the next `k` eigenvectors as coordinates. A real symmetric input
/// keeps the whole computation in `f64`; no complex arithmetic is involved.
///
/// `k` must satisfy `1 <= k <= n - 1`. The input must be square and symmetric
/// within a small absolute tolerance. A disconnected graph has further
/// eigenvalues near 0 (one per extra component); those eigenvectors are kept,
/// since only the first ascending eigenvector is dropped.
pub fn spectral_embedding(laplacian: &DMatrix<f64>, k: usize) -> Result<SpectralEmbedding> {
    if !laplacian.is_square() {
        return Err(Error::DimensionMismatch(format!(
            "laplacian must be square (got {}x{})",
            laplacian.nrows(),
            laplacian.ncols()
        )));
    }
    let n = laplacian.nrows();
    if k == 0 || k >= n {
        return Err(Error::InvalidParameter(format!(
            "embedding dimension must satisfy 1 <= k <= n - 1 (k={k}, n={n})"
        )));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if (laplacian[(i, j)] - laplacian[(j, i)]).abs() > SYMMETRY_TOLERANCE {
                return Err(Error::InvalidParameter(format!(
                    "laplacian must be symmetric (entry ({i},{j}) differs from ({j},{i}))"
                )));
            }
        }
    }

    let eigen = laplacian.clone().symmetric_eigen();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

    let mut coordinates = DMatrix::zeros(n, k);
    let mut eigenvalues = DVector::zeros(k);
    for (out, &idx) in order[1..=k].iter().enumerate() {
        coordinates.set_column(out, &eigen.eigenvectors.column(idx));
        eigenvalues[out] = eigen.eigenvalues[idx];
    }
    debug!(
        "spectral embedding: n={n} k={k} lambda_min_kept={:.3e} lambda_max_kept={:.3e}",
        eigenvalues[0],
        eigenvalues[k - 1]
    );
    Ok(SpectralEmbedding { coordinates, eigenvalues })
}
