//! Degree and eigenvector centrality features.

use crate::graph::Graph;
use nalgebra::{DMatrix, DVector};

/// Degree centrality: `deg(v) / (n - 1)`, the fraction of other nodes each
/// node touches. Graphs with fewer than two nodes get all zeros.
pub fn degree_centrality<G: Graph>(graph: &G) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n).map(|v| graph.out_degree(v) as f64 * scale).collect()
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenvectorConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self { max_iterations: 100, tolerance: 1e-6 }
    }
}

/// Eigenvector centrality by power iteration on the adjacency matrix.
///
/// Iterates `x ← (A + I)·x` with \(L_2\) renormalization from a uniform
/// positive start, stopping at `config.tolerance` (\(L_1\) delta) or when the
/// budget runs out, whichever comes first. The identity shift leaves the
/// principal eigenvector unchanged while breaking the period-2 oscillation
/// bipartite graphs otherwise exhibit. Budget exhaustion returns the last
/// iterate rather than an error. A graph with no edges comes back as all
/// zeros.
pub fn eigenvector_centrality(adjacency: &DMatrix<f64>, config: EigenvectorConfig) -> DVector<f64> {
    let n = adjacency.nrows();
    if n == 0 || adjacency.iter().all(|&w| w == 0.0) {
        return DVector::zeros(n);
    }
    let mut current = DVector::from_element(n, 1.0 / n as f64);
    let mut next = DVector::zeros(n);
    for _ in 0..config.max_iterations {
        adjacency.mul_to(&current, &mut next);
        next += &current;
        let norm = next.norm();
        if norm > 0.0 {
            next /= norm;
        }
        let diff: f64 =
            current.iter().zip(next.iter()).map(|(old, new)| (old - new).abs()).sum();
        std::mem::swap(&mut current, &mut next);
        if diff < config.tolerance {
            break;
        }
    }
    current
}
