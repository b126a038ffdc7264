//! `spectra`: classical graph representation operators (diffusion + spectral).
//!
//! The crate implements the numerical core of the classical graph-embedding
//! toolbox over dense matrices: column-stochastic transition matrices,
//! stationary distributions (power iteration and damped PageRank), closed-form
//! personalized PageRank, Laplacian spectral embeddings, centrality features,
//! and seeded random-walk corpora for skip-gram style training.
//!
//! Public invariants (must not drift):
//! - **Node order**: outputs are indexed by node id \(0..n-1\) consistent with the
//!   input graph's adapter semantics (e.g. `petgraph::NodeIndex::index()` when using
//!   the `petgraph` feature) and with matrix row/column order.
//! - **Column convention**: transition matrices are column-stochastic; column `j` is
//!   the next-step distribution of a walker currently at node `j`.
//! - **Determinism**: deterministic operators are deterministic given identical
//!   inputs + configs; walk generation is seeded.
//! - **No silent normalization**: normalization behavior is explicit in the API/docs
//!   (e.g. start vectors in [`stationary_from`]).
//!
//! Swappable (allowed to change without breaking the contract):
//! - convergence details (so long as tolerance semantics remain correct)
//! - internal data structures (so long as invariants hold)

pub mod centrality;
pub mod eigenmaps;
pub mod graph;
pub mod laplacian;
pub mod pagerank;
pub mod ppr;
pub mod random_walk;
pub mod stationary;
pub mod topk;
pub mod transition;

pub use centrality::{degree_centrality, eigenvector_centrality, EigenvectorConfig};
pub use eigenmaps::{spectral_embedding, SpectralEmbedding};
pub use graph::{
    adjacency_matrix, adjacency_matrix_weighted, AdjacencyMatrix, Graph, GraphRef, WeightedGraph,
};
pub use laplacian::{degree_matrix, laplacian};
pub use pagerank::{pagerank, pagerank_run, PageRankConfig, PageRankRun};
pub use ppr::{personalized_pagerank, personalized_pagerank_matrix};
pub use random_walk::{
    generate_walks, generate_walks_ref, generate_walks_ref_from_nodes, WalkConfig,
};
pub use stationary::{
    stationary_distribution, stationary_from, stationary_matrix, PowerIterationConfig,
    StationaryRun,
};
pub use topk::{normalize, top_k};
pub use transition::{degrees, transition_matrix};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node with zero (out-)degree makes `D⁻¹` undefined.
    #[error("degenerate graph: node {0} has zero degree")]
    DegenerateGraph(usize),
    /// Damping factor outside the range the operator supports.
    #[error("invalid damping factor: {0}")]
    InvalidDampingFactor(f64),
    /// Iteration budget exhausted before the residual dropped below tolerance.
    #[error("no convergence after {iterations} iterations (residual {residual:.3e})")]
    NonConvergence { iterations: usize, residual: f64 },
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
