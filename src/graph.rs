//! Minimal graph adapter traits and dense-matrix constructors.

use nalgebra::DMatrix;

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph view that can return **borrowed** neighbor slices.
///
/// This is the cache-friendly adapter: it avoids allocating a new `Vec`
/// on every step of a random walk.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

pub trait WeightedGraph: Graph {
    fn edge_weight(&self, source: usize, target: usize) -> f64;
}

/// Borrowed view over a dense row-major adjacency structure.
///
/// Row `u` lists the weight of each edge `u -> v`; a zero entry means no edge.
/// Useful for feeding literal matrices through the trait-based APIs in tests
/// and small pipelines.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<f64>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.0[node].iter().enumerate().filter(|(_, &w)| w > 0.0).map(|(i, _)| i).collect()
    }
}

impl<'a> WeightedGraph for AdjacencyMatrix<'a> {
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.0[source][target]
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

/// Dense 0/1 adjacency matrix of `graph`, entry `[u, v] = 1.0` per edge `u -> v`.
///
/// Undirected inputs (adapters that enumerate each edge from both endpoints)
/// produce a symmetric matrix.
pub fn adjacency_matrix<G: Graph>(graph: &G) -> DMatrix<f64> {
    let n = graph.node_count();
    let mut adjacency = DMatrix::zeros(n, n);
    for u in 0..n {
        for v in graph.neighbors(u) {
            adjacency[(u, v)] = 1.0;
        }
    }
    adjacency
}

/// Dense weighted adjacency matrix, entry `[u, v] = w(u, v)` per edge `u -> v`.
pub fn adjacency_matrix_weighted<G: WeightedGraph>(graph: &G) -> DMatrix<f64> {
    let n = graph.node_count();
    let mut adjacency = DMatrix::zeros(n, n);
    for u in 0..n {
        for v in graph.neighbors(u) {
            adjacency[(u, v)] = graph.edge_weight(u, v);
        }
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_matrix_from_trait_is_dense_copy() {
        let adj = vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]];
        let g = AdjacencyMatrix(&adj);
        let a = adjacency_matrix(&g);
        assert_eq!(a.nrows(), 3);
        assert_eq!(a[(0, 1)], 1.0);
        assert_eq!(a[(1, 0)], 1.0);
        assert_eq!(a[(1, 2)], 0.0);
    }

    #[test]
    fn weighted_adjacency_preserves_weights() {
        let adj = vec![vec![0.0, 2.5], vec![0.5, 0.0]];
        let g = AdjacencyMatrix(&adj);
        let a = adjacency_matrix_weighted(&g);
        assert_eq!(a[(0, 1)], 2.5);
        assert_eq!(a[(1, 0)], 0.5);
        assert_eq!(a[(0, 0)], 0.0);
    }

    #[test]
    fn out_degree_matches_neighbor_count() {
        let adj = vec![vec![0.0, 1.0, 1.0], vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]];
        let g = AdjacencyMatrix(&adj);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(1), 0);
        assert_eq!(g.out_degree(2), 1);
    }
}
