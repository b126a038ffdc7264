//! Benchmarks for the dense diffusion and spectral operators.
//!
//! Sizes stay in the hundreds: eigendecomposition and the closed-form solve
//! are O(n³) over dense matrices, so these operators are meant for
//! small-to-moderate graphs in the first place.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::SeedableRng;
use spectra::{
    adjacency_matrix, generate_walks_ref, laplacian, pagerank, personalized_pagerank,
    spectral_embedding, transition_matrix, Graph, GraphRef, PageRankConfig, WalkConfig,
};
use std::hint::black_box;

#[derive(Debug, Clone)]
struct AdjListGraph {
    adj: Vec<Vec<usize>>,
}

impl AdjListGraph {
    fn ring(n: usize) -> Self {
        let mut adj = vec![Vec::new(); n];
        for i in 0..n {
            adj[i].push((i + 1) % n);
            adj[i].push((i + n - 1) % n);
            adj[i].sort_unstable();
        }
        Self { adj }
    }

    /// Preferential attachment graph (Barabási–Albert) with `m` edges per new node.
    ///
    /// This yields a heavy-tailed degree distribution that's closer to many real graphs
    /// than a ring/grid.
    fn barabasi_albert(n: usize, m: usize, seed: u64) -> Self {
        assert!(n >= m.max(2));
        assert!(m >= 1);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];

        // Start with a clique of size m+1.
        let init = m + 1;
        let mut targets: Vec<usize> = Vec::new(); // node ids repeated by degree
        for i in 0..init {
            for j in (i + 1)..init {
                adj[i].push(j);
                adj[j].push(i);
            }
        }
        for i in 0..init {
            for _ in 0..adj[i].len() {
                targets.push(i);
            }
        }

        // Add nodes, attaching to existing nodes proportional to degree.
        for v in init..n {
            let mut chosen: Vec<usize> = Vec::with_capacity(m);
            while chosen.len() < m {
                let u = targets[rng.random_range(0..targets.len())];
                if u != v && !chosen.contains(&u) {
                    chosen.push(u);
                }
            }
            for &u in &chosen {
                adj[v].push(u);
                adj[u].push(v);
            }
            for &u in &chosen {
                targets.push(u);
                targets.push(v);
            }
        }

        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }

    /// Simple stochastic block model: `blocks` equal-sized communities.
    fn sbm(n: usize, blocks: usize, p_in: f64, p_out: f64, seed: u64) -> Self {
        assert!(blocks >= 2);
        assert!(n >= blocks);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        let bsz = (n + blocks - 1) / blocks;

        for i in 0..n {
            let bi = (i / bsz).min(blocks - 1);
            for j in (i + 1)..n {
                let bj = (j / bsz).min(blocks - 1);
                let p = if bi == bj { p_in } else { p_out };
                if rng.random::<f64>() < p {
                    adj[i].push(j);
                    adj[j].push(i);
                }
            }
        }

        // The dense operators reject zero-degree nodes, so patch up isolated ones.
        for i in 0..n {
            if adj[i].is_empty() {
                let j = if i + 1 < n { i + 1 } else { 0 };
                adj[i].push(j);
                adj[j].push(i);
            }
        }

        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }
}

impl Graph for AdjListGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
}

impl GraphRef for AdjListGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn bench_diffusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("diffusion");

    for n in [128usize, 384] {
        let graphs = [
            ("ring", AdjListGraph::ring(n)),
            ("ba_m4", AdjListGraph::barabasi_albert(n, 4, 123)),
            ("sbm4", AdjListGraph::sbm(n, 4, 0.08, 0.01, 123)),
        ];

        for (name, g) in graphs {
            let a = adjacency_matrix(&g);
            let p = transition_matrix(&a).expect("generators keep all degrees positive");
            let cfg = PageRankConfig { damping: 0.85, max_iterations: 100, tolerance: 1e-8 };

            group.bench_with_input(BenchmarkId::new(format!("{name}/transition"), n), &n, |b, _| {
                b.iter(|| {
                    let p = transition_matrix(black_box(&a)).unwrap();
                    black_box(p);
                })
            });

            group.bench_with_input(BenchmarkId::new(format!("{name}/pagerank"), n), &n, |b, _| {
                b.iter(|| {
                    let scores = pagerank(black_box(&p), black_box(cfg)).unwrap();
                    black_box(scores);
                })
            });

            group.bench_with_input(
                BenchmarkId::new(format!("{name}/ppr_closed_form"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        let pi = personalized_pagerank(black_box(&p), 0, 0.85).unwrap();
                        black_box(pi);
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral");
    group.sample_size(20);

    for n in [64usize, 192] {
        let graphs = [
            ("ring", AdjListGraph::ring(n)),
            ("sbm4", AdjListGraph::sbm(n, 4, 0.12, 0.02, 123)),
        ];

        for (name, g) in graphs {
            let l = laplacian(&adjacency_matrix(&g));

            group.bench_with_input(
                BenchmarkId::new(format!("{name}/embedding_k8"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        let emb = spectral_embedding(black_box(&l), 8).unwrap();
                        black_box(emb);
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_generation");

    for n in [1_000usize, 10_000] {
        let graphs = [
            ("ring", AdjListGraph::ring(n)),
            ("ba_m4", AdjListGraph::barabasi_albert(n, 4, 123)),
        ];

        let cfg = WalkConfig { length: 40, walks_per_node: 2, seed: 123 };

        for (name, g) in graphs {
            group.bench_with_input(
                BenchmarkId::new(format!("{name}/uniform_ref"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        let walks = generate_walks_ref(black_box(&g), black_box(cfg));
                        black_box(walks);
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_diffusion, bench_spectral, bench_walks);
criterion_main!(benches);
