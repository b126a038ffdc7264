//! Ranking utilities for node score vectors.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` highest-scoring nodes as `(node, score)` pairs, descending.
///
/// Intended for probability-mass scores (stationary distributions, PageRank,
/// centralities): non-finite and non-positive entries are skipped, so nodes a
/// diffusion never reaches do not clutter the ranking.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (node, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        let s = match NotNan::new(score) {
            Ok(s) => s,
            Err(_) => continue,
        };
        if heap.len() < k {
            heap.push(Reverse((s, node)));
        } else if let Some(&Reverse((min_score, _))) = heap.peek() {
            if s > min_score {
                heap.pop();
                heap.push(Reverse((s, node)));
            }
        }
    }
    let mut results: Vec<(usize, f64)> =
        heap.into_iter().map(|Reverse((s, node))| (node, s.into_inner())).collect();
    results.sort_unstable_by(|a, b| b.1.total_cmp(&a.1));
    results
}

/// Normalize `scores` in place to total mass 1. All-zero (or non-positive-sum)
/// input is left untouched.
pub fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for s in scores {
            *s /= sum;
        }
    }
}
