//! Similarity-graph sentence ranking.
//!
//! Builds a cosine-similarity graph over stemmed term vectors and scores
//! sentences by the stationary distribution of a damped random walk over
//! that graph.

use std::collections::HashMap;

use crate::transcript::{Document, Sentence};

use super::{dot, select_top, term_counts, SentenceRanker};

/// Graph-centrality ranking engine.
#[derive(Debug, Clone)]
pub struct CentralityRanker {
    /// Damping factor for the random walk (typically 0.85)
    pub damping: f64,
    /// Minimum cosine similarity for an edge
    pub similarity_threshold: f64,
    /// Maximum number of power iterations
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub convergence_threshold: f64,
}

impl Default for CentralityRanker {
    fn default() -> Self {
        Self {
            damping: 0.85,
            similarity_threshold: 0.1,
            max_iterations: 100,
            convergence_threshold: 1e-6,
        }
    }
}

impl SentenceRanker for CentralityRanker {
    fn rank(&self, document: &Document, count: usize) -> Vec<Sentence> {
        let n = document.sentences.len();
        if n == 0 || count == 0 {
            return Vec::new();
        }

        let vectors: Vec<HashMap<&str, f64>> = document
            .sentences
            .iter()
            .map(|s| term_counts(&s.stems))
            .collect();

        let mut weights = vec![vec![0.0; n]; n];
        let mut totals = vec![0.0; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let similarity = cosine(&vectors[i], &vectors[j]);
                if similarity >= self.similarity_threshold {
                    weights[i][j] = similarity;
                    weights[j][i] = similarity;
                    totals[i] += similarity;
                    totals[j] += similarity;
                }
            }
        }

        let scores = self.stationary_scores(&weights, &totals);
        select_top(document, &scores, count)
    }
}

impl CentralityRanker {
    /// Damped power iteration with dangling-node handling.
    fn stationary_scores(&self, weights: &[Vec<f64>], totals: &[f64]) -> Vec<f64> {
        let n = totals.len();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let teleport = (1.0 - self.damping) / n as f64;

        for _ in 0..self.max_iterations {
            // Sentences without edges spread their mass evenly.
            let dangling_mass: f64 = scores
                .iter()
                .zip(totals.iter())
                .filter(|(_, &total)| total == 0.0)
                .map(|(score, _)| score)
                .sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            next.fill(teleport + dangling_contribution);

            for (node, &score) in scores.iter().enumerate() {
                if totals[node] > 0.0 {
                    for (neighbor, &weight) in weights[node].iter().enumerate() {
                        if weight > 0.0 {
                            next[neighbor] += self.damping * score * weight / totals[node];
                        }
                    }
                }
            }

            let delta: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);

            if delta <= self.convergence_threshold {
                break;
            }
        }

        scores
    }
}

fn cosine(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let product = dot(a, b);
    if product == 0.0 {
        return 0.0;
    }

    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    product / (norm_a * norm_b)
}
