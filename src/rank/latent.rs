//! Latent-topic sentence ranking.
//!
//! Approximates a truncated decomposition of the term-sentence matrix:
//! the dominant eigenpairs of its Gram matrix are found by power
//! iteration with deflation, and each sentence is scored by its weighted
//! projection onto those topic directions.

use std::collections::HashMap;

use crate::transcript::{Document, Sentence};

use super::{dot, select_top, term_counts, SentenceRanker};

/// Latent-topic ranking engine.
#[derive(Debug, Clone)]
pub struct LatentTopicRanker {
    /// Number of topic directions to extract
    pub topics: usize,
    /// Maximum power iterations per eigenpair
    pub max_iterations: usize,
    /// Convergence tolerance on the eigenvector
    pub tolerance: f64,
}

impl Default for LatentTopicRanker {
    fn default() -> Self {
        Self {
            topics: 3,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl SentenceRanker for LatentTopicRanker {
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

        // Gram matrix of the term-sentence matrix
        let mut gram = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let value = dot(&vectors[i], &vectors[j]);
                gram[i][j] = value;
                gram[j][i] = value;
            }
        }

        let mut scores = vec![0.0; n];
        for _ in 0..self.topics.min(n) {
            let Some((eigenvalue, vector)) = self.dominant_eigenpair(&gram) else {
                break;
            };

            // Deflation can leave tiny negative residuals.
            let weight = eigenvalue.max(0.0);
            for (score, component) in scores.iter_mut().zip(vector.iter()) {
                *score += weight * component * component;
            }

            deflate(&mut gram, eigenvalue, &vector);
        }

        for score in &mut scores {
            *score = score.sqrt();
        }

        select_top(document, &scores, count)
    }
}

impl LatentTopicRanker {
    fn dominant_eigenpair(&self, matrix: &[Vec<f64>]) -> Option<(f64, Vec<f64>)> {
        let n = matrix.len();
        let mut vector = vec![1.0 / (n as f64).sqrt(); n];
        let mut eigenvalue = 0.0;

        for _ in 0..self.max_iterations {
            let product = multiply(matrix, &vector);
            let norm = product.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm <= f64::EPSILON {
                return None;
            }

            let next: Vec<f64> = product.into_iter().map(|x| x / norm).collect();
            let delta: f64 = vector
                .iter()
                .zip(next.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();

            vector = next;
            eigenvalue = norm;

            if delta <= self.tolerance {
                break;
            }
        }

        Some((eigenvalue, vector))
    }
}

fn multiply(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(vector.iter()).map(|(m, v)| m * v).sum())
        .collect()
}

fn deflate(matrix: &mut [Vec<f64>], eigenvalue: f64, vector: &[f64]) {
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value -= eigenvalue * vector[i] * vector[j];
        }
    }
}
