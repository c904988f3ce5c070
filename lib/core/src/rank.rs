//! Centroid computation and distance-to-centroid ranking.
//!
//! The ranking is a deliberate two-pass shape: pairwise distances are
//! computed once on the unordered matrix purely to derive the sort
//! permutation, the ideas and feature rows are reordered, and the final
//! matrices are recomputed afterwards so that row 0 is always the most
//! central idea and the centroid row is always last.

use crate::error::{Error, Result};
use crate::matrix::{pairwise_cosine_distance, Matrix};

/// Result of centroid ranking: feature matrix with the centroid appended
/// as the last row, items reordered by ascending distance to centroid.
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    /// (N+1) x D feature matrix in ranked order, centroid last
    pub matrix: Matrix,
    /// Items reordered so index 0 is the most central
    pub items: Vec<T>,
    /// The pre-reorder component-wise mean of all feature rows
    pub centroid: Vec<f32>,
}

/// Ranks a batch of items by cosine distance to the batch centroid
#[derive(Debug, Clone, Default)]
pub struct CentroidRanker;

impl CentroidRanker {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rank `items` by ascending distance to the centroid of `features`.
    ///
    /// `features` holds one row per item. Ties keep the original relative
    /// order (stable sort). Fails with [`Error::InsufficientIdeas`] for
    /// fewer than two items and [`Error::EmptyVocabulary`] for zero-width
    /// features, both before any matrix work.
    pub fn rank<T>(&self, features: &Matrix, items: Vec<T>) -> Result<Ranked<T>> {
        let n = items.len();
        if n < 2 {
            return Err(Error::InsufficientIdeas {
                needed: 2,
                actual: n,
            });
        }
        if features.rows() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                actual: features.rows(),
            });
        }
        if features.cols() == 0 {
            return Err(Error::EmptyVocabulary);
        }

        let centroid = features.mean_row();
        let mut m0 = features.clone();
        m0.push_row(&centroid);

        // Transient distances, used only to derive the permutation. The
        // last column restricted to the first N entries is each idea's
        // unordered distance to the centroid.
        let transient = pairwise_cosine_distance(&m0);
        let mut indexed: Vec<(usize, T)> = items.into_iter().enumerate().collect();
        indexed.sort_by(|(a, _), (b, _)| transient.get(*a, n).total_cmp(&transient.get(*b, n)));

        let order: Vec<usize> = indexed.iter().map(|(i, _)| *i).collect();
        let matrix = m0.permute_rows(&order);
        let items: Vec<T> = indexed.into_iter().map(|(_, item)| item).collect();

        Ok(Ranked {
            matrix,
            items,
            centroid,
        })
    }
}
