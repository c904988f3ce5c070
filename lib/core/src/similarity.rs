//! Final pairwise similarity/distance matrices and centroid vectors,
//! computed over the ranked feature matrix (centroid row last).

use crate::matrix::{
    cosine_similarity, pairwise_cosine_distance, pairwise_cosine_similarity, Matrix,
};

/// All similarity outputs of one analysis run.
///
/// Matrices are (N+1) x (N+1) over the ranked ideas plus the centroid as
/// the final row/column; the vectors have N+1 entries in the same order.
#[derive(Debug, Clone)]
pub struct Similarities {
    /// Pairwise cosine distance, symmetric, zero diagonal
    pub distance: Matrix,
    /// Pairwise cosine similarity, symmetric, unit diagonal
    pub similarity: Matrix,
    /// Per-row cosine similarity to the centroid row
    pub centroid_similarity: Vec<f32>,
    /// 1 - centroid similarity
    pub centroid_distance: Vec<f32>,
}

/// Computes the final similarity structure from a ranked matrix
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine;

impl SimilarityEngine {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute pairwise matrices and centroid vectors.
    ///
    /// `ranked` must include the centroid as its last row. Zero rows use
    /// the similarity-0 convention, so no NaN can appear in any output.
    /// The centroid vectors are computed against the centroid row directly
    /// rather than read out of the pairwise matrix, which keeps them
    /// well-defined even when the centroid itself is a zero vector.
    #[must_use]
    pub fn compute(&self, ranked: &Matrix) -> Similarities {
        let distance = pairwise_cosine_distance(ranked);
        let similarity = pairwise_cosine_similarity(ranked);

        let centroid = ranked.row(ranked.rows() - 1);
        let centroid_similarity: Vec<f32> = (0..ranked.rows())
            .map(|i| cosine_similarity(ranked.row(i), centroid))
            .collect();
        let centroid_distance: Vec<f32> =
            centroid_similarity.iter().map(|s| 1.0 - s).collect();

        Similarities {
            distance,
            similarity,
            centroid_similarity,
            centroid_distance,
        }
    }
}
