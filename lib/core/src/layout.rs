//! 2D layout projection via metric multidimensional scaling (SMACOF),
//! plus marker sizing for downstream rendering.
//!
//! The projection is an iterative stress-minimizing optimization over a
//! precomputed distance matrix. It is seed-sensitive: the default
//! configuration pins the seed for reproducible coordinates and callers
//! may override or randomize it.

use crate::matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 1;

/// Fixed marker size for the centroid point
pub const CENTROID_MARKER_SIZE: f32 = 100.0;

/// Metric MDS projector using the SMACOF algorithm
#[derive(Debug, Clone)]
pub struct MdsProjector {
    max_iter: usize,
    eps: f32,
    seed: Option<u64>,
}

impl Default for MdsProjector {
    fn default() -> Self {
        Self {
            max_iter: 300,
            eps: 1e-6,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl MdsProjector {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the seed for deterministic coordinates
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw a fresh random seed per projection (coordinates vary run to run)
    #[must_use]
    pub fn with_random_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Project a precomputed distance matrix into 2D coordinates.
    ///
    /// Runs SMACOF: random initialization followed by Guttman transform
    /// iterations until the stress improvement drops below `eps` or
    /// `max_iter` is reached. Row order is preserved, so with the ranked
    /// input matrix the centroid coordinates are the last row.
    #[must_use]
    pub fn project(&self, dissimilarity: &Matrix) -> Matrix {
        let n = dissimilarity.rows();
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        debug!(seed, n, "projecting distance matrix with metric MDS");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut coords = Matrix::zeros(n, 2);
        for i in 0..n {
            for j in 0..2 {
                coords.set(i, j, rng.random_range(-0.5..0.5));
            }
        }
        if n < 2 {
            return coords;
        }

        let mut prev_stress = f32::INFINITY;
        for iter in 0..self.max_iter {
            let dist = euclidean_distances(&coords);

            let mut stress = 0.0f32;
            for i in 0..n {
                for j in (i + 1)..n {
                    let diff = dissimilarity.get(i, j) - dist.get(i, j);
                    stress += diff * diff;
                }
            }

            if (prev_stress - stress).abs() < self.eps {
                debug!(iter, stress, "MDS converged");
                break;
            }
            prev_stress = stress;

            coords = guttman_transform(dissimilarity, &dist, &coords);
        }
        coords
    }

    /// Marker sizes derived from centroid similarity: cubed similarity
    /// scaled into display units, with a fixed size for the centroid entry
    /// (the last element).
    #[must_use]
    pub fn marker_sizes(&self, centroid_similarity: &[f32]) -> Vec<f32> {
        let mut sizes: Vec<f32> = centroid_similarity
            .iter()
            .map(|s| s.powi(3) * 300.0)
            .collect();
        if let Some(last) = sizes.last_mut() {
            *last = CENTROID_MARKER_SIZE;
        }
        sizes
    }
}

fn euclidean_distances(coords: &Matrix) -> Matrix {
    let n = coords.rows();
    let mut out = Matrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = coords.get(i, 0) - coords.get(j, 0);
            let dy = coords.get(i, 1) - coords.get(j, 1);
            let d = (dx * dx + dy * dy).sqrt();
            out.set(i, j, d);
            out.set(j, i, d);
        }
    }
    out
}

/// One SMACOF majorization step: X' = (1/n) B(X) X
fn guttman_transform(dissimilarity: &Matrix, dist: &Matrix, coords: &Matrix) -> Matrix {
    let n = coords.rows();
    let mut b = Matrix::zeros(n, n);
    for i in 0..n {
        let mut diag = 0.0f32;
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = dist.get(i, j);
            let value = if d > f32::EPSILON {
                -dissimilarity.get(i, j) / d
            } else {
                0.0
            };
            b.set(i, j, value);
            diag -= value;
        }
        b.set(i, i, diag);
    }

    let mut next = Matrix::zeros(n, 2);
    let inv_n = 1.0 / n as f32;
    for i in 0..n {
        for k in 0..2 {
            let mut sum = 0.0f32;
            for j in 0..n {
                sum += b.get(i, j) * coords.get(j, k);
            }
            next.set(i, k, sum * inv_n);
        }
    }
    next
}
