use serde::{Deserialize, Serialize};

/// A dense row-major matrix of floating point numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    #[inline]
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from row vectors. All rows must share one width.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == cols));
        let mut data = Vec::with_capacity(n * cols);
        for row in rows {
            data.extend(row);
        }
        Self { rows: n, cols, data }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f32] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.data[i * self.cols + j] = value;
    }

    /// Component-wise mean of all rows
    #[must_use]
    pub fn mean_row(&self) -> Vec<f32> {
        let mut mean = vec![0.0f32; self.cols];
        if self.rows == 0 {
            return mean;
        }
        for i in 0..self.rows {
            for (m, v) in mean.iter_mut().zip(self.row(i)) {
                *m += v;
            }
        }
        let inv = 1.0 / self.rows as f32;
        for m in &mut mean {
            *m *= inv;
        }
        mean
    }

    /// Append a row at the bottom. The row width must match.
    pub fn push_row(&mut self, row: &[f32]) {
        debug_assert_eq!(row.len(), self.cols);
        self.data.extend_from_slice(row);
        self.rows += 1;
    }

    /// Horizontally concatenate another matrix with the same row count
    #[must_use]
    pub fn hconcat(&self, other: &Matrix) -> Matrix {
        debug_assert_eq!(self.rows, other.rows);
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(other.row(i));
        }
        Matrix {
            rows: self.rows,
            cols,
            data,
        }
    }

    /// Reorder rows by the given permutation: output row k = input row perm[k].
    /// Rows past the permutation length keep their position (trailing rows
    /// such as an appended centroid are unaffected).
    #[must_use]
    pub fn permute_rows(&self, perm: &[usize]) -> Matrix {
        let mut out = Matrix::zeros(self.rows, self.cols);
        for (k, &src) in perm.iter().enumerate() {
            out.row_mut(k).copy_from_slice(self.row(src));
        }
        for i in perm.len()..self.rows {
            out.row_mut(i).copy_from_slice(self.row(i));
        }
        out
    }

    /// Copy out as nested vectors for JSON serialization
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<f32>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }
}

#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
pub fn norm(a: &[f32]) -> f32 {
    dot(a, a).sqrt()
}

/// Cosine similarity between two vectors.
/// A zero vector is 0-similar to everything, never NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

/// Cosine distance, defined as exactly 1 - cosine similarity
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    1.0 - cosine_similarity(a, b)
}

/// Pairwise cosine distance over all rows of a matrix.
/// Symmetric with a forced zero diagonal.
#[must_use]
pub fn pairwise_cosine_distance(m: &Matrix) -> Matrix {
    let n = m.rows();
    let mut out = Matrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let d = cosine_distance(m.row(i), m.row(j));
            out.set(i, j, d);
            out.set(j, i, d);
        }
    }
    out
}

/// Pairwise cosine similarity over all rows of a matrix.
/// Symmetric with a forced unit diagonal.
#[must_use]
pub fn pairwise_cosine_similarity(m: &Matrix) -> Matrix {
    let n = m.rows();
    let mut out = Matrix::zeros(n, n);
    for i in 0..n {
        out.set(i, i, 1.0);
        for j in (i + 1)..n {
            let s = cosine_similarity(m.row(i), m.row(j));
            out.set(i, j, s);
            out.set(j, i, s);
        }
    }
    out
}
