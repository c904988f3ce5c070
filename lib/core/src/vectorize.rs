//! Batch vectorization: sparse token-count (or TF-IDF) rows fused with
//! optional dense embedding averages.
//!
//! The vocabulary is fit per batch over the normalized ideas only and is
//! never persisted across calls.

use crate::embedding::EmbeddingTable;
use crate::matrix::Matrix;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// A batch text encoder: fits on the whole batch and transforms each
/// normalized idea into one numeric row of batch-determined width.
pub trait Vectorizer: Send + Sync {
    fn fit_transform(&self, docs: &[String]) -> Matrix;
}

/// Sorted per-batch vocabulary shared by the count and TF-IDF encoders
fn fit_vocabulary(docs: &[String]) -> Vec<String> {
    let vocab: BTreeSet<&str> = docs
        .iter()
        .flat_map(|d| d.split_whitespace())
        .collect();
    vocab.into_iter().map(str::to_string).collect()
}

fn count_rows(docs: &[String], vocabulary: &[String]) -> Matrix {
    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();
    let mut m = Matrix::zeros(docs.len(), vocabulary.len());
    for (row, doc) in docs.iter().enumerate() {
        for token in doc.split_whitespace() {
            if let Some(&col) = index.get(token) {
                let v = m.get(row, col);
                m.set(row, col, v + 1.0);
            }
        }
    }
    m
}

/// Token-count vectorizer: one column per vocabulary token, sorted
/// alphabetically, values are raw occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer;

impl CountVectorizer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Vectorizer for CountVectorizer {
    fn fit_transform(&self, docs: &[String]) -> Matrix {
        let vocabulary = fit_vocabulary(docs);
        count_rows(docs, &vocabulary)
    }
}

/// TF-IDF vectorizer: count rows reweighted by smoothed inverse document
/// frequency, idf = ln((1 + n) / (1 + df)) + 1.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer;

impl TfidfVectorizer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Vectorizer for TfidfVectorizer {
    fn fit_transform(&self, docs: &[String]) -> Matrix {
        let vocabulary = fit_vocabulary(docs);
        let mut m = count_rows(docs, &vocabulary);

        let n = docs.len() as f32;
        for (col, _token) in vocabulary.iter().enumerate() {
            let df = (0..m.rows()).filter(|&row| m.get(row, col) > 0.0).count() as f32;
            let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
            for row in 0..m.rows() {
                let v = m.get(row, col);
                if v > 0.0 {
                    m.set(row, col, v * idf);
                }
            }
        }
        m
    }
}

/// Fuses sparse vectorizer rows with dense embedding averages into one
/// feature matrix, one row per idea.
pub struct VectorFuser<'a> {
    vectorizer: &'a dyn Vectorizer,
    embeddings: Option<&'a EmbeddingTable>,
}

impl<'a> VectorFuser<'a> {
    #[inline]
    #[must_use]
    pub fn new(vectorizer: &'a dyn Vectorizer, embeddings: Option<&'a EmbeddingTable>) -> Self {
        Self {
            vectorizer,
            embeddings,
        }
    }

    /// Fused feature matrix over normalized ideas.
    ///
    /// Row = concat(sparse row, embedding average) when a table is loaded,
    /// sparse row alone otherwise. All rows share one width.
    #[must_use]
    pub fn fuse(&self, normalized: &[String]) -> Matrix {
        let sparse = self.vectorizer.fit_transform(normalized);
        match self.embeddings {
            Some(table) => {
                let dense_rows: Vec<Vec<f32>> = normalized
                    .iter()
                    .map(|doc| {
                        let tokens: Vec<&str> = doc.split_whitespace().collect();
                        table.sentence_vector(&tokens)
                    })
                    .collect();
                let dense = Matrix::from_rows(dense_rows);
                sparse.hconcat(&dense)
            }
            None => {
                debug!("no embedding table loaded, using sparse features only");
                sparse
            }
        }
    }
}
