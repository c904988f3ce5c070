//! Word-embedding lookup table.
//!
//! Loads a GloVe-style whitespace-delimited text table (token followed by a
//! fixed number of floats per line) and averages token vectors into one
//! dense vector per idea. The table is optional: when the file is absent
//! the pipeline falls back to sparse-only features.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read-only token -> dense vector table
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl EmbeddingTable {
    /// Load a table from a GloVe-format text file.
    ///
    /// The dimension is taken from the first well-formed line; lines with a
    /// different width or unparseable floats are skipped with a warning.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::ResourceUnavailable(format!("embedding file {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let mut vectors = HashMap::new();
        let mut dim = 0usize;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let Some(token) = parts.next() else { continue };
            let values: std::result::Result<Vec<f32>, _> =
                parts.map(str::parse::<f32>).collect();
            match values {
                Ok(values) if !values.is_empty() => {
                    if dim == 0 {
                        dim = values.len();
                    }
                    if values.len() != dim {
                        warn!(
                            line = line_no + 1,
                            expected = dim,
                            actual = values.len(),
                            "skipping embedding line with wrong width"
                        );
                        continue;
                    }
                    vectors.insert(token.to_string(), values);
                }
                _ => {
                    warn!(line = line_no + 1, "skipping malformed embedding line");
                }
            }
        }

        if vectors.is_empty() {
            return Err(Error::ResourceUnavailable(format!(
                "embedding file {} contains no usable vectors",
                path.display()
            )));
        }

        info!(tokens = vectors.len(), dim, "loaded embedding table");
        Ok(Self { vectors, dim })
    }

    /// Load the table if the file exists; absence is not an error.
    #[must_use]
    pub fn load_optional(path: &Path) -> Option<Self> {
        if !path.exists() {
            info!(
                path = %path.display(),
                "embedding table not found, falling back to sparse-only vectors"
            );
            return None;
        }
        match Self::load(path) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("failed to load embedding table: {e}");
                None
            }
        }
    }

    /// Build a table directly from token/vector pairs (used in tests and
    /// by callers that provision embeddings themselves)
    pub fn from_vectors(vectors: HashMap<String, Vec<f32>>) -> Result<Self> {
        let dim = vectors.values().next().map_or(0, Vec::len);
        if dim == 0 {
            return Err(Error::InvalidConfig(
                "embedding table must contain at least one non-empty vector".to_string(),
            ));
        }
        if let Some(bad) = vectors.values().find(|v| v.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                actual: bad.len(),
            });
        }
        Ok(Self { vectors, dim })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Unweighted mean of the vectors of all tokens found in the table.
    /// Tokens without an entry are skipped; if nothing matches the result
    /// is the zero vector of the table dimension.
    #[must_use]
    pub fn sentence_vector<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<f32> {
        let mut sum = vec![0.0f32; self.dim];
        let mut matched = 0usize;
        for token in tokens {
            if let Some(v) = self.get(token.as_ref()) {
                for (s, x) in sum.iter_mut().zip(v) {
                    *s += x;
                }
                matched += 1;
            }
        }
        if matched > 0 {
            let inv = 1.0 / matched as f32;
            for s in &mut sum {
                *s *= inv;
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{content}").unwrap();
        f
    }

    #[test]
    fn test_load_glove_format() {
        let f = write_table("apple 1.0 0.0 0.5\norange 0.9 0.1 0.4\n");
        let table = EmbeddingTable::load(f.path()).unwrap();
        assert_eq!(table.dim(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("apple"), Some(&[1.0, 0.0, 0.5][..]));
        assert!(table.get("banana").is_none());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let f = write_table("apple 1.0 0.0\nbroken x y\nshort 1.0\norange 0.5 0.5\n");
        let table = EmbeddingTable::load(f.path()).unwrap();
        assert_eq!(table.dim(), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_optional_missing_file() {
        assert!(EmbeddingTable::load_optional(Path::new("/nonexistent/glove.txt")).is_none());
    }

    #[test]
    fn test_sentence_vector_averages_matched_tokens() {
        let f = write_table("apple 1.0 0.0\norange 0.0 1.0\n");
        let table = EmbeddingTable::load(f.path()).unwrap();
        let v = table.sentence_vector(&["apple", "orange", "unknown"]);
        assert!((v[0] - 0.5).abs() < 1e-6);
        assert!((v[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sentence_vector_no_matches_is_zero() {
        let f = write_table("apple 1.0 0.0\n");
        let table = EmbeddingTable::load(f.path()).unwrap();
        let v = table.sentence_vector(&["xyzzy"]);
        assert_eq!(v, vec![0.0, 0.0]);
    }
}
