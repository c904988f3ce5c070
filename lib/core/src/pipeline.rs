//! End-to-end analysis pipeline: normalize, fuse, rank, compute
//! similarities, project.
//!
//! One [`Analyzer`] owns the injected language resources, the optional
//! embedding table and the vectorizer, and every [`Analyzer::analyze`] call
//! re-fits everything from scratch. Nothing persists between calls.

use crate::embedding::EmbeddingTable;
use crate::error::Result;
use crate::layout::MdsProjector;
use crate::rank::CentroidRanker;
use crate::similarity::SimilarityEngine;
use crate::text::{LanguageResources, TextNormalizer};
use crate::vectorize::{CountVectorizer, VectorFuser, Vectorizer};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One user-submitted idea: the original text plus its normalized form
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Idea {
    pub text: String,
    pub normalized: String,
}

/// Complete analysis output, JSON-serializable.
///
/// All rows/columns are in ranked order (most central idea first) with the
/// centroid as the final entry of every matrix and vector.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Ideas reordered by ascending distance to the centroid
    pub ideas: Vec<Idea>,
    /// Per-row cosine similarity to the centroid (N+1 entries)
    pub centroid_similarity: Vec<f32>,
    /// 1 - centroid similarity
    pub centroid_distance: Vec<f32>,
    /// (N+1) x (N+1) pairwise cosine similarity
    pub pairwise_similarity: Vec<Vec<f32>>,
    /// (N+1) x (N+1) pairwise cosine distance
    pub pairwise_distance: Vec<Vec<f32>>,
    /// (N+1) x 2 MDS coordinates
    pub coordinates: Vec<Vec<f32>>,
    /// Display marker sizes, centroid entry fixed
    pub marker_sizes: Vec<f32>,
    /// Whether dense embedding features were fused in (fallback diagnostic)
    pub used_embeddings: bool,
}

/// The pipeline orchestrator
pub struct Analyzer {
    resources: LanguageResources,
    embeddings: Option<EmbeddingTable>,
    vectorizer: Box<dyn Vectorizer>,
    projector: MdsProjector,
}

impl Analyzer {
    /// Create an analyzer with the given language resources, a token-count
    /// vectorizer and a fixed-seed MDS projector.
    #[must_use]
    pub fn new(resources: LanguageResources) -> Self {
        Self {
            resources,
            embeddings: None,
            vectorizer: Box::new(CountVectorizer::new()),
            projector: MdsProjector::new(),
        }
    }

    /// Attach a loaded embedding table
    #[must_use]
    pub fn with_embeddings(mut self, table: EmbeddingTable) -> Self {
        self.embeddings = Some(table);
        self
    }

    /// Attach an embedding table from a file if it exists.
    /// A missing file keeps the sparse-only fallback.
    #[must_use]
    pub fn with_embeddings_file(mut self, path: &Path) -> Self {
        self.embeddings = EmbeddingTable::load_optional(path);
        self
    }

    /// Replace the sparse vectorizer (count, TF-IDF, ...)
    #[must_use]
    pub fn with_vectorizer(mut self, vectorizer: Box<dyn Vectorizer>) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Fix the MDS seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.projector = self.projector.with_seed(seed);
        self
    }

    /// Randomize the MDS seed per call
    #[must_use]
    pub fn with_random_seed(mut self) -> Self {
        self.projector = self.projector.with_random_seed();
        self
    }

    /// Run the full pipeline on a batch of raw idea strings.
    ///
    /// Fails with [`crate::Error::InsufficientIdeas`] for fewer than two
    /// ideas and [`crate::Error::EmptyVocabulary`] when normalization
    /// leaves no tokens and no embedding table is loaded.
    pub fn analyze(&self, ideas: &[String]) -> Result<Analysis> {
        let normalizer = TextNormalizer::new(&self.resources);
        let normalized = normalizer.normalize_all(ideas);

        let items: Vec<Idea> = ideas
            .iter()
            .zip(&normalized)
            .map(|(text, norm)| Idea {
                text: text.clone(),
                normalized: norm.clone(),
            })
            .collect();

        let fuser = VectorFuser::new(self.vectorizer.as_ref(), self.embeddings.as_ref());
        let features = fuser.fuse(&normalized);
        let used_embeddings = self.embeddings.is_some();

        let ranked = CentroidRanker::new().rank(&features, items)?;
        let similarities = SimilarityEngine::new().compute(&ranked.matrix);

        let coordinates = self.projector.project(&similarities.distance);
        let marker_sizes = self.projector.marker_sizes(&similarities.centroid_similarity);

        info!(
            ideas = ideas.len(),
            feature_dim = ranked.matrix.cols(),
            used_embeddings,
            "analysis complete"
        );

        Ok(Analysis {
            ideas: ranked.items,
            centroid_similarity: similarities.centroid_similarity,
            centroid_distance: similarities.centroid_distance,
            pairwise_similarity: similarities.similarity.to_nested(),
            pairwise_distance: similarities.distance.to_nested(),
            coordinates: coordinates.to_nested(),
            marker_sizes,
            used_embeddings,
        })
    }
}
