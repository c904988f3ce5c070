//! # ideamap Core
//!
//! Core library for ideamap, a similarity analyzer for small batches of
//! free-text ideas.
//!
//! This crate provides the full numeric pipeline:
//!
//! - [`TextNormalizer`] - lowercasing, tokenization, stop-word removal, lemmatization
//! - [`EmbeddingTable`] - optional GloVe-style word-embedding lookup
//! - [`Vectorizer`] / [`VectorFuser`] - sparse counts fused with dense embedding averages
//! - [`CentroidRanker`] - distance-to-centroid ranking with stable tie-break
//! - [`SimilarityEngine`] - pairwise cosine distance/similarity matrices
//! - [`MdsProjector`] - 2D layout via metric MDS (SMACOF)
//! - [`Analyzer`] - the orchestrator tying it all together
//!
//! ## Example
//!
//! ```rust
//! use ideamap_core::{Analyzer, LanguageResources};
//!
//! let analyzer = Analyzer::new(LanguageResources::english()).with_seed(1);
//! let ideas = vec![
//!     "I like apples".to_string(),
//!     "I like oranges".to_string(),
//!     "The weather is sunny".to_string(),
//! ];
//! let analysis = analyzer.analyze(&ideas).unwrap();
//!
//! // Ideas come back ranked, most central first, centroid row last in
//! // every matrix.
//! assert_eq!(analysis.ideas.len(), 3);
//! assert_eq!(analysis.pairwise_distance.len(), 4);
//! ```

pub mod embedding;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod pipeline;
pub mod rank;
pub mod similarity;
pub mod text;
pub mod vectorize;

pub use embedding::EmbeddingTable;
pub use error::{Error, Result};
pub use layout::{MdsProjector, CENTROID_MARKER_SIZE, DEFAULT_SEED};
pub use matrix::{cosine_distance, cosine_similarity, Matrix};
pub use pipeline::{Analysis, Analyzer, Idea};
pub use rank::{CentroidRanker, Ranked};
pub use similarity::{Similarities, SimilarityEngine};
pub use text::{LanguageResources, Lemmatizer, TextNormalizer};
pub use vectorize::{CountVectorizer, TfidfVectorizer, VectorFuser, Vectorizer};
