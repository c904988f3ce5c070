//! # ideamap
//!
//! Similarity analysis for small batches of free-text ideas.
//!
//! Given a handful of short text submissions, ideamap normalizes the text,
//! converts each idea into a fused numeric vector (token counts plus an
//! optional word-embedding average), ranks the ideas by cosine distance to
//! the batch centroid, and projects the pairwise distances into 2D
//! coordinates for visualization.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install ideamap
//! ideamap ideas.txt --embeddings glove.6B.100d.txt --pretty
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use ideamap::prelude::*;
//!
//! let analyzer = Analyzer::new(LanguageResources::english());
//! let ideas = vec![
//!     "I like apples".to_string(),
//!     "I like oranges".to_string(),
//!     "The weather is sunny".to_string(),
//! ];
//! let analysis = analyzer.analyze(&ideas).unwrap();
//!
//! // Most central idea first, outlier last
//! println!("most central: {}", analysis.ideas[0].text);
//! ```
//!
//! ## Crate Structure
//!
//! - [`ideamap-core`](https://docs.rs/ideamap-core) - the numeric pipeline
//!   (normalization, vector fusion, centroid ranking, similarity matrices,
//!   MDS layout)
//!
//! Rendering (scatter plots, heatmaps, graphs) is left to consumers of the
//! JSON output.

pub use ideamap_core::{
    Analysis, Analyzer, CentroidRanker, CountVectorizer, EmbeddingTable, Error, Idea,
    LanguageResources, Matrix, MdsProjector, Result, SimilarityEngine, TextNormalizer,
    TfidfVectorizer, VectorFuser, Vectorizer,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Analysis, Analyzer, CountVectorizer, EmbeddingTable, Error, Idea, LanguageResources,
        MdsProjector, Result, TextNormalizer, TfidfVectorizer, Vectorizer,
    };
}
