//! # setlist-similarity
//!
//! Multi-metric similarity scoring between music production projects.
//!
//! This crate provides:
//! - Jaccard similarity for plugin and device sets
//! - Tempo proximity with linear decay
//! - Structural similarity (track counts, audio/MIDI ratio, arrangement length)
//! - Cosine similarity of precomputed feature vectors
//! - A weighted overall score with a memoizing, cancellable ranking API
//!
//! ## Example
//!
//! ```
//! use setlist_similarity::{ProjectFeatures, SimilarityAnalyzer};
//!
//! let mut analyzer = SimilarityAnalyzer::new();
//!
//! let a = ProjectFeatures::new(1).with_plugins(["Serum", "FabFilter Pro-Q", "Omnisphere"]);
//! let b = ProjectFeatures::new(2).with_plugins(["Serum", "FabFilter Pro-Q", "Ozone"]);
//!
//! let result = analyzer.compute_similarity(&a, &b, true);
//! assert_eq!(result.plugin_similarity, 0.5);
//!
//! let ranked = analyzer.find_similar_projects(&a, &[b], 10, 0.3, None);
//! assert_eq!(ranked.len(), 1);
//! ```

pub mod analyzer;
pub mod components;
pub mod explanation;
pub mod matrix;
pub mod weights;

// Re-export core types
pub use setlist_core::*;

pub use analyzer::SimilarityAnalyzer;
pub use components::{
    feature_similarity, jaccard_similarity, structural_similarity, tempo_similarity,
};
pub use explanation::explain;
pub use matrix::SimilarityMatrix;
pub use weights::{SimilarityComponent, SimilarityWeights};
