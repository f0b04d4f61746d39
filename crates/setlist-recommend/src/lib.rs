//! # setlist-recommend
//!
//! Recommendations for music production projects.
//!
//! This crate provides:
//! - Similar-project recommendations backed by `setlist-similarity`
//! - Plugin and device suggestions from pool co-occurrence counts, with a
//!   tempo-affinity boost for plugins
//! - Rule-based tag suggestions (tempo bands, plugin names, project size)
//! - Workflow insights (most used plugins and devices, mean tempo and size)
//!
//! ## Example
//!
//! ```
//! use setlist_recommend::{ProjectFeatures, RecommendationEngine};
//!
//! let mut engine = RecommendationEngine::new();
//! engine.update_project_pool(vec![
//!     ProjectFeatures::new(1).with_plugins(["Serum", "Ozone"]),
//!     ProjectFeatures::new(2).with_plugins(["Serum", "Ozone", "Kontakt"]),
//! ]);
//!
//! let set = engine.recommend_plugins(&["Serum".to_string()], None, 5);
//! assert_eq!(set.recommendations[0].item_name, "Ozone");
//! ```

pub mod config;
pub mod cooccurrence;
pub mod engine;
pub mod insights;
pub mod tag_rules;

// Re-export core types
pub use setlist_core::*;

pub use config::RecommendationConfig;
pub use cooccurrence::{CooccurrenceTable, TempoAffinity};
pub use engine::RecommendationEngine;
pub use insights::workflow_insights;
