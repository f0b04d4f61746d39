//! Centralized default constants for setlist.
//!
//! **This module is the single source of truth** for shared default values.
//! The similarity and recommendation crates reference these constants instead
//! of defining their own magic numbers.

// =============================================================================
// SIMILARITY WEIGHTS
// =============================================================================

/// Default weight of the feature-vector (cosine) component.
pub const WEIGHT_FEATURE: f64 = 0.35;

/// Default weight of the plugin (Jaccard) component.
pub const WEIGHT_PLUGIN: f64 = 0.20;

/// Default weight of the device (Jaccard) component.
pub const WEIGHT_DEVICE: f64 = 0.15;

/// Default weight of the tempo component.
pub const WEIGHT_TEMPO: f64 = 0.15;

/// Default weight of the structural component.
pub const WEIGHT_STRUCTURAL: f64 = 0.15;

// =============================================================================
// SIMILARITY SCORING
// =============================================================================

/// Score assigned to a component when there is not enough data to compute it.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// BPM difference at or below which tempos count as identical.
pub const TEMPO_THRESHOLD_BPM: f64 = 5.0;

/// BPM difference at or beyond which tempo similarity is zero.
pub const TEMPO_MAX_DIFF_BPM: f64 = 50.0;

/// Default number of similar projects returned by a ranking query.
pub const SIMILAR_TOP_N: usize = 10;

/// Default minimum overall similarity for a ranking query.
pub const SIMILAR_MIN_SIMILARITY: f64 = 0.3;

/// Maximum shared plugins/devices named in an explanation clause.
pub const EXPLANATION_LIST_LIMIT: usize = 5;

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// Minimum overall similarity for similar-project recommendations.
pub const RECOMMEND_MIN_SIMILARITY: f64 = 0.2;

/// Default number of similar-project recommendations.
pub const RECOMMEND_PROJECTS_N: usize = 10;

/// Default number of plugin, device, or tag recommendations.
pub const RECOMMEND_ITEMS_N: usize = 5;

/// Mean-tempo distance (BPM) under which a plugin gets the tempo boost.
pub const TEMPO_AFFINITY_WINDOW_BPM: f64 = 15.0;

/// Multiplier applied to a plugin score on a tempo-affinity match.
pub const TEMPO_AFFINITY_BOOST: f64 = 1.1;

/// Maximum co-occurring current items named in a recommendation reason.
pub const REASON_LIST_LIMIT: usize = 3;

/// Number of entries in each most-used list of workflow insights.
pub const INSIGHT_LIST_LIMIT: usize = 10;

/// Modulus for stable plugin/device item ids (8 decimal digits).
pub const ITEM_ID_MODULUS: u64 = 100_000_000;
