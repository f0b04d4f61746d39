//! Recommendation engine tunables.

use serde::{Deserialize, Serialize};
use tracing::debug;

use setlist_core::defaults::{
    RECOMMEND_MIN_SIMILARITY, TEMPO_AFFINITY_BOOST, TEMPO_AFFINITY_WINDOW_BPM,
};
use setlist_core::{parse_f64_env, Error, Result};

/// Tunables for [`RecommendationEngine`](crate::RecommendationEngine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Minimum overall similarity for similar-project recommendations
    pub min_similarity: f64,
    /// A plugin's mean tempo must be strictly closer than this to the
    /// project's tempo to earn the boost
    pub tempo_window_bpm: f64,
    /// Multiplier applied to boosted plugin scores (result capped at 1.0)
    pub tempo_boost: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_similarity: RECOMMEND_MIN_SIMILARITY,
            tempo_window_bpm: TEMPO_AFFINITY_WINDOW_BPM,
            tempo_boost: TEMPO_AFFINITY_BOOST,
        }
    }
}

impl RecommendationConfig {
    /// Defaults with environment overrides applied.
    ///
    /// Environment variables (unset = default):
    /// - `SETLIST_REC_MIN_SIMILARITY` (default: 0.2)
    /// - `SETLIST_REC_TEMPO_WINDOW` (default: 15)
    /// - `SETLIST_REC_TEMPO_BOOST` (default: 1.1)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = parse_f64_env("SETLIST_REC_MIN_SIMILARITY")? {
            config.min_similarity = v;
        }
        if let Some(v) = parse_f64_env("SETLIST_REC_TEMPO_WINDOW")? {
            config.tempo_window_bpm = v;
        }
        if let Some(v) = parse_f64_env("SETLIST_REC_TEMPO_BOOST")? {
            config.tempo_boost = v;
        }
        config.validate()?;

        debug!(
            min_similarity = config.min_similarity,
            tempo_window_bpm = config.tempo_window_bpm,
            tempo_boost = config.tempo_boost,
            "Recommendation config loaded"
        );
        Ok(config)
    }

    /// Reject values the engine cannot use.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(Error::Config(format!(
                "min_similarity must be within [0, 1], got {}",
                self.min_similarity
            )));
        }
        if !self.tempo_window_bpm.is_finite() || self.tempo_window_bpm < 0.0 {
            return Err(Error::Config(format!(
                "tempo_window_bpm must be a finite non-negative number, got {}",
                self.tempo_window_bpm
            )));
        }
        if !self.tempo_boost.is_finite() || self.tempo_boost < 1.0 {
            return Err(Error::Config(format!(
                "tempo_boost must be at least 1.0, got {}",
                self.tempo_boost
            )));
        }
        Ok(())
    }
}
