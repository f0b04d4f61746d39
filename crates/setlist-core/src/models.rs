//! Data model exchanged with the host application.
//!
//! Project features come in as plain records; similarity results and
//! recommendations go out as plain records. None of these types are
//! mutated by the engines once constructed.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::defaults::ITEM_ID_MODULUS;

// =============================================================================
// PROJECT FEATURES
// =============================================================================

/// Numeric and categorical features of one music production project.
///
/// Only `id` is required. Every other field has a neutral default, and the
/// scorers treat those defaults as "unknown" rather than as real values:
/// a missing tempo or feature vector scores 0.5, zero track counts and a
/// zero arrangement length are skipped by the structural comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFeatures {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Location of the project file, passed through to results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub plugins: BTreeSet<String>,
    #[serde(default)]
    pub devices: BTreeSet<String>,
    /// Tags already attached to the project.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Tempo in BPM.
    #[serde(default)]
    pub tempo: Option<f64>,
    #[serde(default)]
    pub track_count: u32,
    #[serde(default)]
    pub audio_tracks: u32,
    #[serde(default)]
    pub midi_tracks: u32,
    /// Arrangement length in seconds (0 = unknown).
    #[serde(default)]
    pub arrangement_length: f64,
    /// Precomputed dense embedding. Never derived by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_vector: Option<Vec<f64>>,
}

impl ProjectFeatures {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_devices<I, S>(mut self, devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices = devices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tempo(mut self, tempo: f64) -> Self {
        self.tempo = Some(tempo);
        self
    }

    pub fn with_track_count(mut self, track_count: u32) -> Self {
        self.track_count = track_count;
        self
    }

    /// Set the audio/MIDI split. Does not touch `track_count`, which may
    /// also include return and group tracks.
    pub fn with_track_split(mut self, audio_tracks: u32, midi_tracks: u32) -> Self {
        self.audio_tracks = audio_tracks;
        self.midi_tracks = midi_tracks;
        self
    }

    pub fn with_arrangement_length(mut self, seconds: f64) -> Self {
        self.arrangement_length = seconds;
        self
    }

    pub fn with_feature_vector(mut self, vector: Vec<f64>) -> Self {
        self.feature_vector = Some(vector);
        self
    }

    /// Tempo usable for aggregate statistics and rules: present and non-zero.
    pub fn known_tempo(&self) -> Option<f64> {
        self.tempo.filter(|t| *t != 0.0)
    }

    /// Display name, falling back to `"Project <id>"`.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Project {}", self.id))
    }
}

/// A tag that can be suggested for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// SIMILARITY
// =============================================================================

/// Detailed outcome of comparing two projects. All scores are in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub project_a_id: i64,
    pub project_b_id: i64,
    /// Weighted combination of the five component scores
    pub overall_similarity: f64,
    /// Track counts, audio/MIDI ratio, arrangement length
    pub structural_similarity: f64,
    /// Jaccard index of plugin sets
    pub plugin_similarity: f64,
    /// Jaccard index of device sets
    pub device_similarity: f64,
    /// Tempo proximity
    pub tempo_similarity: f64,
    /// Cosine similarity of feature vectors, remapped to `[0, 1]`
    pub feature_similarity: f64,
    pub shared_plugins: BTreeSet<String>,
    pub shared_devices: BTreeSet<String>,
    pub computed_at: DateTime<Utc>,
}

impl SimilarityResult {
    /// The result as a JSON object, for embedding in recommendation metadata.
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

/// A candidate project ranked against a reference project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarProject {
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub similarity_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_result: Option<SimilarityResult>,
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// Kind of item being recommended (also used as the context of a set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Project,
    Plugin,
    Device,
    Tag,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Plugin => write!(f, "plugin"),
            Self::Device => write!(f, "device"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" => Ok(Self::Project),
            "plugin" => Ok(Self::Plugin),
            "device" => Ok(Self::Device),
            "tag" => Ok(Self::Tag),
            _ => Err(format!("Invalid item type: {}", s)),
        }
    }
}

/// A single recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Project id, tag id, or stable name hash for plugins and devices
    pub item_id: i64,
    pub item_type: ItemType,
    pub item_name: String,
    /// Score in `[0, 1]`
    pub score: f64,
    /// Human-readable explanation
    pub reason: String,
    #[serde(default, skip_serializing_if = "JsonMap::is_empty")]
    pub metadata: JsonMap<String, JsonValue>,
}

/// Recommendations produced for one request. Built fresh each time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub context_type: ItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_name: Option<String>,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationSet {
    /// Create an empty set stamped with the current time.
    pub fn new(context_type: ItemType) -> Self {
        Self {
            context_type,
            context_id: None,
            context_name: None,
            recommendations: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn with_context_id(mut self, id: i64) -> Self {
        self.context_id = Some(id);
        self
    }

    pub fn with_context_name(mut self, name: impl Into<String>) -> Self {
        self.context_name = Some(name.into());
        self
    }

    pub fn with_recommendations(mut self, recommendations: Vec<Recommendation>) -> Self {
        self.recommendations = recommendations;
        self
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// The `n` best recommendations by score (stable for equal scores).
    pub fn top_n(&self, n: usize) -> Vec<&Recommendation> {
        let mut sorted: Vec<&Recommendation> = self.recommendations.iter().collect();
        sorted.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted.truncate(n);
        sorted
    }

    pub fn filter_by_type(&self, item_type: ItemType) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.item_type == item_type)
            .collect()
    }
}

/// Aggregate usage statistics over a list of projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInsights {
    /// Up to ten `(plugin, project count)` pairs, most used first
    pub most_used_plugins: Vec<(String, usize)>,
    /// Up to ten `(device, project count)` pairs, most used first
    pub most_used_devices: Vec<(String, usize)>,
    /// Mean tempo over projects with a known tempo (0 when none)
    pub avg_tempo: f64,
    /// Mean track count over projects with tracks (0 when none)
    pub avg_tracks: f64,
}

/// Stable eight-digit id for a plugin or device name.
pub fn stable_item_id(name: &str) -> i64 {
    let hash = blake3::hash(name.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(prefix) % ITEM_ID_MODULUS) as i64
}
