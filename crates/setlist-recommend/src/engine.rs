//! Recommendation engine.
//!
//! Combines three strategies over a host-supplied project pool:
//! - content based: similar projects via the similarity analyzer
//! - collaborative: plugin and device co-occurrence counts
//! - rule based: tag suggestions from tempo, plugin names, and size

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{debug, info, instrument, trace};

use setlist_core::defaults::REASON_LIST_LIMIT;
use setlist_core::{
    stable_item_id, ItemType, OrderedCounter, ProjectFeatures, Recommendation, RecommendationSet,
    StandardMath, Tag, WorkflowInsights,
};
use setlist_similarity::SimilarityAnalyzer;

use crate::config::RecommendationConfig;
use crate::cooccurrence::{CooccurrenceTable, TempoAffinity};
use crate::insights::workflow_insights;
use crate::tag_rules::{plugin_tags, structure_tags, tag_lookup, tempo_tags};

const FALLBACK_PROJECT_REASON: &str = "Similar project structure";

/// Recommendation engine over a replaceable project pool.
///
/// Co-occurrence tables are derived from the pool and rebuilt by
/// [`update_project_pool`](Self::update_project_pool). Every recommendation
/// call builds a fresh [`RecommendationSet`].
pub struct RecommendationEngine {
    similarity: SimilarityAnalyzer,
    config: RecommendationConfig,
    math: StandardMath,
    project_pool: Vec<ProjectFeatures>,
    plugin_cooccurrence: CooccurrenceTable,
    device_cooccurrence: CooccurrenceTable,
    plugin_tempo_affinity: TempoAffinity,
    cache: HashMap<String, RecommendationSet>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("config", &self.config)
            .field("pool_size", &self.project_pool.len())
            .field("plugin_rows", &self.plugin_cooccurrence.len())
            .field("device_rows", &self.device_cooccurrence.len())
            .field("cached_sets", &self.cache.len())
            .finish()
    }
}

impl RecommendationEngine {
    /// Engine with a default analyzer and default config.
    pub fn new() -> Self {
        Self::with_analyzer(SimilarityAnalyzer::new())
    }

    pub fn with_analyzer(similarity: SimilarityAnalyzer) -> Self {
        Self {
            similarity,
            config: RecommendationConfig::default(),
            math: StandardMath,
            project_pool: Vec::new(),
            plugin_cooccurrence: CooccurrenceTable::new(),
            device_cooccurrence: CooccurrenceTable::new(),
            plugin_tempo_affinity: TempoAffinity::new(),
            cache: HashMap::new(),
        }
    }

    pub fn with_config(mut self, config: RecommendationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &SimilarityAnalyzer {
        &self.similarity
    }

    pub fn analyzer_mut(&mut self) -> &mut SimilarityAnalyzer {
        &mut self.similarity
    }

    pub fn project_pool(&self) -> &[ProjectFeatures] {
        &self.project_pool
    }

    pub fn pool_size(&self) -> usize {
        self.project_pool.len()
    }

    pub fn plugin_cooccurrence(&self) -> &CooccurrenceTable {
        &self.plugin_cooccurrence
    }

    pub fn device_cooccurrence(&self) -> &CooccurrenceTable {
        &self.device_cooccurrence
    }

    pub fn plugin_tempo_affinity(&self) -> &TempoAffinity {
        &self.plugin_tempo_affinity
    }

    /// Replace the pool and rebuild every co-occurrence statistic from it.
    ///
    /// Cached pair results are dropped since pool members may carry changed
    /// features under the same id.
    #[instrument(skip_all, fields(
        subsystem = "recommend",
        component = "engine",
        op = "update_project_pool",
        pool_size = projects.len(),
    ))]
    pub fn update_project_pool(&mut self, projects: Vec<ProjectFeatures>) {
        let start = Instant::now();

        self.plugin_cooccurrence.clear();
        self.device_cooccurrence.clear();
        self.plugin_tempo_affinity.clear();
        let dropped_pairs = self.similarity.cached_pairs();
        self.similarity.clear_cache();

        for project in &projects {
            self.plugin_cooccurrence.add_group(&project.plugins);
            self.device_cooccurrence.add_group(&project.devices);

            if let Some(tempo) = project.known_tempo() {
                for plugin in &project.plugins {
                    self.plugin_tempo_affinity.record(plugin, tempo);
                }
            }
        }
        self.project_pool = projects;

        info!(
            pool_size = self.project_pool.len(),
            plugin_rows = self.plugin_cooccurrence.len(),
            device_rows = self.device_cooccurrence.len(),
            dropped_pairs,
            duration_ms = start.elapsed().as_millis() as u64,
            "Project pool rebuilt"
        );
    }

    /// Pool projects most similar to `project`.
    ///
    /// The project's own id and everything in `exclude_ids` are skipped.
    /// Candidates below the configured minimum similarity are dropped.
    #[instrument(skip_all, fields(
        subsystem = "recommend",
        component = "engine",
        op = "recommend_similar_projects",
        project_id = project.id,
        n = n,
    ))]
    pub fn recommend_similar_projects(
        &mut self,
        project: &ProjectFeatures,
        n: usize,
        exclude_ids: &HashSet<i64>,
    ) -> RecommendationSet {
        let candidates = self
            .project_pool
            .iter()
            .filter(|p| p.id != project.id && !exclude_ids.contains(&p.id));

        let similar = self.similarity.find_similar_projects(
            project,
            candidates,
            n,
            self.config.min_similarity,
            None,
        );

        let recommendations: Vec<Recommendation> = similar
            .into_iter()
            .map(|sim| {
                let reason = sim
                    .similarity_result
                    .as_ref()
                    .map(|r| self.similarity.get_similarity_explanation(r))
                    .unwrap_or_else(|| FALLBACK_PROJECT_REASON.to_string());

                let mut metadata = JsonMap::new();
                metadata.insert(
                    "path".to_string(),
                    sim.project_path
                        .clone()
                        .map(JsonValue::String)
                        .unwrap_or(JsonValue::Null),
                );
                metadata.insert(
                    "similarity_breakdown".to_string(),
                    sim.similarity_result
                        .as_ref()
                        .map(|r| r.to_json())
                        .unwrap_or_else(|| JsonValue::Object(JsonMap::new())),
                );

                Recommendation {
                    item_id: sim.project_id,
                    item_type: ItemType::Project,
                    item_name: sim
                        .project_name
                        .unwrap_or_else(|| format!("Project {}", sim.project_id)),
                    score: sim.similarity_score,
                    reason,
                    metadata,
                }
            })
            .collect();

        debug!(
            result_count = recommendations.len(),
            "Similar project recommendations built"
        );

        let mut set = RecommendationSet::new(ItemType::Project)
            .with_context_id(project.id)
            .with_recommendations(recommendations);
        set.context_name = project.name.clone();
        set
    }

    /// Plugins that often appear alongside `current_plugins`.
    ///
    /// Scores are co-occurrence counts divided by the best count. With a
    /// `project_context` of known tempo, plugins whose mean tempo is within
    /// the configured window get a capped boost.
    #[instrument(skip_all, fields(
        subsystem = "recommend",
        component = "engine",
        op = "recommend_plugins",
        current_count = current_plugins.len(),
        n = n,
    ))]
    pub fn recommend_plugins(
        &self,
        current_plugins: &[String],
        project_context: Option<&ProjectFeatures>,
        n: usize,
    ) -> RecommendationSet {
        let project_tempo = project_context.and_then(ProjectFeatures::known_tempo);
        let scores = self.plugin_cooccurrence.suggestions(current_plugins);

        let recommendations: Vec<Recommendation> =
            ranked_by_cooccurrence(&scores, n)
                .into_iter()
                .map(|(plugin, mut score)| {
                    let common_with = self.plugin_cooccurrence.cooccurring_with(
                        current_plugins,
                        &plugin,
                        REASON_LIST_LIMIT,
                    );
                    let mut reason = format!("Often used with: {}", common_with.join(", "));

                    if let Some(avg_tempo) = project_tempo.and_then(|tempo| {
                        self.plugin_tempo_affinity
                            .mean(&self.math, &plugin)
                            .filter(|avg| (avg - tempo).abs() < self.config.tempo_window_bpm)
                    }) {
                        trace!(plugin = %plugin, avg_tempo, "Tempo affinity boost");
                        reason.push_str(&format!(" (commonly used at ~{:.0} BPM)", avg_tempo));
                        score *= self.config.tempo_boost;
                    }

                    Recommendation {
                        item_id: stable_item_id(&plugin),
                        item_type: ItemType::Plugin,
                        item_name: plugin,
                        score: score.min(1.0),
                        reason,
                        metadata: JsonMap::new(),
                    }
                })
                .collect();

        debug!(
            result_count = recommendations.len(),
            "Plugin recommendations built"
        );

        RecommendationSet::new(ItemType::Plugin)
            .with_context_name(format!("{} plugins", current_plugins.len()))
            .with_recommendations(recommendations)
    }

    /// Devices that often appear alongside `current_devices`.
    #[instrument(skip_all, fields(
        subsystem = "recommend",
        component = "engine",
        op = "recommend_devices",
        current_count = current_devices.len(),
        n = n,
    ))]
    pub fn recommend_devices(&self, current_devices: &[String], n: usize) -> RecommendationSet {
        let scores = self.device_cooccurrence.suggestions(current_devices);

        let recommendations: Vec<Recommendation> = ranked_by_cooccurrence(&scores, n)
            .into_iter()
            .map(|(device, score)| {
                let common_with = self.device_cooccurrence.cooccurring_with(
                    current_devices,
                    &device,
                    REASON_LIST_LIMIT,
                );
                Recommendation {
                    item_id: stable_item_id(&device),
                    item_type: ItemType::Device,
                    item_name: device,
                    score,
                    reason: format!("Often used with: {}", common_with.join(", ")),
                    metadata: JsonMap::new(),
                }
            })
            .collect();

        debug!(
            result_count = recommendations.len(),
            "Device recommendations built"
        );

        RecommendationSet::new(ItemType::Device)
            .with_context_name(format!("{} devices", current_devices.len()))
            .with_recommendations(recommendations)
    }

    /// Tags for `project` drawn from `available_tags`.
    ///
    /// Tempo rules need a known tempo, plugin rules need plugins, and the
    /// size rule always runs. Tags the project already has are dropped, a
    /// tag suggested twice keeps its first suggestion, and the rest are
    /// ordered by score.
    #[instrument(skip_all, fields(
        subsystem = "recommend",
        component = "engine",
        op = "recommend_tags",
        project_id = project.id,
        available = available_tags.len(),
        n = n,
    ))]
    pub fn recommend_tags(
        &self,
        project: &ProjectFeatures,
        available_tags: &[Tag],
        n: usize,
    ) -> RecommendationSet {
        let lookup = tag_lookup(available_tags);

        let mut suggested = Vec::new();
        if let Some(tempo) = project.known_tempo() {
            suggested.extend(tempo_tags(tempo, &lookup));
        }
        if !project.plugins.is_empty() {
            suggested.extend(plugin_tags(&project.plugins, &lookup));
        }
        suggested.extend(structure_tags(project.track_count, &lookup));

        let mut seen = HashSet::new();
        let mut recommendations: Vec<Recommendation> = suggested
            .into_iter()
            .filter(|r| !project.tags.contains(&r.item_name) && seen.insert(r.item_name.clone()))
            .collect();
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(n);

        debug!(
            result_count = recommendations.len(),
            "Tag recommendations built"
        );

        let mut set = RecommendationSet::new(ItemType::Tag)
            .with_context_id(project.id)
            .with_recommendations(recommendations);
        set.context_name = project.name.clone();
        set
    }

    /// Usage statistics over `projects` (not necessarily the pool).
    pub fn get_workflow_insights(&self, projects: &[ProjectFeatures]) -> WorkflowInsights {
        workflow_insights(&self.math, projects)
    }

    /// Number of recommendation sets held in the cache.
    pub fn cached_sets(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
        debug!(
            subsystem = "recommend",
            component = "engine",
            "Recommendation cache cleared"
        );
    }
}

/// The `n` most common entries as `(name, count / max count)`.
fn ranked_by_cooccurrence(scores: &OrderedCounter, n: usize) -> Vec<(String, f64)> {
    let Some(max) = scores.max_count().filter(|m| *m > 0) else {
        return Vec::new();
    };
    scores
        .most_common(n)
        .into_iter()
        .map(|(name, count)| (name, count as f64 / max as f64))
        .collect()
}
