//! Pairwise project similarity with memoization.
//!
//! Results are cached under the unordered id pair, so scoring A against B and
//! B against A returns the same result without recomputation. The cache has
//! no locking: confine an analyzer to one thread or serialize access.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, instrument, trace};

use setlist_core::{
    ProjectFeatures, Result, SimilarProject, SimilarityResult, StandardMath, VectorMath,
};

use crate::components::{
    feature_similarity, jaccard_similarity, structural_similarity, tempo_similarity,
};
use crate::explanation::explain;
use crate::matrix::SimilarityMatrix;
use crate::weights::{SimilarityComponent, SimilarityWeights};

/// Cache key: `(min(id_a, id_b), max(id_a, id_b))`.
type PairKey = (i64, i64);

fn pair_key(id_a: i64, id_b: i64) -> PairKey {
    (id_a.min(id_b), id_a.max(id_b))
}

/// Scores pairs of projects and ranks candidates against a reference.
pub struct SimilarityAnalyzer {
    /// Always normalized to sum to 1.0
    weights: SimilarityWeights,
    math: Box<dyn VectorMath>,
    cache: HashMap<PairKey, SimilarityResult>,
}

impl Default for SimilarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimilarityAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityAnalyzer")
            .field("weights", &self.weights)
            .field("cached_pairs", &self.cache.len())
            .finish()
    }
}

impl SimilarityAnalyzer {
    /// Analyzer with the default weights and plain-arithmetic vector math.
    pub fn new() -> Self {
        Self {
            weights: SimilarityWeights::default()
                .normalized()
                .unwrap_or_default(),
            math: Box::new(StandardMath),
            cache: HashMap::new(),
        }
    }

    /// Analyzer with custom weights, normalized to sum to 1.0.
    pub fn with_weights(weights: SimilarityWeights) -> Result<Self> {
        Ok(Self {
            weights: weights.normalized()?,
            ..Self::new()
        })
    }

    /// Replace the vector-math backend.
    pub fn with_math(mut self, math: Box<dyn VectorMath>) -> Self {
        self.math = math;
        self.cache.clear();
        self
    }

    /// Current normalized weights.
    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Number of cached pairwise results.
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Compare two projects.
    ///
    /// With `use_cache`, a previously computed result for the same unordered
    /// id pair is returned as-is. The fresh result is always written back.
    pub fn compute_similarity(
        &mut self,
        a: &ProjectFeatures,
        b: &ProjectFeatures,
        use_cache: bool,
    ) -> SimilarityResult {
        let key = pair_key(a.id, b.id);
        if use_cache {
            if let Some(cached) = self.cache.get(&key) {
                trace!(project_a_id = a.id, project_b_id = b.id, cache_hit = true);
                return cached.clone();
            }
        }

        let math = self.math.as_ref();
        let plugin_similarity = jaccard_similarity(&a.plugins, &b.plugins);
        let device_similarity = jaccard_similarity(&a.devices, &b.devices);
        let tempo_similarity = tempo_similarity(a.tempo, b.tempo);
        let structural_similarity = structural_similarity(math, a, b);
        let feature_similarity = feature_similarity(math, a, b);

        let w = &self.weights;
        let overall_similarity = w.feature * feature_similarity
            + w.plugin * plugin_similarity
            + w.device * device_similarity
            + w.tempo * tempo_similarity
            + w.structural * structural_similarity;

        let result = SimilarityResult {
            project_a_id: a.id,
            project_b_id: b.id,
            overall_similarity,
            structural_similarity,
            plugin_similarity,
            device_similarity,
            tempo_similarity,
            feature_similarity,
            shared_plugins: a.plugins.intersection(&b.plugins).cloned().collect(),
            shared_devices: a.devices.intersection(&b.devices).cloned().collect(),
            computed_at: Utc::now(),
        };

        trace!(
            project_a_id = a.id,
            project_b_id = b.id,
            overall = overall_similarity,
            cache_hit = false
        );

        self.cache.insert(key, result.clone());
        result
    }

    /// Rank `candidates` by similarity to `reference`.
    ///
    /// The reference's own id is skipped. `cancel_check` is polled before each
    /// candidate; when it returns true the whole call returns an empty list,
    /// never a partial ranking. Results keep only scores `>= min_similarity`,
    /// are sorted by descending score (ties keep input order), and are
    /// truncated to `top_n`.
    #[instrument(skip_all, fields(
        subsystem = "similarity",
        component = "analyzer",
        op = "find_similar_projects",
        project_id = reference.id,
        top_n = top_n,
        min_similarity = min_similarity,
    ))]
    pub fn find_similar_projects<'a, I>(
        &mut self,
        reference: &ProjectFeatures,
        candidates: I,
        top_n: usize,
        min_similarity: f64,
        cancel_check: Option<&dyn Fn() -> bool>,
    ) -> Vec<SimilarProject>
    where
        I: IntoIterator<Item = &'a ProjectFeatures>,
    {
        let start = Instant::now();
        let mut similar = Vec::new();
        let mut candidate_count = 0usize;

        for candidate in candidates {
            if cancel_check.is_some_and(|cancelled| cancelled()) {
                debug!(
                    cancelled = true,
                    candidate_count, "Similarity search cancelled"
                );
                return Vec::new();
            }

            if candidate.id == reference.id {
                continue;
            }
            candidate_count += 1;

            let result = self.compute_similarity(reference, candidate, true);
            if result.overall_similarity >= min_similarity {
                similar.push(SimilarProject {
                    project_id: candidate.id,
                    project_path: candidate.path.clone(),
                    project_name: candidate.name.clone(),
                    similarity_score: result.overall_similarity,
                    similarity_result: Some(result),
                });
            }
        }

        similar.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        similar.truncate(top_n);

        debug!(
            candidate_count,
            result_count = similar.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Similarity search complete"
        );

        similar
    }

    /// Full N×N matrix of overall similarity. The diagonal is 1.0; each
    /// unordered pair is computed once and mirrored.
    #[instrument(skip_all, fields(
        subsystem = "similarity",
        component = "analyzer",
        op = "compute_similarity_matrix",
        project_count = projects.len(),
    ))]
    pub fn compute_similarity_matrix(&mut self, projects: &[ProjectFeatures]) -> SimilarityMatrix {
        let n = projects.len();
        let mut matrix = SimilarityMatrix::zeros(n);

        for i in 0..n {
            matrix.set(i, i, 1.0);
            for j in (i + 1)..n {
                let score = self
                    .compute_similarity(&projects[i], &projects[j], true)
                    .overall_similarity;
                matrix.set(i, j, score);
                matrix.set(j, i, score);
            }
        }

        matrix
    }

    /// Human-readable explanation of `result`.
    pub fn get_similarity_explanation(&self, result: &SimilarityResult) -> String {
        explain(result)
    }

    /// Merge new component weights, renormalize, and drop every cached
    /// result (their overall scores used the old weights).
    ///
    /// On error the current weights and cache are left untouched.
    pub fn update_weights<I>(&mut self, new_weights: I) -> Result<()>
    where
        I: IntoIterator<Item = (SimilarityComponent, f64)>,
    {
        let mut merged = self.weights;
        merged.merge(new_weights);
        self.weights = merged.normalized()?;

        let dropped = self.cache.len();
        self.cache.clear();

        info!(
            subsystem = "similarity",
            component = "analyzer",
            weights = ?self.weights,
            dropped_results = dropped,
            "Similarity weights updated"
        );
        Ok(())
    }

    /// Drop every cached pairwise result.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
