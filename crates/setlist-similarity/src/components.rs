//! Per-component similarity scorers.
//!
//! Each scorer returns a value in `[0, 1]`. When either side lacks the data a
//! scorer needs, it returns [`NEUTRAL_SCORE`] so missing metadata neither
//! rewards nor penalizes a pair.

use std::collections::BTreeSet;

use tracing::warn;

use setlist_core::defaults::{NEUTRAL_SCORE, TEMPO_MAX_DIFF_BPM, TEMPO_THRESHOLD_BPM};
use setlist_core::{cosine_from_norms, ProjectFeatures, VectorMath};

/// Jaccard index `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets are identical (1.0).
pub fn jaccard_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Tempo proximity with linear decay.
///
/// 1.0 within 5 BPM, 0.0 at 50 BPM or more, linear in between. Unknown
/// tempo on either side is neutral.
pub fn tempo_similarity(tempo_a: Option<f64>, tempo_b: Option<f64>) -> f64 {
    let (a, b) = match (tempo_a, tempo_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return NEUTRAL_SCORE,
    };

    let diff = (a - b).abs();
    if diff <= TEMPO_THRESHOLD_BPM {
        1.0
    } else if diff >= TEMPO_MAX_DIFF_BPM {
        0.0
    } else {
        1.0 - (diff - TEMPO_THRESHOLD_BPM) / (TEMPO_MAX_DIFF_BPM - TEMPO_THRESHOLD_BPM)
    }
}

/// Structural closeness: mean of track-count, audio/MIDI ratio, and
/// arrangement-length closeness, each included only when computable.
pub fn structural_similarity(
    math: &dyn VectorMath,
    a: &ProjectFeatures,
    b: &ProjectFeatures,
) -> f64 {
    let mut scores = Vec::with_capacity(3);

    let max_tracks = a.track_count.max(b.track_count);
    if max_tracks > 0 {
        let diff = a.track_count.abs_diff(b.track_count);
        scores.push(1.0 - diff as f64 / max_tracks as f64);
    }

    if let (Some(ratio_a), Some(ratio_b)) = (audio_ratio(a), audio_ratio(b)) {
        scores.push(1.0 - (ratio_a - ratio_b).abs());
    }

    let (length_a, length_b) = (a.arrangement_length, b.arrangement_length);
    if length_a > 0.0 && length_b > 0.0 {
        let max_length = length_a.max(length_b);
        scores.push(1.0 - (length_a - length_b).abs() / max_length);
    }

    math.mean(&scores).unwrap_or(NEUTRAL_SCORE)
}

/// Share of audio tracks among audio + MIDI tracks.
fn audio_ratio(project: &ProjectFeatures) -> Option<f64> {
    let total = u64::from(project.audio_tracks) + u64::from(project.midi_tracks);
    if total == 0 {
        return None;
    }
    Some(project.audio_tracks as f64 / total as f64)
}

/// Cosine similarity of the precomputed feature vectors, remapped from
/// `[-1, 1]` to `[0, 1]`.
///
/// A missing vector is neutral; vectors are never rebuilt here. A zero-norm
/// vector scores 0.0. Mismatched lengths and non-finite components fall back
/// to neutral.
pub fn feature_similarity(math: &dyn VectorMath, a: &ProjectFeatures, b: &ProjectFeatures) -> f64 {
    let (vector_a, vector_b) = match (&a.feature_vector, &b.feature_vector) {
        (Some(va), Some(vb)) => (va, vb),
        _ => return NEUTRAL_SCORE,
    };

    if vector_a.len() != vector_b.len() {
        warn!(
            project_a_id = a.id,
            project_b_id = b.id,
            len_a = vector_a.len(),
            len_b = vector_b.len(),
            "Feature vector length mismatch, using neutral similarity"
        );
        return NEUTRAL_SCORE;
    }

    let cos = match cosine_from_norms(
        math,
        vector_a,
        vector_b,
        math.norm(vector_a),
        math.norm(vector_b),
    ) {
        Some(cos) => cos,
        None => return 0.0,
    };
    if !cos.is_finite() {
        warn!(
            project_a_id = a.id,
            project_b_id = b.id,
            "Non-finite feature vector component, using neutral similarity"
        );
        return NEUTRAL_SCORE;
    }

    (cos + 1.0) / 2.0
}
