//! Human-readable explanation of a similarity result.

use setlist_core::defaults::EXPLANATION_LIST_LIMIT;
use setlist_core::SimilarityResult;

/// Build a deterministic, threshold-driven explanation.
///
/// The overall band always comes first, followed by plugin, device, tempo,
/// and structure clauses in that order, joined by single spaces.
pub fn explain(result: &SimilarityResult) -> String {
    let mut clauses: Vec<String> = Vec::new();

    let overall = result.overall_similarity;
    let band = if overall >= 0.8 {
        "These projects are very similar."
    } else if overall >= 0.6 {
        "These projects share many characteristics."
    } else if overall >= 0.4 {
        "These projects have some similarities."
    } else {
        "These projects are fairly different."
    };
    clauses.push(band.to_string());

    if result.plugin_similarity >= 0.5 && !result.shared_plugins.is_empty() {
        clauses.push(format!(
            "They share {} plugin(s): {}",
            result.shared_plugins.len(),
            join_limited(result.shared_plugins.iter())
        ));
    }

    if result.device_similarity >= 0.5 && !result.shared_devices.is_empty() {
        clauses.push(format!(
            "They use similar Ableton devices: {}",
            join_limited(result.shared_devices.iter())
        ));
    }

    if result.tempo_similarity >= 0.8 {
        clauses.push("They have very similar tempos.".to_string());
    }

    if result.structural_similarity >= 0.7 {
        clauses.push("They have similar project structures.".to_string());
    }

    clauses.join(" ")
}

fn join_limited<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items
        .take(EXPLANATION_LIST_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
