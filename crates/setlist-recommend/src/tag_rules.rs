//! Rule tables for tag suggestions.
//!
//! Each rule yields `(tag name, score)` pairs. A pair only becomes a
//! recommendation when the tag exists in the host's tag list.

use std::collections::HashMap;

use setlist_core::{ItemType, Recommendation, Tag};
use tracing::trace;

type Suggestions = &'static [(&'static str, f64)];

/// Half-open `[low, high)` tempo bands. Only the first matching band applies.
const TEMPO_BANDS: &[(f64, f64, Suggestions)] = &[
    (60.0, 80.0, &[("ambient", 0.7), ("downtempo", 0.8), ("chill", 0.6)]),
    (80.0, 100.0, &[("hip-hop", 0.7), ("r&b", 0.6), ("lo-fi", 0.5)]),
    (100.0, 120.0, &[("house", 0.7), ("pop", 0.6), ("indie", 0.5)]),
    (120.0, 130.0, &[("house", 0.8), ("techno", 0.6), ("dance", 0.7)]),
    (130.0, 145.0, &[("techno", 0.8), ("trance", 0.6), ("progressive", 0.5)]),
    (145.0, 160.0, &[("drum-and-bass", 0.7), ("jungle", 0.6)]),
    (160.0, 200.0, &[("drum-and-bass", 0.8), ("hardcore", 0.6)]),
];

/// Lowercase substrings matched against lowercased plugin names, in order.
const PLUGIN_PATTERNS: &[(&str, Suggestions)] = &[
    ("serum", &[("synth", 0.8), ("electronic", 0.6)]),
    ("massive", &[("synth", 0.8), ("electronic", 0.6)]),
    ("guitar", &[("guitar", 0.9), ("rock", 0.5)]),
    ("bass", &[("bass", 0.8)]),
    ("drum", &[("drums", 0.7)]),
    ("vocal", &[("vocals", 0.8)]),
    ("reverb", &[("ambient", 0.4)]),
];

const SMALL_PROJECT: Suggestions = &[("minimal", 0.6), ("simple", 0.5), ("sketch", 0.5)];
const MEDIUM_PROJECT: Suggestions = &[("standard", 0.4)];
const LARGE_PROJECT: Suggestions = &[("complex", 0.6), ("full-production", 0.5)];

/// Tag name → tag. On duplicate names the last tag wins.
pub type TagLookup<'a> = HashMap<&'a str, &'a Tag>;

pub fn tag_lookup(tags: &[Tag]) -> TagLookup<'_> {
    tags.iter().map(|t| (t.name.as_str(), t)).collect()
}

fn to_recommendations(
    suggestions: Suggestions,
    lookup: &TagLookup<'_>,
    reason: &str,
    out: &mut Vec<Recommendation>,
) {
    for (name, score) in suggestions {
        if let Some(tag) = lookup.get(name) {
            out.push(Recommendation {
                item_id: tag.id,
                item_type: ItemType::Tag,
                item_name: tag.name.clone(),
                score: *score,
                reason: reason.to_string(),
                metadata: Default::default(),
            });
        }
    }
}

/// Genre tags for the tempo band containing `tempo`.
pub fn tempo_tags(tempo: f64, lookup: &TagLookup<'_>) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if let Some(&(low, high, suggestions)) = TEMPO_BANDS
        .iter()
        .find(|(low, high, _)| *low <= tempo && tempo < *high)
    {
        trace!(tempo, low, high, "Tempo band matched");
        let reason = format!("Common for {:.0} BPM tracks", tempo);
        to_recommendations(suggestions, lookup, &reason, &mut out);
    }
    out
}

/// Tags implied by plugin names.
pub fn plugin_tags<'p, I>(plugins: I, lookup: &TagLookup<'_>) -> Vec<Recommendation>
where
    I: IntoIterator<Item = &'p String>,
{
    let lowered: Vec<String> = plugins.into_iter().map(|p| p.to_lowercase()).collect();
    let mut out = Vec::new();
    for &(pattern, suggestions) in PLUGIN_PATTERNS {
        if lowered.iter().any(|p| p.contains(pattern)) {
            trace!(pattern, "Plugin pattern matched");
            let reason = format!("Detected '{}' plugin", pattern);
            to_recommendations(suggestions, lookup, &reason, &mut out);
        }
    }
    out
}

/// Tags implied by project size.
pub fn structure_tags(track_count: u32, lookup: &TagLookup<'_>) -> Vec<Recommendation> {
    let suggestions = match track_count {
        0..=4 => SMALL_PROJECT,
        5..=10 => MEDIUM_PROJECT,
        _ => LARGE_PROJECT,
    };
    let mut out = Vec::new();
    let reason = format!("Based on {} tracks", track_count);
    to_recommendations(suggestions, lookup, &reason, &mut out);
    out
}
