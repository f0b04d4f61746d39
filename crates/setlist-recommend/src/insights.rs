//! Aggregate usage statistics over a project list.

use setlist_core::defaults::INSIGHT_LIST_LIMIT;
use setlist_core::{OrderedCounter, ProjectFeatures, VectorMath, WorkflowInsights};

/// Most used plugins and devices plus mean tempo and track count.
///
/// Projects with an unknown (or zero) tempo are left out of the tempo mean;
/// projects with zero tracks are left out of the track mean. An empty list
/// yields the default (all empty, both means 0).
pub fn workflow_insights(math: &dyn VectorMath, projects: &[ProjectFeatures]) -> WorkflowInsights {
    if projects.is_empty() {
        return WorkflowInsights::default();
    }

    let mut plugins = OrderedCounter::new();
    let mut devices = OrderedCounter::new();
    let mut tempos = Vec::new();
    let mut track_counts = Vec::new();

    for project in projects {
        for plugin in &project.plugins {
            plugins.increment(plugin);
        }
        for device in &project.devices {
            devices.increment(device);
        }
        if let Some(tempo) = project.known_tempo() {
            tempos.push(tempo);
        }
        if project.track_count > 0 {
            track_counts.push(f64::from(project.track_count));
        }
    }

    WorkflowInsights {
        most_used_plugins: plugins.most_common(INSIGHT_LIST_LIMIT),
        most_used_devices: devices.most_common(INSIGHT_LIST_LIMIT),
        avg_tempo: math.mean(&tempos).unwrap_or(0.0),
        avg_tracks: math.mean(&track_counts).unwrap_or(0.0),
    }
}
