//! Integration tests for the recommendation engine over a small project pool.

mod fixtures;

use std::collections::HashSet;

use fixtures::{strings, tags};
use setlist_recommend::{
    stable_item_id, ItemType, ProjectFeatures, RecommendationConfig, RecommendationEngine,
    WorkflowInsights,
};

fn engine() -> RecommendationEngine {
    fixtures::init_tracing();
    let mut engine = RecommendationEngine::new();
    engine.update_project_pool(fixtures::pool());
    engine
}

fn names(set: &setlist_recommend::RecommendationSet) -> Vec<&str> {
    set.recommendations
        .iter()
        .map(|r| r.item_name.as_str())
        .collect()
}

// =============================================================================
// SIMILAR PROJECTS
// =============================================================================

#[test]
fn test_similar_projects_excludes_self_and_exclusions() {
    let mut engine = engine();
    let reference = fixtures::deep_house();
    let exclude: HashSet<i64> = [3].into_iter().collect();

    let set = engine.recommend_similar_projects(&reference, 10, &exclude);

    assert_eq!(set.context_type, ItemType::Project);
    assert_eq!(set.context_id, Some(1));
    assert_eq!(set.context_name.as_deref(), Some("Deep House Groove"));
    assert!(!set.is_empty());
    for rec in &set.recommendations {
        assert_ne!(rec.item_id, 1);
        assert_ne!(rec.item_id, 3);
        assert_eq!(rec.item_type, ItemType::Project);
        assert!(rec.score >= 0.2);
    }
    for pair in set.recommendations.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_similar_projects_reason_and_metadata() {
    let mut engine = engine();
    let set = engine.recommend_similar_projects(&fixtures::deep_house(), 10, &HashSet::new());

    let top = &set.recommendations[0];
    assert_eq!(top.item_id, 2);
    assert_eq!(top.item_name, "Warehouse Tool");
    assert!(top.reason.starts_with("These projects"));
    assert!(top.reason.contains("FabFilter Pro-Q, Serum"));

    assert_eq!(top.metadata["path"], "/music/projects/warehouse_tool.als");
    let breakdown = &top.metadata["similarity_breakdown"];
    assert_eq!(breakdown["project_b_id"], 2);
    assert_eq!(breakdown["overall_similarity"].as_f64(), Some(top.score));
}

#[test]
fn test_similar_projects_unnamed_candidate_falls_back() {
    let mut engine = RecommendationEngine::new();
    let reference = ProjectFeatures::new(1).with_plugins(["Serum"]);
    engine.update_project_pool(vec![ProjectFeatures::new(7).with_plugins(["Serum"])]);

    let set = engine.recommend_similar_projects(&reference, 5, &HashSet::new());
    assert_eq!(set.recommendations[0].item_name, "Project 7");
    assert!(set.recommendations[0].metadata["path"].is_null());
    assert!(set.context_name.is_none());
}

#[test]
fn test_similar_projects_respects_configured_minimum() {
    let mut engine = RecommendationEngine::new().with_config(RecommendationConfig {
        min_similarity: 0.99,
        ..Default::default()
    });
    engine.update_project_pool(fixtures::pool());

    let set = engine.recommend_similar_projects(&fixtures::deep_house(), 10, &HashSet::new());
    assert!(set.is_empty());
}

#[test]
fn test_similar_projects_empty_pool() {
    let mut engine = RecommendationEngine::new();
    let set = engine.recommend_similar_projects(&fixtures::deep_house(), 10, &HashSet::new());
    assert!(set.is_empty());
}

// =============================================================================
// PLUGINS AND DEVICES
// =============================================================================

#[test]
fn test_plugin_recommendations_follow_cooccurrence_counts() {
    let engine = engine();
    let set = engine.recommend_plugins(&strings(&["Serum"]), None, 5);

    assert_eq!(set.context_type, ItemType::Plugin);
    assert_eq!(set.context_name.as_deref(), Some("1 plugins"));
    assert_eq!(
        names(&set),
        vec!["FabFilter Pro-Q", "Ozone", "Valhalla VintageVerb", "Kontakt"]
    );

    let scores: Vec<f64> = set.recommendations.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![1.0, 1.0, 0.5, 0.5]);
    for rec in &set.recommendations {
        assert_eq!(rec.reason, "Often used with: Serum");
        assert_eq!(rec.item_id, stable_item_id(&rec.item_name));
        assert!((0..100_000_000).contains(&rec.item_id));
    }
}

#[test]
fn test_plugin_recommendations_truncate_to_n() {
    let engine = engine();
    let set = engine.recommend_plugins(&strings(&["Serum"]), None, 2);
    assert_eq!(names(&set), vec!["FabFilter Pro-Q", "Ozone"]);
}

#[test]
fn test_plugin_tempo_affinity_boost() {
    let engine = engine();
    let context = ProjectFeatures::new(99).with_tempo(100.0);
    let set = engine.recommend_plugins(&strings(&["Serum"]), Some(&context), 5);

    // Valhalla averages 96 BPM and Kontakt 97 BPM; both sit inside the window
    let verb = &set.recommendations[2];
    assert_eq!(verb.item_name, "Valhalla VintageVerb");
    assert!((verb.score - 0.55).abs() < 1e-9);
    assert_eq!(
        verb.reason,
        "Often used with: Serum (commonly used at ~96 BPM)"
    );
    assert_eq!(
        set.recommendations[3].reason,
        "Often used with: Serum (commonly used at ~97 BPM)"
    );

    // Pro-Q averages 124 BPM, outside the window
    assert_eq!(set.recommendations[0].reason, "Often used with: Serum");
    assert_eq!(set.recommendations[0].score, 1.0);
}

#[test]
fn test_plugin_boost_is_capped() {
    let engine = engine();
    let context = ProjectFeatures::new(99).with_tempo(124.0);
    let set = engine.recommend_plugins(&strings(&["Serum"]), Some(&context), 5);

    let pro_q = &set.recommendations[0];
    assert_eq!(pro_q.item_name, "FabFilter Pro-Q");
    assert_eq!(pro_q.score, 1.0);
    assert!(pro_q.reason.ends_with("(commonly used at ~124 BPM)"));
}

#[test]
fn test_plugin_context_without_tempo_gets_no_boost() {
    let engine = engine();
    let context = ProjectFeatures::new(99).with_tempo(0.0);
    let set = engine.recommend_plugins(&strings(&["Serum"]), Some(&context), 5);
    assert!(set.recommendations.iter().all(|r| !r.reason.contains("BPM")));
}

#[test]
fn test_plugin_reason_lists_first_three_current() {
    let mut engine = RecommendationEngine::new();
    engine.update_project_pool(vec![ProjectFeatures::new(1).with_plugins([
        "A", "B", "C", "D", "X",
    ])]);

    let set = engine.recommend_plugins(&strings(&["D", "C", "B", "A"]), None, 5);
    assert_eq!(names(&set), vec!["X"]);
    assert_eq!(set.recommendations[0].reason, "Often used with: D, C, B");
    assert_eq!(set.context_name.as_deref(), Some("4 plugins"));
}

#[test]
fn test_unknown_plugins_give_empty_set() {
    let engine = engine();
    let set = engine.recommend_plugins(&strings(&["Sylenth1"]), None, 5);
    assert!(set.is_empty());
    assert_eq!(set.context_name.as_deref(), Some("1 plugins"));
}

#[test]
fn test_device_recommendations() {
    let engine = engine();
    let set = engine.recommend_devices(&strings(&["EQ Eight"]), 2);

    assert_eq!(set.context_type, ItemType::Device);
    assert_eq!(set.context_name.as_deref(), Some("1 devices"));
    assert_eq!(names(&set), vec!["Glue Compressor", "Auto Filter"]);
    assert_eq!(set.recommendations[0].score, 1.0);
    assert_eq!(set.recommendations[1].score, 0.5);
    assert_eq!(set.recommendations[1].reason, "Often used with: EQ Eight");
    assert!(set
        .recommendations
        .iter()
        .all(|r| r.item_type == ItemType::Device));
}

#[test]
fn test_device_recommendations_never_return_current() {
    let engine = engine();
    let current = strings(&["EQ Eight", "Reverb"]);
    let set = engine.recommend_devices(&current, 10);
    assert!(!set.is_empty());
    assert!(set
        .recommendations
        .iter()
        .all(|r| !current.contains(&r.item_name)));
}

// =============================================================================
// TAGS
// =============================================================================

#[test]
fn test_tag_recommendations_combine_rules() {
    let engine = engine();
    let available = tags(&[
        "house",
        "techno",
        "dance",
        "synth",
        "electronic",
        "ambient",
        "complex",
        "full-production",
        "minimal",
    ]);

    let set = engine.recommend_tags(&fixtures::deep_house(), &available, 5);

    assert_eq!(set.context_type, ItemType::Tag);
    assert_eq!(set.context_id, Some(1));
    // "house" is already on the project, and 14 tracks is a large project
    assert_eq!(
        names(&set),
        vec!["synth", "dance", "techno", "electronic", "complex"]
    );
    assert_eq!(set.recommendations[0].reason, "Detected 'serum' plugin");
    assert_eq!(set.recommendations[1].reason, "Common for 122 BPM tracks");
    assert_eq!(set.recommendations[4].reason, "Based on 14 tracks");
    assert_eq!(set.recommendations[1].item_id, 102);
}

#[test]
fn test_existing_tag_is_never_suggested() {
    let engine = engine();
    let project = ProjectFeatures::new(50)
        .with_tempo(125.0)
        .with_tags(["house"]);
    let set = engine.recommend_tags(&project, &tags(&["house", "dance"]), 5);

    assert!(!names(&set).contains(&"house"));
    assert!(names(&set).contains(&"dance"));
}

#[test]
fn test_duplicate_tag_keeps_first_suggestion() {
    let engine = engine();
    let project = ProjectFeatures::new(51).with_plugins(["Serum", "Massive"]);
    let set = engine.recommend_tags(&project, &tags(&["synth"]), 5);

    assert_eq!(set.len(), 1);
    assert_eq!(set.recommendations[0].reason, "Detected 'serum' plugin");
}

#[test]
fn test_tags_without_tempo_or_plugins_use_structure_only() {
    let engine = engine();
    let project = ProjectFeatures::new(52).with_track_count(6);
    let set = engine.recommend_tags(&project, &tags(&["house", "standard", "synth"]), 5);
    assert_eq!(names(&set), vec!["standard"]);
}

#[test]
fn test_tags_limited_to_available() {
    let engine = engine();
    let set = engine.recommend_tags(&fixtures::deep_house(), &[], 5);
    assert!(set.is_empty());
}

// =============================================================================
// INSIGHTS AND SETS
// =============================================================================

#[test]
fn test_workflow_insights_over_pool() {
    let engine = engine();
    let insights = engine.get_workflow_insights(&fixtures::pool());

    assert_eq!(insights.most_used_plugins[0], ("Serum".to_string(), 3));
    assert_eq!(insights.most_used_plugins[1], ("Ozone".to_string(), 3));
    assert_eq!(insights.most_used_plugins.len(), 6);
    assert_eq!(insights.most_used_devices[0].0, "EQ Eight");
    assert!((insights.avg_tempo - 123.2).abs() < 1e-9);
    assert!((insights.avg_tracks - 12.2).abs() < 1e-9);
}

#[test]
fn test_workflow_insights_empty() {
    let engine = engine();
    assert_eq!(engine.get_workflow_insights(&[]), WorkflowInsights::default());
}

#[test]
fn test_recommendation_set_helpers() {
    let engine = engine();
    let set = engine.recommend_plugins(&strings(&["Serum"]), None, 5);

    let top = set.top_n(2);
    assert_eq!(top.len(), 2);
    assert!(top[0].score >= top[1].score);
    assert_eq!(set.filter_by_type(ItemType::Plugin).len(), set.len());
    assert!(set.filter_by_type(ItemType::Tag).is_empty());
}

#[test]
fn test_recommendation_set_serializes_lowercase_types() {
    let engine = engine();
    let set = engine.recommend_devices(&strings(&["EQ Eight"]), 1);
    let json = serde_json::to_value(&set).unwrap();

    assert_eq!(json["context_type"], "device");
    assert_eq!(json["recommendations"][0]["item_type"], "device");
    assert!(json.get("context_id").is_none());
}
