//! Test fixtures for recommendation integration tests.

#![allow(dead_code)]

use setlist_recommend::{ProjectFeatures, Tag};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist_recommend=debug,setlist_similarity=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn deep_house() -> ProjectFeatures {
    ProjectFeatures::new(1)
        .with_name("Deep House Groove")
        .with_path("/music/projects/deep_house_groove.als")
        .with_plugins(["Serum", "FabFilter Pro-Q", "Valhalla VintageVerb"])
        .with_devices(["EQ Eight", "Glue Compressor", "Auto Filter"])
        .with_tags(["house"])
        .with_tempo(122.0)
        .with_track_count(14)
        .with_track_split(6, 8)
        .with_arrangement_length(372.0)
        .with_feature_vector(vec![0.8, 0.1, 0.4, 0.6])
}

pub fn warehouse_tool() -> ProjectFeatures {
    ProjectFeatures::new(2)
        .with_name("Warehouse Tool")
        .with_path("/music/projects/warehouse_tool.als")
        .with_plugins(["Serum", "FabFilter Pro-Q", "Ozone"])
        .with_devices(["EQ Eight", "Glue Compressor", "Saturator"])
        .with_tempo(126.0)
        .with_track_count(12)
        .with_track_split(5, 7)
        .with_arrangement_length(344.0)
        .with_feature_vector(vec![0.7, 0.2, 0.5, 0.5])
}

pub fn night_drive() -> ProjectFeatures {
    ProjectFeatures::new(3)
        .with_name("Night Drive")
        .with_path("/music/projects/night_drive.als")
        .with_plugins(["Serum", "Ozone", "Kontakt"])
        .with_devices(["EQ Eight", "Reverb"])
        .with_tempo(124.0)
        .with_track_count(10)
        .with_track_split(4, 6)
        .with_arrangement_length(310.0)
}

pub fn rainfall() -> ProjectFeatures {
    ProjectFeatures::new(4)
        .with_name("Rainfall")
        .with_plugins(["Valhalla VintageVerb", "Kontakt"])
        .with_devices(["Reverb", "Delay"])
        .with_tempo(70.0)
        .with_track_count(3)
        .with_track_split(1, 2)
        .with_arrangement_length(95.0)
}

pub fn amen_break() -> ProjectFeatures {
    ProjectFeatures::new(5)
        .with_name("Amen Break")
        .with_plugins(["Massive", "Ozone"])
        .with_devices(["Drum Buss", "Glue Compressor"])
        .with_tempo(174.0)
        .with_track_count(22)
        .with_track_split(9, 13)
        .with_arrangement_length(301.0)
}

/// Pool with overlapping plugin and device usage.
pub fn pool() -> Vec<ProjectFeatures> {
    vec![
        deep_house(),
        warehouse_tool(),
        night_drive(),
        rainfall(),
        amen_break(),
    ]
}

pub fn tags(names: &[&str]) -> Vec<Tag> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Tag::new(100 + i as i64, *name))
        .collect()
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
