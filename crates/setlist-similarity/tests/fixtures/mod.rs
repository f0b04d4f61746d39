//! Test fixtures for similarity integration tests.
//!
//! A small library of projects with realistic production metadata.

#![allow(dead_code)]

use setlist_similarity::ProjectFeatures;

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist_similarity=debug".into()),
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
        .with_tempo(122.0)
        .with_track_count(14)
        .with_track_split(6, 8)
        .with_arrangement_length(372.0)
        .with_feature_vector(vec![0.8, 0.1, 0.4, 0.6])
}

pub fn tech_house() -> ProjectFeatures {
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

pub fn ambient_sketch() -> ProjectFeatures {
    ProjectFeatures::new(3)
        .with_name("Fog Study")
        .with_plugins(["Omnisphere", "Valhalla Supermassive"])
        .with_devices(["Reverb", "Echo"])
        .with_tempo(70.0)
        .with_track_count(3)
        .with_track_split(1, 2)
        .with_arrangement_length(95.0)
        .with_feature_vector(vec![-0.3, 0.9, -0.1, 0.2])
}

pub fn drum_and_bass() -> ProjectFeatures {
    ProjectFeatures::new(4)
        .with_name("Roller")
        .with_plugins(["Serum", "Kilohearts Disperser", "Ozone"])
        .with_devices(["Drum Buss", "EQ Eight"])
        .with_tempo(174.0)
        .with_track_count(22)
        .with_track_split(9, 13)
        .with_arrangement_length(301.0)
        .with_feature_vector(vec![0.9, -0.4, 0.3, 0.8])
}

/// A project with nothing but an id.
pub fn bare(id: i64) -> ProjectFeatures {
    ProjectFeatures::new(id)
}

pub fn library() -> Vec<ProjectFeatures> {
    vec![deep_house(), tech_house(), ambient_sketch(), drum_and_bass(), bare(5)]
}
