//! Integration tests for the full prediction flow

use std::fs;
use std::path::{Path, PathBuf};

use shopper_spectrum::{
    explain, predict_segment, Artifacts, CustomerFeatures, SegmentationError, SEGMENT_PROFILES,
};
use tempfile::tempdir;

const SCALER_JSON: &str = r#"{"mean": [60.56, 50.2], "scale": [26.2647, 25.8235]}"#;
const MODEL_JSON: &str = r#"{
    "n_clusters": 5,
    "cluster_centers": [
        [-0.200270, -0.027107],
        [0.987637, 1.235306],
        [-1.327255, 1.130753],
        [1.052362, -1.281781],
        [-1.304411, -1.134625]
    ]
}"#;

/// Write a valid artifact pair into `dir`
fn write_artifacts(dir: &Path) {
    fs::write(dir.join("scaler.json"), SCALER_JSON).unwrap();
    fs::write(dir.join("kmeans_model.json"), MODEL_JSON).unwrap();
}

fn shipped_artifact_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts")
}

#[test]
fn test_end_to_end_prediction() {
    let dir = tempdir().unwrap();
    write_artifacts(dir.path());

    let artifacts = Artifacts::load_from(dir.path()).unwrap();

    let customer = CustomerFeatures {
        income: 87.0,
        spending_score: 82.0,
    };
    let cluster = predict_segment(&artifacts.scaler, &artifacts.model, &customer).unwrap();

    assert_eq!(SEGMENT_PROFILES[cluster].name, "Premium Customers");

    let explanation = explain(cluster, customer.income, customer.spending_score).unwrap();
    assert!(explanation.headline.contains("Premium Customers"));
    assert!(explanation.justification.contains("87"));
    assert!(explanation.justification.contains("82"));
    assert_eq!(explanation.strategies.len(), 3);
}

#[test]
fn test_each_centroid_resolves_to_its_own_segment() {
    let dir = tempdir().unwrap();
    write_artifacts(dir.path());

    let artifacts = Artifacts::load_from(dir.path()).unwrap();

    for (id, profile) in SEGMENT_PROFILES.iter().enumerate() {
        let customer = CustomerFeatures {
            income: profile.centroid_income,
            spending_score: profile.centroid_spend,
        };
        let cluster = predict_segment(&artifacts.scaler, &artifacts.model, &customer).unwrap();
        assert_eq!(
            cluster, id,
            "centroid of {} resolved to cluster {}",
            profile.name, cluster
        );
    }
}

#[test]
fn test_boundary_inputs_are_accepted() {
    let dir = tempdir().unwrap();
    write_artifacts(dir.path());

    let artifacts = Artifacts::load_from(dir.path()).unwrap();

    for (income, score) in [(10.0, 1.0), (10.0, 100.0), (140.0, 1.0), (140.0, 100.0)] {
        let customer = CustomerFeatures {
            income,
            spending_score: score,
        };
        let cluster = predict_segment(&artifacts.scaler, &artifacts.model, &customer).unwrap();
        assert!(cluster < 5);
    }
}

#[test]
fn test_prediction_is_deterministic() {
    let dir = tempdir().unwrap();
    write_artifacts(dir.path());

    let artifacts = Artifacts::load_from(dir.path()).unwrap();
    let customer = CustomerFeatures {
        income: 55.0,
        spending_score: 49.0,
    };

    let first = predict_segment(&artifacts.scaler, &artifacts.model, &customer).unwrap();
    let second = predict_segment(&artifacts.scaler, &artifacts.model, &customer).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_directory_reports_not_found() {
    let dir = tempdir().unwrap();

    let result = Artifacts::load_from(&dir.path().join("does-not-exist"));
    assert!(matches!(
        result,
        Err(SegmentationError::ArtifactNotFound { .. })
    ));
}

#[test]
fn test_shipped_artifacts_load_and_predict() {
    let artifacts = Artifacts::load_from(&shipped_artifact_dir()).unwrap();

    assert_eq!(artifacts.model.n_clusters(), SEGMENT_PROFILES.len());

    let customer = CustomerFeatures {
        income: 87.0,
        spending_score: 82.0,
    };
    let cluster = predict_segment(&artifacts.scaler, &artifacts.model, &customer).unwrap();
    assert_eq!(SEGMENT_PROFILES[cluster].name, "Premium Customers");
}
