//! The process-wide artifact cache must load exactly once.
//!
//! Kept in its own test binary so the cache state cannot leak into other
//! integration tests.

use std::fs;

use shopper_spectrum::Artifacts;
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

#[test]
fn test_shared_artifacts_load_once() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("scaler.json"), SCALER_JSON).unwrap();
    fs::write(dir.path().join("kmeans_model.json"), MODEL_JSON).unwrap();

    let first = Artifacts::shared(dir.path()).unwrap();

    // Removing the backing files proves a second call cannot re-read disk.
    fs::remove_file(dir.path().join("scaler.json")).unwrap();
    fs::remove_file(dir.path().join("kmeans_model.json")).unwrap();

    let second = Artifacts::shared(dir.path()).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.model.n_clusters(), 5);
    assert_eq!(second.scaler.n_features(), 2);
}
