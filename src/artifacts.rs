//! Artifact loading and the process-wide artifact cache

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ndarray::{Array1, Array2};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::SegmentationError;
use crate::model::{KMeansModel, StandardScaler};
use crate::segments::SEGMENT_PROFILES;

/// Fixed artifact file names, as exported by the training pipeline.
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "kmeans_model.json";

/// The deserialized scaler/model pair.
///
/// Loaded once per process via [`Artifacts::shared`], or explicitly via
/// [`Artifacts::load_from`] when the caller wants to own the pair (tests,
/// alternate deployments). Read-only after construction.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub scaler: StandardScaler,
    pub model: KMeansModel,
}

/// On-disk shape of `scaler.json`
#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// On-disk shape of `kmeans_model.json`
#[derive(Debug, Deserialize)]
struct ModelFile {
    n_clusters: usize,
    cluster_centers: Vec<Vec<f64>>,
}

impl Artifacts {
    /// Load and validate both artifacts from `dir`.
    ///
    /// # Errors
    /// * `ArtifactNotFound` if either file cannot be opened
    /// * `ArtifactCorrupt` if decoding fails or the decoded shapes are
    ///   inconsistent (mean/scale width mismatch, centroid width differing
    ///   from the scaler, zero or non-finite scale entries)
    /// * `SegmentTableMismatch` if the model's cluster count differs from
    ///   the segment catalog
    pub fn load_from(dir: &Path) -> crate::Result<Self> {
        let scaler = load_scaler(&dir.join(SCALER_FILE))?;
        let model = load_model(&dir.join(MODEL_FILE), scaler.n_features())?;

        // Catch a catalog/model mismatch at startup instead of letting it
        // surface as UnknownCluster on a live request.
        if model.n_clusters() != SEGMENT_PROFILES.len() {
            return Err(SegmentationError::SegmentTableMismatch {
                model_clusters: model.n_clusters(),
                profiles: SEGMENT_PROFILES.len(),
            });
        }

        info!(
            clusters = model.n_clusters(),
            features = scaler.n_features(),
            dir = %dir.display(),
            "artifacts loaded"
        );

        Ok(Artifacts { scaler, model })
    }

    /// Process-wide cached pair.
    ///
    /// The first successful call reads disk; every later call returns the
    /// same pair without touching the files. There is no invalidation: a
    /// process restart is required to pick up new artifacts.
    pub fn shared(dir: &Path) -> crate::Result<&'static Artifacts> {
        static CACHE: OnceLock<Artifacts> = OnceLock::new();

        if let Some(cached) = CACHE.get() {
            return Ok(cached);
        }

        let loaded = Artifacts::load_from(dir)?;
        Ok(CACHE.get_or_init(|| loaded))
    }
}

/// Directory the artifacts are expected in: `artifacts/` beside the
/// executable when that exists, otherwise under the working directory.
pub fn default_artifact_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let candidate = exe_dir.join("artifacts");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from("artifacts")
}

fn open(path: &Path) -> crate::Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(source) => Err(SegmentationError::ArtifactNotFound {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn corrupt(path: &Path, reason: String) -> SegmentationError {
    SegmentationError::ArtifactCorrupt {
        path: path.to_path_buf(),
        reason,
    }
}

fn load_scaler(path: &Path) -> crate::Result<StandardScaler> {
    let raw: ScalerFile = serde_json::from_reader(open(path)?)
        .map_err(|source| corrupt(path, source.to_string()))?;

    if raw.mean.is_empty() || raw.mean.len() != raw.scale.len() {
        return Err(corrupt(
            path,
            format!(
                "mean width {} does not match scale width {}",
                raw.mean.len(),
                raw.scale.len()
            ),
        ));
    }
    if raw.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
        return Err(corrupt(
            path,
            "scale entries must be finite and non-zero".to_string(),
        ));
    }

    debug!(path = %path.display(), features = raw.mean.len(), "scaler decoded");

    Ok(StandardScaler::from_parts(
        Array1::from_vec(raw.mean),
        Array1::from_vec(raw.scale),
    ))
}

fn load_model(path: &Path, n_features: usize) -> crate::Result<KMeansModel> {
    let raw: ModelFile = serde_json::from_reader(open(path)?)
        .map_err(|source| corrupt(path, source.to_string()))?;

    if raw.n_clusters == 0 {
        return Err(corrupt(path, "model declares zero clusters".to_string()));
    }
    if raw.cluster_centers.len() != raw.n_clusters {
        return Err(corrupt(
            path,
            format!(
                "model declares {} clusters but carries {} centroids",
                raw.n_clusters,
                raw.cluster_centers.len()
            ),
        ));
    }
    if raw.cluster_centers.iter().any(|row| row.len() != n_features) {
        return Err(corrupt(
            path,
            format!("centroid width does not match the scaler's {n_features} features"),
        ));
    }

    let flat: Vec<f64> = raw.cluster_centers.into_iter().flatten().collect();
    let centroids = Array2::from_shape_vec((raw.n_clusters, n_features), flat)
        .map_err(|err| corrupt(path, err.to_string()))?;

    debug!(path = %path.display(), clusters = raw.n_clusters, "model decoded");

    Ok(KMeansModel::from_parts(raw.n_clusters, centroids))
}
