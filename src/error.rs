//! Error taxonomy for artifact loading and segment prediction

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the segmentation flow.
///
/// Artifact errors are fatal at startup: without a decoded model and scaler
/// no prediction can be served. `UnknownCluster` and `SegmentTableMismatch`
/// signal a mismatch between the segment catalog and the model actually
/// deployed, which is a configuration bug rather than a user error.
#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("artifact not found at {path}")]
    ArtifactNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("artifact at {path} is not usable: {reason}")]
    ArtifactCorrupt { path: PathBuf, reason: String },

    #[error("model assigns {model_clusters} clusters but the segment catalog defines {profiles}")]
    SegmentTableMismatch {
        model_clusters: usize,
        profiles: usize,
    },

    #[error("cluster id {0} has no segment profile")]
    UnknownCluster(usize),

    #[error("prediction failed: {0}")]
    Prediction(String),
}
