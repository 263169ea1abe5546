//! Shopper Spectrum: customer segment prediction from pre-trained artifacts
//!
//! This library loads a fitted K-Means model and standard scaler exported by
//! the offline training pipeline, assigns customers to one of five segments
//! from annual income and spending score, and renders segment guidance.

pub mod artifacts;
pub mod cli;
pub mod error;
pub mod model;
pub mod report;
pub mod segments;
pub mod viz;

// Re-export public items for easier access
pub use artifacts::{default_artifact_dir, Artifacts};
pub use cli::Args;
pub use error::SegmentationError;
pub use model::{
    predict_segment, ClusterModel, CustomerFeatures, FeatureScaler, KMeansModel, StandardScaler,
};
pub use report::{explain, print_report, Explanation};
pub use segments::{lookup, SegmentProfile, SEGMENT_PROFILES};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SegmentationError>;
