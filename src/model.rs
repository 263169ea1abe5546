//! Scaler and K-Means inference over pre-trained parameters

use ndarray::{Array1, Array2};

use crate::error::SegmentationError;

/// Raw customer features, in the order the scaler was fitted with:
/// annual income (k$) first, then spending score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerFeatures {
    pub income: f64,
    pub spending_score: f64,
}

impl CustomerFeatures {
    /// Flatten into the feature row the scaler expects.
    pub fn to_row(&self) -> Array1<f64> {
        Array1::from_vec(vec![self.income, self.spending_score])
    }
}

/// Feature-wise normalization into the space the model was trained on.
pub trait FeatureScaler {
    fn transform(&self, features: &CustomerFeatures) -> crate::Result<Array1<f64>>;
}

/// Cluster assignment for an already-scaled point.
pub trait ClusterModel {
    fn assign(&self, point: &Array1<f64>) -> crate::Result<usize>;
}

/// Standard scaler with parameters fitted offline
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Build from fitted parameters. Callers are expected to have validated
    /// that `mean` and `scale` share a width and that `scale` has no zero or
    /// non-finite entries.
    pub fn from_parts(mean: Array1<f64>, scale: Array1<f64>) -> Self {
        StandardScaler { mean, scale }
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &CustomerFeatures) -> crate::Result<Array1<f64>> {
        let row = features.to_row();
        if row.len() != self.mean.len() {
            return Err(SegmentationError::Prediction(format!(
                "scaler expects {} features, got {}",
                self.mean.len(),
                row.len()
            )));
        }
        Ok((&row - &self.mean) / &self.scale)
    }
}

/// K-Means model reduced to what inference needs: the fitted centroids,
/// in scaled feature space.
#[derive(Debug, Clone)]
pub struct KMeansModel {
    n_clusters: usize,
    centroids: Array2<f64>,
}

impl KMeansModel {
    /// Build from fitted parameters. `centroids` has shape
    /// `(n_clusters, n_features)`.
    pub fn from_parts(n_clusters: usize, centroids: Array2<f64>) -> Self {
        KMeansModel {
            n_clusters,
            centroids,
        }
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    pub fn n_features(&self) -> usize {
        self.centroids.ncols()
    }

    pub fn centroids(&self) -> &Array2<f64> {
        &self.centroids
    }
}

impl ClusterModel for KMeansModel {
    /// Assign the nearest centroid by Euclidean distance.
    ///
    /// A point with no finite distance to any centroid (e.g. NaN
    /// coordinates) is an error, not a silent assignment to cluster 0.
    fn assign(&self, point: &Array1<f64>) -> crate::Result<usize> {
        if point.len() != self.centroids.ncols() {
            return Err(SegmentationError::Prediction(format!(
                "model expects {} features, got {}",
                self.centroids.ncols(),
                point.len()
            )));
        }

        let mut best: Option<(usize, f64)> = None;

        for (cluster_idx, centroid) in self.centroids.outer_iter().enumerate() {
            let distance: f64 = point
                .iter()
                .zip(centroid.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>()
                .sqrt();

            if distance.is_finite() && best.map_or(true, |(_, d)| distance < d) {
                best = Some((cluster_idx, distance));
            }
        }

        match best {
            Some((cluster_idx, _)) => Ok(cluster_idx),
            None => Err(SegmentationError::Prediction(
                "point has no finite distance to any centroid".to_string(),
            )),
        }
    }
}

/// Predict the segment for raw customer values.
///
/// # Arguments
/// * `scaler` - Fitted feature scaler
/// * `model` - Fitted clustering model
/// * `features` - Raw income and spending score
///
/// # Returns
/// * Cluster id of the nearest centroid in scaled space
pub fn predict_segment<S, M>(
    scaler: &S,
    model: &M,
    features: &CustomerFeatures,
) -> crate::Result<usize>
where
    S: FeatureScaler + ?Sized,
    M: ClusterModel + ?Sized,
{
    let scaled = scaler.transform(features)?;
    model.assign(&scaled)
}
