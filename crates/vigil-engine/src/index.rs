//! Spatial index over the model's core points.
//!
//! The engine only ever needs one query shape: "all core points within a
//! fixed radius of this point". That narrow interface lives behind the
//! [`CorePointIndex`] trait so a different index (k-d tree, grid) can be
//! swapped in without touching the assignment logic.

use vigil_core::{ClusterLabel, ClusterModel, InputError, Result};

/// A core point found inside the query radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the core point in the original fit ordering.
    pub index: usize,
    /// Cluster label of that core point.
    pub label: ClusterLabel,
    /// Euclidean distance from the query point.
    pub distance: f32,
}

/// Radius query over an immutable core-point set.
///
/// Implementations are read-only after construction and safe to share
/// across threads without locking.
pub trait CorePointIndex: Send + Sync {
    /// Dimensionality of the indexed points.
    fn dimension(&self) -> usize;

    /// Number of indexed core points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All core points within `radius` of `point`, in fit ordering.
    ///
    /// Fails only on a dimensionality mismatch; an empty result is a valid
    /// answer, not an error.
    fn radius_query(&self, point: &[f32], radius: f32) -> Result<Vec<Neighbor>>;
}

/// Brute-force linear scan over the core points.
///
/// Core-point counts for a fitted health model are small (hundreds, not
/// millions), so a scan beats tree structures here — same reasoning as
/// keeping an in-memory store brute-force for small datasets.
#[derive(Debug, Clone)]
pub struct LinearScanIndex {
    points: Vec<Vec<f32>>,
    labels: Vec<ClusterLabel>,
    dimension: usize,
}

impl LinearScanIndex {
    /// Build the index from a fitted model's core points.
    pub fn from_model(model: &ClusterModel) -> Self {
        Self {
            points: model.core_points().to_vec(),
            labels: model.labels().to_vec(),
            dimension: model.dimension(),
        }
    }
}

impl CorePointIndex for LinearScanIndex {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn radius_query(&self, point: &[f32], radius: f32) -> Result<Vec<Neighbor>> {
        if point.len() != self.dimension {
            return Err(InputError::DimensionMismatch {
                expected: self.dimension,
                actual: point.len(),
            }
            .into());
        }

        let neighbors = self
            .points
            .iter()
            .zip(self.labels.iter())
            .enumerate()
            .filter_map(|(index, (core, &label))| {
                let distance = euclidean_distance(point, core);
                (distance <= radius).then_some(Neighbor {
                    index,
                    label,
                    distance,
                })
            })
            .collect();

        Ok(neighbors)
    }
}

/// Compute Euclidean distance between two vectors.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::VigilError;

    fn model() -> ClusterModel {
        ClusterModel::new(
            vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![10.0, 10.0]],
            vec![
                ClusterLabel::new(0),
                ClusterLabel::new(1),
                ClusterLabel::new(1),
            ],
            5.0,
        )
        .unwrap()
    }

    #[test]
    fn euclidean_distance_matches_pythagoras() {
        assert!((euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-6);
        assert!(euclidean_distance(&[1.0, 1.0], &[1.0, 1.0]) < 1e-6);
    }

    #[test]
    fn radius_query_returns_points_in_fit_order() {
        let index = LinearScanIndex::from_model(&model());
        let neighbors = index.radius_query(&[0.0, 0.0], 5.0).unwrap();

        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].index, 0);
        assert_eq!(neighbors[1].index, 1);
        assert!((neighbors[1].distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn radius_query_can_come_back_empty() {
        let index = LinearScanIndex::from_model(&model());
        let neighbors = index.radius_query(&[-100.0, -100.0], 5.0).unwrap();
        assert!(neighbors.is_empty());
    }

    #[test]
    fn radius_query_rejects_wrong_dimension() {
        let index = LinearScanIndex::from_model(&model());
        let err = index.radius_query(&[0.0], 5.0).unwrap_err();
        assert!(matches!(err, VigilError::Input(_)));
    }
}
