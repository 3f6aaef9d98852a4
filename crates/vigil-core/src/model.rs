//! The fitted clustering artifact consumed by the streaming engine.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::ClusterLabel;

/// A density-clustering model fit offline.
///
/// Holds the retained core points (already in scaled coordinates), a label
/// array aligned to core-point indices, and the neighborhood radius `eps`
/// shared by all core points. The artifact is immutable once constructed;
/// where it came from (and how it is persisted) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterModel {
    core_points: Vec<Vec<f32>>,
    labels: Vec<ClusterLabel>,
    eps: f32,
}

impl ClusterModel {
    /// Assemble a model from its fitted parts.
    ///
    /// Validates that the arrays align, all core points share one
    /// dimensionality, `eps` is finite and non-negative, and no core point
    /// carries the reserved noise label (density fitting never produces
    /// one — an artifact that does is corrupt).
    pub fn new(core_points: Vec<Vec<f32>>, labels: Vec<ClusterLabel>, eps: f32) -> Result<Self> {
        if core_points.is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        if core_points.len() != labels.len() {
            return Err(ConfigError::MisalignedModel {
                points: core_points.len(),
                labels: labels.len(),
            }
            .into());
        }
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConfigError::InvalidRadius(eps).into());
        }

        let expected = core_points[0].len();
        for (index, point) in core_points.iter().enumerate() {
            if point.len() != expected {
                return Err(ConfigError::RaggedModel {
                    index,
                    expected,
                    actual: point.len(),
                }
                .into());
            }
        }
        for (index, label) in labels.iter().enumerate() {
            if label.is_noise() {
                return Err(ConfigError::NoiseCorePoint { index }.into());
            }
        }

        Ok(Self {
            core_points,
            labels,
            eps,
        })
    }

    /// Core points in their original fit ordering.
    pub fn core_points(&self) -> &[Vec<f32>] {
        &self.core_points
    }

    /// Labels aligned to [`core_points`](Self::core_points).
    pub fn labels(&self) -> &[ClusterLabel] {
        &self.labels
    }

    /// Neighborhood radius shared by all core points.
    pub fn eps(&self) -> f32 {
        self.eps
    }

    /// Dimensionality of the core points.
    pub fn dimension(&self) -> usize {
        self.core_points[0].len()
    }

    /// Number of retained core points.
    pub fn len(&self) -> usize {
        self.core_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core_points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VigilError;

    fn label(v: i32) -> ClusterLabel {
        ClusterLabel::new(v)
    }

    #[test]
    fn builds_from_aligned_parts() {
        let model = ClusterModel::new(
            vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            vec![label(0), label(1)],
            0.5,
        )
        .unwrap();

        assert_eq!(model.len(), 2);
        assert_eq!(model.dimension(), 2);
        assert_eq!(model.eps(), 0.5);
    }

    #[test]
    fn rejects_noise_core_point() {
        let err = ClusterModel::new(
            vec![vec![0.0], vec![1.0]],
            vec![label(0), ClusterLabel::NOISE],
            1.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VigilError::Config(ConfigError::NoiseCorePoint { index: 1 })
        ));
    }

    #[test]
    fn rejects_misaligned_labels() {
        let err = ClusterModel::new(vec![vec![0.0]], vec![label(0), label(1)], 1.0).unwrap_err();
        assert!(matches!(
            err,
            VigilError::Config(ConfigError::MisalignedModel { points: 1, labels: 2 })
        ));
    }

    #[test]
    fn rejects_bad_radius() {
        let points = vec![vec![0.0]];
        let labels = vec![label(0)];
        for eps in [-1.0, f32::NAN, f32::INFINITY] {
            let err = ClusterModel::new(points.clone(), labels.clone(), eps).unwrap_err();
            assert!(matches!(
                err,
                VigilError::Config(ConfigError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn rejects_ragged_points() {
        let err = ClusterModel::new(
            vec![vec![0.0, 0.0], vec![1.0]],
            vec![label(0), label(0)],
            1.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VigilError::Config(ConfigError::RaggedModel { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_model() {
        let err = ClusterModel::new(vec![], vec![], 1.0).unwrap_err();
        assert!(matches!(err, VigilError::Config(ConfigError::EmptyModel)));
    }
}
