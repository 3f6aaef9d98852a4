//! Feature normalization with a previously fitted affine scaler.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, InputError, Result};

/// A fitted per-feature affine scaler: `(x - mean) / scale`.
///
/// The mean and scale vectors come from an offline fit over the training
/// data; `transform` applies them to incoming rows without mutating any
/// state. Dimensionality and feature order must match the fit-time schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f32>,
    scales: Vec<f32>,
}

impl StandardScaler {
    /// Build a scaler from fitted mean and scale vectors.
    ///
    /// Fails if the vectors disagree in length, a mean is non-finite, or a
    /// scale factor is zero or non-finite.
    pub fn new(means: Vec<f32>, scales: Vec<f32>) -> Result<Self> {
        if means.len() != scales.len() {
            return Err(ConfigError::MisalignedScaler {
                means: means.len(),
                scales: scales.len(),
            }
            .into());
        }
        for (index, &value) in means.iter().enumerate() {
            if !value.is_finite() {
                return Err(ConfigError::InvalidMean { index, value }.into());
            }
        }
        for (index, &value) in scales.iter().enumerate() {
            if !value.is_finite() || value == 0.0 {
                return Err(ConfigError::InvalidScale { index, value }.into());
            }
        }
        Ok(Self { means, scales })
    }

    /// The identity transform for `dimension` features (mean 0, scale 1).
    pub fn identity(dimension: usize) -> Self {
        Self {
            means: vec![0.0; dimension],
            scales: vec![1.0; dimension],
        }
    }

    /// Number of features this scaler was fitted on.
    pub fn dimension(&self) -> usize {
        self.means.len()
    }

    /// Fitted per-feature means.
    pub fn means(&self) -> &[f32] {
        &self.means
    }

    /// Fitted per-feature scale factors.
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Validate a raw row against this scaler's schema.
    ///
    /// Rejects empty rows, dimension mismatches, and non-finite values —
    /// before any downstream work happens.
    pub fn validate(&self, features: &[f32]) -> Result<()> {
        if features.is_empty() {
            return Err(InputError::Empty.into());
        }
        if features.len() != self.dimension() {
            return Err(InputError::DimensionMismatch {
                expected: self.dimension(),
                actual: features.len(),
            }
            .into());
        }
        for (index, &value) in features.iter().enumerate() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { index, value }.into());
            }
        }
        Ok(())
    }

    /// Apply the fitted transform to one raw row.
    ///
    /// Pure function: validates, then returns the scaled row.
    pub fn transform(&self, features: &[f32]) -> Result<Vec<f32>> {
        self.validate(features)?;

        Ok(features
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(&x, (&mean, &scale))| (x - mean) / scale)
            .collect())
    }
}
