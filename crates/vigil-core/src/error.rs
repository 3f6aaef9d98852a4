//! Error types for Vigil operations.
//!
//! Validation failures are surfaced as values, never panics: batch paths
//! return one `Result` per row so a malformed reading cannot abort its
//! siblings.

use thiserror::Error;

/// Result type for Vigil operations.
pub type Result<T> = std::result::Result<T, VigilError>;

/// Errors that can occur during Vigil operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VigilError {
    /// A feature row failed validation. Raised before any state mutation.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// A model, scaler, or tier mapping was rejected at construction time.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The assigner was invoked before a cluster model was installed.
    #[error("cluster model not loaded")]
    ModelNotLoaded,

    /// An artifact failed to serialize or deserialize (wrapped).
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VigilError {
    fn from(e: serde_json::Error) -> Self {
        VigilError::Serialization(e.to_string())
    }
}

/// Validation errors for incoming feature rows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A feature value is NaN or infinite.
    #[error("feature {index} is not finite ({value})")]
    NonFinite { index: usize, value: f32 },

    /// Row dimensionality does not match the fitted scaler/model.
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The row contains no features at all.
    #[error("feature row is empty")]
    Empty,
}

/// Construction-time validation errors for fitted artifacts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Neighborhood radius must be finite and non-negative.
    #[error("invalid neighborhood radius: {0}")]
    InvalidRadius(f32),

    /// Core point and label arrays must be the same length.
    #[error("model arrays misaligned: {points} core points, {labels} labels")]
    MisalignedModel { points: usize, labels: usize },

    /// Core points must share one dimensionality.
    #[error("core point {index} has {actual} features, expected {expected}")]
    RaggedModel {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A core point carries the noise label, which is reserved.
    #[error("core point {index} carries the noise label")]
    NoiseCorePoint { index: usize },

    /// The model contains no core points.
    #[error("cluster model has no core points")]
    EmptyModel,

    /// Scaler mean/scale vectors disagree in length.
    #[error("scaler vectors misaligned: {means} means, {scales} scales")]
    MisalignedScaler { means: usize, scales: usize },

    /// A scale factor is zero or non-finite.
    #[error("scale factor {index} is invalid ({value})")]
    InvalidScale { index: usize, value: f32 },

    /// A scaler mean is non-finite.
    #[error("mean {index} is not finite ({value})")]
    InvalidMean { index: usize, value: f32 },

    /// The tier mapping has no entries.
    #[error("tier mapping is empty")]
    EmptyTierMap,

    /// A fitting parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

// Convenience constructors
impl VigilError {
    pub fn non_finite(index: usize, value: f32) -> Self {
        VigilError::Input(InputError::NonFinite { index, value })
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        VigilError::Input(InputError::DimensionMismatch { expected, actual })
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        VigilError::Config(ConfigError::InvalidParameter(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = VigilError::dimension_mismatch(6, 4);
        assert!(err.to_string().contains("expected 6"));

        let err = VigilError::non_finite(2, f32::NAN);
        assert!(err.to_string().contains("feature 2"));

        let err = VigilError::ModelNotLoaded;
        assert!(err.to_string().contains("not loaded"));
    }

    #[test]
    fn config_errors_fold_into_vigil_error() {
        let err: VigilError = ConfigError::EmptyModel.into();
        assert!(matches!(err, VigilError::Config(ConfigError::EmptyModel)));
    }

    #[test]
    fn serde_failures_fold_into_vigil_error() {
        let bad = serde_json::from_str::<Vec<f32>>("not json").unwrap_err();
        let err: VigilError = bad.into();
        assert!(matches!(err, VigilError::Serialization(_)));
    }
}
