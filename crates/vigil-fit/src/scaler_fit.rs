//! Fitting the per-feature affine scaler from training rows.

use tracing::debug;

use vigil_core::{ConfigError, InputError, Result, StandardScaler};

/// Fit a [`StandardScaler`] over a set of training rows.
///
/// Computes per-column means and population standard deviations.
/// Zero-variance columns get a scale factor of 1 so the transform stays
/// defined — a constant feature centers to zero instead of dividing by
/// zero.
pub fn fit_scaler(rows: &[Vec<f32>]) -> Result<StandardScaler> {
    let dimension = validate_rows(rows)?;
    let n = rows.len() as f32;

    let mut means = vec![0.0f32; dimension];
    for row in rows {
        for (mean, &value) in means.iter_mut().zip(row.iter()) {
            *mean += value;
        }
    }
    for mean in means.iter_mut() {
        *mean /= n;
    }

    let mut scales = vec![0.0f32; dimension];
    for row in rows {
        for ((scale, &mean), &value) in scales.iter_mut().zip(means.iter()).zip(row.iter()) {
            *scale += (value - mean).powi(2);
        }
    }
    for scale in scales.iter_mut() {
        *scale = (*scale / n).sqrt();
        if *scale == 0.0 {
            *scale = 1.0;
        }
    }

    debug!(rows = rows.len(), dimension, "scaler fitted");
    StandardScaler::new(means, scales)
}

/// Check a training set is nonempty, rectangular, and finite; returns the
/// column count.
pub(crate) fn validate_rows(rows: &[Vec<f32>]) -> Result<usize> {
    let first = rows.first().ok_or(InputError::Empty)?;
    if first.is_empty() {
        return Err(InputError::Empty.into());
    }
    let dimension = first.len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != dimension {
            return Err(ConfigError::InvalidParameter(format!(
                "row {} has {} features, expected {}",
                i,
                row.len(),
                dimension
            ))
            .into());
        }
        for (index, &value) in row.iter().enumerate() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { index, value }.into());
            }
        }
    }
    Ok(dimension)
}
