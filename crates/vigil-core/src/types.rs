//! Shared types used across all Vigil crates.

use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Opaque identifier for a monitored patient.
///
/// Supplied by the caller; Vigil attaches no meaning to its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PatientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cluster label from the offline density fit.
///
/// Non-negative values name density-connected regions discovered at fit
/// time; [`ClusterLabel::NOISE`] is the reserved outlier sentinel. Label
/// values carry no severity on their own — severity comes from the
/// [`TierMap`](crate::tier::TierMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterLabel(pub i32);

impl ClusterLabel {
    /// Sentinel meaning "belongs to no discovered cluster".
    pub const NOISE: ClusterLabel = ClusterLabel(-1);

    pub fn new(label: i32) -> Self {
        Self(label)
    }

    #[inline]
    pub fn is_noise(&self) -> bool {
        *self == Self::NOISE
    }
}

impl std::fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_noise() {
            write!(f, "noise")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Feature names in canonical order, matching the fit-time schema.
pub const FEATURE_NAMES: [&str; 6] = [
    "systolic_pressure",
    "diastolic_pressure",
    "glucose_level",
    "heart_rate",
    "body_temperature",
    "oxygen_saturation",
];

/// Dimensionality of the canonical vital-sign schema.
pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// One physiological reading with named fields.
///
/// [`VitalSigns::to_features`] flattens the reading into the canonical
/// feature order shared by the fit and predict paths. Callers with a
/// different schema can bypass this type and pass raw feature rows, as
/// long as the ordering matches their fitted scaler and model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Systolic blood pressure (mmHg).
    pub systolic_pressure: f32,
    /// Diastolic blood pressure (mmHg).
    pub diastolic_pressure: f32,
    /// Blood glucose level (mg/dL).
    pub glucose_level: f32,
    /// Heart rate (bpm).
    pub heart_rate: f32,
    /// Body temperature (°C).
    pub body_temperature: f32,
    /// Oxygen saturation, SpO₂ (%).
    pub oxygen_saturation: f32,
}

impl VitalSigns {
    /// Flatten into the canonical feature order.
    pub fn to_features(&self) -> Vec<f32> {
        vec![
            self.systolic_pressure,
            self.diastolic_pressure,
            self.glucose_level,
            self.heart_rate,
            self.body_temperature,
            self.oxygen_saturation,
        ]
    }
}

/// What kind of transition an alert describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    /// Plain status report; no worsening transition detected.
    Status,
    /// First departure from a stable state.
    EarlyWarning,
    /// Escalation from an at-risk state into a critical one.
    Escalation,
}

/// The alert derived from one assessment event.
///
/// Ephemeral — produced and returned, never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub kind: AlertKind,
    /// Tier of the current (just-assigned) cluster label.
    pub tier: Tier,
    /// Human-readable alert text.
    pub message: String,
}

impl AlertRecord {
    pub fn is_warning(&self) -> bool {
        self.kind != AlertKind::Status
    }
}

/// The result of assessing one feature row for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Cluster label assigned to the reading.
    pub label: ClusterLabel,
    /// Alert derived from the patient's tier transition.
    pub alert: AlertRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_sentinel() {
        assert!(ClusterLabel::NOISE.is_noise());
        assert!(!ClusterLabel::new(0).is_noise());
        assert_eq!(ClusterLabel::NOISE.to_string(), "noise");
        assert_eq!(ClusterLabel::new(3).to_string(), "3");
    }

    #[test]
    fn vitals_flatten_in_schema_order() {
        let vitals = VitalSigns {
            systolic_pressure: 120.0,
            diastolic_pressure: 80.0,
            glucose_level: 95.0,
            heart_rate: 70.0,
            body_temperature: 36.6,
            oxygen_saturation: 98.0,
        };

        let features = vitals.to_features();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features[0], 120.0);
        assert_eq!(features[5], 98.0);
    }
}
