//! # Vigil
//!
//! Streaming health-state monitoring through density-based cluster
//! assignment.
//!
//! Vigil continuously assigns incoming physiological readings to a
//! previously learned density-based health-state partition and raises
//! clinically meaningful alerts when a patient's trajectory crosses a
//! risk boundary. Classification is incremental: a new reading is matched
//! against the retained core points of an offline fit — no re-clustering
//! on the hot path.
//!
//! ## Quick Start
//!
//! ```rust
//! use vigil::prelude::*;
//!
//! // Fitted artifacts arrive from the offline pipeline. Here: one
//! // healthy cluster at the origin of the scaled space.
//! let model = ClusterModel::new(
//!     vec![vec![0.0, 0.0]],
//!     vec![ClusterLabel::new(0)],
//!     1.0,
//! ).unwrap();
//!
//! let monitor = HealthMonitor::new(
//!     &model,
//!     StandardScaler::identity(2),
//!     TierMap::chronic_care(),
//! );
//!
//! let patient = PatientId::from("ward-7/bed-3");
//! let assessment = monitor.assess(&patient, &[0.1, -0.2]).unwrap();
//! assert_eq!(assessment.alert.message, "Status: Stable");
//! ```
//!
//! ## Architecture
//!
//! Vigil is organized into focused crates:
//!
//! - [`vigil_core`] — shared types: labels, tiers, scaler, model artifact
//! - [`vigil_engine`] — core-point index, streaming assigner, patient
//!   history, alert state machine, monitor façade
//! - [`vigil_fit`] (feature `fit`) — offline scaler fit and density
//!   clustering that produce the artifacts the engine consumes
//!
//! ## Severity Tiers
//!
//! Cluster numbering is an artifact of the offline fit, so severity is
//! configuration: a [`TierMap`](vigil_core::TierMap) partitions the label
//! space into Stable / Risk / Critical and declares a default tier for
//! labels it does not name. Alerts fire on worsening transitions only:
//!
//! | From \ To | Stable | Risk | Critical |
//! |-----------|--------|------|----------|
//! | (none) | status | status | status |
//! | Stable | status | early warning | early warning |
//! | Risk | status | status | escalation |
//! | Critical | status | status | status |

// Re-export all subcrates
pub use vigil_core as core;
pub use vigil_engine as engine;

#[cfg(feature = "fit")]
pub use vigil_fit as fit;

/// Prelude module for convenient imports.
///
/// ```rust
/// use vigil::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vigil_core::error::{ConfigError, InputError, Result, VigilError};
    pub use vigil_core::model::ClusterModel;
    pub use vigil_core::scaler::StandardScaler;
    pub use vigil_core::tier::{Tier, TierMap};
    pub use vigil_core::types::{
        AlertKind, AlertRecord, Assessment, ClusterLabel, PatientId, VitalSigns, FEATURE_COUNT,
        FEATURE_NAMES,
    };

    // Engine
    pub use vigil_engine::assign::StreamingAssigner;
    pub use vigil_engine::history::{HistoryStore, InMemoryHistory};
    pub use vigil_engine::index::{CorePointIndex, LinearScanIndex, Neighbor};
    pub use vigil_engine::monitor::HealthMonitor;

    // Offline fitting (requires "fit" feature)
    #[cfg(feature = "fit")]
    pub use vigil_fit::{dbscan, fit_scaler, silhouette_score, DbscanFit, DbscanParams};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
