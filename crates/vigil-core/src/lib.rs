//! # Vigil Core
//!
//! Core types for the Vigil health-state monitoring engine.
//!
//! This crate defines the shared vocabulary used across the framework:
//!
//! - **Cluster space** — [`ClusterLabel`] and the fitted [`ClusterModel`]
//!   artifact (core points, aligned labels, neighborhood radius)
//! - **Feature space** — [`VitalSigns`] rows and the fitted
//!   [`StandardScaler`] that maps raw readings into model coordinates
//! - **Severity space** — [`Tier`] and the configurable [`TierMap`] that
//!   partitions cluster labels into Stable / Risk / Critical
//! - **Outputs** — [`AlertRecord`] and [`Assessment`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vigil_core::prelude::*;
//!
//! let label = ClusterLabel::new(0);
//! assert!(!label.is_noise());
//!
//! let tiers = TierMap::chronic_care();
//! assert_eq!(tiers.tier_of(label), Tier::Stable);
//! assert_eq!(tiers.tier_of(ClusterLabel::NOISE), Tier::Risk);
//! ```

pub mod error;
pub mod model;
pub mod prelude;
pub mod scaler;
pub mod tier;
pub mod types;

pub use error::{ConfigError, InputError, Result, VigilError};
pub use model::ClusterModel;
pub use scaler::StandardScaler;
pub use tier::{Tier, TierMap};
pub use types::{AlertKind, AlertRecord, Assessment, ClusterLabel, PatientId, VitalSigns};
