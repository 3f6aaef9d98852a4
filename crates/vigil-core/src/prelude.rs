//! Convenient imports for working with Vigil core types.
//!
//! ```rust
//! use vigil_core::prelude::*;
//! ```

pub use crate::error::{ConfigError, InputError, Result, VigilError};
pub use crate::model::ClusterModel;
pub use crate::scaler::StandardScaler;
pub use crate::tier::{Tier, TierMap};
pub use crate::types::{
    AlertKind, AlertRecord, Assessment, ClusterLabel, PatientId, VitalSigns, FEATURE_COUNT,
    FEATURE_NAMES,
};
