//! Convenient imports for the Vigil engine.
//!
//! ```rust
//! use vigil_engine::prelude::*;
//! ```

pub use crate::assign::StreamingAssigner;
pub use crate::history::{HistoryStore, InMemoryHistory};
pub use crate::index::{euclidean_distance, CorePointIndex, LinearScanIndex, Neighbor};
pub use crate::monitor::HealthMonitor;

pub use vigil_core::prelude::*;
