//! # Vigil Engine
//!
//! Streaming cluster assignment and alerting over a fitted density model.
//!
//! The engine answers one question, continuously: *which health state does
//! this reading belong to, and did the patient just get worse?* It never
//! re-runs clustering — classification uses only the retained core points,
//! their labels, and the fit-time neighborhood radius.
//!
//! ## Pipeline
//!
//! 1. [`StandardScaler`](vigil_core::StandardScaler) maps a raw reading
//!    into the model's coordinate space.
//! 2. [`StreamingAssigner`] finds the nearest core point within `eps` via
//!    a [`CorePointIndex`] radius query; no reachable core point means
//!    noise.
//! 3. [`HistoryStore`] atomically swaps the patient's last label for the
//!    new one.
//! 4. [`alert::evaluate`] turns the tier transition into an
//!    [`AlertRecord`](vigil_core::AlertRecord).
//!
//! [`HealthMonitor`] wires the four together behind a single `assess`
//! call.
//!
//! ## Example
//!
//! ```rust
//! use vigil_core::prelude::*;
//! use vigil_engine::HealthMonitor;
//!
//! // A tiny 1-D model: one stable cluster at the origin.
//! let model = ClusterModel::new(
//!     vec![vec![0.0]],
//!     vec![ClusterLabel::new(0)],
//!     1.0,
//! ).unwrap();
//!
//! let monitor = HealthMonitor::new(
//!     &model,
//!     StandardScaler::identity(1),
//!     TierMap::chronic_care(),
//! );
//!
//! let patient = PatientId::from("ward-7/bed-3");
//! let assessment = monitor.assess(&patient, &[0.2]).unwrap();
//! assert_eq!(assessment.alert.message, "Status: Stable");
//! ```

pub mod alert;
pub mod assign;
pub mod history;
pub mod index;
pub mod monitor;
pub mod prelude;

pub use assign::StreamingAssigner;
pub use history::{HistoryStore, InMemoryHistory};
pub use index::{CorePointIndex, LinearScanIndex, Neighbor};
pub use monitor::HealthMonitor;
