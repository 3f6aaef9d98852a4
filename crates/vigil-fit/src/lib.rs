//! # Vigil Fit
//!
//! Offline fitting for the Vigil monitoring engine: scaler fit, density
//! clustering, and packaging of the resulting artifacts.
//!
//! The streaming engine deliberately never re-clusters; everything it
//! needs is produced here once, offline, from a training corpus:
//!
//! - [`fit_scaler`] learns per-feature means and scales.
//! - [`dbscan`] discovers the density clusters and their core points.
//! - [`DbscanFit::to_model`] packages the retained core points, labels,
//!   and radius into the [`ClusterModel`](vigil_core::ClusterModel) the
//!   engine consumes.
//! - [`silhouette_score`] evaluates the fit (noise excluded).
//!
//! ## Example
//!
//! ```rust
//! use vigil_fit::{dbscan, fit_scaler, DbscanParams};
//!
//! let raw: Vec<Vec<f32>> = vec![
//!     vec![120.0, 80.0], vec![118.0, 79.0], vec![122.0, 81.0],
//!     vec![180.0, 120.0], vec![182.0, 119.0], vec![178.0, 121.0],
//! ];
//!
//! let scaler = fit_scaler(&raw).unwrap();
//! let scaled: Vec<Vec<f32>> = raw.iter()
//!     .map(|row| scaler.transform(row).unwrap())
//!     .collect();
//!
//! let fit = dbscan(&scaled, &DbscanParams::new(0.5, 2).unwrap()).unwrap();
//! let model = fit.to_model(&scaled).unwrap();
//! assert!(model.len() > 0);
//! ```

pub mod dbscan;
pub mod scaler_fit;
pub mod silhouette;

pub use dbscan::{dbscan, DbscanFit, DbscanParams};
pub use scaler_fit::fit_scaler;
pub use silhouette::silhouette_score;
