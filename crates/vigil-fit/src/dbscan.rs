//! Density-based clustering over scaled training rows.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use vigil_core::{ClusterLabel, ClusterModel, ConfigError, Result};

/// Parameters for a density fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DbscanParams {
    /// Neighborhood radius.
    pub eps: f32,
    /// Minimum neighbors (the point itself included) for a core point.
    pub min_samples: usize,
}

impl DbscanParams {
    /// Validated constructor: `eps` must be finite and positive,
    /// `min_samples` at least 1.
    pub fn new(eps: f32, min_samples: usize) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::InvalidRadius(eps).into());
        }
        if min_samples == 0 {
            return Err(ConfigError::InvalidParameter(
                "min_samples must be at least 1".to_string(),
            )
            .into());
        }
        Ok(Self { eps, min_samples })
    }
}

impl Default for DbscanParams {
    fn default() -> Self {
        Self {
            eps: 0.5,
            min_samples: 5,
        }
    }
}

/// Output of a density fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbscanFit {
    /// One label per input row; noise for points in no cluster.
    pub labels: Vec<ClusterLabel>,
    /// Indices of the core points, in row order.
    pub core_indices: Vec<usize>,
    /// Number of clusters discovered.
    pub n_clusters: usize,
    /// The radius the fit ran with.
    pub eps: f32,
}

impl DbscanFit {
    /// Package the fit as the artifact the streaming engine consumes:
    /// the retained core points, their labels, and the radius.
    pub fn to_model(&self, rows: &[Vec<f32>]) -> Result<ClusterModel> {
        let core_points = self
            .core_indices
            .iter()
            .map(|&i| rows[i].clone())
            .collect();
        let core_labels = self.core_indices.iter().map(|&i| self.labels[i]).collect();
        ClusterModel::new(core_points, core_labels, self.eps)
    }
}

/// Run DBSCAN over scaled rows.
///
/// A point with at least `min_samples` neighbors within `eps` (itself
/// included) is a core point; clusters grow outward from core points
/// through their neighborhoods. Points reachable from no core point are
/// labeled noise. Border points go to whichever cluster reaches them
/// first, in row order — the fit is deterministic for a fixed row order.
pub fn dbscan(rows: &[Vec<f32>], params: &DbscanParams) -> Result<DbscanFit> {
    crate::scaler_fit::validate_rows(rows)?;
    let n = rows.len();

    // Neighborhoods, brute force. Training sets here are small enough
    // that the n^2 scan is not worth avoiding.
    let neighborhoods: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| euclidean(&rows[i], &rows[j]) <= params.eps)
                .collect()
        })
        .collect();

    let is_core: Vec<bool> = neighborhoods
        .iter()
        .map(|neighbors| neighbors.len() >= params.min_samples)
        .collect();

    let mut assigned: Vec<Option<i32>> = vec![None; n];
    let mut cluster = 0i32;

    for seed in 0..n {
        if assigned[seed].is_some() || !is_core[seed] {
            continue;
        }

        // Grow a new cluster outward from this unclaimed core point.
        assigned[seed] = Some(cluster);
        let mut queue = VecDeque::from([seed]);
        while let Some(point) = queue.pop_front() {
            if !is_core[point] {
                continue; // border points do not extend the cluster
            }
            for &neighbor in &neighborhoods[point] {
                if assigned[neighbor].is_none() {
                    assigned[neighbor] = Some(cluster);
                    queue.push_back(neighbor);
                }
            }
        }
        cluster += 1;
    }

    let labels: Vec<ClusterLabel> = assigned
        .into_iter()
        .map(|a| a.map_or(ClusterLabel::NOISE, ClusterLabel::new))
        .collect();
    let core_indices: Vec<usize> = (0..n).filter(|&i| is_core[i]).collect();
    let noise = labels.iter().filter(|l| l.is_noise()).count();

    info!(
        rows = n,
        clusters = cluster,
        core_points = core_indices.len(),
        noise,
        "density fit complete"
    );
    debug!(eps = params.eps, min_samples = params.min_samples, "fit parameters");

    Ok(DbscanFit {
        labels,
        core_indices,
        n_clusters: cluster as usize,
        eps: params.eps,
    })
}

fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt()
}
