//! Streaming cluster assignment against a fitted density model.

use tracing::debug;

use vigil_core::{ClusterLabel, ClusterModel, Result, VigilError};

use crate::index::{CorePointIndex, LinearScanIndex};

/// Assigns scaled feature vectors to the clusters of an offline density
/// fit, without re-running the clustering.
///
/// The rule mirrors density reachability at fit time: a point belongs to
/// the cluster of its nearest core point within `eps`, and to no cluster
/// (noise) when no core point is that close. The training-time core-point
/// geometry is assumed stable; drift correction is a concern for the
/// offline fit, not this engine.
///
/// The assigner owns its index and radius for its lifetime. Constructed
/// without a model it reports [`VigilError::ModelNotLoaded`] on every call
/// until [`load_model`](Self::load_model) installs one.
pub struct StreamingAssigner {
    index: Option<Box<dyn CorePointIndex>>,
    eps: f32,
}

impl StreamingAssigner {
    /// An assigner with no model installed yet.
    pub fn unloaded() -> Self {
        Self {
            index: None,
            eps: 0.0,
        }
    }

    /// Build an assigner directly from a fitted model.
    pub fn from_model(model: &ClusterModel) -> Self {
        let mut assigner = Self::unloaded();
        assigner.load_model(model);
        assigner
    }

    /// Install (or replace) the fitted model backing this assigner.
    pub fn load_model(&mut self, model: &ClusterModel) {
        debug!(
            core_points = model.len(),
            dimension = model.dimension(),
            eps = model.eps(),
            "installing cluster model"
        );
        self.index = Some(Box::new(LinearScanIndex::from_model(model)));
        self.eps = model.eps();
    }

    /// Whether a model is installed.
    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    /// Neighborhood radius of the installed model.
    pub fn eps(&self) -> Result<f32> {
        self.index
            .as_ref()
            .map(|_| self.eps)
            .ok_or(VigilError::ModelNotLoaded)
    }

    /// Dimensionality expected by the installed model.
    pub fn dimension(&self) -> Result<usize> {
        self.index
            .as_ref()
            .map(|index| index.dimension())
            .ok_or(VigilError::ModelNotLoaded)
    }

    /// Classify one scaled feature vector.
    ///
    /// Returns the label of the nearest core point within `eps`, breaking
    /// exact distance ties toward the lowest core-point index, or
    /// [`ClusterLabel::NOISE`] when no core point is reachable. Noise is a
    /// valid outcome, not an error.
    pub fn assign(&self, scaled: &[f32]) -> Result<ClusterLabel> {
        let index = self.index.as_ref().ok_or(VigilError::ModelNotLoaded)?;

        let neighbors = index.radius_query(scaled, self.eps)?;

        // Nearest core point wins; fit ordering breaks exact ties because
        // radius_query yields neighbors in that order and `<` keeps the
        // earlier one.
        let mut nearest: Option<(f32, ClusterLabel)> = None;
        for neighbor in neighbors {
            match nearest {
                Some((best, _)) if neighbor.distance >= best => {}
                _ => nearest = Some((neighbor.distance, neighbor.label)),
            }
        }

        let label = match nearest {
            Some((_, label)) => label,
            None => ClusterLabel::NOISE,
        };
        debug!(%label, "assigned cluster");
        Ok(label)
    }

    /// Classify an ordered batch of scaled feature vectors.
    ///
    /// Order-preserving, one result per row; a failing row does not abort
    /// its siblings.
    pub fn assign_batch(&self, rows: &[Vec<f32>]) -> Vec<Result<ClusterLabel>> {
        rows.iter().map(|row| self.assign(row)).collect()
    }
}
