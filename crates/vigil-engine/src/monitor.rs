//! The monitoring façade: normalize → assign → derive alert.

use tracing::{debug, info};

use vigil_core::{
    Assessment, ClusterModel, PatientId, Result, StandardScaler, TierMap, VitalSigns,
};

use crate::alert;
use crate::assign::StreamingAssigner;
use crate::history::{HistoryStore, InMemoryHistory};

/// Composes the scaler, assigner, tier partition, and an injected history
/// store into a single assessment call.
///
/// Each [`assess`](Self::assess) is a synchronous, non-suspending
/// computation: one radius query plus constant-time map work. History is
/// mutated exactly once per successful row; validation failures leave it
/// untouched. There are no internal retries — assignment is deterministic,
/// so retrying without new data cannot change the outcome.
pub struct HealthMonitor {
    scaler: StandardScaler,
    assigner: StreamingAssigner,
    tiers: TierMap,
    history: Box<dyn HistoryStore>,
}

impl HealthMonitor {
    /// Build a monitor from fitted artifacts, with a fresh in-memory
    /// history store.
    pub fn new(model: &ClusterModel, scaler: StandardScaler, tiers: TierMap) -> Self {
        Self::with_history(model, scaler, tiers, Box::new(InMemoryHistory::new()))
    }

    /// Build a monitor around a caller-provided history store.
    pub fn with_history(
        model: &ClusterModel,
        scaler: StandardScaler,
        tiers: TierMap,
        history: Box<dyn HistoryStore>,
    ) -> Self {
        info!(
            core_points = model.len(),
            dimension = model.dimension(),
            eps = model.eps(),
            "health monitor ready"
        );
        Self {
            scaler,
            assigner: StreamingAssigner::from_model(model),
            tiers,
            history,
        }
    }

    /// Assess one raw feature row for one patient.
    ///
    /// Normalizes the row, assigns it a cluster label, swaps the patient's
    /// history entry (yielding the previous label), and derives the alert
    /// from the tier transition.
    pub fn assess(&self, patient: &PatientId, features: &[f32]) -> Result<Assessment> {
        let scaled = self.scaler.transform(features)?;
        let label = self.assigner.assign(&scaled)?;

        // One atomic swap: the previous label comes back while the new one
        // goes in, so concurrent calls for the same patient cannot both
        // observe the same "previous".
        let previous = self.history.record(patient, label);

        let current_tier = self.tiers.tier_of(label);
        let previous_tier = previous.map(|p| self.tiers.tier_of(p));
        let alert = alert::evaluate(previous_tier, current_tier);

        debug!(
            patient = %patient,
            %label,
            tier = %current_tier,
            kind = ?alert.kind,
            "assessment complete"
        );

        Ok(Assessment { label, alert })
    }

    /// Assess a named-field vital-sign reading.
    pub fn assess_vitals(&self, patient: &PatientId, vitals: &VitalSigns) -> Result<Assessment> {
        self.assess(patient, &vitals.to_features())
    }

    /// Assess an ordered batch of rows for one patient.
    ///
    /// Equivalent to calling [`assess`](Self::assess) row by row: results
    /// come back in input order, history advances once per successful row,
    /// and a malformed row fails alone without aborting its siblings.
    pub fn assess_batch(
        &self,
        patient: &PatientId,
        rows: &[Vec<f32>],
    ) -> Vec<Result<Assessment>> {
        rows.iter().map(|row| self.assess(patient, row)).collect()
    }

    /// The patient history store backing this monitor.
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }

    /// The label-to-tier partition in use.
    pub fn tiers(&self) -> &TierMap {
        &self.tiers
    }

    /// Dimensionality expected from incoming rows.
    pub fn dimension(&self) -> usize {
        self.scaler.dimension()
    }
}
