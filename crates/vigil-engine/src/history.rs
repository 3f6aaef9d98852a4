//! Per-patient cluster history.
//!
//! The history store is the only shared mutable state in the engine. It is
//! injected into the monitor rather than living as a process global, so
//! tests (and multi-tenant callers) can construct independent stores.

use std::collections::HashMap;
use std::sync::RwLock;

use vigil_core::{ClusterLabel, PatientId};

/// Mapping from patient to the last cluster label observed for them.
///
/// `record` is a single atomic read-modify-write: it installs the new
/// label and hands back the previous one. Two concurrent calls for the
/// same patient therefore serialize — one of them sees the other's label
/// as "previous" and no transition is silently dropped. Entries are
/// created lazily on first observation and live until [`reset`](Self::reset).
pub trait HistoryStore: Send + Sync {
    /// Install `label` as the patient's latest state, returning the label
    /// it replaced. `None` means this is the patient's first observation.
    fn record(&self, patient: &PatientId, label: ClusterLabel) -> Option<ClusterLabel>;

    /// The patient's last recorded label, without mutating anything.
    fn last(&self, patient: &PatientId) -> Option<ClusterLabel>;

    /// Number of patients observed so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all patients.
    fn reset(&self);
}

/// In-memory history store over a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    entries: RwLock<HashMap<PatientId, ClusterLabel>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    fn record(&self, patient: &PatientId, label: ClusterLabel) -> Option<ClusterLabel> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(patient.clone(), label)
    }

    fn last(&self, patient: &PatientId) -> Option<ClusterLabel> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(patient).copied()
    }

    fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    fn reset(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }
}
