//! Severity tiers and the label-to-tier partition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::ClusterLabel;

/// Coarse severity grouping over cluster labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The patient's readings sit in the known-healthy region.
    Stable,
    /// Readings fall outside every discovered cluster.
    Risk,
    /// Readings sit in a cluster associated with deterioration.
    Critical,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Stable => write!(f, "Stable"),
            Tier::Risk => write!(f, "Risk"),
            Tier::Critical => write!(f, "Critical"),
        }
    }
}

/// Explicit partition of the cluster-label space into severity tiers.
///
/// Label numbering is an artifact of the offline fit, so the partition is
/// configuration, not convention baked into the engine. Labels absent from
/// the mapping fall to the declared `default` tier — there is no implicit
/// "unknown" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierMap {
    entries: HashMap<ClusterLabel, Tier>,
    default: Tier,
}

impl TierMap {
    /// Build a partition from explicit entries plus a default tier for
    /// unmapped labels.
    ///
    /// Fails if `entries` is empty: a partition that classifies everything
    /// as the default tier is almost certainly a configuration mistake.
    pub fn new(entries: HashMap<ClusterLabel, Tier>, default: Tier) -> Result<Self> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyTierMap.into());
        }
        Ok(Self { entries, default })
    }

    /// The conventional chronic-care partition: cluster 0 is the dominant
    /// healthy region, noise means the reading matches no known state, and
    /// every other cluster marks a deterioration pattern.
    pub fn chronic_care() -> Self {
        let mut entries = HashMap::new();
        entries.insert(ClusterLabel::new(0), Tier::Stable);
        entries.insert(ClusterLabel::NOISE, Tier::Risk);
        Self {
            entries,
            default: Tier::Critical,
        }
    }

    /// Tier for a label, falling back to the declared default.
    pub fn tier_of(&self, label: ClusterLabel) -> Tier {
        self.entries.get(&label).copied().unwrap_or(self.default)
    }

    /// The tier unmapped labels fall to.
    pub fn default_tier(&self) -> Tier {
        self.default
    }

    /// Number of explicitly mapped labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
