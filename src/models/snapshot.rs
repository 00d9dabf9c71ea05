// Usage snapshot model: one timestamped set of named counter readings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampler reading. Metric names are ordered so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metrics: BTreeMap<String, u64>,
}

impl Snapshot {
    pub fn new(timestamp: DateTime<Utc>, metrics: BTreeMap<String, u64>) -> Self {
        Self { timestamp, metrics }
    }

    /// Value of one metric, if this snapshot carries it.
    pub fn metric(&self, name: &str) -> Option<u64> {
        self.metrics.get(name).copied()
    }
}
