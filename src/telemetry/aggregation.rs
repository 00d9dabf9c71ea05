// Averaging: collapse one bucket of snapshots into a single mean snapshot.

use std::collections::BTreeMap;

use chrono::DateTime;

use crate::models::Snapshot;

/// Mean of a bucket of snapshots, or `None` for an empty bucket.
///
/// Metric names come from the first snapshot. A name missing from a later
/// snapshot contributes zero but still counts toward the divisor; names that
/// only appear later are ignored. Means use floor division, and the
/// timestamp is the truncated mean of epoch seconds.
pub fn average(snapshots: &[Snapshot]) -> Option<Snapshot> {
    let first = snapshots.first()?;
    if snapshots.len() == 1 {
        return Some(first.clone());
    }

    let count = snapshots.len() as u128;
    let metrics: BTreeMap<String, u64> = first
        .metrics
        .keys()
        .map(|name| {
            let sum: u128 = snapshots
                .iter()
                .map(|s| s.metrics.get(name).copied().unwrap_or(0) as u128)
                .sum();
            // mean of u64 values always fits in u64
            (name.clone(), (sum / count) as u64)
        })
        .collect();

    let ts_sum: i128 = snapshots
        .iter()
        .map(|s| s.timestamp.timestamp() as i128)
        .sum();
    let mean_secs = (ts_sum / count as i128) as i64;
    let timestamp = DateTime::from_timestamp(mean_secs, 0).unwrap_or(first.timestamp);

    Some(Snapshot { timestamp, metrics })
}
