// Shared test helpers

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::DateTime;
use runner_stats::models::Snapshot;

/// 2016-08-11T00:00:00Z
pub const START: i64 = 1_470_873_600;

pub fn at_secs(secs: i64, metrics: BTreeMap<String, u64>) -> Snapshot {
    Snapshot::new(DateTime::from_timestamp(secs, 0).unwrap(), metrics)
}

pub fn snapshot(secs: i64, x: u64) -> Snapshot {
    at_secs(secs, BTreeMap::from([("x".to_string(), x)]))
}

/// `n` snapshots at 1-second cadence with metric `x` = index.
pub fn series(n: usize) -> Vec<Snapshot> {
    (0..n).map(|i| snapshot(START + i as i64, i as u64)).collect()
}

/// Like `series`, but every timestamp from `gap_at` on is shifted forward by `gap_secs`.
pub fn series_with_gap(n: usize, gap_at: usize, gap_secs: i64) -> Vec<Snapshot> {
    (0..n)
        .map(|i| {
            let shift = if i >= gap_at { gap_secs } else { 0 };
            snapshot(START + i as i64 + shift, i as u64)
        })
        .collect()
}

pub fn is_non_decreasing(snapshots: &[Snapshot]) -> bool {
    snapshots
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp)
}
