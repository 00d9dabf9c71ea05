// Averaging tests: empty bucket, floor means, timestamp mean, metric name handling

mod common;

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use common::{START, at_secs, snapshot};
use runner_stats::models::Snapshot;
use runner_stats::telemetry::average;

#[test]
fn average_empty_returns_none() {
    assert!(average(&[]).is_none());
}

#[test]
fn average_ten_minutes_of_samples() {
    let start = Utc.with_ymd_and_hms(2016, 8, 11, 0, 0, 0).unwrap();
    let snapshots: Vec<Snapshot> = (0..10)
        .map(|i| {
            Snapshot::new(
                start + chrono::Duration::minutes(i),
                BTreeMap::from([("x".to_string(), i as u64)]),
            )
        })
        .collect();

    let out = average(&snapshots).expect("non-empty bucket");
    assert_eq!(out.metric("x"), Some(4));
    assert_eq!(out.timestamp, DateTime::from_timestamp(1_470_873_870, 0).unwrap());
}

#[test]
fn average_single_snapshot_is_unchanged() {
    let s = Snapshot::new(
        DateTime::from_timestamp(START, 250_000_000).unwrap(),
        BTreeMap::from([("cpu".to_string(), 7), ("mem".to_string(), 1 << 40)]),
    );
    let out = average(std::slice::from_ref(&s)).unwrap();
    assert_eq!(out, s);
}

#[test]
fn average_uses_floor_division() {
    let snapshots = vec![snapshot(START, 1), snapshot(START + 1, 2)];
    let out = average(&snapshots).unwrap();
    assert_eq!(out.metric("x"), Some(1));
    assert_eq!(out.timestamp.timestamp(), START);

    let snapshots = vec![snapshot(START, 5), snapshot(START, 5), snapshot(START + 2, 6)];
    let out = average(&snapshots).unwrap();
    assert_eq!(out.metric("x"), Some(5));
    assert_eq!(out.timestamp.timestamp(), START);
}

#[test]
fn average_matches_floor_of_sum_over_count() {
    for count in 1..=25u64 {
        let snapshots: Vec<Snapshot> = (0..count)
            .map(|i| snapshot(START + i as i64, i * 37 + 11))
            .collect();
        let sum: u64 = (0..count).map(|i| i * 37 + 11).sum();
        let out = average(&snapshots).unwrap();
        assert_eq!(out.metric("x"), Some(sum / count), "count = {count}");
    }
}

#[test]
fn average_is_order_insensitive() {
    let forward = vec![snapshot(START, 3), snapshot(START + 4, 10), snapshot(START + 9, 8)];
    let mut reversed = forward.clone();
    reversed.reverse();
    assert_eq!(average(&forward), average(&reversed));
}

#[test]
fn average_does_not_overflow_near_u64_max() {
    let snapshots = vec![snapshot(START, u64::MAX), snapshot(START + 1, u64::MAX)];
    let out = average(&snapshots).unwrap();
    assert_eq!(out.metric("x"), Some(u64::MAX));
}

#[test]
fn average_takes_metric_names_from_first_snapshot() {
    let first = at_secs(
        START,
        BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 4)]),
    );
    let second = at_secs(
        START + 2,
        BTreeMap::from([("a".to_string(), 20), ("c".to_string(), 99)]),
    );
    let out = average(&[first, second]).unwrap();
    assert_eq!(out.metric("a"), Some(15));
    // missing from the second snapshot: counted as zero
    assert_eq!(out.metric("b"), Some(2));
    assert_eq!(out.metric("c"), None);
    assert_eq!(out.metrics.len(), 2);
}
