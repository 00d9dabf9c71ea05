// Decimation: shrink a snapshot series to at most `target` points using
// fixed-width wall-clock windows. Empty windows emit nothing, so idle gaps
// disappear instead of being interpolated.

use chrono::TimeDelta;
use tracing::{debug, instrument};

use super::aggregation::average;
use crate::error::DecimateError;
use crate::models::Snapshot;

/// Reduces `snapshots` (sorted by non-decreasing timestamp) to at most `target` points.
///
/// Window `k` covers `[first + k*width, first + (k+1)*width)` where
/// `width = span / target` in whole nanoseconds. Each populated window
/// becomes one averaged snapshot. Window indices are not clamped; instead,
/// once `target - 1` points have been emitted, everything left joins the
/// final point.
///
/// A `target` of zero returns the input unchanged. Unsorted input is not
/// detected here; see [`checked_decimate`].
#[instrument(
    skip_all,
    fields(operation = "decimate", target_points = target, input = snapshots.len())
)]
pub fn decimate(target: usize, snapshots: Vec<Snapshot>) -> Vec<Snapshot> {
    if target == 0 || snapshots.len() <= target {
        return snapshots;
    }

    let start = snapshots[0].timestamp;
    let span = snapshots[snapshots.len() - 1].timestamp - start;
    let width_ns = as_nanos(span) / target as i128;

    if width_ns <= 0 {
        debug!(
            span_secs = span.num_seconds(),
            "zero-width windows; collapsing to one point"
        );
        return average(&snapshots).into_iter().collect();
    }

    let window_of = |s: &Snapshot| -> i128 { as_nanos(s.timestamp - start) / width_ns };

    let mut out: Vec<Snapshot> = Vec::with_capacity(target);
    let mut bucket_start = 0usize;
    let mut bucket_window = window_of(&snapshots[0]);

    for (i, s) in snapshots.iter().enumerate().skip(1) {
        if out.len() == target - 1 {
            break;
        }
        let w = window_of(s);
        if w != bucket_window {
            out.extend(average(&snapshots[bucket_start..i]));
            bucket_start = i;
            bucket_window = w;
        }
    }
    out.extend(average(&snapshots[bucket_start..]));

    debug!(output = out.len(), "decimated");
    out
}

/// Like [`decimate`], but rejects a zero `target` and out-of-order timestamps.
/// Equal consecutive timestamps are accepted.
pub fn checked_decimate(
    target: usize,
    snapshots: Vec<Snapshot>,
) -> Result<Vec<Snapshot>, DecimateError> {
    if target == 0 {
        return Err(DecimateError::ZeroTarget);
    }
    if let Some(index) = first_out_of_order(&snapshots) {
        return Err(DecimateError::Unsorted { index });
    }
    Ok(decimate(target, snapshots))
}

/// Index of the first snapshot earlier than its predecessor.
fn first_out_of_order(snapshots: &[Snapshot]) -> Option<usize> {
    snapshots
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
        .map(|i| i + 1)
}

fn as_nanos(d: TimeDelta) -> i128 {
    i128::from(d.num_seconds()) * 1_000_000_000 + i128::from(d.subsec_nanos())
}
