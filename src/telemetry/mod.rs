// Usage telemetry reduction: per-bucket averaging and time-window decimation.
// Pure functions; the caller owns the snapshot buffer.

pub mod aggregation;
pub mod decimation;

pub use aggregation::average;
pub use decimation::{checked_decimate, decimate};
