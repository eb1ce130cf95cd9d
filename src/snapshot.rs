//! One sampling interval's output.

use crate::metric::MetricSample;

/// One sampling interval's set of per-metric deltas, with an absolute
/// monotonic timestamp.
///
/// Snapshots are append-only within a session and carry no identity
/// beyond their position (spec.md §3). `duration_ms` is 0 only for the
/// final post-mortem snapshot emitted when the target process has died.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Absolute monotonic milliseconds since an arbitrary epoch.
    pub timestamp_ms: u64,
    /// Nominal interval length; 0 for the final post-mortem snapshot.
    pub duration_ms: u64,
    /// In the same order as the configured metric list.
    pub metrics: Vec<MetricSample>,
}
