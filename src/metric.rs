//! The closed set of counters the profiler knows how to attach.

use std::fmt;
use std::str::FromStr;

use perf_event_open_sys::bindings;

/// One of the seven counters the profiler can attach to a target process.
///
/// The first five are hardware counters (implemented by the processor);
/// the last two are software counters (implemented by the kernel). Each
/// variant maps to a fixed `perf_event_attr` `(type, config)` pair and a
/// fixed human-readable name and unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MetricKind {
    Instructions,
    CpuCycles,
    CacheMisses,
    CacheReferences,
    BranchMisses,
    PageFaults,
    ContextSwitches,
}

impl MetricKind {
    /// All seven kinds, in declaration order. Handy for exhaustive tests.
    pub const ALL: [MetricKind; 7] = [
        MetricKind::Instructions,
        MetricKind::CpuCycles,
        MetricKind::CacheMisses,
        MetricKind::CacheReferences,
        MetricKind::BranchMisses,
        MetricKind::PageFaults,
        MetricKind::ContextSwitches,
    ];

    /// `true` for the five counters implemented in the processor itself.
    pub fn is_hardware(self) -> bool {
        !matches!(self, MetricKind::PageFaults | MetricKind::ContextSwitches)
    }

    pub(crate) fn perf_type(self) -> bindings::perf_type_id {
        if self.is_hardware() {
            bindings::PERF_TYPE_HARDWARE
        } else {
            bindings::PERF_TYPE_SOFTWARE
        }
    }

    pub(crate) fn perf_config(self) -> u64 {
        use MetricKind::*;
        let raw = match self {
            Instructions => bindings::PERF_COUNT_HW_INSTRUCTIONS,
            CpuCycles => bindings::PERF_COUNT_HW_CPU_CYCLES,
            CacheMisses => bindings::PERF_COUNT_HW_CACHE_MISSES,
            CacheReferences => bindings::PERF_COUNT_HW_CACHE_REFERENCES,
            BranchMisses => bindings::PERF_COUNT_HW_BRANCH_MISSES,
            PageFaults => bindings::PERF_COUNT_SW_PAGE_FAULTS,
            ContextSwitches => bindings::PERF_COUNT_SW_CONTEXT_SWITCHES,
        };
        raw as u64
    }

    /// The lower-snake name used in [`MetricSample::name`] and accepted by
    /// [`FromStr`].
    pub fn name(self) -> &'static str {
        use MetricKind::*;
        match self {
            Instructions => "instructions",
            CpuCycles => "cpu_cycles",
            CacheMisses => "cache_misses",
            CacheReferences => "cache_references",
            BranchMisses => "branch_misses",
            PageFaults => "page_faults",
            ContextSwitches => "context_switches",
        }
    }

    /// The unit string used in [`MetricSample::unit`].
    pub fn unit(self) -> &'static str {
        use MetricKind::*;
        match self {
            Instructions => "count",
            CpuCycles => "cycles",
            CacheMisses => "misses",
            CacheReferences => "references",
            BranchMisses => "misses",
            PageFaults => "faults",
            ContextSwitches => "switches",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownMetric(s.to_owned()))
    }
}

/// Returned by [`MetricKind::from_str`] for an unrecognized name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown metric kind: {0:?}")]
pub struct UnknownMetric(pub String);

/// One reading in one [`Snapshot`](crate::Snapshot): the change in a
/// single counter's value since the previous snapshot in the session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MetricSample {
    pub kind: MetricKind,
    /// The change in the counter's absolute value since the previous
    /// snapshot. Never the absolute counter value itself.
    pub delta: u64,
    pub name: &'static str,
    pub unit: &'static str,
}

impl MetricSample {
    pub(crate) fn new(kind: MetricKind, delta: u64) -> Self {
        MetricSample {
            kind,
            delta,
            name: kind.name(),
            unit: kind.unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_spec_table() {
        assert_eq!(MetricKind::Instructions.name(), "instructions");
        assert_eq!(MetricKind::CpuCycles.name(), "cpu_cycles");
        assert_eq!(MetricKind::CpuCycles.unit(), "cycles");
        assert_eq!(MetricKind::PageFaults.name(), "page_faults");
        assert_eq!(MetricKind::PageFaults.unit(), "faults");
        assert_eq!(MetricKind::ContextSwitches.name(), "context_switches");
    }

    #[test]
    fn hardware_vs_software_split() {
        assert!(MetricKind::Instructions.is_hardware());
        assert!(MetricKind::CpuCycles.is_hardware());
        assert!(MetricKind::CacheMisses.is_hardware());
        assert!(MetricKind::CacheReferences.is_hardware());
        assert!(MetricKind::BranchMisses.is_hardware());
        assert!(!MetricKind::PageFaults.is_hardware());
        assert!(!MetricKind::ContextSwitches.is_hardware());
    }

    #[test]
    fn round_trips_through_display_and_from_str() {
        for kind in MetricKind::ALL {
            let parsed: MetricKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("nonsense".parse::<MetricKind>().is_err());
    }
}
