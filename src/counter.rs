//! A single open perf counter, owned exclusively by the [`Engine`](crate::engine::Engine)
//! for the lifetime of one session.

use std::io;
use std::os::unix::io::OwnedFd;

use libc::pid_t;

use crate::metric::{MetricKind, MetricSample};
use crate::sys;

/// One open `perf_event_open` file descriptor, together with its kind and
/// the last absolute value read from it.
///
/// Invariant: `last_absolute_value` is monotonically non-decreasing for
/// the lifetime of one `CounterHandle` (spec.md §3).
pub(crate) struct CounterHandle {
    fd: OwnedFd,
    kind: MetricKind,
    last_absolute_value: u64,
}

impl CounterHandle {
    /// Open a counter for `kind` attached to `pid`, reset it to zero, and
    /// enable it. Matches spec.md §4.2's "Counter setup" sequence exactly:
    /// open disabled -> reset -> enable.
    pub(crate) fn open(pid: pid_t, kind: MetricKind) -> io::Result<Self> {
        let fd = sys::open_counter(pid, kind)?;
        sys::reset(&fd)?;
        sys::enable(&fd)?;
        Ok(CounterHandle {
            fd,
            kind,
            last_absolute_value: 0,
        })
    }

    pub(crate) fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Read the counter and return a [`MetricSample`] carrying the delta
    /// since the last call, together with a diagnostic message when the
    /// read was degraded. A short or failed read is treated as delta 0 for
    /// this sample, per spec.md §4.2 step 2 — the session is not failed,
    /// but the caller is told so it can surface the soft failure.
    pub(crate) fn sample(&mut self) -> (MetricSample, Option<String>) {
        let (delta, diagnostic) = match sys::read_absolute(&self.fd) {
            Ok(Some(current)) => {
                let delta = current.saturating_sub(self.last_absolute_value);
                self.last_absolute_value = current;
                (delta, None)
            }
            Ok(None) => {
                let message = format!("short read on {} counter, reporting delta 0", self.kind().name());
                log::warn!("{message}");
                (0, Some(message))
            }
            Err(err) => {
                let message = format!("failed to read {} counter: {err}", self.kind().name());
                log::warn!("{message}");
                (0, Some(message))
            }
        };
        (MetricSample::new(self.kind, delta), diagnostic)
    }

    /// The counter's absolute value as of the last `sample()` call, used
    /// by the "sum of deltas == final absolute value" invariant in tests.
    #[cfg(test)]
    pub(crate) fn last_absolute_value(&self) -> u64 {
        self.last_absolute_value
    }
}

// Dropping `fd` (an `OwnedFd`) closes the descriptor automatically; no
// explicit `Drop` impl is needed here. `Engine::stop` still closes the
// whole list explicitly so the closing is observable at a known point
// rather than whenever the `Vec<CounterHandle>` happens to be dropped.
