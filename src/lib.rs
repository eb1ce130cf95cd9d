//! A per-process performance profiler for Linux.
//!
//! This crate spawns a target executable, attaches hardware and software
//! `perf_event` counters to its pid, samples those counters at a fixed
//! cadence, and streams per-interval deltas, log lines, and errors to an
//! observer you supply.
//!
//! Three pieces compose the core:
//!
//! - [`Supervisor`] forks/execs the target and tracks its liveness.
//! - [`Engine`] opens one counter per requested [`MetricKind`] against a
//!   pid and samples them in a background thread.
//! - [`SessionCoordinator`] drives the two of the above through a single
//!   start/stop lifecycle and fans events out to three callbacks.
//!
//! Most callers only need [`SessionCoordinator`]:
//!
//! ```no_run
//! use proc_profiler::{MetricKind, ProfilingConfig, SessionCoordinator};
//!
//! let coordinator = SessionCoordinator::new();
//! coordinator.set_metric_callback(|snapshot| println!("{snapshot:?}"));
//! coordinator.set_log_callback(|line| println!("{line}"));
//! coordinator.set_error_callback(|err| eprintln!("{err}"));
//!
//! let config = ProfilingConfig::new(vec![MetricKind::CpuCycles, MetricKind::Instructions], 500);
//! if coordinator.start("/bin/sleep", &["10".to_string()], config) {
//!     std::thread::sleep(std::time::Duration::from_secs(5));
//!     coordinator.stop();
//! }
//! ```
//!
//! This crate does not persist snapshots, aggregate across multiple
//! target processes, sample per-CPU or per-thread, symbolize program
//! counters, or attach to an already-running pid it did not spawn
//! itself.

mod config;
mod coordinator;
mod counter;
mod engine;
mod error;
mod metric;
mod snapshot;
mod supervisor;
mod sys;

pub use config::ProfilingConfig;
pub use coordinator::{SessionCoordinator, SessionState};
pub use engine::Engine;
pub use error::{ConfigError, EngineError, SpawnError};
pub use metric::{MetricKind, MetricSample, UnknownMetric};
pub use snapshot::Snapshot;
pub use supervisor::Supervisor;
