//! Typed errors for each subsystem. The [`SessionCoordinator`](crate::coordinator::SessionCoordinator)
//! funnels all of these into the observer's error callback as strings
//! (spec.md §7); the typed forms exist so the subsystems themselves, and
//! their unit tests, never have to match on substrings.

use crate::metric::MetricKind;

/// Errors from [`Supervisor::spawn`](crate::supervisor::Supervisor::spawn).
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("program path is empty")]
    EmptyPath,

    #[error("a child process is already running")]
    AlreadyRunning,

    #[error("fork failed: {0}")]
    ForkFailed(#[source] std::io::Error),

    #[error("exec failed: {0}")]
    ExecFailed(#[source] std::io::Error),
}

/// Errors from [`Engine::start`](crate::engine::Engine::start).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("a profiling session is already active")]
    AlreadyActive,

    #[error("process does not exist")]
    ProcessDead,

    #[error("no metrics specified")]
    NoMetrics,

    #[error("failed to open {0} counter: {1}")]
    CounterOpenFailed(MetricKind, #[source] std::io::Error),
}

/// Errors from [`ProfilingConfig::validate`](crate::config::ProfilingConfig::validate).
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("metrics list must not be empty")]
    NoMetrics,

    #[error("interval_ms must be between 100 and 5000")]
    IntervalOutOfRange,
}
