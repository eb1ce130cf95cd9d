//! Opens one perf counter per requested metric against a pid, then
//! samples them at a fixed cadence in a background thread.
//!
//! Grounded in `original_source/metrics/metrics_collector.cpp`'s
//! `MetricCollector`, reworked onto the teacher crate's counter-handle
//! idiom (`perf-event/src/counter.rs`'s `enable`/`disable`/`reset`/`read`
//! split).

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use libc::pid_t;
use nix::sys::signal::kill;
use nix::unistd::Pid;

use crate::counter::CounterHandle;
use crate::error::EngineError;
use crate::metric::{MetricKind, MetricSample};
use crate::snapshot::Snapshot;

type MetricCallback = Arc<dyn Fn(Snapshot) + Send + Sync>;
type LogCallback = Arc<dyn Fn(String) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(String) + Send + Sync>;
type SessionEndedCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Callbacks {
    on_metric: Mutex<Option<MetricCallback>>,
    on_log: Mutex<Option<LogCallback>>,
    on_error: Mutex<Option<ErrorCallback>>,
    // Internal-only: not part of the spec'd observer surface. Lets the
    // coordinator resync its own session state when the sampler notices
    // the target died, instead of the coordinator only ever transitioning
    // on an explicit `stop()` call.
    on_session_ended: Mutex<Option<SessionEndedCallback>>,
}

impl Callbacks {
    fn emit_metric(&self, snapshot: Snapshot) {
        if let Some(cb) = self.on_metric.lock().unwrap().as_ref() {
            cb(snapshot);
        }
    }

    fn emit_log(&self, message: impl Into<String>) {
        if let Some(cb) = self.on_log.lock().unwrap().as_ref() {
            cb(message.into());
        }
    }

    fn emit_error(&self, message: impl Into<String>) {
        if let Some(cb) = self.on_error.lock().unwrap().as_ref() {
            cb(message.into());
        }
    }

    fn emit_session_ended(&self) {
        if let Some(cb) = self.on_session_ended.lock().unwrap().as_ref() {
            cb();
        }
    }
}

/// Opens and samples counters for one profiling session at a time.
///
/// See spec.md §4.2 for the full contract. `start`/`stop` may be called
/// repeatedly across the lifetime of one `Engine`; each `start` begins a
/// fresh session with its own counters and snapshot history.
pub struct Engine {
    active: Arc<AtomicBool>,
    current_pid: AtomicI32,
    sampler: Mutex<Option<JoinHandle<()>>>,
    callbacks: Arc<Callbacks>,
    history: Arc<Mutex<Vec<Snapshot>>>,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            active: Arc::new(AtomicBool::new(false)),
            current_pid: AtomicI32::new(-1),
            sampler: Mutex::new(None),
            callbacks: Arc::new(Callbacks::default()),
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn on_metric(&self, callback: impl Fn(Snapshot) + Send + Sync + 'static) {
        *self.callbacks.on_metric.lock().unwrap() = Some(Arc::new(callback));
    }

    pub fn on_log(&self, callback: impl Fn(String) + Send + Sync + 'static) {
        *self.callbacks.on_log.lock().unwrap() = Some(Arc::new(callback));
    }

    pub fn on_error(&self, callback: impl Fn(String) + Send + Sync + 'static) {
        *self.callbacks.on_error.lock().unwrap() = Some(Arc::new(callback));
    }

    /// Internal hook, not part of the public observer contract: invoked on
    /// the sampler thread exactly once, the moment the sampler notices the
    /// target has died mid-session (never on an explicit `stop()`). The
    /// `SessionCoordinator` uses this to flip its own state back to `Idle`
    /// without the caller needing to call `stop()` itself.
    pub(crate) fn on_session_ended(&self, callback: impl Fn() + Send + Sync + 'static) {
        *self.callbacks.on_session_ended.lock().unwrap() = Some(Arc::new(callback));
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// The full snapshot history of the current (or most recently
    /// finished) session. Not part of the core's external contract —
    /// exposed for tests that check the "sum of deltas == final
    /// absolute value" invariant.
    #[cfg(test)]
    pub(crate) fn history(&self) -> Vec<Snapshot> {
        self.history.lock().unwrap().clone()
    }

    /// Open one counter per requested kind against `pid`, then launch the
    /// sampler thread. Fails with [`EngineError::AlreadyActive`],
    /// [`EngineError::ProcessDead`], [`EngineError::NoMetrics`], or
    /// [`EngineError::CounterOpenFailed`] (in which case any counters
    /// already opened in this call are closed before returning).
    pub fn start(&self, pid: pid_t, metrics: &[MetricKind], interval_ms: u64) -> Result<(), EngineError> {
        if self.active.load(Ordering::SeqCst) {
            return Err(EngineError::AlreadyActive);
        }
        // A previous session may have ended by the target dying rather
        // than by an explicit `stop()`; its sampler thread has already
        // exited but its handle may still be sitting here unjoined.
        if let Some(handle) = self.sampler.lock().unwrap().take() {
            let _ = handle.join();
        }
        if !process_alive(pid) {
            return Err(EngineError::ProcessDead);
        }
        if metrics.is_empty() {
            return Err(EngineError::NoMetrics);
        }

        let mut handles = Vec::with_capacity(metrics.len());
        for &kind in metrics {
            match CounterHandle::open(pid, kind) {
                Ok(handle) => {
                    log::debug!("opened {} counter for pid {pid}", kind.name());
                    handles.push(handle);
                }
                Err(err) => {
                    // Close everything opened so far in this call before
                    // returning (spec.md §4.2).
                    drop(handles);
                    return Err(EngineError::CounterOpenFailed(kind, err));
                }
            }
        }

        self.history.lock().unwrap().clear();
        self.active.store(true, Ordering::SeqCst);
        self.current_pid.store(pid, Ordering::SeqCst);

        self.callbacks
            .emit_log(format!("Started profiling PID {pid} with interval {interval_ms}ms"));

        let active = self.active.clone();
        let callbacks = self.callbacks.clone();
        let history = self.history.clone();
        let handle = std::thread::spawn(move || {
            sample_loop(pid, interval_ms, handles, active, callbacks, history);
        });
        *self.sampler.lock().unwrap() = Some(handle);

        Ok(())
    }

    /// Flip the session inactive, join the sampler, and close all
    /// counters. Idempotent: a second call while already stopped is a
    /// no-op, safe to call from a destructor.
    pub fn stop(&self) {
        if self
            .active
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        if let Some(handle) = self.sampler.lock().unwrap().take() {
            let _ = handle.join();
        }

        // `sample_loop` owns and drops the `CounterHandle`s itself on
        // exit, closing their descriptors; nothing left to close here.

        let pid = self.current_pid.swap(-1, Ordering::SeqCst);
        self.callbacks.emit_log(format!("Stopped profiling PID {pid}"));
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}

fn process_alive(pid: pid_t) -> bool {
    // `kill(pid, 0)` semantics: a deliverable-signal probe, true for
    // zombies too (spec.md §4.2's "Liveness probe").
    kill(Pid::from_raw(pid), None).is_ok()
}

/// Read every counter for this tick, reporting a degraded read through the
/// error callback (spec.md §7's "Runtime: counter read short-count (soft)")
/// instead of silently swallowing it the way the per-counter `log::warn!`
/// already does for the maintainer-facing trace.
fn sample_all(handles: &mut [CounterHandle], callbacks: &Callbacks) -> Vec<MetricSample> {
    handles
        .iter_mut()
        .map(|handle| {
            let (sample, diagnostic) = handle.sample();
            if let Some(message) = diagnostic {
                callbacks.emit_error(message);
            }
            sample
        })
        .collect()
}

fn sample_loop(
    pid: pid_t,
    interval_ms: u64,
    mut handles: Vec<CounterHandle>,
    active: Arc<AtomicBool>,
    callbacks: Arc<Callbacks>,
    history: Arc<Mutex<Vec<Snapshot>>>,
) {
    let interval = Duration::from_millis(interval_ms);
    let epoch = Instant::now();

    log::info!("Profiling loop started for PID {pid}");

    while active.load(Ordering::SeqCst) && process_alive(pid) {
        let t0 = Instant::now();

        let snapshot = Snapshot {
            timestamp_ms: epoch.elapsed().as_millis() as u64,
            duration_ms: interval_ms,
            metrics: sample_all(&mut handles, &callbacks),
        };

        history.lock().unwrap().push(snapshot.clone());
        callbacks.emit_metric(snapshot);

        let elapsed = t0.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }

    if !process_alive(pid) {
        callbacks.emit_log(format!("Profiled process {pid} has terminated"));

        let final_snapshot = Snapshot {
            timestamp_ms: epoch.elapsed().as_millis() as u64,
            duration_ms: 0,
            metrics: sample_all(&mut handles, &callbacks),
        };
        history.lock().unwrap().push(final_snapshot.clone());
        callbacks.emit_metric(final_snapshot);

        // The engine's own `active` flag still reads `true` here (this
        // path only runs when the target died rather than when `stop()`
        // flipped it); clear it so `is_active()` reflects reality without
        // an explicit `stop()` call, per spec.md §4.2.
        active.store(false, Ordering::SeqCst);
        callbacks.emit_session_ended();
    }

    log::info!("Profiling loop finished");

    // Dropping `handles` here closes every counter descriptor.
    drop(handles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    #[test]
    fn no_metrics_rejected() {
        let engine = Engine::new();
        assert!(matches!(
            engine.start(std::process::id() as pid_t, &[], 500),
            Err(EngineError::NoMetrics)
        ));
    }

    #[test]
    fn dead_pid_rejected() {
        let engine = Engine::new();
        // A pid essentially guaranteed not to exist.
        let bogus_pid = 1_999_999_999;
        assert!(matches!(
            engine.start(bogus_pid, &[MetricKind::PageFaults], 500),
            Err(EngineError::ProcessDead)
        ));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn stop_is_idempotent() {
        let engine = Engine::new();
        engine.stop();
        engine.stop();
        assert!(!engine.is_active());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn happy_path_against_sleep() {
        let _ = env_logger::try_init();

        let mut child = std::process::Command::new("/bin/sleep")
            .arg("2")
            .spawn()
            .expect("spawn /bin/sleep");
        let pid = child.id() as pid_t;

        let (tx, rx) = mpsc::channel();
        let engine = Engine::new();
        engine.on_metric(move |snapshot| {
            let _ = tx.send(snapshot);
        });

        engine
            .start(pid, &[MetricKind::PageFaults], 100)
            .expect("engine.start");

        // Collect at least two snapshots within the child's lifetime.
        let first = rx.recv_timeout(Duration::from_secs(1)).expect("first snapshot");
        let second = rx.recv_timeout(Duration::from_secs(1)).expect("second snapshot");
        assert!(second.timestamp_ms >= first.timestamp_ms);
        assert_eq!(first.metrics.len(), 1);
        assert_eq!(first.metrics[0].kind, MetricKind::PageFaults);

        engine.stop();
        let _ = child.kill();
        let _ = child.wait();
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn session_ended_callback_fires_when_target_dies() {
        let _ = env_logger::try_init();

        let mut child = std::process::Command::new("/bin/sleep")
            .arg("1")
            .spawn()
            .expect("spawn /bin/sleep");
        let pid = child.id() as pid_t;

        let engine = Engine::new();
        let (tx, rx) = mpsc::channel();
        engine.on_session_ended(move || {
            let _ = tx.send(());
        });

        engine
            .start(pid, &[MetricKind::PageFaults], 100)
            .expect("engine.start");

        rx.recv_timeout(Duration::from_secs(3))
            .expect("on_session_ended to fire once the target exits");
        assert!(!engine.is_active());

        let _ = child.wait();
    }
}
