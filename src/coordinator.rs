//! Composes the [`Supervisor`] and [`Engine`] into a single start/stop
//! lifecycle, fans events out to an observer, and enforces "at most one
//! active session".
//!
//! Grounded in `original_source/manager/manager.cpp`'s `Manager`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ProfilingConfig;
use crate::engine::Engine;
use crate::snapshot::Snapshot;
use crate::supervisor::Supervisor;

type ObserverCallback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// The post-spawn grace period spec.md §4.3 calls a heuristic with no
/// documented rationale. Not currently configurable (see spec.md §9's
/// "Open questions"); a future revision may want to expose it.
const SPAWN_GRACE_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Default)]
struct Observer {
    metric: Mutex<Option<ObserverCallback<Snapshot>>>,
    log: Mutex<Option<ObserverCallback<String>>>,
    error: Mutex<Option<ObserverCallback<String>>>,
}

impl Observer {
    fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        match self.error.lock().unwrap().as_ref() {
            Some(cb) => cb(message),
            None => eprintln!("{message}"),
        }
    }

    fn report_metric(&self, snapshot: Snapshot) {
        match self.metric.lock().unwrap().as_ref() {
            Some(cb) => cb(snapshot),
            None => self.report_error("undefined callback"),
        }
    }

    fn report_log(&self, message: String) {
        match self.log.lock().unwrap().as_ref() {
            Some(cb) => cb(message),
            None => self.report_error("undefined callback"),
        }
    }
}

/// Current session lifecycle state (spec.md §3's `SessionState`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Idle,
    Starting,
    Running,
    Stopping,
}

struct SessionInfo {
    pid: Option<i32>,
    program: String,
    config: ProfilingConfig,
}

impl Default for SessionInfo {
    fn default() -> Self {
        SessionInfo {
            pid: None,
            program: "idle".to_string(),
            config: ProfilingConfig::default(),
        }
    }
}

/// The coordinator's lifecycle bookkeeping, pulled out of
/// `SessionCoordinator` itself and behind an `Arc` so that the
/// `Engine::on_session_ended` hook (invoked on the sampler thread, not the
/// observer's thread) can resync it without borrowing `SessionCoordinator`.
#[derive(Default)]
struct Tracking {
    active: AtomicBool,
    state: Mutex<SessionState>,
    session: Mutex<SessionInfo>,
}

impl Tracking {
    /// Transition back to `Idle` exactly once. Called from the sampler
    /// thread's `on_session_ended` hook when the target dies mid-session.
    /// Shares its `active` flag with `SessionCoordinator::stop()`'s own
    /// compare-exchange, so whichever of the two notices the session
    /// ending first performs the transition and the other is a no-op.
    fn end_session(&self) -> bool {
        if self
            .active
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }
        *self.session.lock().unwrap() = SessionInfo::default();
        *self.state.lock().unwrap() = SessionState::Idle;
        true
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

/// Drives the [`Supervisor`] and [`Engine`] through one start/stop
/// lifecycle at a time and normalizes their callbacks into the three
/// observer hooks (spec.md §4.3).
pub struct SessionCoordinator {
    supervisor: Arc<Supervisor>,
    engine: Arc<Engine>,
    observer: Arc<Observer>,
    tracking: Arc<Tracking>,
}

impl SessionCoordinator {
    pub fn new() -> Self {
        let coordinator = SessionCoordinator {
            supervisor: Arc::new(Supervisor::new()),
            engine: Arc::new(Engine::new()),
            observer: Arc::new(Observer::default()),
            tracking: Arc::new(Tracking::default()),
        };
        coordinator.wire_engine_callbacks();
        coordinator
    }

    fn wire_engine_callbacks(&self) {
        let observer = self.observer.clone();
        self.engine.on_metric(move |snapshot| observer.report_metric(snapshot));

        let observer = self.observer.clone();
        self.engine.on_log(move |message| observer.report_log(message));

        let observer = self.observer.clone();
        self.engine.on_error(move |message| observer.report_error(message));

        // spec.md §4.2/§8 scenario 6: when the sampler notices the target
        // died mid-session, the coordinator must become inactive on its
        // own, without an explicit `stop()`. `Engine::stop()` is
        // deliberately *not* called here — this hook runs on the sampler
        // thread itself, and `Engine::stop()` joins that same thread,
        // which would deadlock. Signalling the (already-dead) child is
        // still safe and idempotent.
        let tracking = self.tracking.clone();
        let supervisor = self.supervisor.clone();
        self.engine.on_session_ended(move || {
            if tracking.end_session() {
                supervisor.terminate();
            }
        });
    }

    pub fn set_metric_callback(&self, callback: impl Fn(Snapshot) + Send + Sync + 'static) {
        *self.observer.metric.lock().unwrap() = Some(Arc::new(callback));
    }

    pub fn set_log_callback(&self, callback: impl Fn(String) + Send + Sync + 'static) {
        *self.observer.log.lock().unwrap() = Some(Arc::new(callback));
    }

    pub fn set_error_callback(&self, callback: impl Fn(String) + Send + Sync + 'static) {
        *self.observer.error.lock().unwrap() = Some(Arc::new(callback));
    }

    /// Validate `config`, spawn `program_path`/`argv`, wait out the
    /// post-spawn grace period, then hand the pid to the engine. Returns
    /// `false` and reports exactly one error on the first failure,
    /// exactly per spec.md §4.3's ordered steps.
    pub fn start(&self, program_path: &str, argv: &[String], config: ProfilingConfig) -> bool {
        // Defensive: a caller restarting after an observer-side crash may
        // call `start` while a previous child is still alive.
        if self.supervisor.is_running() {
            self.supervisor.terminate();
        }

        if program_path.is_empty() {
            self.observer.report_error("Programm path is empty!");
            return false;
        }

        if config.validate().is_err() {
            self.observer.report_error("Configuration is invalid!");
            return false;
        }

        *self.tracking.state.lock().unwrap() = SessionState::Starting;

        let pid = match self.supervisor.spawn(program_path, argv) {
            Ok(pid) => pid,
            Err(_) => {
                self.observer.report_error("Failed to create process!");
                *self.tracking.state.lock().unwrap() = SessionState::Idle;
                return false;
            }
        };

        std::thread::sleep(SPAWN_GRACE_PERIOD);

        if !self.supervisor.is_running() {
            self.observer.report_error("Process ended after start!");
            *self.tracking.state.lock().unwrap() = SessionState::Idle;
            return false;
        }

        if let Err(err) = self.engine.start(pid, &config.metrics, config.interval_ms) {
            // spec.md §7: every error from the engine funnels through the
            // observer's error callback, not just the ones the coordinator
            // synthesizes itself.
            self.observer.report_error(err.to_string());
            self.supervisor.terminate();
            *self.tracking.state.lock().unwrap() = SessionState::Idle;
            return false;
        }

        self.tracking.active.store(true, Ordering::SeqCst);
        *self.tracking.state.lock().unwrap() = SessionState::Running;
        *self.tracking.session.lock().unwrap() = SessionInfo {
            pid: Some(pid),
            program: program_path.to_string(),
            config,
        };

        true
    }

    /// Join the sampler, close counters, signal the child, then reset to
    /// defaults. Idempotent: calling `stop` while already inactive reports
    /// exactly one "already inactive" error and returns. Also a no-op (with
    /// the same error) if the session already ended on its own because the
    /// target died — the `active` compare-exchange here is shared with
    /// `Tracking::end_session`'s one in the `on_session_ended` hook, so
    /// whichever of the two notices the session ending first wins.
    pub fn stop(&self) {
        if self
            .tracking
            .active
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            self.observer.report_error("Profiling inactive already!");
            return;
        }

        *self.tracking.state.lock().unwrap() = SessionState::Stopping;

        self.engine.stop();
        self.supervisor.terminate();

        *self.tracking.session.lock().unwrap() = SessionInfo::default();
        *self.tracking.state.lock().unwrap() = SessionState::Idle;
    }

    /// `true` while a session is running. Also consults the supervisor's
    /// own liveness flag (spec.md §4.2: "The coordinator observes
    /// inactivity via the supervisor's running flag") as a second,
    /// independent signal of the target's death, in case this is called in
    /// the narrow window before the sampler's own death hook has run.
    pub fn is_active(&self) -> bool {
        self.tracking.active.load(Ordering::SeqCst) && self.supervisor.is_running()
    }

    pub fn state(&self) -> SessionState {
        *self.tracking.state.lock().unwrap()
    }

    pub fn current_pid(&self) -> Option<i32> {
        self.tracking.session.lock().unwrap().pid
    }

    pub fn current_program(&self) -> String {
        self.tracking.session.lock().unwrap().program.clone()
    }

    pub fn current_config(&self) -> ProfilingConfig {
        self.tracking.session.lock().unwrap().config.clone()
    }
}

impl Default for SessionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricKind;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    #[test]
    fn empty_path_rejected_before_any_fork() {
        let coordinator = SessionCoordinator::new();
        let (tx, rx) = mpsc::channel();
        coordinator.set_error_callback(move |msg| {
            let _ = tx.send(msg);
        });

        let ok = coordinator.start("", &[], ProfilingConfig::default());

        assert!(!ok);
        assert_eq!(rx.recv().unwrap(), "Programm path is empty!");
        assert!(!coordinator.is_active());
    }

    #[test]
    fn invalid_config_rejected() {
        let coordinator = SessionCoordinator::new();
        let (tx, rx) = mpsc::channel();
        coordinator.set_error_callback(move |msg| {
            let _ = tx.send(msg);
        });

        let ok = coordinator.start(
            "/bin/true",
            &[],
            ProfilingConfig::new(vec![], 500),
        );

        assert!(!ok);
        assert_eq!(rx.recv().unwrap(), "Configuration is invalid!");
    }

    #[test]
    fn stop_when_already_inactive_reports_once() {
        let coordinator = SessionCoordinator::new();
        let (tx, rx) = mpsc::channel();
        coordinator.set_error_callback(move |msg| {
            let _ = tx.send(msg);
        });

        coordinator.stop();
        assert_eq!(rx.recv().unwrap(), "Profiling inactive already!");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn default_session_info_is_idle() {
        let coordinator = SessionCoordinator::new();
        assert_eq!(coordinator.current_pid(), None);
        assert_eq!(coordinator.current_program(), "idle");
        assert_eq!(coordinator.current_config(), ProfilingConfig::default());
        assert_eq!(coordinator.state(), SessionState::Idle);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn immediate_exit_program_is_rejected() {
        let _ = env_logger::try_init();

        let coordinator = SessionCoordinator::new();
        let (tx, rx) = mpsc::channel();
        coordinator.set_error_callback(move |msg| {
            let _ = tx.send(msg);
        });

        let ok = coordinator.start(
            "/bin/true",
            &[],
            ProfilingConfig::new(vec![MetricKind::PageFaults], 500),
        );

        assert!(!ok);
        assert_eq!(rx.recv().unwrap(), "Process ended after start!");
        assert!(!coordinator.is_active());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn becomes_inactive_when_target_dies_without_an_explicit_stop() {
        // spec.md §8 scenario 6: a target that exits mid-session flips
        // `is_active()` to false on its own.
        let _ = env_logger::try_init();

        let coordinator = SessionCoordinator::new();
        coordinator.set_error_callback(|_| {});
        coordinator.set_log_callback(|_| {});
        coordinator.set_metric_callback(|_| {});

        let ok = coordinator.start(
            "/bin/sleep",
            &["1".to_string()],
            ProfilingConfig::new(vec![MetricKind::PageFaults], 100),
        );
        assert!(ok);
        assert!(coordinator.is_active());

        let mut became_idle = false;
        for _ in 0..50 {
            if !coordinator.is_active() {
                became_idle = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(100));
        }

        assert!(became_idle, "is_active() never became false after the target exited");
        assert_eq!(coordinator.state(), SessionState::Idle);
        assert_eq!(coordinator.current_pid(), None);
    }
}
