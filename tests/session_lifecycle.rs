//! Exercises the public crate surface the way an external caller would:
//! through `SessionCoordinator` only, never the internal `Engine`/
//! `Supervisor` types directly.

#![cfg(target_os = "linux")]

use std::sync::mpsc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use proc_profiler::{MetricKind, ProfilingConfig, SessionCoordinator, SessionState};

#[test]
fn profiling_a_short_lived_child_reports_a_final_snapshot() {
    let _ = env_logger::try_init();

    let coordinator = SessionCoordinator::new();

    let (metric_tx, metric_rx) = mpsc::channel();
    coordinator.set_metric_callback(move |snapshot| {
        let _ = metric_tx.send(snapshot);
    });

    let (log_tx, log_rx) = mpsc::channel();
    coordinator.set_log_callback(move |line| {
        let _ = log_tx.send(line);
    });

    let config = ProfilingConfig::new(vec![MetricKind::PageFaults], 200);
    let started = coordinator.start("/bin/sleep", &["1".to_string()], config);
    assert!(started);
    assert_eq!(coordinator.state(), SessionState::Running);

    let start_line = log_rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(start_line.starts_with("Started profiling PID"));

    let mut saw_terminated_line = false;
    for _ in 0..20 {
        if let Ok(line) = log_rx.recv_timeout(Duration::from_millis(500)) {
            if line.contains("has terminated") {
                saw_terminated_line = true;
                break;
            }
        }
        if !coordinator.is_active() {
            break;
        }
    }
    assert!(saw_terminated_line, "expected a termination log line");

    let mut snapshots = Vec::new();
    while let Ok(snapshot) = metric_rx.try_recv() {
        snapshots.push(snapshot);
    }
    assert!(!snapshots.is_empty());
    assert_eq!(snapshots.last().unwrap().duration_ms, 0);

    for window in snapshots.windows(2) {
        assert!(window[1].timestamp_ms >= window[0].timestamp_ms);
    }
}

#[test]
fn a_session_can_be_restarted_after_an_explicit_stop() {
    let _ = env_logger::try_init();

    let coordinator = SessionCoordinator::new();
    coordinator.set_error_callback(|_| {});
    coordinator.set_log_callback(|_| {});
    coordinator.set_metric_callback(|_| {});

    let config = || ProfilingConfig::new(vec![MetricKind::PageFaults], 200);

    assert!(coordinator.start("/bin/sleep", &["5".to_string()], config()));
    let first_pid = coordinator.current_pid();
    assert!(first_pid.is_some());

    coordinator.stop();
    assert!(!coordinator.is_active());
    assert_eq!(coordinator.current_pid(), None);
    assert_eq!(coordinator.state(), SessionState::Idle);

    assert!(coordinator.start("/bin/sleep", &["5".to_string()], config()));
    let second_pid = coordinator.current_pid();
    assert!(second_pid.is_some());
    assert_ne!(first_pid, second_pid);

    coordinator.stop();
}

#[test]
fn empty_program_path_never_touches_the_supervisor() {
    let coordinator = SessionCoordinator::new();
    let (tx, rx) = mpsc::channel();
    coordinator.set_error_callback(move |msg| {
        let _ = tx.send(msg);
    });

    let started = coordinator.start("", &[], ProfilingConfig::default());

    assert!(!started);
    assert_eq!(rx.recv().unwrap(), "Programm path is empty!");
    assert_eq!(coordinator.state(), SessionState::Idle);
    assert_eq!(coordinator.current_pid(), None);
}
