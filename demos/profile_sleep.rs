//! Spawn a short-lived child and print each interval's counter deltas.
//!
//! `cargo run --example profile_sleep -- /bin/sleep 2`

use proc_profiler::{MetricKind, ProfilingConfig, SessionCoordinator};

fn main() {
    let mut args = std::env::args().skip(1);
    let program = args.next().unwrap_or_else(|| "/bin/sleep".to_string());
    let rest: Vec<String> = args.collect();

    let coordinator = SessionCoordinator::new();
    coordinator.set_metric_callback(|snapshot| {
        for sample in &snapshot.metrics {
            println!(
                "t={}ms {}: +{} {}",
                snapshot.timestamp_ms, sample.name, sample.delta, sample.unit
            );
        }
    });
    coordinator.set_log_callback(|line| println!("[log] {line}"));
    coordinator.set_error_callback(|err| eprintln!("[error] {err}"));

    let config = ProfilingConfig::new(
        vec![MetricKind::PageFaults, MetricKind::ContextSwitches],
        250,
    );

    if !coordinator.start(&program, &rest, config) {
        std::process::exit(1);
    }

    while coordinator.is_active() {
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
}
