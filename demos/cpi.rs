//! Profile a child for a fixed duration and report cycles-per-instruction
//! from the accumulated deltas.
//!
//! `cargo run --example cpi -- /bin/sleep 3`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use proc_profiler::{MetricKind, ProfilingConfig, SessionCoordinator};

fn main() {
    let mut args = std::env::args().skip(1);
    let program = args.next().unwrap_or_else(|| "/bin/sleep".to_string());
    let rest: Vec<String> = args.collect();

    let totals = Arc::new(Mutex::new((0u64, 0u64)));
    let coordinator = SessionCoordinator::new();

    let totals_cb = totals.clone();
    coordinator.set_metric_callback(move |snapshot| {
        let mut totals = totals_cb.lock().unwrap();
        for sample in &snapshot.metrics {
            match sample.kind {
                MetricKind::CpuCycles => totals.0 += sample.delta,
                MetricKind::Instructions => totals.1 += sample.delta,
                _ => {}
            }
        }
    });
    coordinator.set_error_callback(|err| eprintln!("[error] {err}"));

    let config = ProfilingConfig::new(
        vec![MetricKind::CpuCycles, MetricKind::Instructions],
        200,
    );

    if !coordinator.start(&program, &rest, config) {
        std::process::exit(1);
    }

    while coordinator.is_active() {
        std::thread::sleep(Duration::from_millis(100));
    }

    let (cycles, instructions) = *totals.lock().unwrap();
    if instructions == 0 {
        println!("no instructions counted");
    } else {
        println!(
            "{cycles} cycles, {instructions} instructions ({:.2} cpi)",
            cycles as f64 / instructions as f64
        );
    }
}
