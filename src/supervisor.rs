//! Forks and execs a target program, tracks its liveness, and terminates
//! it on demand.
//!
//! Grounded in `original_source/processes/process_manager.cpp`'s
//! `ProcessManager`, reworked onto `nix`'s process primitives the way
//! the sibling pack crate `anp-perf_events` (a `nix` dependency) and the
//! `other_examples` supervisor (`FuelLabs-forc-telemetry`'s
//! `src/supervisor.rs`) use them.

use std::ffi::CString;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use libc::pid_t;
use nix::sys::signal::{self, Signal};
use nix::sys::wait::waitpid;
use nix::unistd::{fork, ForkResult, Pid};

use crate::error::SpawnError;

const NO_PID: i32 = -1;

#[derive(Default)]
struct Shared {
    pid: AtomicI32,
    running: AtomicBool,
}

/// Spawns and supervises one child process at a time.
///
/// Exposes `spawn`, `terminate`, `is_running`, `pid` per spec.md §4.1. A
/// background waiter thread, started immediately after a successful
/// `spawn`, blocks on the child's termination and clears liveness when it
/// returns; it is joined before the `Supervisor` is dropped or before the
/// next `spawn` replaces it.
pub struct Supervisor {
    shared: Arc<Shared>,
    waiter: Mutex<Option<JoinHandle<()>>>,
}

impl Supervisor {
    pub fn new() -> Self {
        Supervisor {
            shared: Arc::new(Shared {
                pid: AtomicI32::new(NO_PID),
                running: AtomicBool::new(false),
            }),
            waiter: Mutex::new(None),
        }
    }

    /// Fork and exec `program_path` with `argv` prepended by
    /// `program_path` as argv[0]. Fails with [`SpawnError::EmptyPath`],
    /// [`SpawnError::AlreadyRunning`], or [`SpawnError::ForkFailed`]. A
    /// failed `execvp` inside the child is not reported here — the child
    /// simply exits non-zero, and the parent observes that as ordinary
    /// process termination (spec.md §4.1's "Exec protocol").
    pub fn spawn(&self, program_path: &str, argv: &[String]) -> Result<pid_t, SpawnError> {
        if program_path.is_empty() {
            return Err(SpawnError::EmptyPath);
        }
        if self.shared.running.load(Ordering::SeqCst) {
            return Err(SpawnError::AlreadyRunning);
        }

        self.join_waiter();

        let program_c = CString::new(program_path).map_err(|_| SpawnError::EmptyPath)?;
        let mut argv_c = Vec::with_capacity(argv.len() + 2);
        argv_c.push(program_c.clone());
        for arg in argv {
            argv_c.push(CString::new(arg.as_str()).map_err(|_| SpawnError::EmptyPath)?);
        }

        // Flush our own stdio before forking so buffered output isn't
        // duplicated into the child's copy of the buffers.
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();

        match unsafe { fork() }
            .map_err(|errno| SpawnError::ForkFailed(std::io::Error::from_raw_os_error(errno as i32)))?
        {
            ForkResult::Child => exec_or_die(&program_c, &argv_c),
            ForkResult::Parent { child } => {
                self.shared.pid.store(child.as_raw(), Ordering::SeqCst);
                self.shared.running.store(true, Ordering::SeqCst);

                let shared = self.shared.clone();
                let handle = std::thread::spawn(move || {
                    let _ = waitpid(child, None);
                    shared.running.store(false, Ordering::SeqCst);
                    shared.pid.store(NO_PID, Ordering::SeqCst);
                });
                *self.waiter.lock().unwrap() = Some(handle);

                Ok(child.as_raw())
            }
        }
    }

    /// Send `SIGTERM` to the child, if any. Does not escalate to
    /// `SIGKILL` and does not block for the child to actually exit — the
    /// waiter thread observes that asynchronously. Safe to call when
    /// idle; idempotent.
    pub fn terminate(&self) {
        if self.shared.running.load(Ordering::SeqCst) {
            let pid = Pid::from_raw(self.shared.pid.load(Ordering::SeqCst));
            let _ = signal::kill(pid, Signal::SIGTERM);
        }
    }

    /// Non-blocking: reports the waiter thread's last observation.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    /// `None` when no child has ever been spawned, or the last one has
    /// exited.
    pub fn pid(&self) -> Option<pid_t> {
        let pid = self.shared.pid.load(Ordering::SeqCst);
        (pid != NO_PID).then_some(pid)
    }

    fn join_waiter(&self) {
        if let Some(handle) = self.waiter.lock().unwrap().take() {
            let _ = handle.join();
        }
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Supervisor {
    fn drop(&mut self) {
        self.terminate();
        self.join_waiter();
    }
}

/// Replace the child image with `program`/`argv` using path-searching
/// exec semantics (`execvp`). If exec returns at all, it failed; the
/// child exits non-zero immediately with `_exit` (not `exit`), skipping
/// `atexit` handlers and stdio flushing a second time.
fn exec_or_die(program: &CString, argv: &[CString]) -> ! {
    let mut argv_ptrs: Vec<*const libc::c_char> =
        argv.iter().map(|arg| arg.as_ptr()).collect();
    argv_ptrs.push(std::ptr::null());

    unsafe {
        libc::execvp(program.as_ptr(), argv_ptrs.as_ptr());
        libc::_exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_rejected_before_fork() {
        let sup = Supervisor::new();
        assert!(matches!(
            sup.spawn("", &[]),
            Err(SpawnError::EmptyPath)
        ));
        assert!(!sup.is_running());
        assert_eq!(sup.pid(), None);
    }

    #[test]
    fn terminate_is_a_no_op_when_idle() {
        let sup = Supervisor::new();
        sup.terminate();
        sup.terminate();
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn spawn_and_wait_for_exit() {
        let _ = env_logger::try_init();

        let sup = Supervisor::new();
        let pid = sup.spawn("/bin/true", &[]).expect("spawn /bin/true");
        assert_eq!(sup.pid(), Some(pid));

        for _ in 0..100 {
            if !sup.is_running() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(!sup.is_running());
        assert_eq!(sup.pid(), None);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn second_spawn_while_running_is_rejected() {
        let _ = env_logger::try_init();

        let sup = Supervisor::new();
        sup.spawn("/bin/sleep", &["2".to_string()]).expect("spawn sleep");
        assert!(matches!(
            sup.spawn("/bin/sleep", &["2".to_string()]),
            Err(SpawnError::AlreadyRunning)
        ));
        sup.terminate();
    }
}
