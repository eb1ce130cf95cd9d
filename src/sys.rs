//! Thin wrapper over the raw `perf_event_open` syscall for one `(pid, kind)`
//! pair. Everything unsafe in this crate lives here.

use std::io;
use std::mem::size_of;
use std::os::unix::io::{FromRawFd, OwnedFd};

use libc::pid_t;
use perf_event_open_sys::{self as raw, bindings};

use crate::metric::MetricKind;

/// Open one `perf_event_open` file descriptor attached to `pid`, on any
/// CPU, for the given metric kind.
///
/// The descriptor is created disabled, excluding hypervisor events, and
/// including kernel events, per spec.md §6's attribute table. The caller
/// is responsible for resetting and enabling it.
pub fn open_counter(pid: pid_t, kind: MetricKind) -> io::Result<OwnedFd> {
    let mut attrs = bindings::perf_event_attr::default();
    attrs.size = size_of::<bindings::perf_event_attr>() as u32;
    attrs.type_ = kind.perf_type();
    attrs.config = kind.perf_config();
    attrs.set_disabled(1);
    attrs.set_exclude_hv(1);
    attrs.set_exclude_kernel(0);

    // group_fd = -1: each counter is opened independently (no group
    // leader), matching spec.md §9's "Counter groups" design note.
    let result = unsafe { raw::perf_event_open(&mut attrs, pid, -1, -1, 0) };

    if result < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(unsafe { OwnedFd::from_raw_fd(result) })
}

/// `PERF_EVENT_IOC_RESET`.
pub fn reset(fd: &OwnedFd) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;
    let result = unsafe { raw::ioctls::RESET(fd.as_raw_fd(), 0) };
    if result < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// `PERF_EVENT_IOC_ENABLE`.
pub fn enable(fd: &OwnedFd) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;
    let result = unsafe { raw::ioctls::ENABLE(fd.as_raw_fd(), 0) };
    if result < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Read the counter's current absolute 64-bit value.
///
/// Per spec.md §4.2 step 2: a short read (fewer than 8 bytes) is
/// reported to the caller as `Ok(None)` rather than an error, so the
/// sampler can downgrade that one counter's delta to 0 instead of
/// failing the whole snapshot.
pub fn read_absolute(fd: &OwnedFd) -> io::Result<Option<u64>> {
    use std::os::unix::io::AsRawFd;

    let mut buf = [0u8; 8];
    let n = unsafe {
        libc::read(
            fd.as_raw_fd(),
            buf.as_mut_ptr() as *mut libc::c_void,
            buf.len(),
        )
    };
    if n < 0 {
        return Err(io::Error::last_os_error());
    }
    if n as usize != buf.len() {
        return Ok(None);
    }
    Ok(Some(u64::from_ne_bytes(buf)))
}
