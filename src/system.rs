//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, u32) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };

    // clock_gettime only fails for an unknown clock id, and CLOCK_REALTIME
    // is always present.
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };

    #[allow(trivial_numeric_casts)]
    (ts.tv_sec as i64, ts.tv_nsec as u32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(unix))]
pub(crate) fn sys_time() -> (i64, u32) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since)  => (since.as_secs() as i64, since.subsec_nanos()),
        Err(e)     => {
            // The clock is set before 1970.
            let before = e.duration();
            if before.subsec_nanos() == 0 {
                (-(before.as_secs() as i64), 0)
            }
            else {
                (-(before.as_secs() as i64) - 1, 1_000_000_000 - before.subsec_nanos())
            }
        }
    }
}
