//! Entropy access on Linux via the `getrandom` system call, which reads
//! directly from the kernel entropy pool.

use libc::{c_void, getrandom};

/// Fills a buffer with random bytes from the operating system.
///
/// Partial reads are handled transparently; the call loops until the
/// whole buffer is filled.
///
/// # Panics
/// Panics if `getrandom` reports an error. That indicates a broken
/// kernel interface and is treated as unrecoverable.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
