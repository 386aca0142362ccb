//! Platform backends for memory reservations.

use std::io;
use std::ptr::NonNull;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub(crate) type Native = unix::UnixBackend;
#[cfg(windows)]
pub(crate) type Native = windows::WindowsBackend;

/// One OS reservation as handed back by a backend.
///
/// `base` and `size` describe exactly what must be released; the pointer given
/// to callers may sit up to `alignment - 1` bytes past `base`.
#[derive(Debug)]
pub(crate) struct Reservation {
    pub base: NonNull<u8>,
    pub size: usize,
    pub alignment: usize,
    pub large_pages: bool,
}

pub(crate) trait MemoryBackend {
    /// Reserve and commit at least `size` zeroed, read-write bytes.
    ///
    /// When `large_pages` is set the reservation either uses the OS large-page
    /// primitive or is over-allocated so the caller can align to
    /// [`LARGE_PAGE_ALIGNMENT`](super::LARGE_PAGE_ALIGNMENT).
    fn reserve(size: usize, large_pages: bool) -> io::Result<Reservation>;

    /// Release a reservation previously returned by `reserve`.
    ///
    /// # Safety
    /// `reservation` must come from `reserve` on this backend and must not be
    /// released twice.
    unsafe fn release(reservation: &Reservation);

    /// Whether this process can get large pages at all.
    fn large_pages_supported() -> bool;
}
