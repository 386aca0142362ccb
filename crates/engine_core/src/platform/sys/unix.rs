use std::io;
use std::ptr::{self, NonNull};

use super::{MemoryBackend, Reservation};
use crate::platform::LARGE_PAGE_ALIGNMENT;

pub(crate) struct UnixBackend;

#[cfg(target_os = "linux")]
const THP_ENABLED: &str = "/sys/kernel/mm/transparent_hugepage/enabled";

impl MemoryBackend for UnixBackend {
    fn reserve(size: usize, large_pages: bool) -> io::Result<Reservation> {
        // No portable huge-page mmap flag: over-allocate and align by hand
        let alignment = if large_pages { LARGE_PAGE_ALIGNMENT } else { 1 };
        let alloc_size = size
            .checked_add(alignment - 1)
            .ok_or_else(|| io::Error::from(io::ErrorKind::OutOfMemory))?;

        // SAFETY: anonymous private mapping, no fd, no fixed address.
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                alloc_size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        #[cfg(target_os = "linux")]
        if large_pages {
            // Advisory only; the mapping is usable either way.
            // SAFETY: range is exactly the mapping created above.
            let rc = unsafe { libc::madvise(ptr, alloc_size, libc::MADV_HUGEPAGE) };
            if rc != 0 {
                tracing::debug!(error = %io::Error::last_os_error(), "MADV_HUGEPAGE rejected");
            }
        }

        let base = NonNull::new(ptr.cast::<u8>())
            .ok_or_else(|| io::Error::from(io::ErrorKind::OutOfMemory))?;

        Ok(Reservation {
            base,
            size: alloc_size,
            alignment,
            large_pages,
        })
    }

    unsafe fn release(reservation: &Reservation) {
        // SAFETY: caller guarantees base/size are one live mapping from reserve().
        let rc = unsafe { libc::munmap(reservation.base.as_ptr().cast(), reservation.size) };
        if rc != 0 {
            tracing::warn!(error = %io::Error::last_os_error(), "munmap failed");
        }
    }

    #[cfg(target_os = "linux")]
    fn large_pages_supported() -> bool {
        // Transparent huge pages must be compiled in and not switched off
        match std::fs::read_to_string(THP_ENABLED) {
            Ok(mode) => !mode.contains("[never]"),
            Err(_) => false,
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn large_pages_supported() -> bool {
        true
    }
}
