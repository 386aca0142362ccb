use std::ptr::NonNull;

use super::sys::{MemoryBackend, Native, Reservation};
use crate::error::{PlatformError, Result};

/// Alignment used for large-page requests (2 MiB, the x86-64 huge page size).
pub const LARGE_PAGE_ALIGNMENT: usize = 1 << 21;

/// A zero-initialized block of process memory, released on drop.
///
/// The usable region may start past the start of the underlying reservation
/// (alignment padding). Release always goes through the original reservation.
#[derive(Debug)]
pub struct LargeAllocation {
    reservation: Reservation,
    ptr: NonNull<u8>,
    len: usize,
}

// The block is exclusively owned; access goes through &self / &mut self.
unsafe impl Send for LargeAllocation {}
unsafe impl Sync for LargeAllocation {}

/// Reserve at least `size` zeroed bytes.
///
/// With `want_large_pages` the block is backed by huge pages where the OS
/// allows it, and otherwise aligned to [`LARGE_PAGE_ALIGNMENT`]. Callers must
/// not assume huge pages were actually granted.
pub fn allocate(size: usize, want_large_pages: bool) -> Result<LargeAllocation> {
    if size == 0 {
        return Err(PlatformError::ZeroSized);
    }

    let reservation = Native::reserve(size, want_large_pages)
        .map_err(|source| PlatformError::Allocate { size, source })?;

    let base = reservation.base.as_ptr() as usize;
    let offset = base.wrapping_neg() & (reservation.alignment - 1);
    // SAFETY: the backend over-allocated by alignment - 1, so base + offset + size
    // stays inside the reservation.
    let ptr = unsafe { reservation.base.add(offset) };

    tracing::debug!(
        size,
        reserved = reservation.size,
        offset,
        large_pages = reservation.large_pages,
        "allocated memory block"
    );

    Ok(LargeAllocation {
        reservation,
        ptr,
        len: size,
    })
}

impl LargeAllocation {
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Usable length (what was requested).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes actually reserved from the OS, padding included.
    pub fn reserved(&self) -> usize {
        self.reservation.size
    }

    /// True if the OS large-page primitive backed this block.
    ///
    /// On unix this only reports that huge pages were requested; the kernel
    /// decides per page whether to honor it.
    pub fn large_pages(&self) -> bool {
        self.reservation.large_pages
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr..ptr+len is inside the live reservation and was zeroed by the OS.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as above, and &mut self gives exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Preload the cache line at `offset`. Out-of-range offsets are harmless.
    #[inline(always)]
    pub fn prefetch(&self, offset: usize) {
        crate::hint::prefetch(self.as_ptr().wrapping_add(offset));
    }

    /// Zero the usable region.
    pub fn clear(&mut self) {
        self.as_mut_slice().fill(0);
    }

    /// Release the reservation now instead of at end of scope.
    pub fn free(self) {}
}

impl Drop for LargeAllocation {
    fn drop(&mut self) {
        tracing::debug!(reserved = self.reservation.size, "releasing memory block");
        // SAFETY: the reservation came from Native::reserve and Drop runs once.
        unsafe { Native::release(&self.reservation) };
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
