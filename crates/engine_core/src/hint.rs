//! Cache preload hints for table probes.
//!
//! A prefetch never faults, so any address is accepted, including one past
//! the end of an allocation. On targets without a prefetch instruction the
//! calls compile to nothing.

/// Start pulling the cache line holding `addr` into L1 without waiting.
#[inline(always)]
pub fn prefetch<T>(addr: *const T) {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_MM_HINT_T0, _mm_prefetch};
        // SAFETY: prefetch is a hint and does not dereference the address.
        #[allow(unused_unsafe)]
        unsafe {
            _mm_prefetch::<_MM_HINT_T0>(addr.cast::<i8>())
        };
    }
    #[cfg(not(target_arch = "x86_64"))]
    let _ = addr;
}

/// Preload two consecutive cache lines starting at `addr`.
#[inline(always)]
pub fn prefetch2<T>(addr: *const T) {
    prefetch(addr);
    prefetch(addr.cast::<u8>().wrapping_add(CACHE_LINE_SIZE));
}

/// Cache line size assumed by [`prefetch2`].
pub const CACHE_LINE_SIZE: usize = 64;

#[cfg(test)]
#[path = "hint_tests.rs"]
mod hint_tests;
