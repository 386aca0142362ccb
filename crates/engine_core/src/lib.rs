//! Platform substrate shared by the engine crates.
//!
//! Everything here sits below search and evaluation:
//! - [`platform`]: read-only file mapping and (optionally huge-page backed)
//!   zeroed memory reservations, with capability detection cached per process
//! - [`prng`]: the xorshift64* generator used for hash keys and seeding
//! - [`bits`]: byte-order conversions and small integer helpers used when
//!   decoding mapped data files
//! - [`hint`]: cache prefetch for hash table probes
//! - [`time`]: millisecond wall clock

pub mod bits;
pub mod error;
pub mod hint;
pub mod platform;
pub mod prng;
pub mod time;

// Re-export the types most consumers need
pub use error::PlatformError;
pub use platform::{
    FileHandle, FileMapping, LARGE_PAGE_ALIGNMENT, LargeAllocation, PlatformCaps, allocate, caps,
};
pub use prng::Prng;
pub use time::{TimePoint, now};
