//! OS resource layer: read-only file mapping and large memory reservations.
//!
//! Callers depend only on the types exported here. The OS-specific code lives
//! in [`sys`], one backend per platform family, selected at compile time.
//!
//! All failures come back as [`PlatformError`](crate::PlatformError) values.
//! Every resource is released by `Drop`, so no exit path can leak a handle,
//! a mapping or a reservation.

mod caps;
mod file;
mod memory;
mod sys;

pub use caps::{PlatformCaps, caps};
pub use file::{FileHandle, FileMapping};
pub use memory::{LARGE_PAGE_ALIGNMENT, LargeAllocation, allocate};
