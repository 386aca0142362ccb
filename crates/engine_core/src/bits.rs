//! Byte-order conversions and small integer helpers.
//!
//! Mapped data files (network weights, tablebases) are stored in a fixed byte
//! order. These helpers convert values read from such files to native order
//! regardless of the host.

/// True when the host stores integers least significant byte first.
#[inline(always)]
pub const fn is_little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// Convert a little-endian `u16` to native order.
#[inline(always)]
pub const fn from_le_u16(v: u16) -> u16 {
    u16::from_le(v)
}

/// Convert a little-endian `u32` to native order.
#[inline(always)]
pub const fn from_le_u32(v: u32) -> u32 {
    u32::from_le(v)
}

/// Convert a big-endian `u16` to native order.
#[inline(always)]
pub const fn from_be_u16(v: u16) -> u16 {
    u16::from_be(v)
}

/// Convert a big-endian `u32` to native order.
#[inline(always)]
pub const fn from_be_u32(v: u32) -> u32 {
    u32::from_be(v)
}

/// Convert a big-endian `u64` to native order.
#[inline(always)]
pub const fn from_be_u64(v: u64) -> u64 {
    u64::from_be(v)
}

/// Read a little-endian `u16` at `offset`. No alignment requirement.
///
/// Returns `None` when fewer than two bytes remain.
#[inline]
pub fn read_le_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    let raw = bytes.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes(raw.try_into().ok()?))
}

/// Read a little-endian `u32` at `offset`. No alignment requirement.
///
/// Returns `None` when fewer than four bytes remain.
#[inline]
pub fn read_le_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw = bytes.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes(raw.try_into().ok()?))
}

/// High 64 bits of the full 128-bit product `a * b`.
///
/// Maps a uniformly distributed hash onto `0..b` without a division, which
/// is how hash tables pick a bucket from a key.
#[inline(always)]
pub const fn mul_hi64(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) >> 64) as u64
}

#[cfg(test)]
#[path = "bits_tests.rs"]
mod bits_tests;
