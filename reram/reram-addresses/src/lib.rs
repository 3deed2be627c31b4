//! # Virtual and Physical Row Address Types
//!
//! Strongly typed wrappers for the addressing vocabulary of a region-mapped
//! ReRAM device.
//!
//! ## Overview
//!
//! A row address names one row of resistive memory inside a bank. The high
//! bits of a row address select a *region* (a contiguous block of rows, the
//! wear-leveling granularity) and the low bits select the row within that
//! region. Translation rewrites the region bits and leaves the row offset
//! untouched, so three distinct concepts show up in signatures:
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`VirtualRowAddress`] / [`PhysicalRowAddress`] | A full row address before/after translation. |
//! | [`VirtualRegion`] / [`PhysicalRegion`] | The region-granularity component of an address. |
//! | [`RowOffset`] | The in-region row offset, invariant under translation. |
//!
//! The wrappers are `#[repr(transparent)]` newtypes over `u64` (addresses)
//! and `u32` (region numbers), so they cost nothing at run time while
//! preventing a physical value from being fed back into a virtual slot.
//!
//! ## Typical Usage
//!
//! ```rust
//! use reram_addresses::{PhysicalRegion, VirtualRowAddress};
//!
//! let vra = VirtualRowAddress::new((10 << 6) | 31);
//! assert_eq!(vra.as_u64() >> 6, 10);
//!
//! let prn = PhysicalRegion::new(20);
//! assert_eq!(prn.index(), 20);
//! ```
//!
//! Splitting an address into its region and offset depends on the configured
//! region size and therefore lives with the device geometry, not here.

#![cfg_attr(not(any(test, doctest)), no_std)]

use core::fmt;

/// A **virtual** row address: what the memory controller presents before
/// region translation.
///
/// Newtype over `u64` to prevent mixing with physical addresses.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VirtualRowAddress(u64);

/// A **physical** row address: the row actually driven in the array after
/// region translation.
///
/// Newtype over `u64` to prevent mixing with virtual addresses.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PhysicalRowAddress(u64);

/// A **virtual** region number (VRN): the logical region an address falls in,
/// scoped to one bank.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VirtualRegion(u32);

/// A **physical** region number (PRN): the region of cells a virtual region
/// currently resolves to, scoped to one bank.
///
/// Unlike the virtual/physical *mapping*, properties keyed purely by PRN
/// (such as fast/slow placement) never change over the device lifetime.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PhysicalRegion(u32);

/// The row offset within a region.
///
/// Carried across translation unchanged; only the region component of an
/// address is ever rewritten.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RowOffset(u64);

impl VirtualRowAddress {
    #[inline]
    #[must_use]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl PhysicalRowAddress {
    #[inline]
    #[must_use]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl VirtualRegion {
    #[inline]
    #[must_use]
    pub const fn new(region: u32) -> Self {
        Self(region)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The region number as a table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl PhysicalRegion {
    #[inline]
    #[must_use]
    pub const fn new(region: u32) -> Self {
        Self(region)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The region number as a table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl RowOffset {
    #[inline]
    #[must_use]
    pub const fn new(offset: u64) -> Self {
        Self(offset)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for VirtualRowAddress {
    fn from(addr: u64) -> Self {
        Self::new(addr)
    }
}

impl From<u64> for PhysicalRowAddress {
    fn from(addr: u64) -> Self {
        Self::new(addr)
    }
}

impl From<u32> for VirtualRegion {
    fn from(region: u32) -> Self {
        Self::new(region)
    }
}

impl From<u32> for PhysicalRegion {
    fn from(region: u32) -> Self {
        Self::new(region)
    }
}

impl From<u64> for RowOffset {
    fn from(offset: u64) -> Self {
        Self::new(offset)
    }
}

impl PartialEq<u64> for VirtualRowAddress {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<u64> for PhysicalRowAddress {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<u32> for VirtualRegion {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<u32> for PhysicalRegion {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<u64> for RowOffset {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for VirtualRowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:012x}", self.0)
    }
}

impl fmt::Debug for VirtualRowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:012x} (virtual row)", self.0)
    }
}

impl fmt::Display for PhysicalRowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:012x}", self.0)
    }
}

impl fmt::Debug for PhysicalRowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:012x} (physical row)", self.0)
    }
}

impl fmt::Display for VirtualRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for VirtualRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VRN {}", self.0)
    }
}

impl fmt::Display for PhysicalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PhysicalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PRN {}", self.0)
    }
}

impl fmt::Display for RowOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RowOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} rows", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtypes_round_trip_raw_values() {
        assert_eq!(VirtualRowAddress::new(0x1234).as_u64(), 0x1234);
        assert_eq!(PhysicalRowAddress::from(0x5678_u64).as_u64(), 0x5678);
        assert_eq!(VirtualRegion::new(10).as_u32(), 10);
        assert_eq!(PhysicalRegion::from(20_u32).index(), 20);
        assert_eq!(RowOffset::new(63).as_u64(), 63);
    }

    #[test]
    fn raw_comparisons() {
        assert_eq!(VirtualRowAddress::new(64), 64_u64);
        assert_eq!(PhysicalRowAddress::new(64), 64_u64);
        assert_eq!(VirtualRegion::new(7), 7_u32);
        assert_eq!(PhysicalRegion::new(7), 7_u32);
        assert_eq!(RowOffset::new(31), 31_u64);
    }

    #[test]
    fn display_formats() {
        assert_eq!(VirtualRowAddress::new(0x2a).to_string(), "0x00000000002a");
        assert_eq!(VirtualRegion::new(1023).to_string(), "1023");
        assert_eq!(format!("{:?}", PhysicalRegion::new(3)), "PRN 3");
        assert_eq!(format!("{:?}", RowOffset::new(5)), "+5 rows");
    }
}
