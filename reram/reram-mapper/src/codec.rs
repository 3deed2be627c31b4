//! # Row Address Codec
//!
//! Pure split/join of row addresses into a region number and an in-region
//! row offset. The region size is a power of two, so both directions are a
//! shift and a mask:
//!
//! ```text
//! VRN = VRA >> shift        RO = VRA & (region_size_rows - 1)
//! PRA = (PRN << shift) | RO
//! ```
//!
//! The codec is stateless beyond the two constants derived from the
//! geometry and has no failure mode other than a virtual address whose
//! region field exceeds the bank capacity.

use crate::geometry::DeviceGeometry;
use reram_addresses::{
    PhysicalRegion, PhysicalRowAddress, RowOffset, VirtualRegion, VirtualRowAddress,
};

/// Shift/mask codec for row addresses.
///
/// Built once from a validated [`DeviceGeometry`]; copies are cheap.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RowCodec {
    shift: u32,
    mask: u64,
    regions_per_bank: u32,
}

impl RowCodec {
    /// Derive the codec constants from the geometry.
    #[must_use]
    pub const fn new(geometry: &DeviceGeometry) -> Self {
        Self {
            shift: geometry.row_shift(),
            mask: geometry.region_size_rows() - 1,
            regions_per_bank: geometry.regions_per_bank(),
        }
    }

    /// Split a virtual row address into its region number and row offset.
    ///
    /// # Errors
    ///
    /// [`AddressRangeError`] if the region field selects a region at or
    /// beyond the bank capacity, i.e. the address lies outside the device.
    pub const fn decompose(
        &self,
        address: VirtualRowAddress,
    ) -> Result<(VirtualRegion, RowOffset), AddressRangeError> {
        let region = address.as_u64() >> self.shift;
        if region >= self.regions_per_bank as u64 {
            return Err(AddressRangeError {
                address,
                region,
                regions_per_bank: self.regions_per_bank,
            });
        }
        let offset = address.as_u64() & self.mask;
        // Narrowing is safe: bounded by regions_per_bank above.
        Ok((VirtualRegion::new(region as u32), RowOffset::new(offset)))
    }

    /// Join a physical region number and a row offset into a physical row
    /// address.
    ///
    /// The caller guarantees `offset < region_size_rows`; every offset
    /// produced by [`decompose`](Self::decompose) satisfies that.
    #[inline]
    #[must_use]
    pub const fn compose(&self, region: PhysicalRegion, offset: RowOffset) -> PhysicalRowAddress {
        PhysicalRowAddress::new(((region.as_u32() as u64) << self.shift) | offset.as_u64())
    }

    /// The offset bit-width (`log2(region_size_rows)`).
    #[inline]
    #[must_use]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// The offset mask (`region_size_rows - 1`).
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u64 {
        self.mask
    }
}

/// A virtual row address outside the device capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "virtual row address {address} selects region {region}, bank holds {regions_per_bank} regions"
)]
pub struct AddressRangeError {
    /// The offending address.
    pub address: VirtualRowAddress,
    /// The region field it decomposed to.
    pub region: u64,
    /// The configured bank capacity.
    pub regions_per_bank: u32,
}
