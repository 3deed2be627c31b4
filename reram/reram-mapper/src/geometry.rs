//! # Device Geometry
//!
//! Construction-time description of the mapped device: how many banks it
//! has, how many regions each bank holds, how many rows make up a region,
//! and how the physical region space is partitioned into mats.
//!
//! All validation happens here, once. Everything downstream (codec, tables,
//! classifier) takes a [`DeviceGeometry`] by reference and may assume the
//! parameters are consistent.

use core::fmt;

/// Validated device geometry.
///
/// - `banks` and `regions_per_bank` bound the valid bank/VRN/PRN ranges.
/// - `region_size_rows` must be a power of two; it defines the offset
///   bit-width of a row address (`shift = log2`, `mask = size - 1`).
/// - `regions_per_mat` and `fast_regions_per_mat` partition the physical
///   region space into contiguous mats; the first `fast_regions_per_mat`
///   regions of each mat sit closest to the sense circuitry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DeviceGeometry {
    banks: usize,
    regions_per_bank: u32,
    region_size_rows: u64,
    regions_per_mat: u32,
    fast_regions_per_mat: u32,
}

impl DeviceGeometry {
    /// Validate and freeze a device geometry.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::ZeroDimension`] if `banks`, `regions_per_bank`,
    ///   `region_size_rows` or `regions_per_mat` is zero.
    /// - [`GeometryError::RegionSizeNotPowerOfTwo`] if `region_size_rows`
    ///   is not a power of two.
    /// - [`GeometryError::FastRegionsExceedMat`] if a mat is declared to
    ///   hold more fast regions than it has regions.
    pub const fn new(
        banks: usize,
        regions_per_bank: u32,
        region_size_rows: u64,
        regions_per_mat: u32,
        fast_regions_per_mat: u32,
    ) -> Result<Self, GeometryError> {
        if banks == 0 {
            return Err(GeometryError::ZeroDimension("banks"));
        }
        if regions_per_bank == 0 {
            return Err(GeometryError::ZeroDimension("regions_per_bank"));
        }
        if region_size_rows == 0 {
            return Err(GeometryError::ZeroDimension("region_size_rows"));
        }
        if regions_per_mat == 0 {
            return Err(GeometryError::ZeroDimension("regions_per_mat"));
        }
        if !region_size_rows.is_power_of_two() {
            return Err(GeometryError::RegionSizeNotPowerOfTwo(region_size_rows));
        }
        if fast_regions_per_mat > regions_per_mat {
            return Err(GeometryError::FastRegionsExceedMat {
                fast_regions_per_mat,
                regions_per_mat,
            });
        }
        Ok(Self {
            banks,
            regions_per_bank,
            region_size_rows,
            regions_per_mat,
            fast_regions_per_mat,
        })
    }

    /// Number of independently addressed banks.
    #[inline]
    #[must_use]
    pub const fn banks(&self) -> usize {
        self.banks
    }

    /// Number of regions in each bank (the VRN and PRN spaces have this
    /// cardinality).
    #[inline]
    #[must_use]
    pub const fn regions_per_bank(&self) -> u32 {
        self.regions_per_bank
    }

    /// Rows per region. Power of two.
    #[inline]
    #[must_use]
    pub const fn region_size_rows(&self) -> u64 {
        self.region_size_rows
    }

    /// Physical regions per mat.
    #[inline]
    #[must_use]
    pub const fn regions_per_mat(&self) -> u32 {
        self.regions_per_mat
    }

    /// Fast regions at the start of each mat.
    #[inline]
    #[must_use]
    pub const fn fast_regions_per_mat(&self) -> u32 {
        self.fast_regions_per_mat
    }

    /// Offset bit-width of a row address: `log2(region_size_rows)`.
    #[inline]
    #[must_use]
    pub const fn row_shift(&self) -> u32 {
        self.region_size_rows.trailing_zeros()
    }
}

impl fmt::Display for DeviceGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bank(s) x {} regions x {} rows, mats of {} ({} fast)",
            self.banks,
            self.regions_per_bank,
            self.region_size_rows,
            self.regions_per_mat,
            self.fast_regions_per_mat
        )
    }
}

/// Rejected construction parameters. Raised once, before any table exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("{0} must be non-zero")]
    ZeroDimension(&'static str),
    #[error("region size of {0} rows is not a power of two")]
    RegionSizeNotPowerOfTwo(u64),
    #[error("mat declared with {fast_regions_per_mat} fast regions but only {regions_per_mat} regions")]
    FastRegionsExceedMat {
        fast_regions_per_mat: u32,
        regions_per_mat: u32,
    },
}
