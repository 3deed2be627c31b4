//! # Fast/Slow Region Classification
//!
//! Physical regions are grouped into contiguous *mats*; within each mat the
//! first few regions sit closest to the sense amplifiers and read/write
//! faster than the rest. This is a property of physical placement only: the
//! classification of a PRN never changes, no matter how the virtual mapping
//! is permuted.

use crate::geometry::DeviceGeometry;
use reram_addresses::PhysicalRegion;

/// Uniform mat partitioning of the physical region space.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MatLayout {
    regions_per_mat: u32,
    fast_regions_per_mat: u32,
}

impl MatLayout {
    /// Take the mat parameters from a validated geometry.
    #[must_use]
    pub const fn new(geometry: &DeviceGeometry) -> Self {
        Self {
            regions_per_mat: geometry.regions_per_mat(),
            fast_regions_per_mat: geometry.fast_regions_per_mat(),
        }
    }

    /// Whether `region` lies in the fast portion of its mat.
    ///
    /// Total over all physical region numbers; regions past the configured
    /// bank capacity still classify consistently by position within their
    /// mat.
    #[inline]
    #[must_use]
    pub const fn is_fast(&self, region: PhysicalRegion) -> bool {
        region.as_u32() % self.regions_per_mat < self.fast_regions_per_mat
    }
}
