//! # Region Mapper Façade
//!
//! [`RegionMapper`] composes the codec, the per-bank table pairs and the
//! mat classifier into the public translation surface:
//!
//! - [`translate`](RegionMapper::translate) — VRA → PRA through the
//!   forward table.
//! - [`virtual_of`](RegionMapper::virtual_of) — PRN → VRN through the
//!   inverse table, for collaborators (scrub/ECC) that know a physical
//!   location and need the virtual region it currently serves.
//! - [`swap_regions`](RegionMapper::swap_regions) — the wear-leveling
//!   primitive: repoint which physical region backs a virtual one.
//! - [`is_fast_region`](RegionMapper::is_fast_region) — physical
//!   placement query, independent of the mapping.
//!
//! ## Locking
//!
//! Every bank owns one `RwLock` around its table pair. Translation and
//! inverse lookup take the shared side; a swap takes the exclusive side and
//! updates forward and inverse entries before releasing, so a concurrent
//! reader on the same bank sees either the old mapping or the new one,
//! never a half-applied swap. Banks never share a lock: throughput across
//! banks is unaffected by swaps elsewhere.
//!
//! All range validation happens before any lock is taken; a rejected call
//! leaves every table untouched.

use crate::classify::MatLayout;
use crate::codec::{AddressRangeError, RowCodec};
use crate::geometry::DeviceGeometry;
use crate::stats::{MapperStats, StatCounters};
use crate::table::BankTables;
use log::{debug, trace};
use parking_lot::RwLock;
use reram_addresses::{
    PhysicalRegion, PhysicalRowAddress, VirtualRegion, VirtualRowAddress,
};

/// Per-device address-translation and wear-leveling indirection layer.
///
/// Construction identity-initializes one table pair per bank; the mapping
/// is mutated only through [`swap_regions`](Self::swap_regions) for the
/// lifetime of the mapper.
pub struct RegionMapper {
    geometry: DeviceGeometry,
    codec: RowCodec,
    layout: MatLayout,
    banks: Vec<RwLock<BankTables>>,
    stats: StatCounters,
}

impl RegionMapper {
    /// Build a mapper for a validated geometry, with every bank starting
    /// at the identity mapping.
    #[must_use]
    pub fn new(geometry: DeviceGeometry) -> Self {
        let banks = (0..geometry.banks())
            .map(|_| RwLock::new(BankTables::identity(geometry.regions_per_bank())))
            .collect();
        debug!("region mapper initialized: {geometry}");
        Self {
            codec: RowCodec::new(&geometry),
            layout: MatLayout::new(&geometry),
            geometry,
            banks,
            stats: StatCounters::default(),
        }
    }

    /// The geometry this mapper was built from.
    #[inline]
    #[must_use]
    pub const fn geometry(&self) -> &DeviceGeometry {
        &self.geometry
    }

    /// Translate a virtual row address to the physical row it currently
    /// resolves to. The row offset passes through unchanged.
    ///
    /// # Errors
    ///
    /// - [`RegionIndexError::BankOutOfRange`] (via [`TranslateError`]) for
    ///   an unknown bank.
    /// - [`AddressRangeError`] (via [`TranslateError`]) if the address lies
    ///   outside the bank capacity.
    pub fn translate(
        &self,
        bank: usize,
        address: VirtualRowAddress,
    ) -> Result<PhysicalRowAddress, TranslateError> {
        let tables = self.bank(bank)?;
        let (vrn, ro) = self.codec.decompose(address)?;

        let prn = tables.read().lookup(vrn);

        self.stats.record_access(self.layout.is_fast(prn));
        Ok(self.codec.compose(prn, ro))
    }

    /// The virtual region currently served by physical region `region` in
    /// `bank`.
    ///
    /// # Errors
    ///
    /// [`RegionIndexError`] if `bank` or `region` is outside the
    /// configured range.
    pub fn virtual_of(
        &self,
        bank: usize,
        region: PhysicalRegion,
    ) -> Result<VirtualRegion, RegionIndexError> {
        let tables = self.bank(bank)?;
        self.check_physical(region)?;
        Ok(tables.read().inverse_lookup(region))
    }

    /// Exchange the physical regions backing `hot` and `cold` in `bank`.
    ///
    /// Future accesses to `hot` land in the cells that previously backed
    /// `cold` and vice versa; no other virtual region is affected. Moving
    /// or re-verifying the data that lived in the two regions is the
    /// caller's responsibility.
    ///
    /// `hot == cold` is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// [`RegionIndexError`] if `bank` or either region is outside the
    /// configured range; the tables are left untouched.
    pub fn swap_regions(
        &self,
        bank: usize,
        hot: VirtualRegion,
        cold: VirtualRegion,
    ) -> Result<(), RegionIndexError> {
        let tables = self.bank(bank)?;
        self.check_virtual(hot)?;
        self.check_virtual(cold)?;

        if hot == cold {
            return Ok(());
        }

        let mut guard = tables.write();
        guard.swap(hot, cold);
        let (prn_hot, prn_cold) = (guard.lookup(hot), guard.lookup(cold));
        drop(guard);

        trace!("bank {bank}: swapped VRN {hot} <-> VRN {cold} (now PRN {prn_hot} / PRN {prn_cold})");
        self.stats.record_swap();
        Ok(())
    }

    /// Whether physical region `region` lies in the fast portion of its
    /// mat. Purely a function of physical placement; swaps never change
    /// the answer.
    #[inline]
    #[must_use]
    pub const fn is_fast_region(&self, region: PhysicalRegion) -> bool {
        self.layout.is_fast(region)
    }

    /// Snapshot of the swap and access counters.
    #[must_use]
    pub fn stats(&self) -> MapperStats {
        self.stats.snapshot()
    }

    fn bank(&self, bank: usize) -> Result<&RwLock<BankTables>, RegionIndexError> {
        self.banks.get(bank).ok_or(RegionIndexError::BankOutOfRange {
            bank,
            banks: self.banks.len(),
        })
    }

    const fn check_virtual(&self, region: VirtualRegion) -> Result<(), RegionIndexError> {
        if region.as_u32() < self.geometry.regions_per_bank() {
            Ok(())
        } else {
            Err(RegionIndexError::VirtualRegionOutOfRange {
                region: region.as_u32(),
                regions_per_bank: self.geometry.regions_per_bank(),
            })
        }
    }

    const fn check_physical(&self, region: PhysicalRegion) -> Result<(), RegionIndexError> {
        if region.as_u32() < self.geometry.regions_per_bank() {
            Ok(())
        } else {
            Err(RegionIndexError::PhysicalRegionOutOfRange {
                region: region.as_u32(),
                regions_per_bank: self.geometry.regions_per_bank(),
            })
        }
    }
}

/// A bank or region index outside the configured range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionIndexError {
    #[error("bank {bank} outside configured range of {banks} banks")]
    BankOutOfRange { bank: usize, banks: usize },
    #[error("virtual region {region} outside bank capacity of {regions_per_bank}")]
    VirtualRegionOutOfRange { region: u32, regions_per_bank: u32 },
    #[error("physical region {region} outside bank capacity of {regions_per_bank}")]
    PhysicalRegionOutOfRange { region: u32, regions_per_bank: u32 },
}

/// Failure modes of [`RegionMapper::translate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    Address(#[from] AddressRangeError),
    #[error(transparent)]
    Region(#[from] RegionIndexError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use reram_addresses::RowOffset;

    fn mapper() -> RegionMapper {
        let g = DeviceGeometry::new(8, 1024, 64, 16, 4).expect("valid geometry");
        RegionMapper::new(g)
    }

    fn vra(region: u64, offset: u64) -> VirtualRowAddress {
        VirtualRowAddress::new((region << 6) | offset)
    }

    #[test]
    fn translates_to_identity_after_construction() {
        let m = mapper();
        for bank in 0..8 {
            for addr in [0_u64, 63, 64, 4096, 65535] {
                let pra = m
                    .translate(bank, VirtualRowAddress::new(addr))
                    .expect("in range");
                assert_eq!(pra.as_u64(), addr, "bank {bank}, addr {addr}");
            }
        }
    }

    #[test]
    fn swap_redirects_both_regions_and_spares_other_banks() {
        let m = mapper();
        m.swap_regions(0, VirtualRegion::new(10), VirtualRegion::new(20))
            .expect("in range");

        let hot = m.translate(0, vra(10, 31)).expect("in range");
        assert_eq!(hot.as_u64(), (20 << 6) | 31);

        let cold = m.translate(0, vra(20, 0)).expect("in range");
        assert_eq!(cold.as_u64(), 10 << 6);

        // bank 1 untouched
        let other = m.translate(1, vra(10, 0)).expect("in range");
        assert_eq!(other.as_u64(), 10 << 6);
    }

    #[test]
    fn inverse_follows_swaps() {
        let m = mapper();
        assert_eq!(
            m.virtual_of(0, PhysicalRegion::new(20)).expect("in range"),
            VirtualRegion::new(20)
        );

        m.swap_regions(0, VirtualRegion::new(10), VirtualRegion::new(20))
            .expect("in range");

        assert_eq!(
            m.virtual_of(0, PhysicalRegion::new(20)).expect("in range"),
            VirtualRegion::new(10)
        );
        assert_eq!(
            m.virtual_of(0, PhysicalRegion::new(10)).expect("in range"),
            VirtualRegion::new(20)
        );
        // other banks still identity
        assert_eq!(
            m.virtual_of(3, PhysicalRegion::new(20)).expect("in range"),
            VirtualRegion::new(20)
        );
    }

    #[test]
    fn bijection_holds_after_arbitrary_swaps() {
        let m = mapper();
        for (a, b) in [(10, 20), (20, 30), (30, 10), (0, 1023), (10, 1023)] {
            m.swap_regions(0, VirtualRegion::new(a), VirtualRegion::new(b))
                .expect("in range");
        }
        for v in 0..1024 {
            let pra = m.translate(0, vra(u64::from(v), 0)).expect("in range");
            let prn = PhysicalRegion::new(u32::try_from(pra.as_u64() >> 6).expect("fits"));
            assert_eq!(
                m.virtual_of(0, prn).expect("in range"),
                VirtualRegion::new(v),
                "inverse broken for VRN {v}"
            );
        }
    }

    #[test]
    fn swap_twice_restores_mapping() {
        let m = mapper();
        for _ in 0..2 {
            m.swap_regions(0, VirtualRegion::new(5), VirtualRegion::new(6))
                .expect("in range");
        }
        assert_eq!(m.translate(0, vra(5, 0)).expect("in range").as_u64(), 5 << 6);
        assert_eq!(m.translate(0, vra(6, 0)).expect("in range").as_u64(), 6 << 6);
    }

    #[test]
    fn self_swap_is_a_no_op() {
        let m = mapper();
        m.swap_regions(0, VirtualRegion::new(7), VirtualRegion::new(7))
            .expect("no-op");
        assert_eq!(m.translate(0, vra(7, 3)).expect("in range").as_u64(), (7 << 6) | 3);
        // a no-op swap is not a swap
        assert_eq!(m.stats().region_swaps, 0);
    }

    #[test]
    fn rejects_out_of_range_arguments() {
        let m = mapper();

        assert_eq!(
            m.translate(8, vra(0, 0)),
            Err(TranslateError::Region(RegionIndexError::BankOutOfRange {
                bank: 8,
                banks: 8
            }))
        );
        assert!(matches!(
            m.translate(0, vra(1024, 0)),
            Err(TranslateError::Address(AddressRangeError { region: 1024, .. }))
        ));
        assert_eq!(
            m.swap_regions(0, VirtualRegion::new(1024), VirtualRegion::new(0)),
            Err(RegionIndexError::VirtualRegionOutOfRange {
                region: 1024,
                regions_per_bank: 1024
            })
        );
        assert_eq!(
            m.virtual_of(0, PhysicalRegion::new(1024)),
            Err(RegionIndexError::PhysicalRegionOutOfRange {
                region: 1024,
                regions_per_bank: 1024
            })
        );
    }

    #[test]
    fn failed_calls_leave_tables_unmodified() {
        let m = mapper();
        let _ = m.translate(0, vra(5000, 0));
        let _ = m.swap_regions(0, VirtualRegion::new(10), VirtualRegion::new(4096));
        let _ = m.swap_regions(9, VirtualRegion::new(10), VirtualRegion::new(20));

        for v in 0..1024_u64 {
            assert_eq!(m.translate(0, vra(v, 0)).expect("in range").as_u64(), v << 6);
        }
        assert_eq!(m.stats().region_swaps, 0);
    }

    #[test]
    fn classification_ignores_swaps() {
        let m = mapper();
        // PRN 2 fast, PRN 10 slow (mats of 16, 4 fast)
        assert!(m.is_fast_region(PhysicalRegion::new(2)));
        assert!(!m.is_fast_region(PhysicalRegion::new(10)));

        m.swap_regions(0, VirtualRegion::new(2), VirtualRegion::new(10))
            .expect("in range");

        assert!(m.is_fast_region(PhysicalRegion::new(2)));
        assert!(!m.is_fast_region(PhysicalRegion::new(10)));
    }

    #[test]
    fn stats_track_fast_and_slow_accesses() {
        let m = mapper();
        // identity mapping: VRN 1 → PRN 1 (fast), VRN 8 → PRN 8 (slow)
        m.translate(0, vra(1, 0)).expect("in range");
        m.translate(0, vra(1, 5)).expect("in range");
        m.translate(0, vra(8, 0)).expect("in range");

        let s = m.stats();
        assert_eq!(s.fast_region_accesses, 2);
        assert_eq!(s.slow_region_accesses, 1);
        assert_eq!(s.total_accesses(), 3);

        m.swap_regions(0, VirtualRegion::new(8), VirtualRegion::new(1))
            .expect("in range");
        // VRN 8 now resolves to PRN 1: a fast access.
        m.translate(0, vra(8, 0)).expect("in range");
        let s = m.stats();
        assert_eq!(s.fast_region_accesses, 3);
        assert_eq!(s.region_swaps, 1);
    }

    #[test]
    fn compose_uses_row_offset_verbatim() {
        let g = DeviceGeometry::new(1, 16, 8, 4, 2).expect("valid geometry");
        let m = RegionMapper::new(g);
        let codec = RowCodec::new(m.geometry());
        let pra = codec.compose(PhysicalRegion::new(3), RowOffset::new(5));
        assert_eq!(pra.as_u64(), (3 << 3) | 5);
    }
}
