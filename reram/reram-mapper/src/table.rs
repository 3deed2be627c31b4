//! # Per-Bank Region Tables
//!
//! One forward slice (VRN → PRN) and one inverse slice (PRN → VRN) per
//! bank, kept mutually inverse at all times. The region spaces are dense
//! and fixed at construction, so the tables are plain boxed slices indexed
//! by region number rather than an associative container: no hashing, no
//! missing-key case for in-range input.
//!
//! Range validation is the caller's job ([`mapper`](crate::mapper) checks
//! before taking a lock); methods here index directly.

use reram_addresses::{PhysicalRegion, VirtualRegion};

/// The forward/inverse table pair of a single bank.
///
/// Invariants, maintained by construction and [`swap`](Self::swap):
/// - `forward` is a bijection over `[0, regions)`;
/// - `inverse[forward[v]] == v` for every `v`.
#[derive(Debug)]
pub(crate) struct BankTables {
    forward: Box<[u32]>,
    inverse: Box<[u32]>,
}

impl BankTables {
    /// Identity mapping over `regions` regions: every virtual region backed
    /// by the physical region of the same number.
    pub(crate) fn identity(regions: u32) -> Self {
        let table: Box<[u32]> = (0..regions).collect();
        Self {
            forward: table.clone(),
            inverse: table,
        }
    }

    /// Forward lookup: the physical region currently backing `region`.
    #[inline]
    pub(crate) fn lookup(&self, region: VirtualRegion) -> PhysicalRegion {
        PhysicalRegion::new(self.forward[region.index()])
    }

    /// Inverse lookup: the virtual region currently served by `region`.
    #[inline]
    pub(crate) fn inverse_lookup(&self, region: PhysicalRegion) -> VirtualRegion {
        VirtualRegion::new(self.inverse[region.index()])
    }

    /// Exchange the physical regions backing `hot` and `cold`, then repair
    /// the two touched inverse entries.
    ///
    /// Runs entirely under the caller's exclusive bank lock, so the
    /// forward/inverse pair is atomic from any reader's point of view.
    pub(crate) fn swap(&mut self, hot: VirtualRegion, cold: VirtualRegion) {
        let prn_hot = self.forward[hot.index()];
        let prn_cold = self.forward[cold.index()];

        self.forward[hot.index()] = prn_cold;
        self.forward[cold.index()] = prn_hot;

        self.inverse[prn_hot as usize] = cold.as_u32();
        self.inverse[prn_cold as usize] = hot.as_u32();

        debug_assert_eq!(self.inverse[self.forward[hot.index()] as usize], hot.as_u32());
        debug_assert_eq!(
            self.inverse[self.forward[cold.index()] as usize],
            cold.as_u32()
        );
    }
}
