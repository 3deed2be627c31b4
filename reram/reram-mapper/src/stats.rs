//! # Mapper Statistics
//!
//! Tallies the mapper can report about its own activity: how many region
//! swaps it has performed and how many translations resolved into fast vs.
//! slow physical regions. A wear-leveling policy reads these to judge how
//! well hot regions have settled into fast mats; the mapper itself never
//! acts on them.
//!
//! Counters use relaxed atomics. A snapshot taken while other threads are
//! translating may be torn across counters; that is fine for a monitoring
//! surface.

use core::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time snapshot of the mapper counters.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MapperStats {
    /// Completed region swaps. Self-swaps (hot == cold) do not count.
    pub region_swaps: u64,
    /// Translations that resolved into a fast physical region.
    pub fast_region_accesses: u64,
    /// Translations that resolved into a slow physical region.
    pub slow_region_accesses: u64,
}

impl MapperStats {
    /// Total translations counted.
    #[inline]
    #[must_use]
    pub const fn total_accesses(&self) -> u64 {
        self.fast_region_accesses + self.slow_region_accesses
    }
}

/// Live counters owned by the mapper.
#[derive(Debug, Default)]
pub(crate) struct StatCounters {
    region_swaps: AtomicU64,
    fast_region_accesses: AtomicU64,
    slow_region_accesses: AtomicU64,
}

impl StatCounters {
    #[inline]
    pub(crate) fn record_access(&self, fast: bool) {
        if fast {
            self.fast_region_accesses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.slow_region_accesses.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[inline]
    pub(crate) fn record_swap(&self) {
        self.region_swaps.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> MapperStats {
        MapperStats {
            region_swaps: self.region_swaps.load(Ordering::Relaxed),
            fast_region_accesses: self.fast_region_accesses.load(Ordering::Relaxed),
            slow_region_accesses: self.slow_region_accesses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let c = StatCounters::default();
        c.record_access(true);
        c.record_access(true);
        c.record_access(false);
        c.record_swap();

        let s = c.snapshot();
        assert_eq!(s.fast_region_accesses, 2);
        assert_eq!(s.slow_region_accesses, 1);
        assert_eq!(s.region_swaps, 1);
        assert_eq!(s.total_accesses(), 3);
    }

    #[test]
    fn fresh_counters_read_zero() {
        let s = StatCounters::default().snapshot();
        assert_eq!(s, MapperStats::default());
        assert_eq!(s.total_accesses(), 0);
    }
}
