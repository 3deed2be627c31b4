//! # ReRAM Region Mapping and Wear Leveling
//!
//! Address-translation indirection for a region-mapped resistive memory
//! device: every bank carries a permutation table that redirects *virtual*
//! regions to *physical* regions, and a wear-leveling policy can swap which
//! physical region backs a virtual one without touching any data addressed
//! through other regions.
//!
//! ## Translation walk
//!
//! ```text
//!  VRA ──▶ split ──▶ (VRN, RO) ──▶ region table ──▶ (PRN, RO) ──▶ join ──▶ PRA
//!           │                          │                            │
//!       shift/mask             per-bank permutation             (PRN << shift) | RO
//! ```
//!
//! The row offset (RO) passes through untouched; only the region component
//! of the address is rewritten.
//!
//! ## What you get
//!
//! - A validated [`DeviceGeometry`] describing banks, regions, region size
//!   and the fast/slow mat partitioning.
//! - A pure [`RowCodec`] splitting row addresses into (region, offset) and
//!   joining them back.
//! - The [`RegionMapper`] façade: [`translate`](RegionMapper::translate),
//!   [`swap_regions`](RegionMapper::swap_regions),
//!   [`virtual_of`](RegionMapper::virtual_of) and
//!   [`is_fast_region`](RegionMapper::is_fast_region).
//! - A stateless [`MatLayout`] classifying physical regions as fast (close
//!   to the sense amplifiers) or slow.
//! - [`MapperStats`] counters for swaps and fast/slow accesses.
//!
//! ## Invariants
//!
//! For every bank, the forward table is a bijection over the region space,
//! the inverse table is its exact inverse at all times, and the initial
//! mapping is the identity. Swaps repair both tables under one exclusive
//! per-bank lock, so concurrent readers never observe a half-applied swap.
//! Banks are fully isolated; operations on different banks never contend.
//!
//! ## What this crate does *not* do
//!
//! Deciding *when* and *which* regions to swap (hotness tracking, epochs,
//! thresholds) and physically moving data afterwards are the caller's
//! business. This crate only guarantees the indirection update.

pub mod classify;
pub mod codec;
pub mod geometry;
pub mod mapper;
pub mod stats;
mod table;

pub use crate::classify::MatLayout;
pub use crate::codec::{AddressRangeError, RowCodec};
pub use crate::geometry::{DeviceGeometry, GeometryError};
pub use crate::mapper::{RegionIndexError, RegionMapper, TranslateError};
pub use crate::stats::MapperStats;

pub use reram_addresses::{
    PhysicalRegion, PhysicalRowAddress, RowOffset, VirtualRegion, VirtualRowAddress,
};
