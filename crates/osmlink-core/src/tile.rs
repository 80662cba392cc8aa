//! Tile addresses in the slippy-map quad-tree.

use serde::{Deserialize, Serialize};

/// Deepest zoom a tile address can carry (`x`, `y` and `2^zoom` fit in 64 bits).
pub const MAX_ZOOM: u8 = 63;

/// Zoom levels encoded by one short-link symbol.
pub const LEVELS_PER_SYMBOL: u8 = 3;

/// Tile coordinate at a zoom level; zoom `z` has a `2^z x 2^z` grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAddress {
    /// Column, 0 at the west edge.
    pub x: u64,
    /// Row, 0 at the north edge.
    pub y: u64,
    pub zoom: u8,
}

impl TileAddress {
    pub fn new(x: u64, y: u64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Descends one zoom level into the child quadrant selected by `bits`.
    ///
    /// Bit 0 of `bits` becomes the new low bit of `x`, bit 1 the new low bit of `y`.
    #[inline]
    pub fn push_group(&mut self, bits: u8) {
        self.x = (self.x << 1) | u64::from(bits & 1);
        self.y = (self.y << 1) | u64::from((bits >> 1) & 1);
        self.zoom += 1;
    }

    /// Quadrant bits (`y` bit << 1 | `x` bit) for the given zoom level, `1..=zoom`.
    #[inline]
    pub(crate) fn group_at(&self, level: u8) -> u8 {
        debug_assert!(
            (1..=self.zoom).contains(&level),
            "level {level} outside 1..={}",
            self.zoom
        );
        let shift = self.zoom - level;
        let bx = ((self.x >> shift) & 1) as u8;
        let by = ((self.y >> shift) & 1) as u8;
        (by << 1) | bx
    }

    /// Number of tiles along one axis at this zoom, as a float.
    #[inline]
    pub fn grid_size(&self) -> f64 {
        2.0_f64.powi(i32::from(self.zoom))
    }

    /// True when `x` and `y` lie inside the grid for `zoom`.
    pub fn in_bounds(&self) -> bool {
        if self.zoom > MAX_ZOOM {
            return false;
        }
        let limit = 1u64 << self.zoom;
        self.x < limit && self.y < limit
    }
}
