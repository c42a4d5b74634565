//! Row-major grid of tiles representing the map under construction

use crate::TileKind;
use serde::{Deserialize, Serialize};

/// Default row count for a fresh map
pub const DEFAULT_ROWS: u32 = 5;
/// Default column count for a fresh map
pub const DEFAULT_COLS: u32 = 5;

/// A 2D grid of tiles with row-major storage
///
/// Dimensions are fixed at creation; changing them goes through
/// [`MapGrid::rebuild`], which replaces the grid wholesale and discards
/// all prior paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGrid {
    rows: u32,
    cols: u32,
    tiles: Vec<TileKind>,
}

impl Default for MapGrid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl MapGrid {
    /// Create a new grid with every cell set to `Empty`
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![TileKind::Empty; rows as usize * cols as usize],
        }
    }

    /// Replace this grid with a fresh all-`Empty` grid of the given size
    pub fn rebuild(&mut self, rows: u32, cols: u32) {
        *self = Self::new(rows, cols);
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Get the tile at a position, or `None` if out of range
    pub fn get(&self, row: u32, col: u32) -> Option<TileKind> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    /// Set the tile at a position; out-of-range positions are ignored
    pub fn set(&mut self, row: u32, col: u32, tile: TileKind) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let index = row as usize * self.cols as usize + col as usize;
        if index < self.tiles.len() {
            self.tiles[index] = tile;
        }
    }

    /// Iterate the grid one row slice at a time, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.tiles.chunks(self.cols.max(1) as usize)
    }
}
