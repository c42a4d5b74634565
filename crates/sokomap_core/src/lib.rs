//! Core data structures for the Sokoban map editor
//!
//! This crate provides the fundamental types for representing Sokoban maps:
//! - `TileKind` - The closed set of map element kinds a cell can hold
//! - `MapGrid` - A row-major 2D grid of tiles under construction
//! - Flat text map codec (`MapGrid::to_map_text` / `MapGrid::from_map_text`)

mod grid;
mod map_text;
mod tile;

pub use grid::{MapGrid, DEFAULT_COLS, DEFAULT_ROWS};
pub use map_text::MapTextError;
pub use tile::TileKind;
