//! Flat text map format: one line per grid row, one glyph per column
//!
//! The format has no header or metadata. `Empty` cells are written as a
//! space, so lines in hand-edited files may be ragged; on parse, short
//! lines are padded with `Empty` up to the widest line.

use crate::{MapGrid, TileKind};

/// Errors from parsing a flat text map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapTextError {
    /// The input contains no rows or no columns
    EmptyMap,
    /// A character that is not an export glyph (1-based line/column)
    UnknownGlyph { line: usize, column: usize, glyph: char },
}

impl std::fmt::Display for MapTextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapTextError::EmptyMap => write!(f, "Map text contains no cells"),
            MapTextError::UnknownGlyph { line, column, glyph } => {
                write!(
                    f,
                    "Unknown map glyph {:?} at line {}, column {}",
                    glyph, line, column
                )
            }
        }
    }
}

impl std::error::Error for MapTextError {}

impl MapGrid {
    /// Render the grid as flat map text
    ///
    /// Each row becomes one newline-terminated line of export glyphs.
    pub fn to_map_text(&self) -> String {
        let mut text =
            String::with_capacity(self.rows() as usize * (self.cols() as usize + 1));
        for row in self.iter_rows() {
            for tile in row {
                text.push(tile.glyph());
            }
            text.push('\n');
        }
        text
    }

    /// Parse flat map text back into a grid
    pub fn from_map_text(text: &str) -> Result<Self, MapTextError> {
        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len() as u32;
        let cols = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u32;
        if rows == 0 || cols == 0 {
            return Err(MapTextError::EmptyMap);
        }

        let mut grid = MapGrid::new(rows, cols);
        for (row, line) in lines.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                let tile = TileKind::from_glyph(glyph).ok_or(MapTextError::UnknownGlyph {
                    line: row + 1,
                    column: col + 1,
                    glyph,
                })?;
                grid.set(row as u32, col as u32, tile);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_example_map() {
        // rebuild(2, 3); wall at (0, 0); target at (1, 2)
        let mut grid = MapGrid::new(2, 3);
        grid.set(0, 0, TileKind::Wall);
        grid.set(1, 2, TileKind::Target);
        assert_eq!(grid.to_map_text(), "O  \n  S\n");
    }

    #[test]
    fn test_render_shape() {
        let grid = MapGrid::new(4, 7);
        let text = grid.to_map_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.chars().count() == 7));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_parse_round_trip() {
        let mut grid = MapGrid::new(3, 4);
        grid.set(0, 1, TileKind::Player);
        grid.set(1, 1, TileKind::Box);
        grid.set(2, 3, TileKind::BoxOnTarget);
        let parsed = MapGrid::from_map_text(&grid.to_map_text()).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_parse_pads_ragged_lines() {
        let grid = MapGrid::from_map_text("OO\nR\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(1, 0), Some(TileKind::Player));
        assert_eq!(grid.get(1, 1), Some(TileKind::Empty));
    }

    #[test]
    fn test_parse_unknown_glyph() {
        let err = MapGrid::from_map_text("O \n x\n").unwrap_err();
        assert_eq!(
            err,
            MapTextError::UnknownGlyph {
                line: 2,
                column: 2,
                glyph: 'x'
            }
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(MapGrid::from_map_text(""), Err(MapTextError::EmptyMap));
        assert_eq!(MapGrid::from_map_text("\n"), Err(MapTextError::EmptyMap));
    }
}
