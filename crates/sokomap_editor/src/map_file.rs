//! Map file save/load operations

use sokomap_core::{MapGrid, MapTextError};
use std::path::Path;

#[derive(Debug)]
pub enum MapFileError {
    IoError(String),
    ParseError(MapTextError),
}

impl std::fmt::Display for MapFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapFileError::IoError(e) => write!(f, "IO error: {}", e),
            MapFileError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for MapFileError {}

/// Write the grid as flat map text, overwriting any existing file
pub fn save_map(grid: &MapGrid, path: &Path) -> Result<(), MapFileError> {
    std::fs::write(path, grid.to_map_text()).map_err(|e| MapFileError::IoError(e.to_string()))
}

/// Read a flat text map file into a grid
pub fn load_map(path: &Path) -> Result<MapGrid, MapFileError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| MapFileError::IoError(e.to_string()))?;
    MapGrid::from_map_text(&content).map_err(MapFileError::ParseError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokomap_core::TileKind;

    #[test]
    fn test_save_and_load_round_trip() {
        let mut grid = MapGrid::new(2, 3);
        grid.set(0, 0, TileKind::Wall);
        grid.set(1, 2, TileKind::Target);

        let path = std::env::temp_dir().join("sokomap_map_file_round_trip.txt");
        save_map(&grid, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "O  \n  S\n");
        assert_eq!(load_map(&path).unwrap(), grid);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("sokomap_map_file_does_not_exist.txt");
        assert!(matches!(
            load_map(&path),
            Err(MapFileError::IoError(_))
        ));
    }

    #[test]
    fn test_load_bad_glyph() {
        let path = std::env::temp_dir().join("sokomap_map_file_bad_glyph.txt");
        std::fs::write(&path, "O#\n").unwrap();
        assert!(matches!(
            load_map(&path),
            Err(MapFileError::ParseError(MapTextError::UnknownGlyph { .. }))
        ));
        std::fs::remove_file(&path).ok();
    }
}
