//! Tile kinds and their glyph/color tables

use serde::{Deserialize, Serialize};

/// The kind of map element a cell can hold
///
/// This is a closed set, fixed at compile time. Each kind carries a
/// single-character export glyph and a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    Player,
    Wall,
    #[default]
    Empty,
    Box,
    Target,
    PlayerOnTarget,
    BoxOnTarget,
}

impl TileKind {
    /// All tile kinds in palette order
    pub const ALL: [TileKind; 7] = [
        TileKind::Player,
        TileKind::Wall,
        TileKind::Empty,
        TileKind::Box,
        TileKind::Target,
        TileKind::PlayerOnTarget,
        TileKind::BoxOnTarget,
    ];

    /// The single character representing this kind in the saved text file
    pub fn glyph(self) -> char {
        match self {
            TileKind::Player => 'R',
            TileKind::Wall => 'O',
            TileKind::Empty => ' ',
            TileKind::Box => 'B',
            TileKind::Target => 'S',
            TileKind::PlayerOnTarget => '.',
            TileKind::BoxOnTarget => '*',
        }
    }

    /// Look up the tile kind for an export glyph
    pub fn from_glyph(glyph: char) -> Option<TileKind> {
        TileKind::ALL.iter().copied().find(|k| k.glyph() == glyph)
    }

    /// Display color as sRGB components
    pub fn color(self) -> [u8; 3] {
        match self {
            TileKind::Player => [0, 0, 255],
            TileKind::Wall => [190, 190, 190],
            TileKind::Empty => [255, 255, 255],
            TileKind::Box => [165, 42, 42],
            TileKind::Target => [0, 255, 0],
            TileKind::PlayerOnTarget => [173, 216, 230],
            TileKind::BoxOnTarget => [160, 32, 240],
        }
    }

    /// Human-readable name for the palette
    pub fn label(self) -> &'static str {
        match self {
            TileKind::Player => "Player",
            TileKind::Wall => "Wall",
            TileKind::Empty => "Empty",
            TileKind::Box => "Box",
            TileKind::Target => "Target",
            TileKind::PlayerOnTarget => "Player on Target",
            TileKind::BoxOnTarget => "Box on Target",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_unique() {
        for (i, a) in TileKind::ALL.iter().enumerate() {
            for b in &TileKind::ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph(), "{:?} and {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_glyph_round_trip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_glyph(kind.glyph()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_glyph() {
        assert_eq!(TileKind::from_glyph('x'), None);
        assert_eq!(TileKind::from_glyph('#'), None);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(TileKind::default(), TileKind::Empty);
        assert_eq!(TileKind::Empty.glyph(), ' ');
    }
}
