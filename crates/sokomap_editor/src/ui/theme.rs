//! Canvas colors and tile color mapping

use bevy_egui::egui::Color32;
use sokomap_core::TileKind;

/// Fixed colors used by the grid canvas
pub struct EditorTheme;

impl EditorTheme {
    /// Cell outline
    pub const CELL_BORDER: Color32 = Color32::from_gray(80);

    /// Outline of the cell under the cursor
    pub const HOVER_STROKE: Color32 = Color32::from_rgb(45, 130, 209);

    /// Glyph text drawn on top of the cell fill
    pub const GLYPH_TEXT: Color32 = Color32::BLACK;
}

/// Convert a tile kind's display color to egui
pub fn tile_color(kind: TileKind) -> Color32 {
    let [r, g, b] = kind.color();
    Color32::from_rgb(r, g, b)
}
