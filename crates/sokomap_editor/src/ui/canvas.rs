//! Grid canvas rendering and paint gestures

use bevy_egui::egui;

use super::theme::{tile_color, EditorTheme};
use crate::{EditorMap, EditorState};

/// Render the paintable cell grid
///
/// All three paint gestures (click a cell, drag into a cell, pointer
/// entering a cell with the primary button held) reduce to "primary
/// button down while over a cell".
pub fn render_canvas(ui: &mut egui::Ui, editor_state: &EditorState, map: &mut EditorMap) {
    let cell_size = editor_state.cell_size;
    let grid = &mut map.grid;

    egui::ScrollArea::both().show(ui, |ui| {
        let desired = egui::vec2(
            grid.cols() as f32 * cell_size,
            grid.rows() as f32 * cell_size,
        );
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());

        let pointer_pos = if response.dragged_by(egui::PointerButton::Primary) {
            response.interact_pointer_pos()
        } else {
            response.hover_pos()
        };
        let hovered_cell = pointer_pos
            .filter(|pos| rect.contains(*pos))
            .map(|pos| cell_at(rect, cell_size, grid.rows(), grid.cols(), pos));

        // Paint before drawing so the frame already shows the result
        if let Some((row, col)) = hovered_cell {
            if ui.input(|i| i.pointer.primary_down()) {
                grid.set(row, col, editor_state.selected);
            }
        }

        let painter = ui.painter_at(rect);
        for (row, tiles) in grid.iter_rows().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let cell_rect = cell_rect(rect, cell_size, row as u32, col as u32);
                painter.rect_filled(cell_rect.shrink(1.0), 2.0, tile_color(*tile));
                painter.rect_stroke(
                    cell_rect.shrink(1.0),
                    2.0,
                    egui::Stroke::new(1.0, EditorTheme::CELL_BORDER),
                    egui::StrokeKind::Inside,
                );

                let glyph = tile.glyph();
                if glyph != ' ' {
                    painter.text(
                        cell_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        glyph,
                        egui::FontId::monospace(cell_size * 0.5),
                        EditorTheme::GLYPH_TEXT,
                    );
                }
            }
        }

        // Highlight the cell under the cursor
        if let Some((row, col)) = hovered_cell {
            painter.rect_stroke(
                cell_rect(rect, cell_size, row, col).shrink(1.0),
                2.0,
                egui::Stroke::new(2.0, EditorTheme::HOVER_STROKE),
                egui::StrokeKind::Outside,
            );
        }
    });
}

fn cell_rect(canvas: egui::Rect, cell_size: f32, row: u32, col: u32) -> egui::Rect {
    egui::Rect::from_min_size(
        canvas.min + egui::vec2(col as f32 * cell_size, row as f32 * cell_size),
        egui::vec2(cell_size, cell_size),
    )
}

/// Map a pointer position inside the canvas rect to a cell, clamped to
/// the grid so edge pixels never index out of range
fn cell_at(canvas: egui::Rect, cell_size: f32, rows: u32, cols: u32, pos: egui::Pos2) -> (u32, u32) {
    let col = ((pos.x - canvas.min.x) / cell_size).floor() as i64;
    let row = ((pos.y - canvas.min.y) / cell_size).floor() as i64;
    (
        row.clamp(0, rows as i64 - 1) as u32,
        col.clamp(0, cols as i64 - 1) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_positions() {
        let canvas = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(120.0, 80.0));
        assert_eq!(cell_at(canvas, 40.0, 2, 3, egui::pos2(11.0, 21.0)), (0, 0));
        assert_eq!(cell_at(canvas, 40.0, 2, 3, egui::pos2(95.0, 70.0)), (1, 2));
    }

    #[test]
    fn test_cell_at_clamps_edges() {
        let canvas = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(120.0, 80.0));
        // bottom-right corner is exactly on the boundary
        assert_eq!(cell_at(canvas, 40.0, 2, 3, egui::pos2(120.0, 80.0)), (1, 2));
    }
}
