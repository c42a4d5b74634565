//! Control panel for grid dimensions and cell size

use bevy::log::{info, warn};
use bevy_egui::egui;

use crate::{EditorMap, EditorState};

/// Render the grid size controls
pub fn render_control_panel(
    ctx: &egui::Context,
    editor_state: &mut EditorState,
    map: &mut EditorMap,
) {
    egui::TopBottomPanel::top("control_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Rows:");
            ui.add_sized(
                [40.0, 20.0],
                egui::TextEdit::singleline(&mut editor_state.rows_input),
            );

            ui.label("Cols:");
            ui.add_sized(
                [40.0, 20.0],
                egui::TextEdit::singleline(&mut editor_state.cols_input),
            );

            ui.label("Cell Size:");
            ui.add_sized(
                [40.0, 20.0],
                egui::TextEdit::singleline(&mut editor_state.cell_size_input),
            );

            if ui.button("Apply Grid Size").clicked() {
                apply_grid_size(editor_state, map);
            }
        });
    });
}

/// Apply the grid size and cell size from the input fields
///
/// Any field that fails to parse aborts the whole action; the current
/// grid is left untouched and the failure surfaces in the error dialog.
fn apply_grid_size(editor_state: &mut EditorState, map: &mut EditorMap) {
    let rows = parse_dimension(&editor_state.rows_input);
    let cols = parse_dimension(&editor_state.cols_input);
    let cell_size = parse_dimension(&editor_state.cell_size_input);

    let (Some(rows), Some(cols), Some(cell_size)) = (rows, cols, cell_size) else {
        warn!(
            "Invalid grid size input: rows={:?} cols={:?} cell size={:?}",
            editor_state.rows_input, editor_state.cols_input, editor_state.cell_size_input
        );
        editor_state.error_message =
            Some("Invalid input. Please enter valid integers.".to_string());
        return;
    };

    map.grid.rebuild(rows, cols);
    editor_state.cell_size = cell_size as f32;
    info!("Rebuilt grid: {} x {}", rows, cols);
}

/// Parse a dimension field as a positive integer
pub fn parse_dimension(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokomap_core::TileKind;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("5"), Some(5));
        assert_eq!(parse_dimension(" 12 "), Some(12));
        assert_eq!(parse_dimension("abc"), None);
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("0"), None);
        assert_eq!(parse_dimension("-3"), None);
        assert_eq!(parse_dimension("4.5"), None);
    }

    #[test]
    fn test_apply_rebuilds_grid() {
        let mut editor_state = EditorState::default();
        let mut map = EditorMap::default();
        editor_state.rows_input = "3".to_string();
        editor_state.cols_input = "7".to_string();
        editor_state.cell_size_input = "20".to_string();

        apply_grid_size(&mut editor_state, &mut map);

        assert_eq!(map.grid.rows(), 3);
        assert_eq!(map.grid.cols(), 7);
        assert_eq!(editor_state.cell_size, 20.0);
        assert!(editor_state.error_message.is_none());
    }

    #[test]
    fn test_invalid_input_leaves_grid_untouched() {
        let mut editor_state = EditorState::default();
        let mut map = EditorMap::default();
        map.grid.set(0, 0, TileKind::Wall);
        editor_state.rows_input = "abc".to_string();

        apply_grid_size(&mut editor_state, &mut map);

        assert_eq!(map.grid.rows(), 5);
        assert_eq!(map.grid.cols(), 5);
        assert_eq!(map.grid.get(0, 0), Some(TileKind::Wall));
        assert_eq!(editor_state.cell_size, 40.0);
        assert!(editor_state.error_message.is_some());
    }
}
