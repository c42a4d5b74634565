//! Error dialog and deferred file actions

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::log::info;
use bevy_egui::egui;
use sokomap_core::MapGrid;

use crate::{EditorMap, EditorState};

/// Deferred menu actions, processed once per frame after the panels render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewMap,
    OpenMap,
    SaveMap,
    Exit,
}

/// Render the error dialog and process any pending file action
pub fn render_dialogs(
    ctx: &egui::Context,
    editor_state: &mut EditorState,
    map: &mut EditorMap,
    exit: &mut MessageWriter<AppExit>,
) {
    render_error_dialog(ctx, editor_state);

    if let Some(action) = editor_state.pending_action.take() {
        match action {
            PendingAction::NewMap => {
                map.grid = MapGrid::default();
                editor_state.map_path = None;
                editor_state.rows_input = map.grid.rows().to_string();
                editor_state.cols_input = map.grid.cols().to_string();
                info!(
                    "Reset to a new {} x {} map",
                    map.grid.rows(),
                    map.grid.cols()
                );
            }
            PendingAction::OpenMap => {
                #[cfg(feature = "native")]
                {
                    // Cancelling the dialog is a silent no-op
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Text files", &["txt"])
                        .pick_file()
                    {
                        match crate::map_file::load_map(&path) {
                            Ok(grid) => {
                                editor_state.rows_input = grid.rows().to_string();
                                editor_state.cols_input = grid.cols().to_string();
                                map.grid = grid;
                                info!("Opened map: {}", path.display());
                                editor_state.map_path = Some(path);
                            }
                            Err(e) => {
                                bevy::log::warn!("Failed to open map: {}", e);
                                editor_state.error_message =
                                    Some(format!("Failed to open map: {}", e));
                            }
                        }
                    }
                }
            }
            PendingAction::SaveMap => {
                #[cfg(feature = "native")]
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Text files", &["txt"])
                        .set_file_name("map.txt")
                        .save_file()
                    {
                        match crate::map_file::save_map(&map.grid, &path) {
                            Ok(()) => {
                                info!("Map saved to: {}", path.display());
                                editor_state.map_path = Some(path);
                            }
                            Err(e) => {
                                bevy::log::warn!("Failed to save map: {}", e);
                                editor_state.error_message =
                                    Some(format!("Failed to save map: {}", e));
                            }
                        }
                    }
                }
            }
            PendingAction::Exit => {
                exit.write(AppExit::Success);
            }
        }
    }
}

fn render_error_dialog(ctx: &egui::Context, editor_state: &mut EditorState) {
    let Some(error_msg) = editor_state.error_message.clone() else {
        return;
    };

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(&error_msg);
            ui.separator();
            if ui.button("OK").clicked() {
                editor_state.error_message = None;
            }
        });
}
