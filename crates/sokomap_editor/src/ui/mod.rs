//! Editor UI components using bevy_egui
//!
//! This module provides the panels and dialogs for the editor: the menu
//! bar, the grid size control panel, the tile palette, the paintable
//! canvas, and the error dialog.

mod canvas;
mod control_panel;
mod dialogs;
mod menu_bar;
mod palette;
mod theme;

pub use canvas::render_canvas;
pub use control_panel::{parse_dimension, render_control_panel};
pub use dialogs::{render_dialogs, PendingAction};
pub use menu_bar::render_menu_bar;
pub use palette::render_palette;
pub use theme::EditorTheme;

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::{EditorMap, EditorState};

/// Main UI plugin
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_ui);
    }
}

fn render_ui(
    mut contexts: EguiContexts,
    mut editor_state: ResMut<EditorState>,
    mut map: ResMut<EditorMap>,
    mut exit: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    // Menu bar
    render_menu_bar(ctx, &mut editor_state);

    // Grid size controls
    render_control_panel(ctx, &mut editor_state, &mut map);

    // Tile palette
    render_palette(ctx, &mut editor_state);

    // Status bar
    render_status_bar(ctx, &editor_state, &map);

    // Central panel - the paintable grid
    egui::CentralPanel::default().show(ctx, |ui| {
        render_canvas(ui, &editor_state, &mut map);
    });

    // Error dialog + deferred file actions
    render_dialogs(ctx, &mut editor_state, &mut map, &mut exit);
}

fn render_status_bar(ctx: &egui::Context, editor_state: &EditorState, map: &EditorMap) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("{} x {}", map.grid.rows(), map.grid.cols()));
            ui.separator();
            match &editor_state.map_path {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name);
                }
                None => {
                    ui.label("Unsaved map");
                }
            }
        });
    });
}
