//! Menu bar UI

use bevy_egui::egui;

use super::PendingAction;
use crate::EditorState;

/// Render the menu bar
pub fn render_menu_bar(ctx: &egui::Context, editor_state: &mut EditorState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("New Map").clicked() {
                    editor_state.pending_action = Some(PendingAction::NewMap);
                    ui.close();
                }
                if ui.button("Open Map...").clicked() {
                    editor_state.pending_action = Some(PendingAction::OpenMap);
                    ui.close();
                }
                ui.separator();
                if ui.button("Save Map...").clicked() {
                    editor_state.pending_action = Some(PendingAction::SaveMap);
                    ui.close();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    editor_state.pending_action = Some(PendingAction::Exit);
                    ui.close();
                }
            });
        });
    });
}
