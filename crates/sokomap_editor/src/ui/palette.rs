//! Tile palette for selecting the active tile kind

use bevy_egui::egui;
use sokomap_core::TileKind;

use super::theme::tile_color;
use crate::EditorState;

/// Render the mutually exclusive tile selector
pub fn render_palette(ctx: &egui::Context, editor_state: &mut EditorState) {
    egui::TopBottomPanel::top("tile_palette").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Tiles:");
            for kind in TileKind::ALL {
                let (swatch, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, tile_color(kind));

                if ui
                    .selectable_label(editor_state.selected == kind, kind.label())
                    .clicked()
                {
                    editor_state.selected = kind;
                }
            }
        });
    });
}
