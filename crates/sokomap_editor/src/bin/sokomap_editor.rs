//! Standalone Sokoban map editor binary
//!
//! Install with: cargo install sokomap_editor
//! Run with: sokomap_editor

use bevy::prelude::*;
use bevy::window::WindowResolution;
use sokomap_editor::EditorPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sokoban Map Generator".to_string(),
                // High DPI support: prevent OS-level scaling that causes blurriness
                resolution: WindowResolution::new(960, 640).with_scale_factor_override(1.0),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EditorPlugin)
        .run();
}
