//! sokomap_editor - Graphical map editor for Sokoban-style puzzles
//!
//! This crate provides a small tilemap editor with:
//! - A paintable grid canvas (click, drag, hover-while-pressed)
//! - A palette of Sokoban tile kinds
//! - Configurable grid dimensions and cell size
//! - Flat text map export and import
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use sokomap_editor::EditorPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(EditorPlugin)
//!         .run();
//! }
//! ```

pub mod map_file;
pub mod ui;

// Re-export the core data model
pub use sokomap_core;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use std::path::PathBuf;

use sokomap_core::{MapGrid, TileKind, DEFAULT_COLS, DEFAULT_ROWS};
use ui::{EditorUiPlugin, PendingAction};

/// Default rendered cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 40;

/// Main editor plugin
///
/// Wires up egui, the editor state resources, and the UI systems.
#[derive(Default)]
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins(EditorUiPlugin)
            .init_resource::<EditorState>()
            .init_resource::<EditorMap>()
            .add_systems(Startup, setup_editor_camera);
    }
}

/// The map being edited
#[derive(Resource, Default)]
pub struct EditorMap {
    pub grid: MapGrid,
}

/// Global editor state
#[derive(Resource)]
pub struct EditorState {
    /// Tile kind applied by the next paint operation
    pub selected: TileKind,
    /// Raw text of the rows input field
    pub rows_input: String,
    /// Raw text of the cols input field
    pub cols_input: String,
    /// Raw text of the cell size input field
    pub cell_size_input: String,
    /// Rendered cell size in pixels (visual only, never affects export)
    pub cell_size: f32,
    /// File the map was last saved to or opened from
    pub map_path: Option<PathBuf>,
    /// Non-fatal error shown in the error dialog
    pub error_message: Option<String>,
    /// Deferred file/menu action, processed after UI rendering
    pub pending_action: Option<PendingAction>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            selected: TileKind::Empty,
            rows_input: DEFAULT_ROWS.to_string(),
            cols_input: DEFAULT_COLS.to_string(),
            cell_size_input: DEFAULT_CELL_SIZE.to_string(),
            cell_size: DEFAULT_CELL_SIZE as f32,
            map_path: None,
            error_message: None,
            pending_action: None,
        }
    }
}

/// Spawn a 2D camera for the egui render pass if the host app has none
fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}
