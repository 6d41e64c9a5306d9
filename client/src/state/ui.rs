//! Toolbar state (brush color, size, mode, panel expansion).
//!
//! DESIGN
//! ======
//! Keeps presentation-side brush settings out of the engine crate: the
//! engine only ever sees the per-stroke snapshot handed to `begin_stroke`.

use serde::{Deserialize, Serialize};

use crate::util::ui_persistence;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Preset color swatches offered by the toolbar.
pub const PALETTE: [&str; 7] =
    ["#000000", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF"];

/// Preset brush diameters offered by the toolbar, in CSS pixels.
pub const BRUSH_SIZES: [f64; 7] = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0];

/// `localStorage` key for persisted toolbar preferences.
const STORAGE_KEY: &str = "sketchboard.toolbar";

/// Whether the brush paints color or restores the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    #[default]
    Draw,
    Erase,
}

/// Brush settings plus toolbar chrome state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolbarState {
    pub color: String,
    pub brush_size: f64,
    pub mode: BrushMode,
    pub expanded: bool,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            color: PALETTE[0].to_owned(),
            brush_size: BRUSH_SIZES[1],
            mode: BrushMode::Draw,
            expanded: true,
        }
    }
}

impl ToolbarState {
    /// Restore persisted preferences, falling back to defaults.
    #[must_use]
    pub fn restored() -> Self {
        ui_persistence::load_json(STORAGE_KEY).unwrap_or_default()
    }

    /// Persist the current preferences.
    pub fn persist(&self) {
        ui_persistence::save_json(STORAGE_KEY, self);
    }
}
