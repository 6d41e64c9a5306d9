//! Shared constants for the canvas crate.

// ── Canvas geometry ─────────────────────────────────────────────

/// Logical width of the drawing surface in CSS pixels.
pub const CANVAS_WIDTH: f64 = 3000.0;

/// Logical height of the drawing surface in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 3000.0;

// ── Painting ────────────────────────────────────────────────────

/// Background color. Erase strokes paint in this color.
pub const BACKGROUND_COLOR: &str = "#FFFFFF";

// ── Input ───────────────────────────────────────────────────────

/// Minimum number of simultaneous touches that means panning rather than
/// drawing.
pub const PAN_TOUCH_COUNT: u32 = 2;
