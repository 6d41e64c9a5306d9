use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::history::{Stroke, StrokeLog, StrokeStyle};
use crate::input::InputState;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. The core owns the stroke log, the pan camera, and the
/// gesture state machine, and enforces that drawing and panning never
/// overlap.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub log: StrokeLog,
    pub camera: Camera,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Stroke lifecycle ---

    /// Start a stroke at canvas coordinate `p`.
    ///
    /// Rejected while another gesture is in progress, including a pan.
    /// Returns whether the stroke was started.
    pub fn begin_stroke(&mut self, p: Point, style: StrokeStyle) -> bool {
        if !matches!(self.input, InputState::Idle) {
            return false;
        }
        self.input = InputState::Drawing { stroke: Stroke::new(p, style) };
        true
    }

    /// Append `p` to the stroke in progress. No-op when not drawing.
    pub fn extend_stroke(&mut self, p: Point) -> bool {
        match &mut self.input {
            InputState::Drawing { stroke } => {
                stroke.push(p);
                true
            }
            _ => false,
        }
    }

    /// Finalize the stroke in progress: truncate the redo tail, append the
    /// stroke, and advance the cursor over it.
    ///
    /// Pointer-up and pointer-leave both fire this; the second call finds no
    /// stroke in progress and does nothing.
    pub fn commit_stroke(&mut self) -> bool {
        match std::mem::take(&mut self.input) {
            InputState::Drawing { stroke } => {
                self.log.commit(stroke);
                true
            }
            other => {
                self.input = other;
                false
            }
        }
    }

    // --- History ---

    /// Step back one stroke. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.log.undo()
    }

    /// Step forward one stroke. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.log.redo()
    }

    /// Drop every stroke, active and undone.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    // --- Panning ---

    /// Start panning from screen position `p`. Rejected while drawing.
    pub fn start_panning(&mut self, p: Point) -> bool {
        if !matches!(self.input, InputState::Idle) {
            return false;
        }
        self.input = InputState::Panning { last_screen: p };
        true
    }

    /// Accumulate the drag delta since the previous pan event into the
    /// camera offset. No-op while idle or drawing.
    pub fn pan(&mut self, p: Point) -> bool {
        match &mut self.input {
            InputState::Panning { last_screen } => {
                self.camera.pan_by(p.x - last_screen.x, p.y - last_screen.y);
                *last_screen = p;
                true
            }
            _ => false,
        }
    }

    /// End the pan gesture. Safe from any state; a stroke in progress is
    /// left untouched.
    pub fn stop_panning(&mut self) {
        if matches!(self.input, InputState::Panning { .. }) {
            self.input = InputState::Idle;
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    /// The cumulative pan offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.camera.offset()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.input, InputState::Drawing { .. })
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.input, InputState::Panning { .. })
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the 2D context of the
/// browser canvas element.
///
/// The context is acquired once at construction. When acquisition fails,
/// every painting side effect degrades to a silent no-op while the state
/// machine keeps running, so queries stay consistent.
pub struct Engine {
    ctx: Option<CanvasRenderingContext2d>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        Self { ctx: context_2d(canvas), core: EngineCore::new() }
    }

    // --- Stroke lifecycle ---

    /// Start a stroke and paint its initial dot, so a bare tap leaves a
    /// visible mark.
    pub fn begin_stroke(&mut self, p: Point, style: StrokeStyle) {
        if !self.core.begin_stroke(p, style.clone()) {
            return;
        }
        if let Some(ctx) = &self.ctx {
            render::begin_stroke(ctx, p, &style);
        }
    }

    /// Extend the stroke in progress and paint the new segment.
    pub fn extend_stroke(&mut self, p: Point) {
        if !self.core.extend_stroke(p) {
            return;
        }
        if let Some(ctx) = &self.ctx {
            render::extend_stroke(ctx, p);
        }
    }

    /// Commit the stroke in progress. Its pixels are already on the canvas,
    /// so no repaint is needed.
    pub fn commit_stroke(&mut self) {
        self.core.commit_stroke();
    }

    // --- History ---

    /// Undo one stroke and replay the survivors.
    pub fn undo(&mut self) {
        if self.core.undo() {
            self.replay();
        }
    }

    /// Redo one stroke and replay.
    pub fn redo(&mut self) {
        if self.core.redo() {
            self.replay();
        }
    }

    /// Drop every stroke and repaint the background.
    pub fn clear(&mut self) {
        self.core.clear();
        if let Some(ctx) = &self.ctx {
            render::paint_background(ctx);
        }
    }

    /// Repaint the whole canvas from the history log. Also used once after
    /// mount to lay down the background.
    pub fn replay(&self) {
        if let Some(ctx) = &self.ctx {
            render::replay(ctx, &self.core.log);
        }
    }

    // --- Panning (state only; the host applies the offset as CSS) ---

    pub fn start_panning(&mut self, p: Point) {
        self.core.start_panning(p);
    }

    pub fn pan(&mut self, p: Point) {
        self.core.pan(p);
    }

    pub fn stop_panning(&mut self) {
        self.core.stop_panning();
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.core.offset()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.core.is_drawing()
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.core.is_panning()
    }
}

/// Acquire the 2D context, if the element can provide one.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let object = match canvas.get_context("2d") {
        Ok(Some(object)) => object,
        Ok(None) | Err(_) => return None,
    };
    match object.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(_) => None,
    }
}
