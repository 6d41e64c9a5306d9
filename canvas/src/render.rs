//! Rendering: paints strokes to the 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! history log and produces pixels; it does not mutate any engine state.
//!
//! Two paths exist and must stay pixel-identical: the incremental path
//! ([`begin_stroke`] / [`extend_stroke`]) used while a gesture is live, and
//! the full [`replay`] used after undo/redo. Both draw a one-point stroke as
//! a zero-length segment, which the round line cap turns into a dot.

use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::consts::{BACKGROUND_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::history::{Stroke, StrokeLog, StrokeStyle};

/// Fill the whole logical canvas with the background color.
pub fn paint_background(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
}

/// Set up the context for a new stroke and paint its initial dot.
///
/// The path is left open; [`extend_stroke`] keeps appending to it until the
/// next `begin_path`.
pub fn begin_stroke(ctx: &CanvasRenderingContext2d, p: Point, style: &StrokeStyle) {
    apply_style(ctx, style);
    ctx.begin_path();
    ctx.move_to(p.x, p.y);
    ctx.line_to(p.x, p.y);
    ctx.stroke();
}

/// Append a segment to the open stroke path and paint it.
pub fn extend_stroke(ctx: &CanvasRenderingContext2d, p: Point) {
    ctx.line_to(p.x, p.y);
    ctx.stroke();
}

/// Repaint the canvas from scratch: background, then every active stroke in
/// commit order. Later strokes draw over earlier ones.
pub fn replay(ctx: &CanvasRenderingContext2d, log: &StrokeLog) {
    paint_background(ctx);
    for stroke in log.active() {
        draw_stroke(ctx, stroke);
    }
}

fn draw_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
    let Some(first) = stroke.points.first() else {
        return;
    };

    apply_style(ctx, &stroke.style);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    if stroke.points.len() == 1 {
        // Zero-length segment; the round cap renders it as a dot.
        ctx.line_to(first.x, first.y);
    } else {
        for p in &stroke.points[1..] {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.stroke();
}

fn apply_style(ctx: &CanvasRenderingContext2d, style: &StrokeStyle) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_stroke_style_str(style.resolved_color());
    ctx.set_line_width(style.brush_size);
}
