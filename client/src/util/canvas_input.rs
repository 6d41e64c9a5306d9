//! Canvas input mapping and pointer helper utilities.

#[cfg(feature = "hydrate")]
use crate::state::ui::{BrushMode, ToolbarState};

#[cfg(feature = "hydrate")]
use canvas::camera::{Point as CanvasPoint, client_to_canvas};
#[cfg(feature = "hydrate")]
use canvas::history::{StrokeMode, StrokeStyle};
#[cfg(feature = "hydrate")]
use canvas::input::Button as CanvasButton;

#[cfg(feature = "hydrate")]
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

#[cfg(feature = "hydrate")]
pub fn map_mode(mode: BrushMode) -> StrokeMode {
    match mode {
        BrushMode::Draw => StrokeMode::Draw,
        BrushMode::Erase => StrokeMode::Erase,
    }
}

/// Snapshot the toolbar settings into a per-stroke style.
#[cfg(feature = "hydrate")]
pub fn stroke_style(toolbar: &ToolbarState) -> StrokeStyle {
    StrokeStyle {
        color: toolbar.color.clone(),
        brush_size: toolbar.brush_size,
        mode: map_mode(toolbar.mode),
    }
}

/// Pointer position in canvas-local coordinates.
#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Pointer position in viewport coordinates.
///
/// Pan deltas must be measured against the viewport, not the canvas: the
/// canvas element itself moves while panning, so element-relative
/// coordinates would feed the motion back into the gesture.
#[cfg(feature = "hydrate")]
pub fn pointer_client_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// On-screen top-left of the canvas element.
///
/// Recomputed per event: panning moves the element between events, so a
/// cached rect would map touches to stale positions.
#[cfg(feature = "hydrate")]
pub fn canvas_origin(canvas: &web_sys::HtmlCanvasElement) -> CanvasPoint {
    let rect = canvas.get_bounding_client_rect();
    CanvasPoint::new(rect.left(), rect.top())
}

/// First touch position in canvas-local coordinates, if any touch is down.
#[cfg(feature = "hydrate")]
pub fn touch_point(
    ev: &leptos::ev::TouchEvent,
    canvas: &web_sys::HtmlCanvasElement,
) -> Option<CanvasPoint> {
    let touch = ev.touches().item(0)?;
    let client = CanvasPoint::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
    Some(client_to_canvas(client, canvas_origin(canvas)))
}

/// First touch position in viewport coordinates, if any touch is down.
#[cfg(feature = "hydrate")]
pub fn touch_client_point(ev: &leptos::ev::TouchEvent) -> Option<CanvasPoint> {
    let touch = ev.touches().item(0)?;
    Some(CanvasPoint::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Number of touches currently on the surface.
#[cfg(feature = "hydrate")]
pub fn touch_count(ev: &leptos::ev::TouchEvent) -> u32 {
    ev.touches().length()
}
