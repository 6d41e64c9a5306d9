#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn canvas_view_state_defaults_are_neutral() {
    let state = CanvasViewState::default();
    assert!(!state.can_undo);
    assert!(!state.can_redo);
    assert_eq!(state.pan_x, 0.0);
    assert_eq!(state.pan_y, 0.0);
}

#[test]
fn translation_formats_the_offset() {
    let state = CanvasViewState { pan_x: 12.5, pan_y: -3.0, ..Default::default() };
    assert_eq!(state.translation(), "translate(12.5px, -3px)");
}

#[test]
fn translation_at_rest_is_zero() {
    assert_eq!(CanvasViewState::default().translation(), "translate(0px, 0px)");
}
