//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns drawing and replay; this host maps pointer and touch
//! events into engine operations and publishes viewport snapshots. Toolbar
//! actions arrive through `ActionRequests` counters watched in an effect, so
//! the toolbar never holds an engine reference.

use leptos::prelude::*;

use crate::state::actions::ActionRequests;
use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::ToolbarState;

#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{
    map_button, pointer_client_point, pointer_point, stroke_style, touch_client_point, touch_count,
    touch_point,
};
#[cfg(feature = "hydrate")]
use crate::util::export;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::Engine;
#[cfg(feature = "hydrate")]
use canvas::input::Gesture;

/// Publish the engine's current history and pan state to the shared view
/// signal. Skips the write when nothing changed so downstream effects do not
/// re-run on every pointer move.
#[cfg(feature = "hydrate")]
fn sync_canvas_view(engine: &Engine, canvas_view: RwSignal<CanvasViewState>) {
    let offset = engine.offset();
    let next = CanvasViewState {
        can_undo: engine.can_undo(),
        can_redo: engine.can_redo(),
        pan_x: offset.x,
        pan_y: offset.y,
    };
    if canvas_view.get_untracked() != next {
        canvas_view.set(next);
    }
}

/// The drawing canvas and its event wiring.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let _toolbar = expect_context::<RwSignal<ToolbarState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let _actions = expect_context::<RwSignal<ActionRequests>>();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));

    // Mount the engine once the canvas element exists.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let instance = Engine::new(&canvas);
            // First replay lays down the background fill.
            instance.replay();
            sync_canvas_view(&instance, canvas_view);
            *engine.borrow_mut() = Some(instance);
        });
    }

    // Run toolbar actions when their request counters advance.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move |prev: Option<ActionRequests>| {
            let requested = _actions.get();
            let Some(prev) = prev else {
                return requested;
            };
            let mut engine = engine.borrow_mut();
            let Some(engine) = engine.as_mut() else {
                return requested;
            };

            if requested.undo_seq > prev.undo_seq {
                let started = js_sys::Date::now();
                engine.undo();
                log::debug!("undo replay took {:.1}ms", js_sys::Date::now() - started);
            }
            if requested.redo_seq > prev.redo_seq {
                let started = js_sys::Date::now();
                engine.redo();
                log::debug!("redo replay took {:.1}ms", js_sys::Date::now() - started);
            }
            if requested.clear_seq > prev.clear_seq {
                engine.clear();
            }
            if requested.save_seq > prev.save_seq {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = export::save_png(&canvas) {
                        log::warn!("save failed: {err}");
                    }
                }
            }
            sync_canvas_view(engine, canvas_view);
            requested
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                // Touch input is handled by the touch events below.
                if ev.pointer_type() != "mouse" {
                    return;
                }
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                match Gesture::from_button(map_button(ev.button())) {
                    Gesture::Draw => {
                        engine.begin_stroke(pointer_point(&ev), stroke_style(&_toolbar.get_untracked()));
                    }
                    Gesture::Pan => engine.start_panning(pointer_client_point(&ev)),
                }
                sync_canvas_view(engine, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if ev.pointer_type() != "mouse" {
                    return;
                }
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                if engine.is_drawing() {
                    engine.extend_stroke(pointer_point(&ev));
                } else if engine.is_panning() {
                    engine.pan(pointer_client_point(&ev));
                    sync_canvas_view(engine, canvas_view);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if ev.pointer_type() != "mouse" {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                engine.commit_stroke();
                engine.stop_panning();
                sync_canvas_view(engine, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Leaving the surface mid-stroke commits, matching pointer up.
    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if ev.pointer_type() != "mouse" {
                    return;
                }
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                engine.commit_stroke();
                engine.stop_panning();
                sync_canvas_view(engine, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                match Gesture::from_touch_count(touch_count(&ev)) {
                    Gesture::Draw => {
                        if let Some(point) = touch_point(&ev, &canvas) {
                            engine.begin_stroke(point, stroke_style(&_toolbar.get_untracked()));
                        }
                    }
                    Gesture::Pan => {
                        // A second finger arriving mid-stroke turns the
                        // gesture into a pan; keep what was drawn so far.
                        engine.commit_stroke();
                        if let Some(point) = touch_client_point(&ev) {
                            engine.start_panning(point);
                        }
                    }
                }
                sync_canvas_view(engine, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                if engine.is_drawing() {
                    if let Some(point) = touch_point(&ev, &canvas) {
                        engine.extend_stroke(point);
                    }
                } else if engine.is_panning() {
                    if let Some(point) = touch_client_point(&ev) {
                        engine.pan(point);
                        sync_canvas_view(engine, canvas_view);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::TouchEvent| {
                let mut engine = engine.borrow_mut();
                let Some(engine) = engine.as_mut() else {
                    return;
                };
                engine.commit_stroke();
                engine.stop_panning();
                sync_canvas_view(engine, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    // Secondary-button panning needs the context menu suppressed.
    let on_context_menu = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
    };

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            width="3000"
            height="3000"
            style:transform=move || canvas_view.get().translation()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:contextmenu=on_context_menu
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
