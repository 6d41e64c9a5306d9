//! Bottom toolbar: brush settings, history actions, and export.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toolbar only reads and writes shared state. Brush settings flow into
//! the engine as per-stroke snapshots; history and export actions reach the
//! canvas host through `ActionRequests` counters.

use leptos::prelude::*;

use crate::state::actions::ActionRequests;
use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::{BRUSH_SIZES, BrushMode, PALETTE, ToolbarState};

/// Bottom toolbar for the drawing page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let toolbar = expect_context::<RwSignal<ToolbarState>>();
    let view = expect_context::<RwSignal<CanvasViewState>>();
    let actions = expect_context::<RwSignal<ActionRequests>>();

    let expanded = move || toolbar.get().expanded;

    let swatches = PALETTE
        .iter()
        .map(|&color| {
            let is_active = move || toolbar.get().color == color;
            view! {
                <button
                    class="toolbar__swatch"
                    class:toolbar__swatch--active=is_active
                    style:background-color=color
                    title=color
                    on:click=move |_| toolbar.update(|t| t.color = color.to_owned())
                ></button>
            }
        })
        .collect_view();

    let sizes = BRUSH_SIZES
        .iter()
        .map(|&size| {
            let is_active = move || (toolbar.get().brush_size - size).abs() < f64::EPSILON;
            view! {
                <button
                    class="toolbar__size"
                    class:toolbar__size--active=is_active
                    title=format!("{size}px")
                    on:click=move |_| toolbar.update(|t| t.brush_size = size)
                >
                    <span
                        class="toolbar__size-dot"
                        style:width=format!("{size}px")
                        style:height=format!("{size}px")
                    ></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="toolbar">
            <button
                class="toolbar__collapse"
                on:click=move |_| toolbar.update(|t| t.expanded = !t.expanded)
            >
                {move || if expanded() { "Hide toolbar" } else { "Show toolbar" }}
            </button>

            <div class="toolbar__panel" class:toolbar__panel--collapsed=move || !expanded()>
                <div class="toolbar__group">
                    <span class="toolbar__label">"Color"</span>
                    {swatches}
                </div>

                <div class="toolbar__group">
                    <span class="toolbar__label">"Size"</span>
                    {sizes}
                </div>

                <div class="toolbar__group">
                    <button
                        class="btn toolbar__mode"
                        class:toolbar__mode--active=move || toolbar.get().mode == BrushMode::Draw
                        on:click=move |_| toolbar.update(|t| t.mode = BrushMode::Draw)
                    >
                        "Draw"
                    </button>
                    <button
                        class="btn toolbar__mode"
                        class:toolbar__mode--active=move || toolbar.get().mode == BrushMode::Erase
                        on:click=move |_| toolbar.update(|t| t.mode = BrushMode::Erase)
                    >
                        "Erase"
                    </button>
                </div>

                <div class="toolbar__group">
                    <button
                        class="btn toolbar__undo"
                        disabled=move || !view.get().can_undo
                        on:click=move |_| actions.update(ActionRequests::request_undo)
                    >
                        "Undo"
                    </button>
                    <button
                        class="btn toolbar__redo"
                        disabled=move || !view.get().can_redo
                        on:click=move |_| actions.update(ActionRequests::request_redo)
                    >
                        "Redo"
                    </button>
                </div>

                <div class="toolbar__group">
                    <button
                        class="btn toolbar__clear"
                        on:click=move |_| actions.update(ActionRequests::request_clear)
                    >
                        "Clear"
                    </button>
                    <button
                        class="btn toolbar__save"
                        on:click=move |_| actions.update(ActionRequests::request_save)
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
