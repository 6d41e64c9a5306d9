//! Home page — the drawing surface layout.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::toolbar::Toolbar;

/// Home page — composes the pannable canvas viewport and the bottom
/// toolbar. The viewport clips the oversized canvas; the toolbar floats
/// above it.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="home-page__surface" aria-label="Drawing surface">
                <CanvasHost/>
            </section>
            <Toolbar/>
        </main>
    }
}
