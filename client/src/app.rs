//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::actions::ActionRequests;
use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::ToolbarState;

/// Root application component.
///
/// Provides the shared state contexts and renders the single drawing page.
/// There is no router; the whole app is one surface.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toolbar = RwSignal::new(ToolbarState::restored());
    let view = RwSignal::new(CanvasViewState::default());
    let actions = RwSignal::new(ActionRequests::default());

    provide_context(toolbar);
    provide_context(view);
    provide_context(actions);

    // Persist brush preferences whenever they change.
    Effect::new(move |_| {
        toolbar.get().persist();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sketchboard.css"/>
        <Title text="Sketchboard"/>

        <HomePage/>
    }
}
