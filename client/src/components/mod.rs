//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the drawing surface and its chrome while reading and
//! writing shared state from Leptos context providers.

pub mod canvas_host;
pub mod toolbar;
