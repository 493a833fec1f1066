//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome (nav, layout, guards, the per-route
//! wrapper) while reading shared session and flag state from Leptos context.

pub mod google_sign_in;
pub mod layout;
pub mod loading_spinner;
pub mod nav;
pub mod protected_route;
pub mod routed_page;
