//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `flags`) so components depend on small
//! focused models. The structs here are plain data; the Leptos signals that
//! hold them are created in `util` and provided via context.

pub mod auth;
pub mod flags;
