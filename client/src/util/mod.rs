//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (context providers,
//! hard navigation) from page and component logic.

pub mod auth;
pub mod flags;
pub mod navigation;
