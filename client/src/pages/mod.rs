//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Pages are only constructed by `routes::AppRoute::view` and
//! the outlet's 404 branch.

pub mod about;
pub mod feedback;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod sends;
pub mod sessions;
pub mod signup;
pub mod standings;
pub mod stats;
