//! Networking modules for the `/api` backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every HTTP call behind one status interpreter (the 401
//! interceptor lives there), `error` is the failure taxonomy callers match on,
//! `form` builds multipart bodies for uploads,
//! and `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod form;
pub mod types;
