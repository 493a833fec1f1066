//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the nav bar and the route guard. The state starts out loading and
//! is replaced wholesale by the single session check issued on mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::User;

/// Session status as seen by the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    /// True until the session check has completed.
    pub loading: bool,
    pub user: Option<User>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, loading: true, user: None }
    }
}

impl AuthState {
    /// Apply the outcome of the session check.
    ///
    /// Any failure, 401 or otherwise, means "not signed in". Only the first
    /// outcome is applied; returns `false` when a check already settled.
    pub fn settle(&mut self, outcome: Result<User, ApiError>) -> bool {
        if !self.loading {
            return false;
        }
        *self = match outcome {
            Ok(user) => Self { authenticated: true, loading: false, user: Some(user) },
            Err(err) => {
                log::debug!("session check failed: {err}");
                Self { authenticated: false, loading: false, user: None }
            }
        };
        true
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Run one session check and return the settled state.
pub async fn resolve_auth<F>(check: F) -> AuthState
where
    F: Future<Output = Result<User, ApiError>>,
{
    let mut state = AuthState::default();
    state.settle(check.await);
    state
}
