//! Browser navigation outside the router.
//!
//! Requires a browser environment; on the server these are no-ops.

/// Full page load of `path` via `window.location`, skipped when the browser
/// is already there so a 401 on `/login` cannot reload forever.
#[cfg(feature = "hydrate")]
pub fn hard_redirect(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if location.pathname().is_ok_and(|current| current == path) {
        return;
    }
    if let Err(e) = location.set_href(path) {
        log::error!("redirect to {path} failed: {e:?}");
    }
}

/// Step one entry back in the session history.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.back() {
                log::error!("history back failed: {e:?}");
            }
        }
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;
