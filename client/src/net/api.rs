//! HTTP client for the `/api` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! credentials and JSON headers.
//! Server-side (SSR) and native tests: requests return
//! [`ApiError::Unavailable`], since the session cookie only exists in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response funnels through [`ApiClient::settle`]. A 401 there triggers
//! a hard redirect to `/login`, for every endpoint including the session
//! check; callers still receive [`ApiError::Unauthorized`] so they can stop
//! their own work. The redirect is skipped when the browser is already on
//! `/login`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::form::MultipartForm;
use super::types::{FeedbackItem, FeedbackSort, User};
use crate::state::flags::FeatureFlags;

/// Mount point of the backend on the same origin.
pub const API_BASE: &str = "/api";

#[cfg(feature = "hydrate")]
const JSON_CONTENT_TYPE: &str = "application/json";

const AUTH_CHECK_PATH: &str = "auth/check";
const FEEDBACK_PATH: &str = "feedback";

/// Thin wrapper that applies base path, credentials, JSON headers, and the
/// 401 interceptor to every call.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base(API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Join `path` onto the base with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// `GET {base}/{path}` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, and
    /// bodies that do not decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .header("Accept", JSON_CONTENT_TYPE)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.finish(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST {base}/{path}` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, and
    /// bodies that do not decode into `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .header("Accept", JSON_CONTENT_TYPE)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.finish(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST {base}/{path}` as `multipart/form-data` and decode the JSON
    /// response. The browser supplies the boundary header.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, and
    /// bodies that do not decode into `T`.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: &MultipartForm) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .header("Accept", JSON_CONTENT_TYPE)
                .body(form.to_form_data()?)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.finish(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, form);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn finish<T: DeserializeOwned>(&self, resp: gloo_net::http::Response) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        self.settle(status, &body, crate::util::navigation::hard_redirect)
    }

    /// Interpret a finished response. `redirect` is the navigation hook the
    /// 401 interceptor calls with `/login`.
    #[cfg(any(test, feature = "hydrate"))]
    fn settle<T: DeserializeOwned>(&self, status: u16, body: &str, redirect: impl FnOnce(&str)) -> Result<T, ApiError> {
        match status {
            200..=299 => {
                let body = if body.trim().is_empty() { "null" } else { body };
                serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
            }
            401 => {
                log::warn!("api 401, redirecting to {}", crate::routes::LOGIN_PATH);
                redirect(crate::routes::LOGIN_PATH);
                Err(ApiError::Unauthorized)
            }
            _ => {
                let message = error_message(status, body);
                log::error!("api error {status}: {message}");
                Err(ApiError::Status { status, message })
            }
        }
    }
}

/// Prefer the backend's own `message`/`error` field over a generic label.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Client shared by the endpoint helpers below; all of them redirect on 401.
fn backend() -> ApiClient {
    ApiClient::new()
}

fn feature_flags_path(environment: &str) -> String {
    format!("feature-flags?env={}", urlencoding::encode(environment))
}

fn feedback_list_path(sort: FeedbackSort) -> String {
    format!("{FEEDBACK_PATH}?sort={}", sort.as_query())
}

/// Ask the backend who is signed in via `GET /api/auth/check`.
///
/// Like every other call, a 401 here sends the browser to `/login`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when there is no session, or any other
/// [`ApiError`] when the check itself failed.
pub async fn check_auth() -> Result<User, ApiError> {
    backend().get(AUTH_CHECK_PATH).await
}

/// Fetch the feature flags for `environment` via `GET /api/feature-flags`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the flags could not be fetched or decoded.
pub async fn fetch_feature_flags(environment: &str) -> Result<FeatureFlags, ApiError> {
    backend().get(&feature_flags_path(environment)).await
}

/// List feedback entries via `GET /api/feedback?sort=...`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_feedback(sort: FeedbackSort) -> Result<Vec<FeedbackItem>, ApiError> {
    backend().get(&feedback_list_path(sort)).await
}

/// Create a feedback entry via multipart `POST /api/feedback`; see
/// [`crate::net::types::FeedbackSubmission::to_form`].
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn submit_feedback(form: &MultipartForm) -> Result<FeedbackItem, ApiError> {
    backend().post_form(FEEDBACK_PATH, form).await
}
