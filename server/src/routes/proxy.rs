//! `/api/*` forwarding to the backend.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host, so session cookies stay
//! first-party. Requests are re-issued upstream with the same method, path,
//! query, body, and end-to-end headers; the upstream status, headers, and body
//! come back unchanged. A 401 from the backend reaches the client untouched,
//! which is what drives its redirect to `/login`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::Response;

use crate::error::HostError;
use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connection-scoped headers that must not be forwarded (RFC 9110 §7.6.1),
/// plus the ones the outgoing client recomputes.
static SKIPPED_HEADERS: [HeaderName; 10] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
    header::CONTENT_LENGTH,
];

/// Any-method handler for `/api/{*path}`.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, HostError> {
    let upstream = state.upstream()?;
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(upstream, path_and_query);

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| HostError::Body(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "forwarding api request");
    let upstream_resp = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, method = %parts.method, %url, "api upstream unreachable"))?;

    let status = upstream_resp.status();
    let headers = forwardable_headers(upstream_resp.headers());
    let bytes = upstream_resp.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().extend(headers);
    Ok(response)
}

/// Join the upstream base (no trailing slash) with the incoming path + query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// Whether `name` survives the hop to or from the upstream.
pub fn forwardable_header(name: &HeaderName) -> bool {
    !SKIPPED_HEADERS.contains(name)
}

/// Copy of `headers` without the hop-by-hop entries, keeping repeated values
/// such as multiple `set-cookie` lines.
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if forwardable_header(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}
