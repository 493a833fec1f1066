use std::time::Duration;

use super::*;

fn config(upstream: Option<&str>) -> HostConfig {
    HostConfig {
        bind_addr: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        api_upstream: upstream.map(str::to_owned),
        proxy_timeout: Duration::from_secs(1),
    }
}

#[test]
fn upstream_is_exposed_when_configured() {
    let state = AppState::new(config(Some("http://backend:5000"))).unwrap();
    assert_eq!(state.upstream().unwrap(), "http://backend:5000");
}

#[test]
fn missing_upstream_maps_to_service_unavailable() {
    let state = AppState::new(config(None)).unwrap();
    let err = state.upstream().unwrap_err();
    assert!(matches!(err, HostError::UpstreamNotConfigured));
    assert_eq!(err.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
}
