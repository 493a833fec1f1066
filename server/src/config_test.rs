use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.api_upstream.as_deref(), Some("http://localhost:5000"));
    assert_eq!(config.proxy_timeout, Duration::from_secs(30));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("PROXY_TIMEOUT_SECS", "")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.proxy_timeout, Duration::from_secs(30));
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn overrides_are_applied() {
    let config = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("API_UPSTREAM", "https://api.gosolo.nyc/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.api_upstream.as_deref(), Some("https://api.gosolo.nyc"));
    assert_eq!(config.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn empty_upstream_disables_proxy() {
    let config = HostConfig::from_lookup(lookup_from(&[("API_UPSTREAM", "")])).unwrap();
    assert_eq!(config.api_upstream, None);
    let config = HostConfig::from_lookup(lookup_from(&[("API_UPSTREAM", " / ")])).unwrap();
    assert_eq!(config.api_upstream, None);
}

// =============================================================================
// errors
// =============================================================================

#[test]
fn malformed_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::Config(ref msg) if msg.contains("PORT")), "{err}");
}

#[test]
fn malformed_bind_addr_is_an_error() {
    let err = HostConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, HostError::Config(ref msg) if msg.contains("BIND_ADDR")), "{err}");
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
