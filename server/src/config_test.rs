use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_bind_addr_falls_back() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "  ")])).unwrap();
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value } if value == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT value: eighty");
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
