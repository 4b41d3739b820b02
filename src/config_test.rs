use super::*;

// =============================================================================
// PORT
// =============================================================================

#[test]
fn port_defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn port_defaults_when_blank() {
    let cfg = ServerConfig::from_values(None, Some("   ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn port_parses_and_trims() {
    let cfg = ServerConfig::from_values(None, Some(" 8080 ")).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(
        ServerConfig::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort { value: "http".to_owned() })
    );
}

#[test]
fn port_rejects_zero_and_overflow() {
    assert!(ServerConfig::from_values(None, Some("0")).is_err());
    assert!(ServerConfig::from_values(None, Some("70000")).is_err());
}

// =============================================================================
// BIND_ADDR
// =============================================================================

#[test]
fn bind_addr_defaults_to_unspecified() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn bind_addr_accepts_ipv4_and_ipv6() {
    let v4 = ServerConfig::from_values(Some("127.0.0.1"), Some("4000")).unwrap();
    assert_eq!(v4.socket_addr().to_string(), "127.0.0.1:4000");

    let v6 = ServerConfig::from_values(Some("::1"), Some("4000")).unwrap();
    assert_eq!(v6.socket_addr().to_string(), "[::1]:4000");
}

#[test]
fn bind_addr_rejects_hostname() {
    assert_eq!(
        ServerConfig::from_values(Some("localhost"), None),
        Err(ConfigError::InvalidBindAddr { value: "localhost".to_owned() })
    );
}
