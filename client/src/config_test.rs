use super::*;

#[test]
fn default_points_at_local_api() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
    assert!(!cfg.persist_session);
    assert!(!cfg.restore_server_session);
}

#[test]
fn base_url_gets_single_trailing_slash() {
    let cfg = ClientConfig::from_values(Some("https://api.example.test/v1.0//"), None, None);
    assert_eq!(cfg.api_base_url, "https://api.example.test/v1.0/");
    let cfg = ClientConfig::from_values(Some("https://api.example.test/v1.0"), None, None);
    assert_eq!(cfg.api_base_url, "https://api.example.test/v1.0/");
}

#[test]
fn blank_url_falls_back_to_default() {
    let cfg = ClientConfig::from_values(Some("   "), None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
}

#[test]
fn persist_flag_parsing() {
    for raw in ["1", "true", "TRUE", " yes ", "on"] {
        assert!(ClientConfig::from_values(None, Some(raw), None).persist_session, "{raw}");
    }
    for raw in ["0", "false", "", "nope"] {
        assert!(!ClientConfig::from_values(None, Some(raw), None).persist_session, "{raw}");
    }
}

#[test]
fn server_session_flag_is_independent_of_persistence() {
    let cfg = ClientConfig::from_values(None, None, Some("on"));
    assert!(cfg.restore_server_session);
    assert!(!cfg.persist_session);
    let cfg = ClientConfig::from_values(None, Some("on"), None);
    assert!(!cfg.restore_server_session);
}

#[test]
fn endpoint_joins_without_double_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("login/"), "http://127.0.0.1:8000/api/v1.0/login/");
    assert_eq!(cfg.endpoint("/password/reset/"), "http://127.0.0.1:8000/api/v1.0/password/reset/");
}
