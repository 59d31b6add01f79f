use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================
// from_lookup
// =============================================================

#[test]
fn defaults_apply_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, PathBuf::from("/srv/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", ""), ("SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "4000")])).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:4000");
}

// =============================================================
// from_env
// =============================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "3131");
        std::env::remove_var("SITE_ROOT");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 3131);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));

    unsafe { std::env::remove_var("PORT") };
}
