use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.assets_dir, PathBuf::from("public"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("ASSETS_DIR", "/srv/animeverse")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/animeverse"));
}

#[test]
fn from_lookup_trims_whitespace() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", ""), ("ASSETS_DIR", "   ")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_lookup_rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_and_out_of_range_port() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "0")])).is_err());
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn config_error_display_names_variable() {
    let err = ConfigError::Invalid { var: "PORT", value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT: \"x\"");
}
