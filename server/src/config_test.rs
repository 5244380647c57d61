use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn reads_port_and_site_root() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ROOT", "/srv/edubox")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/edubox")));
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Port { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn site_root_override_wins() {
    let cfg = HostConfig { port: 3000, site_root: Some(PathBuf::from("/srv/site")) };
    assert_eq!(cfg.site_root_or("target/site"), PathBuf::from("/srv/site"));
    let cfg = HostConfig { port: 3000, site_root: None };
    assert_eq!(cfg.site_root_or("target/site"), PathBuf::from("target/site"));
}
