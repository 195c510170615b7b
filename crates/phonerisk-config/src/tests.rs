//! Tests for service configuration.

use std::io::Write;

use super::*;

#[test]
fn test_defaults() {
    let config = ServiceConfig::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.banner);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [server]
        host = "127.0.0.1"
        port = 3000

        [service]
        name = "Risk API"
        description = "staging"

        [logging]
        filter = "phonerisk_server=debug"
        banner = false
    "#;

    let config = ServiceConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.service.name, "Risk API");
    assert_eq!(config.service.description, "staging");
    assert_eq!(config.logging.filter, "phonerisk_server=debug");
    assert!(!config.logging.banner);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ServiceConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, DEFAULT_HOST);
    assert_eq!(config.service, ServiceInfoConfig::default());

    let empty = ServiceConfig::from_toml_str("").unwrap();
    assert_eq!(empty, ServiceConfig::default());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        server:
          port: 4000
        logging:
          banner: false
    "#;

    let config = ServiceConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.host, DEFAULT_HOST);
    assert!(!config.logging.banner);
}

#[test]
fn test_invalid_toml() {
    let err = ServiceConfig::from_toml_str("[server]\nport = \"eighty\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = ServiceConfig::new()
        .with_host("127.0.0.1")
        .with_port(8081)
        .with_log_filter("warn");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.logging.filter, "warn");
}

#[test]
fn test_validate() {
    assert!(matches!(
        ServiceConfig::new().with_port(0).validate(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        ServiceConfig::new().with_host(" ").validate(),
        Err(ConfigError::Invalid(_))
    ));

    let mut unnamed = ServiceConfig::new();
    unnamed.service.name.clear();
    assert!(matches!(unnamed.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_bind_addr() {
    let addr = ServiceConfig::new()
        .with_host("127.0.0.1")
        .with_port(8082)
        .bind_addr()
        .unwrap();
    assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 8082)));
}

#[test]
fn test_load_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "[server]\nport = 7000").unwrap();
    assert_eq!(ServiceConfig::load(toml_file.path()).unwrap().server.port, 7000);

    let mut yaml_file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(yaml_file, "server:\n  port: 7001").unwrap();
    assert_eq!(ServiceConfig::load(yaml_file.path()).unwrap().server.port, 7001);
}

#[test]
fn test_load_rejects_invalid_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[server]\nport = 0").unwrap();
    assert!(matches!(
        ServiceConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let err = ServiceConfig::load("/nonexistent/phonerisk.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(
        ServiceConfig::load("/nonexistent/phonerisk.toml").unwrap_or_default(),
        ServiceConfig::default()
    );
}
