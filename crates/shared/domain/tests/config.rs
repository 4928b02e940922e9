use eshare_domain::config::{ClientConfig, LoggingConfig, ShellConfig};
use eshare_domain::constants::{DEFAULT_BASE_URL, DEFAULT_TOKEN_FILE, ECAS_COMMUNITY_ID};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_point_at_the_training_instance() {
    let client = ClientConfig::default();
    assert_eq!(client.base_url, DEFAULT_BASE_URL);
    assert_eq!(client.token_file, PathBuf::from(DEFAULT_TOKEN_FILE));
    assert_eq!(client.community_id, ECAS_COMMUNITY_ID);
    assert_eq!(client.page_size, 10);
    assert!(client.timeout_seconds.is_none());
    assert!(client.user_agent.starts_with("eshare/"));

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert!(logging.console);
    assert!(logging.path.is_none());
}

#[test]
fn shell_config_deserializes_partial_json() {
    let raw = json!({
        "client": { "base_url": "https://b2share.eudat.eu", "timeout_seconds": 30 },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: ShellConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.client.base_url, "https://b2share.eudat.eu");
    assert_eq!(cfg.client.timeout_seconds, Some(30));
    assert_eq!(cfg.client.community_id, ECAS_COMMUNITY_ID);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn shell_config_deserializes_toml() {
    let raw = r#"
        [client]
        token_file = "/tmp/token.txt"
        page_size = 50

        [logging]
        path = "/tmp/eshare-logs"
    "#;

    let cfg: ShellConfig = toml::from_str(raw).expect("toml deserialize");
    assert_eq!(cfg.client.token_file, PathBuf::from("/tmp/token.txt"));
    assert_eq!(cfg.client.page_size, 50);
    assert_eq!(cfg.client.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.logging.path, Some(PathBuf::from("/tmp/eshare-logs")));
}
