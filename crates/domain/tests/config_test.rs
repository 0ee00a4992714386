use dns_parity_domain::{CliOverrides, Config, ConfigError, DnsConfig};

fn config_with_servers(servers: &[&str]) -> Config {
    let mut config = Config::default();
    config.dns.servers = servers.iter().map(|s| s.to_string()).collect();
    config
}

#[test]
fn test_dns_config_defaults() {
    let config = DnsConfig::default();

    assert!(config.servers.is_empty());
    assert_eq!(config.query_timeout, 2000);
    assert_eq!(config.max_parallel_exchanges, 8);
}

#[test]
fn test_logging_default_level() {
    assert_eq!(Config::default().logging.level, "info");
}

#[test]
fn test_from_toml_full() {
    let config = Config::from_toml(
        r#"
        [dns]
        servers = ["8.8.8.8", "1.1.1.1:53"]
        query_timeout = 500
        max_parallel_exchanges = 2

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.dns.servers, vec!["8.8.8.8", "1.1.1.1:53"]);
    assert_eq!(config.dns.query_timeout, 500);
    assert_eq!(config.dns.max_parallel_exchanges, 2);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_from_toml_partial_uses_defaults() {
    let config = Config::from_toml(
        r#"
        [dns]
        servers = ["9.9.9.9", "149.112.112.112"]
        "#,
    )
    .unwrap();

    assert_eq!(config.dns.query_timeout, 2000);
    assert_eq!(config.dns.max_parallel_exchanges, 8);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_from_toml_invalid() {
    let result = Config::from_toml("[dns]\nservers = 42");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_missing_file_is_an_error() {
    let result = Config::load(
        Some("/definitely/not/here/dns-parity.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_validate_requires_two_servers() {
    assert!(matches!(
        Config::default().validate(),
        Err(ConfigError::Validation(_))
    ));
    assert!(matches!(
        config_with_servers(&["8.8.8.8"]).validate(),
        Err(ConfigError::Validation(_))
    ));
    assert!(config_with_servers(&["8.8.8.8", "1.1.1.1"]).validate().is_ok());
}

#[test]
fn test_validate_rejects_unparseable_server() {
    let config = config_with_servers(&["8.8.8.8", "1.1.1.1:dns"]);
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_limits() {
    let mut config = config_with_servers(&["8.8.8.8", "1.1.1.1"]);
    config.dns.query_timeout = 0;
    assert!(config.validate().is_err());

    let mut config = config_with_servers(&["8.8.8.8", "1.1.1.1"]);
    config.dns.max_parallel_exchanges = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_server_addrs_append_default_port() {
    let config = config_with_servers(&["8.8.8.8", "1.1.1.1:5353"]);
    let servers = config.server_addrs().unwrap();

    assert_eq!(servers[0].to_string(), "8.8.8.8:53");
    assert_eq!(servers[1].to_string(), "1.1.1.1:5353");
}

#[test]
fn test_cli_overrides_replace_servers_and_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dns-parity.toml");
    std::fs::write(
        &path,
        "[dns]\nservers = [\"8.8.8.8\", \"1.1.1.1\"]\nquery_timeout = 100\n",
    )
    .unwrap();

    let config = Config::load(
        path.to_str(),
        CliOverrides {
            servers: vec!["9.9.9.9".into(), "149.112.112.112".into()],
            query_timeout: Some(750),
            max_parallel_exchanges: Some(4),
            sequential: false,
            log_level: Some("warn".into()),
        },
    )
    .unwrap();

    assert_eq!(config.dns.servers, vec!["9.9.9.9", "149.112.112.112"]);
    assert_eq!(config.dns.query_timeout, 750);
    assert_eq!(config.dns.max_parallel_exchanges, 4);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_cli_sequential_forces_single_exchange() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dns-parity.toml");
    std::fs::write(&path, "[dns]\nmax_parallel_exchanges = 16\n").unwrap();

    let config = Config::load(
        path.to_str(),
        CliOverrides {
            max_parallel_exchanges: Some(32),
            sequential: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.dns.max_parallel_exchanges, 1);
}

#[test]
fn test_empty_cli_servers_keep_file_servers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dns-parity.toml");
    std::fs::write(&path, "[dns]\nservers = [\"8.8.8.8\", \"1.1.1.1\"]\n").unwrap();

    let config = Config::load(path.to_str(), CliOverrides::default()).unwrap();
    assert_eq!(config.dns.servers.len(), 2);
}
