use dns_parity_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    Ok(config)
}

/// Summarise the effective configuration. Call once logging is initialised.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        servers = config.dns.servers.len(),
        query_timeout_ms = config.dns.query_timeout,
        max_parallel = config.dns.max_parallel_exchanges,
        "Configuration loaded"
    );
}
