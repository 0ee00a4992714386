use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Servers to compare, as `host` or `host:port`. The first one is the
    /// reference every other answer is checked against.
    #[serde(default)]
    pub servers: Vec<String>,

    /// Per-exchange timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Upper bound on exchanges in flight for a single query.
    #[serde(default = "default_max_parallel_exchanges")]
    pub max_parallel_exchanges: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            servers: vec![],
            query_timeout: default_query_timeout(),
            max_parallel_exchanges: default_max_parallel_exchanges(),
        }
    }
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_max_parallel_exchanges() -> usize {
    8
}
