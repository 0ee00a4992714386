//! dns-parity domain layer
pub mod batch;
pub mod comparison;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod server_addr;

pub use batch::{BatchReport, BatchRow};
pub use comparison::{ComparisonOutcome, Divergence, InconsistencyReport, ServerResult};
pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{Answer, NormalizedAnswer, RecordType};
pub use errors::DomainError;
pub use server_addr::{ServerAddr, DEFAULT_DNS_PORT};
