use crate::InconsistencyReport;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("At least 2 servers are required, {configured} configured")]
    NotEnoughServers { configured: usize },

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Row {line} is invalid: expected hostname and record type, got {fields} field(s)")]
    MalformedRow { line: usize, fields: usize },

    #[error("Invalid DNS record type {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Error querying server {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Server {server} answered {rcode}")]
    ServerFailure { server: String, rcode: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid DNS record answer: expected {expected}, got {found}")]
    UnexpectedRecordKind { expected: String, found: String },

    #[error(
        "Servers disagree on {}: {} vs {}",
        .0.query,
        .0.divergence.reference.server,
        .0.divergence.divergent.server
    )]
    Inconsistent(Box<InconsistencyReport>),

    #[error("Failed to read batch: {0}")]
    BatchRead(String),
}

impl DomainError {
    /// Failures of the exchange itself rather than of the input.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. }
                | DomainError::TransportTimeout { .. }
                | DomainError::ServerFailure { .. }
                | DomainError::InvalidDnsResponse(_)
                | DomainError::UnexpectedRecordKind { .. }
        )
    }

    /// Problems with configuration or the batch file.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::NotEnoughServers { .. }
                | DomainError::InvalidServerAddress(_)
                | DomainError::MalformedRow { .. }
                | DomainError::UnsupportedRecordType(_)
                | DomainError::InvalidDomainName(_)
                | DomainError::BatchRead(_)
        )
    }
}
