pub mod resolver;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dns_parity_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use resolver::resolve_all;
pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Reject responses whose header ID does not echo the query's.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message from {} too short to carry an ID",
            server
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS ID mismatch from {}: sent {:#06x}, received {:#06x}",
            server, query_id, response_id
        )));
    }

    Ok(())
}
