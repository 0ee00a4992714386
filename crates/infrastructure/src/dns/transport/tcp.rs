//! TCP transport (RFC 1035 §4.2.2): every message is prefixed with its
//! length as a big-endian u16. One connection per query.

use super::{validate_response_id, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_parity_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn transport_error(&self, reason: String) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| self.transport_error(format!("TCP connect failed: {}", e)))?;

        stream
            .set_nodelay(true)
            .map_err(|e| self.transport_error(format!("failed to set TCP_NODELAY: {}", e)))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        let response_bytes = tokio::time::timeout(timeout, async {
            send_with_length_prefix(&mut stream, message_bytes).await?;
            debug!(
                server = %self.server_addr,
                message_len = message_bytes.len(),
                "TCP query sent"
            );
            read_with_length_prefix(&mut stream).await
        })
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        })?
        .map_err(|e| match e {
            DomainError::Transport { reason, .. } => self.transport_error(reason),
            other => other,
        })?;

        validate_response_id(message_bytes, &response_bytes, self.server_addr)?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::InvalidDnsResponse(format!(
            "Query too large for TCP framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| stream_error(format!("failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| stream_error(format!("failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| stream_error(format!("failed to flush stream: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| stream_error(format!("failed to read response length: {}", e)))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response too large: {} bytes (max {})",
            response_len, MAX_TCP_MESSAGE_SIZE
        )));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| stream_error(format!("failed to read response body: {}", e)))?;

    Ok(response)
}

// Server is filled in by the transport that owns the stream.
fn stream_error(reason: String) -> DomainError {
    DomainError::Transport {
        server: String::new(),
        reason,
    }
}
