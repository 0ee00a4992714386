use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{resolve_all, DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use dns_parity_application::ports::DnsExchanger;
use dns_parity_domain::{Answer, DnsQuery, DomainError, ServerAddr};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument};

/// Plain DNS over UDP, with a single TCP re-send when the reply is
/// truncated.
///
/// Holds no per-query state, so one instance can serve every concurrent
/// exchange.
pub struct HickoryExchanger {
    query_timeout: Duration,
}

impl HickoryExchanger {
    pub fn new(query_timeout: Duration) -> Self {
        Self { query_timeout }
    }

    async fn resolve_server(&self, server: &ServerAddr) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let addrs = resolve_all(server.host(), server.port(), self.query_timeout).await?;
        debug!(server = %server, resolved = ?addrs, "Server hostname resolved");

        addrs
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Transport {
                server: server.to_string(),
                reason: "no addresses found".to_string(),
            })
    }

    async fn exchange_inner(
        &self,
        server: &ServerAddr,
        query: &DnsQuery,
    ) -> Result<Vec<Answer>, DomainError> {
        let (_, message_bytes) = MessageBuilder::build_query(&query.domain, &query.record_type)?;
        let addr = self.resolve_server(server).await?;

        let udp = UdpTransport::new(addr)
            .send(&message_bytes, self.query_timeout)
            .await?;
        debug!(server = %addr, protocol = udp.protocol_used, "Reply received");
        let mut response = ResponseParser::parse(&udp.bytes)?;

        if response.truncated {
            debug!(server = %addr, "Truncated UDP response, re-sending over TCP");
            let tcp = TcpTransport::new(addr)
                .send(&message_bytes, self.query_timeout)
                .await?;
            debug!(server = %addr, protocol = tcp.protocol_used, "Reply received");
            response = ResponseParser::parse(&tcp.bytes)?;
        }

        if response.is_server_error() {
            return Err(DomainError::ServerFailure {
                server: server.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            });
        }

        ResponseParser::answers(&response, query.record_type)
    }
}

#[async_trait]
impl DnsExchanger for HickoryExchanger {
    #[instrument(skip(self, server, query), fields(server = %server, query = %query))]
    async fn exchange(
        &self,
        server: &ServerAddr,
        query: &DnsQuery,
    ) -> Result<Vec<Answer>, DomainError> {
        tokio::time::timeout(self.query_timeout, self.exchange_inner(server, query))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
    }
}
