use async_trait::async_trait;
use dns_parity_domain::{Answer, DnsQuery, DomainError, ServerAddr};

/// One request/response exchange with a single DNS server.
///
/// Implementations return the answer section converted into [`Answer`]s.
/// NXDOMAIN and NODATA are an empty list, not an error. Every other failure
/// (unreachable server, timeout, SERVFAIL, undecodable reply) is an `Err`
/// and aborts the query it belongs to.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        server: &ServerAddr,
        query: &DnsQuery,
    ) -> Result<Vec<Answer>, DomainError>;
}
