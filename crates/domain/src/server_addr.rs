use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A DNS server under test. The host may be an IP literal or a hostname that
/// still needs resolving.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddr {
    host: Arc<str>,
    port: u16,
}

impl ServerAddr {
    pub fn new(host: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the socket address directly when the host is an IP literal.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.host
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, self.port))
    }
}

impl From<SocketAddr> for ServerAddr {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

fn parse_host_port(s: &str) -> Result<(&str, u16), String> {
    if let Some(rest) = s.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| format!("unterminated '[' in '{}'", s))?;
        let host = &rest[..end];
        let tail = &rest[end + 1..];
        if tail.is_empty() {
            return Ok((host, DEFAULT_DNS_PORT));
        }
        let port_str = tail
            .strip_prefix(':')
            .ok_or_else(|| format!("unexpected '{}' after ']' in '{}'", tail, s))?;
        let port = port_str
            .parse::<u16>()
            .map_err(|_| format!("invalid port '{}' in '{}'", port_str, s))?;
        return Ok((host, port));
    }

    // A bare IPv6 literal has several colons and no port.
    if s.parse::<std::net::Ipv6Addr>().is_ok() {
        return Ok((s, DEFAULT_DNS_PORT));
    }

    match s.rsplit_once(':') {
        Some((host, port_str)) => {
            let port = port_str
                .parse::<u16>()
                .map_err(|_| format!("invalid port '{}' in '{}'", port_str, s))?;
            Ok((host, port))
        }
        None => Ok((s, DEFAULT_DNS_PORT)),
    }
}

impl FromStr for ServerAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (host, port) =
            parse_host_port(trimmed).map_err(DomainError::InvalidServerAddress)?;

        if host.is_empty() {
            return Err(DomainError::InvalidServerAddress(format!(
                "missing host in '{}'",
                s
            )));
        }
        if port == 0 {
            return Err(DomainError::InvalidServerAddress(format!(
                "port 0 is not usable in '{}'",
                s
            )));
        }

        Ok(Self::new(host, port))
    }
}
