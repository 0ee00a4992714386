use super::RecordType;
use std::fmt;
use std::net::Ipv4Addr;

/// One resource record from the answer section of a response.
///
/// Names are kept exactly as they were rendered from the wire, including the
/// trailing root dot, so that two servers returning the same data produce the
/// same strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    A(Ipv4Addr),
    Mx {
        preference: u16,
        exchange: String,
    },
    Ns(String),
    Cname(String),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    /// A single TXT record; one record may carry several character-strings.
    Txt(Vec<String>),
}

impl Answer {
    pub fn record_type(&self) -> RecordType {
        match self {
            Answer::A(_) => RecordType::A,
            Answer::Mx { .. } => RecordType::MX,
            Answer::Ns(_) => RecordType::NS,
            Answer::Cname(_) => RecordType::CNAME,
            Answer::Srv { .. } => RecordType::SRV,
            Answer::Txt(_) => RecordType::TXT,
        }
    }
}

/// Canonical, comparable form of an [`Answer`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedAnswer(String);

impl NormalizedAnswer {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
