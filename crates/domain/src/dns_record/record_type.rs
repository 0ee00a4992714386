use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record types the verifier knows how to query and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    A,
    MX,
    NS,
    TXT,
    CNAME,
    SRV,
}

impl RecordType {
    pub const ALL: [RecordType; 6] = [
        RecordType::A,
        RecordType::MX,
        RecordType::NS,
        RecordType::TXT,
        RecordType::CNAME,
        RecordType::SRV,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::CNAME => "CNAME",
            RecordType::SRV => "SRV",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::SRV => 33,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            33 => Some(RecordType::SRV),
            _ => None,
        }
    }

    /// Answers of this type may legitimately appear in the answer section
    /// of a query for `query_type`. Alias records can front any type.
    pub fn is_compatible_with(&self, query_type: RecordType) -> bool {
        *self == query_type || *self == RecordType::CNAME
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "CNAME" => Ok(RecordType::CNAME),
            "SRV" => Ok(RecordType::SRV),
            _ => Err(DomainError::UnsupportedRecordType(s.to_string())),
        }
    }
}
