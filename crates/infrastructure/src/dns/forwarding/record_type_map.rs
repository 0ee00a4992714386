//! Mapping between `dns_parity_domain::RecordType` and `hickory_proto::rr::RecordType`

use dns_parity_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SRV => HickoryRecordType::SRV,
        }
    }

    /// Convert hickory RecordType → domain RecordType (for answer records)
    ///
    /// Returns `None` for kinds the verifier does not compare.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SRV => Some(RecordType::SRV),
            _ => None,
        }
    }
}
