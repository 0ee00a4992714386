use super::record_type_map::RecordTypeMapper;
use dns_parity_domain::{Answer, DomainError, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    pub message: Message,
}

impl DnsResponse {
    /// Anything other than NOERROR or NXDOMAIN means the server could not
    /// give an authoritative view of the name.
    pub fn is_server_error(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response = DnsResponse {
            rcode: message.response_code(),
            truncated: message.truncated(),
            message,
        };

        debug!(
            rcode = ?response.rcode,
            answers = response.message.answers().len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    /// Convert the answer section into domain answers, whatever the rcode.
    ///
    /// An NXDOMAIN reply may still carry the CNAME chain that led to the
    /// missing name, and those records take part in the comparison. Records
    /// of a kind the verifier does not compare fail with
    /// `UnexpectedRecordKind`.
    pub fn answers(
        response: &DnsResponse,
        query_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError> {
        response
            .message
            .answers()
            .iter()
            .map(|record| Self::to_answer(record, query_type))
            .collect()
    }

    pub fn to_answer(record: &Record, query_type: RecordType) -> Result<Answer, DomainError> {
        let answer = match record.data() {
            RData::A(a) => Answer::A(a.0),
            RData::MX(mx) => Answer::Mx {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::NS(ns) => Answer::Ns(ns.to_utf8()),
            RData::CNAME(canonical) => Answer::Cname(canonical.to_utf8()),
            RData::SRV(srv) => Answer::Srv {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: srv.target().to_utf8(),
            },
            RData::TXT(txt) => Answer::Txt(
                txt.txt_data()
                    .iter()
                    .map(|chunk| Self::escape_character_string(chunk))
                    .collect(),
            ),
            _ => {
                let found = record.record_type();
                if let Some(kind) = RecordTypeMapper::from_hickory(found) {
                    // Known kind with empty or undecodable RDATA.
                    return Err(DomainError::InvalidDnsResponse(format!(
                        "{} record for {} has no usable data",
                        kind,
                        record.name()
                    )));
                }
                return Err(DomainError::UnexpectedRecordKind {
                    expected: query_type.to_string(),
                    found: found.to_string(),
                });
            }
        };

        Ok(answer)
    }

    /// Render a character-string in master-file form: `"` and `\` are
    /// backslash-escaped, bytes outside printable ASCII become `\DDD`.
    pub fn escape_character_string(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        for &b in bytes {
            match b {
                b'"' | b'\\' => {
                    out.push('\\');
                    out.push(b as char);
                }
                0x20..=0x7e => out.push(b as char),
                _ => out.push_str(&format!("\\{:03}", b)),
            }
        }
        out
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
