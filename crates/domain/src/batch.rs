use crate::{DnsQuery, DomainError, RecordType};

/// A raw row of the input batch, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    /// 1-based line number in the source.
    pub line: usize,
    pub fields: Vec<String>,
}

impl BatchRow {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Rows need a hostname and a record type; extra columns are ignored.
    pub fn to_query(&self) -> Result<DnsQuery, DomainError> {
        let (hostname, record_type) = match self.fields.as_slice() {
            [hostname, record_type, ..] => (hostname.trim(), record_type),
            _ => {
                return Err(DomainError::MalformedRow {
                    line: self.line,
                    fields: self.fields.len(),
                })
            }
        };

        if hostname.is_empty() {
            return Err(DomainError::MalformedRow {
                line: self.line,
                fields: self.fields.len(),
            });
        }

        let record_type: RecordType = record_type.parse()?;
        Ok(DnsQuery::new(hostname, record_type))
    }
}

/// Totals for a batch that ran to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub checked: usize,
    pub skipped: usize,
}
