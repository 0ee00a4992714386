use csv::{ReaderBuilder, StringRecord, Trim};
use dns_parity_domain::{BatchRow, DomainError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::iter::Enumerate;
use tracing::debug;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Reads `hostname,record_type` rows from a CSV source.
///
/// There is no header row. Fields are trimmed, blank lines are ignored,
/// lines starting with `#` are comments, and rows may have any number of
/// fields (validation happens later, per row). Each row is parsed on its
/// own so its line number is the physical line in the source.
pub struct CsvBatchReader {
    source: BufReader<Box<dyn Read + Send>>,
    fields: ReaderBuilder,
}

impl CsvBatchReader {
    pub fn open(path: &str) -> Result<Self, DomainError> {
        let source: Box<dyn Read + Send> = if path == STDIN_PATH {
            Box::new(io::stdin())
        } else {
            let file = File::open(path)
                .map_err(|e| DomainError::BatchRead(format!("cannot open {}: {}", path, e)))?;
            Box::new(file)
        };

        debug!(path = %path, "Batch source opened");
        Ok(Self::from_reader(source))
    }

    pub fn from_reader(source: Box<dyn Read + Send>) -> Self {
        let mut fields = ReaderBuilder::new();
        fields.has_headers(false).flexible(true).trim(Trim::All);

        Self {
            source: BufReader::new(source),
            fields,
        }
    }
}

impl IntoIterator for CsvBatchReader {
    type Item = Result<BatchRow, DomainError>;
    type IntoIter = BatchRows;

    fn into_iter(self) -> Self::IntoIter {
        BatchRows {
            lines: self.source.lines().enumerate(),
            fields: self.fields,
        }
    }
}

pub struct BatchRows {
    lines: Enumerate<Lines<BufReader<Box<dyn Read + Send>>>>,
    fields: ReaderBuilder,
}

impl BatchRows {
    fn parse_row(&self, line: usize, text: &str) -> Result<BatchRow, DomainError> {
        let mut record = StringRecord::new();
        self.fields
            .from_reader(text.as_bytes())
            .read_record(&mut record)
            .map_err(|e| DomainError::BatchRead(format!("line {}: {}", line, e)))?;

        Ok(BatchRow::new(
            line,
            record.iter().map(str::to_string).collect(),
        ))
    }
}

impl Iterator for BatchRows {
    type Item = Result<BatchRow, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            let line = index + 1;

            let raw = match raw {
                Ok(raw) => raw,
                Err(e) => {
                    return Some(Err(DomainError::BatchRead(format!(
                        "line {}: {}",
                        line, e
                    ))))
                }
            };

            let text = raw.trim_start_matches('\u{feff}').trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            return Some(self.parse_row(line, text));
        }
    }
}
