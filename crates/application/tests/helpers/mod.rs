#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_exchanger;
mod mock_reporter;

pub use mock_exchanger::*;
pub use mock_reporter::*;

use dns_parity_domain::{BatchRow, DomainError, ServerAddr};

pub fn servers(addrs: &[&str]) -> Vec<ServerAddr> {
    addrs.iter().map(|a| a.parse().unwrap()).collect()
}

pub fn rows(lines: &[&[&str]]) -> Vec<Result<BatchRow, DomainError>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, fields)| {
            Ok(BatchRow::new(
                i + 1,
                fields.iter().map(|f| f.to_string()).collect(),
            ))
        })
        .collect()
}
