mod dns_exchanger;
mod verification_reporter;

pub use dns_exchanger::DnsExchanger;
pub use verification_reporter::VerificationReporter;
