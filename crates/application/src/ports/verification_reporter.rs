use dns_parity_domain::{BatchReport, BatchRow, DnsQuery, DomainError, InconsistencyReport};

/// Receives progress of a batch run. The console adapter turns these into
/// the operator-facing lines.
pub trait VerificationReporter: Send + Sync {
    fn row_skipped(&self, row: &BatchRow, reason: &DomainError);

    fn query_started(&self, query: &DnsQuery);

    fn query_consistent(&self, query: &DnsQuery);

    fn query_diverged(&self, report: &InconsistencyReport);

    fn batch_completed(&self, report: &BatchReport);
}
