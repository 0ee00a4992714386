use crate::ports::VerificationReporter;
use crate::use_cases::ResolveAndCompareUseCase;
use dns_parity_domain::{BatchReport, BatchRow, DomainError, InconsistencyReport};
use std::sync::Arc;
use tracing::{info, warn};

pub struct VerifyBatchUseCase {
    resolver: Arc<ResolveAndCompareUseCase>,
    reporter: Arc<dyn VerificationReporter>,
}

impl VerifyBatchUseCase {
    pub fn new(
        resolver: Arc<ResolveAndCompareUseCase>,
        reporter: Arc<dyn VerificationReporter>,
    ) -> Self {
        Self { resolver, reporter }
    }

    /// Check every row in order, stopping at the first divergence or error.
    ///
    /// Rows without a hostname and a record type are skipped. Everything else
    /// that goes wrong ends the run.
    pub async fn execute<I>(&self, rows: I) -> Result<BatchReport, DomainError>
    where
        I: IntoIterator<Item = Result<BatchRow, DomainError>>,
    {
        let mut report = BatchReport::default();

        for row in rows {
            let row = row?;

            let query = match row.to_query() {
                Ok(query) => query,
                Err(e @ DomainError::MalformedRow { .. }) => {
                    warn!(line = row.line, fields = row.fields.len(), "Skipping invalid row");
                    self.reporter.row_skipped(&row, &e);
                    report.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            self.reporter.query_started(&query);
            let outcome = self.resolver.execute(&query).await?;

            match outcome.first_divergence() {
                None => {
                    self.reporter.query_consistent(&query);
                    report.checked += 1;
                }
                Some(divergence) => {
                    let inconsistency = InconsistencyReport {
                        query,
                        divergence: divergence.clone(),
                    };
                    warn!(
                        query = %inconsistency.query,
                        reference = %divergence.reference.server,
                        divergent = %divergence.divergent.server,
                        "Servers disagree"
                    );
                    self.reporter.query_diverged(&inconsistency);
                    return Err(DomainError::Inconsistent(Box::new(inconsistency)));
                }
            }
        }

        info!(
            checked = report.checked,
            skipped = report.skipped,
            "Batch verified"
        );
        self.reporter.batch_completed(&report);
        Ok(report)
    }
}
