use dns_parity_application::ports::VerificationReporter;
use dns_parity_domain::{BatchReport, BatchRow, DnsQuery, DomainError, InconsistencyReport};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Skipped(usize),
    Started(String),
    Consistent(String),
    Diverged(String),
    Completed(BatchReport),
}

/// Keeps every event in order for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl VerificationReporter for RecordingReporter {
    fn row_skipped(&self, row: &BatchRow, _reason: &DomainError) {
        self.push(ReportEvent::Skipped(row.line));
    }

    fn query_started(&self, query: &DnsQuery) {
        self.push(ReportEvent::Started(query.to_string()));
    }

    fn query_consistent(&self, query: &DnsQuery) {
        self.push(ReportEvent::Consistent(query.to_string()));
    }

    fn query_diverged(&self, report: &InconsistencyReport) {
        self.push(ReportEvent::Diverged(report.query.to_string()));
    }

    fn batch_completed(&self, report: &BatchReport) {
        self.push(ReportEvent::Completed(*report));
    }
}
