use dns_parity_application::ports::VerificationReporter;
use dns_parity_domain::{BatchReport, BatchRow, DnsQuery, DomainError, InconsistencyReport};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

/// Writes the operator-facing report, one line per query.
pub struct ConsoleReporter {
    out: Mutex<ConsoleState>,
}

struct ConsoleState {
    writer: Box<dyn Write + Send>,
    // A "Processing ..." line is waiting for its verdict.
    line_open: bool,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(ConsoleState {
                writer,
                line_open: false,
            }),
        }
    }

    /// Close a pending "Processing" line after a query failed.
    pub fn query_failed(&self, error: &DomainError) {
        self.write(|state| {
            if state.line_open {
                writeln!(state.writer, "Error")?;
                state.line_open = false;
            }
            writeln!(state.writer, "{}", error)
        });
    }

    fn write<F>(&self, f: F)
    where
        F: FnOnce(&mut ConsoleState) -> io::Result<()>,
    {
        let mut state = match self.out.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Err(e) = f(&mut state).and_then(|_| state.writer.flush()) {
            warn!(error = %e, "Failed to write report");
        }
    }
}

impl VerificationReporter for ConsoleReporter {
    fn row_skipped(&self, row: &BatchRow, _reason: &DomainError) {
        self.write(|state| writeln!(state.writer, "Row {} is invalid", row.line));
    }

    fn query_started(&self, query: &DnsQuery) {
        self.write(|state| {
            write!(
                state.writer,
                "Processing {} {}... ",
                query.record_type, query.domain
            )?;
            state.line_open = true;
            Ok(())
        });
    }

    fn query_consistent(&self, _query: &DnsQuery) {
        self.write(|state| {
            state.line_open = false;
            writeln!(state.writer, "OK")
        });
    }

    fn query_diverged(&self, report: &InconsistencyReport) {
        let divergence = &report.divergence;
        self.write(|state| {
            state.line_open = false;
            writeln!(state.writer, "Error")?;
            for result in [&divergence.reference, &divergence.divergent] {
                writeln!(state.writer, "Server {} returned:", result.server)?;
                writeln!(state.writer, "{}", result.signature)?;
            }
            Ok(())
        });
    }

    fn batch_completed(&self, _report: &BatchReport) {
        self.write(|state| writeln!(state.writer, "Done"));
    }
}
