use clap::Parser;
use dns_parity_domain::{CliOverrides, DomainError};
use dns_parity_infrastructure::batch::CsvBatchReader;
use report::ConsoleReporter;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod di;
mod report;

const EXIT_INCONSISTENT: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;
const EXIT_TRANSPORT_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "dns-parity")]
#[command(version)]
#[command(about = "Check that several DNS servers return the same answers for a batch of queries")]
struct Cli {
    /// CSV file of `hostname,record_type` rows (`-` reads standard input)
    #[arg(value_name = "CSV")]
    batch: String,

    /// Servers to compare, as host or host:port (overrides the config file)
    #[arg(value_name = "SERVER")]
    servers: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-exchange timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Maximum concurrent exchanges per query
    #[arg(long, value_name = "N")]
    max_parallel: Option<usize>,

    /// Query servers one at a time
    #[arg(long)]
    sequential: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        servers: cli.servers.clone(),
        query_timeout: cli.timeout,
        max_parallel_exchanges: cli.max_parallel,
        sequential: cli.sequential,
        log_level: cli.log_level.clone(),
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    bootstrap::init_logging(&config);

    info!("Starting dns-parity v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(&config, cli.config.as_deref());

    let reporter = Arc::new(ConsoleReporter::stdout());

    match run(&cli.batch, &config, Arc::clone(&reporter)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, DomainError::Inconsistent(_)) {
                reporter.query_failed(&e);
            }
            error!(error = %e, "Verification failed");
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(
    batch_path: &str,
    config: &dns_parity_domain::Config,
    reporter: Arc<ConsoleReporter>,
) -> Result<(), DomainError> {
    let verification = di::Verification::new(config, reporter)?;
    let rows = CsvBatchReader::open(batch_path)?;

    let report = verification.verify_batch.execute(rows).await?;
    info!(
        checked = report.checked,
        skipped = report.skipped,
        "All servers agree"
    );
    Ok(())
}

fn exit_code(error: &DomainError) -> u8 {
    match error {
        DomainError::Inconsistent(_) => EXIT_INCONSISTENT,
        e if e.is_transport_error() => EXIT_TRANSPORT_ERROR,
        _ => EXIT_INPUT_ERROR,
    }
}
