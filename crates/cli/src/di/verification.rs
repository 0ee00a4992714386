use dns_parity_application::ports::VerificationReporter;
use dns_parity_application::use_cases::{ResolveAndCompareUseCase, VerifyBatchUseCase};
use dns_parity_domain::{Config, DomainError};
use dns_parity_infrastructure::dns::HickoryExchanger;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Verification {
    pub verify_batch: Arc<VerifyBatchUseCase>,
}

impl Verification {
    pub fn new(
        config: &Config,
        reporter: Arc<dyn VerificationReporter>,
    ) -> Result<Self, DomainError> {
        let servers = config.server_addrs()?;
        let exchanger = Arc::new(HickoryExchanger::new(Duration::from_millis(
            config.dns.query_timeout,
        )));

        let resolver = Arc::new(ResolveAndCompareUseCase::new(
            exchanger,
            servers,
            config.dns.max_parallel_exchanges,
        )?);

        info!(
            servers = ?resolver
                .servers()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            "Comparing servers"
        );

        Ok(Self {
            verify_batch: Arc::new(VerifyBatchUseCase::new(resolver, reporter)),
        })
    }
}
