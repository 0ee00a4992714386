use crate::ports::DnsExchanger;
use crate::services::{AnswerNormalizer, SignatureComparator};
use dns_parity_domain::{ComparisonOutcome, DnsQuery, DomainError, ServerAddr, ServerResult};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, instrument, warn};

/// Asks every configured server the same question and compares the answers.
///
/// Exchanges run as separate tasks, bounded by a semaphore. Results are put
/// back into their server's slot so the first configured server is always
/// the reference.
pub struct ResolveAndCompareUseCase {
    exchanger: Arc<dyn DnsExchanger>,
    servers: Arc<[ServerAddr]>,
    permits: Arc<Semaphore>,
}

impl ResolveAndCompareUseCase {
    pub fn new(
        exchanger: Arc<dyn DnsExchanger>,
        servers: Vec<ServerAddr>,
        max_parallel_exchanges: usize,
    ) -> Result<Self, DomainError> {
        ensure_enough_servers(&servers)?;

        Ok(Self {
            exchanger,
            servers: servers.into(),
            permits: Arc::new(Semaphore::new(max_parallel_exchanges.max(1))),
        })
    }

    pub fn servers(&self) -> &[ServerAddr] {
        &self.servers
    }

    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn execute(&self, query: &DnsQuery) -> Result<ComparisonOutcome, DomainError> {
        ensure_enough_servers(&self.servers)?;

        let results = self.collect_results(query).await?;
        let outcome = SignatureComparator::compare(&results);

        debug!(
            servers = results.len(),
            consistent = outcome.is_consistent(),
            "Compared answers"
        );
        Ok(outcome)
    }

    async fn collect_results(&self, query: &DnsQuery) -> Result<Vec<ServerResult>, DomainError> {
        let mut abort_handles = Vec::with_capacity(self.servers.len());
        let mut futs = FuturesUnordered::new();

        for (slot, server) in self.servers.iter().cloned().enumerate() {
            let exchanger = Arc::clone(&self.exchanger);
            let permits = Arc::clone(&self.permits);
            let query = query.clone();

            let handle = tokio::spawn(async move {
                let _permit = permits.acquire_owned().await.map_err(|e| {
                    DomainError::Transport {
                        server: server.to_string(),
                        reason: e.to_string(),
                    }
                })?;

                let result = exchange_one(exchanger.as_ref(), server, &query).await?;
                Ok::<_, DomainError>((slot, result))
            });
            abort_handles.push(handle.abort_handle());
            futs.push(handle);
        }

        let mut slots: Vec<Option<ServerResult>> = vec![None; self.servers.len()];
        let mut failure = None;

        while let Some(joined) = futs.next().await {
            match joined {
                Ok(Ok((slot, result))) => slots[slot] = Some(result),
                Ok(Err(e)) => {
                    debug!(error = %e, "Exchange failed, aborting remaining servers");
                    failure = Some(e);
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Exchange task panicked");
                    failure = Some(DomainError::Transport {
                        server: "exchange task".to_string(),
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }

        if let Some(e) = failure {
            for handle in &abort_handles {
                handle.abort();
            }
            return Err(e);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

async fn exchange_one(
    exchanger: &dyn DnsExchanger,
    server: ServerAddr,
    query: &DnsQuery,
) -> Result<ServerResult, DomainError> {
    let answers = exchanger.exchange(&server, query).await?;

    let normalized = answers
        .iter()
        .map(|answer| AnswerNormalizer::normalize_for(query.record_type, answer))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(server = %server, answers = normalized.len(), "Server answered");
    Ok(ServerResult::new(
        server,
        SignatureComparator::build_signature(&normalized),
    ))
}

fn ensure_enough_servers(servers: &[ServerAddr]) -> Result<(), DomainError> {
    if servers.len() < 2 {
        return Err(DomainError::NotEnoughServers {
            configured: servers.len(),
        });
    }
    Ok(())
}
