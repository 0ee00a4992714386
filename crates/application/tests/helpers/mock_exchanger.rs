use async_trait::async_trait;
use dns_parity_application::ports::DnsExchanger;
use dns_parity_domain::{Answer, DnsQuery, DomainError, ServerAddr};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

type Key = (String, String);

/// Answers per (server, domain), with optional per-server latency.
#[derive(Clone, Default)]
pub struct MockDnsExchanger {
    responses: Arc<RwLock<HashMap<Key, Vec<Answer>>>>,
    errors: Arc<RwLock<HashMap<Key, DomainError>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_answers(&self, server: &str, domain: &str, answers: Vec<Answer>) {
        self.responses
            .write()
            .await
            .insert(key(server, domain), answers);
    }

    pub async fn set_error(&self, server: &str, domain: &str, error: DomainError) {
        self.errors.write().await.insert(key(server, domain), error);
    }

    pub async fn set_delay(&self, server: &str, delay: Duration) {
        self.delays.write().await.insert(canonical(server), delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        server: &ServerAddr,
        query: &DnsQuery,
    ) -> Result<Vec<Answer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.read().await.get(&server.to_string()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let key = (server.to_string(), query.domain.to_string());
        let result = if let Some(err) = self.errors.read().await.get(&key).cloned() {
            Err(err)
        } else {
            Ok(self
                .responses
                .read()
                .await
                .get(&key)
                .cloned()
                .unwrap_or_default())
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

fn canonical(server: &str) -> String {
    server.parse::<ServerAddr>().unwrap().to_string()
}

fn key(server: &str, domain: &str) -> Key {
    (canonical(server), domain.to_string())
}
