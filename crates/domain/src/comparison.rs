use crate::{DnsQuery, ServerAddr};

/// The canonical answer signature one server produced for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResult {
    pub server: ServerAddr,
    pub signature: String,
}

impl ServerResult {
    pub fn new(server: ServerAddr, signature: impl Into<String>) -> Self {
        Self {
            server,
            signature: signature.into(),
        }
    }
}

/// A reference result paired with a result that disagrees with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub reference: ServerResult,
    pub divergent: ServerResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonOutcome {
    pub divergences: Vec<Divergence>,
}

impl ComparisonOutcome {
    pub fn consistent() -> Self {
        Self::default()
    }

    pub fn divergent(divergence: Divergence) -> Self {
        Self {
            divergences: vec![divergence],
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.divergences.is_empty()
    }

    pub fn first_divergence(&self) -> Option<&Divergence> {
        self.divergences.first()
    }
}

/// Everything needed to explain a failed query to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistencyReport {
    pub query: DnsQuery,
    pub divergence: Divergence,
}
