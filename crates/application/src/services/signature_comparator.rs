use dns_parity_domain::{ComparisonOutcome, Divergence, NormalizedAnswer, ServerResult};

pub struct SignatureComparator;

impl SignatureComparator {
    /// Sorted, newline-joined answers. An empty answer set yields "".
    pub fn build_signature(answers: &[NormalizedAnswer]) -> String {
        let mut sorted: Vec<&str> = answers.iter().map(NormalizedAnswer::as_str).collect();
        sorted.sort();
        sorted.join("\n")
    }

    /// Compare every result against the first one and stop at the first
    /// mismatch.
    pub fn compare(results: &[ServerResult]) -> ComparisonOutcome {
        let Some((reference, rest)) = results.split_first() else {
            return ComparisonOutcome::consistent();
        };

        rest.iter()
            .find(|result| result.signature != reference.signature)
            .map(|divergent| {
                ComparisonOutcome::divergent(Divergence {
                    reference: reference.clone(),
                    divergent: divergent.clone(),
                })
            })
            .unwrap_or_else(ComparisonOutcome::consistent)
    }
}
