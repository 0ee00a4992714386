use dns_parity_domain::{Answer, DomainError, NormalizedAnswer, RecordType};

/// Renders answers into a canonical string so that equal data from two
/// servers compares equal regardless of wire ordering.
pub struct AnswerNormalizer;

impl AnswerNormalizer {
    pub fn normalize(answer: &Answer) -> NormalizedAnswer {
        let canonical = match answer {
            Answer::A(address) => address.to_string(),
            Answer::Mx {
                preference,
                exchange,
            } => format!("{preference},{exchange}"),
            Answer::Ns(name) | Answer::Cname(name) => name.clone(),
            Answer::Srv {
                priority,
                weight,
                port,
                target,
            } => format!("{port},{priority},{weight},{target}"),
            Answer::Txt(strings) => {
                let mut strings = strings.clone();
                strings.sort();
                strings.join("\n")
            }
        };

        NormalizedAnswer::new(canonical)
    }

    /// Normalize an answer received for a query of `query_type`.
    ///
    /// CNAME records are accepted for any query type; any other kind that
    /// differs from the question fails with `UnexpectedRecordKind`.
    pub fn normalize_for(
        query_type: RecordType,
        answer: &Answer,
    ) -> Result<NormalizedAnswer, DomainError> {
        let found = answer.record_type();
        if !found.is_compatible_with(query_type) {
            return Err(DomainError::UnexpectedRecordKind {
                expected: query_type.to_string(),
                found: found.to_string(),
            });
        }

        Ok(Self::normalize(answer))
    }
}
