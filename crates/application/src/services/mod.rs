pub mod answer_normalizer;
pub mod signature_comparator;

pub use answer_normalizer::AnswerNormalizer;
pub use signature_comparator::SignatureComparator;
