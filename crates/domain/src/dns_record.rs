mod answer;
mod record_type;

pub use answer::{Answer, NormalizedAnswer};
pub use record_type::RecordType;
