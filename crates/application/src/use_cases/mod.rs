pub mod batch;
pub mod dns;

pub use batch::VerifyBatchUseCase;
pub use dns::ResolveAndCompareUseCase;
