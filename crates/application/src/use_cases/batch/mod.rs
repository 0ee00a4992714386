pub mod verify_batch;

pub use verify_batch::VerifyBatchUseCase;
