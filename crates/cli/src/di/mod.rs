mod verification;

pub use verification::Verification;
