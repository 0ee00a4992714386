pub mod resolve_and_compare;

pub use resolve_and_compare::ResolveAndCompareUseCase;
