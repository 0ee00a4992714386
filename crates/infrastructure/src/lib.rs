pub mod batch;
pub mod dns;
