//! Intake service implementations

pub mod backend_client;

#[cfg(test)]
pub mod tests;

pub use backend_client::*;
