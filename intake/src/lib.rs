//! Intake client library for the course advisor workflow
//!
//! Walks a student through the transcript-upload intake flow (welcome →
//! upload → review → preferences → results) and consumes pre-computed
//! recommendations from the external scoring backend. All parsing and
//! scoring happens server-side; this crate owns state sequencing, the
//! backend boundary, and display-ordering rules.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod intake_impl;
pub mod services;
pub mod session;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::ClientConfig;
pub use error::{IntakeError, IntakeResult};
pub use intake_impl::Intake;
pub use services::HttpBackendClient;
pub use session::{Session, Stage};
pub use traits::BackendApi;
pub use types::TranscriptFile;
