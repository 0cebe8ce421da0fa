//! Shared wire contract for the course advisor client
//!
//! Contains the data shapes exchanged with the external scoring backend:
//! the recommendation request, the parse/recommend responses, and the
//! enums both sides must agree on. The backend computes all scores; these
//! types only carry them.

pub mod messages;
pub mod types;

pub use messages::*;
pub use types::*;
