//! Client configuration
//!
//! The backend base URL and request timeout are injected into the HTTP
//! client rather than read from a module constant, so tests and
//! deployments can point the client anywhere.

use std::time::Duration;

use crate::error::{IntakeError, IntakeResult};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables honored by `from_env`
pub const API_URL_ENV: &str = "ADVISOR_API_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "ADVISOR_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the scoring backend, without a trailing path
    pub api_base_url: String,
    /// Upper bound on each parse/recommend request; an unresponsive
    /// backend fails the request instead of loading forever
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, request_timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout,
        }
    }

    /// Build from the environment (with `.env` support), falling back to
    /// the defaults when a variable is unset
    pub fn from_env() -> IntakeResult<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = match std::env::var(REQUEST_TIMEOUT_ENV) {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| IntakeError::Config {
                    message: format!("invalid {REQUEST_TIMEOUT_ENV}: {raw}"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}
