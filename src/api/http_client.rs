//! Shared HTTP client construction policy for the catalog service clients.
//!
//! This module centralizes networking defaults so the address, layer, and
//! order clients stay consistent on timeout, user-agent, and compression.

use std::time::Duration;

use reqwest::Client;

use crate::user_agent;

use super::ApiError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Builds a service HTTP client using shared project policy.
///
/// `service` is used only for error messages, not in the User-Agent header.
///
/// # Errors
///
/// Returns [`ApiError::ClientBuild`] when client construction fails.
pub(crate) fn build_service_http_client(service: &'static str) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(user_agent::default_client_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| ApiError::ClientBuild {
            service,
            message: error.to_string(),
        })
}
