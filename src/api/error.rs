//! Error types for the catalog HTTP clients.

use thiserror::Error;

/// Errors that can occur when talking to the catalog's external services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client construction failed.
    #[error("HTTP client construction failed for {service}: {message}")]
    ClientBuild {
        /// Which service client was being built.
        service: &'static str,
        /// Builder error text.
        message: String,
    },

    /// The request could not be sent or the transport failed mid-flight.
    #[error("request to {service} failed: {message}")]
    Request {
        /// Which service was called.
        service: &'static str,
        /// Transport error text.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected {service} response format: {message}")]
    Format {
        /// Which service answered.
        service: &'static str,
        /// Parse error text.
        message: String,
    },

    /// The upstream service answered with a non-success HTTP status.
    ///
    /// The upstream status is preserved so callers can report it verbatim.
    #[error("{service} returned HTTP {status}: {message}")]
    Upstream {
        /// Which service answered.
        service: &'static str,
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error body (may be empty).
        message: String,
    },
}

impl ApiError {
    /// Creates a `Request` error from a transport failure.
    #[must_use]
    pub fn request(service: &'static str, error: &reqwest::Error) -> Self {
        Self::Request {
            service,
            message: error.to_string(),
        }
    }

    /// Creates a `Format` error from a body-decoding failure.
    #[must_use]
    pub fn format(service: &'static str, error: &reqwest::Error) -> Self {
        Self::Format {
            service,
            message: error.to_string(),
        }
    }

    /// Returns the upstream HTTP status, when this is an upstream failure.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::ClientBuild { .. } | Self::Request { .. } | Self::Format { .. } => None,
        }
    }
}
