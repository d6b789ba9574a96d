//! Address search against the Kartverket address API.
//!
//! Free-text queries return candidate addresses with a representation point
//! for map centering. Failures never block the search box: any transport or
//! parse error resolves to an empty hit list and a `warn` log line.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;

use super::ApiError;
use super::http_client::build_service_http_client;

const SERVICE: &str = "address search";

/// One address hit from the search API.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressHit {
    /// Full address text ("Storgata 1").
    #[serde(rename = "adressetekst", default)]
    pub text: String,
    /// Postal place, when the API reports one.
    #[serde(rename = "poststed", default)]
    pub postal_place: Option<String>,
    /// Representation point for centering the map on the hit.
    #[serde(rename = "representasjonspunkt")]
    pub point: AddressPoint,
}

/// Geographic representation point of an address.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddressPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
struct AddressResponse {
    #[serde(default)]
    adresser: Vec<AddressHit>,
}

/// Client for the free-text address-search API.
#[derive(Debug, Clone)]
pub struct AddressClient {
    client: Client,
    base_url: String,
    hit_cap: u32,
}

impl AddressClient {
    /// Creates a client against the configured address endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.address_base_url, config.search_hit_cap)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn with_base_url(base_url: impl Into<String>, hit_cap: u32) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_service_http_client(SERVICE)?,
            base_url: base_url.into(),
            hit_cap,
        })
    }

    /// Searches addresses by free text, capped at the configured hit count.
    ///
    /// Empty or whitespace-only queries short-circuit to no hits without a
    /// request. Any failure is logged and resolved to an empty list.
    pub async fn search(&self, query: &str) -> Vec<AddressHit> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        match self.fetch(trimmed).await {
            Ok(hits) => {
                debug!(query = trimmed, hits = hits.len(), "Address search completed");
                hits
            }
            Err(error) => {
                warn!(query = trimmed, error = %error, "Address search failed; returning no hits");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<AddressHit>, ApiError> {
        let url = format!(
            "{}/sok?sok={}&treffPerSide={}",
            self.base_url,
            urlencoding::encode(query),
            self.hit_cap
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::request(SERVICE, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                service: SERVICE,
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .json::<AddressResponse>()
            .await
            .map_err(|e| ApiError::format(SERVICE, &e))?;

        Ok(body.adresser)
    }
}
