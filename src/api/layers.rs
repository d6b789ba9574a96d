//! WMS layer introspection.
//!
//! The introspection service takes a WMS endpoint URL and answers with the
//! selectable layers it offers, saving the client from parsing WMS
//! capabilities documents itself. A failed introspection yields an empty
//! layer list (logged), so adding a tracked source never hard-fails.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::registry::{LayerProbe, WmsLayer};

use super::ApiError;
use super::http_client::build_service_http_client;

const SERVICE: &str = "layer introspection";

#[derive(Debug, Deserialize)]
struct LayersResponse {
    #[serde(default)]
    available_layers: Vec<WmsLayer>,
}

/// Client for the WMS layer-introspection service.
#[derive(Debug, Clone)]
pub struct LayersClient {
    client: Client,
    base_url: String,
}

impl LayersClient {
    /// Creates a client against the configured introspection endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.layers_base_url)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_service_http_client(SERVICE)?,
            base_url: base_url.into(),
        })
    }

    /// Returns the selectable layers of a WMS endpoint, keyed by its full
    /// URL (percent-encoded into the request). Failures resolve to an empty
    /// list, logged at `warn`.
    pub async fn available_layers(&self, endpoint_url: &str) -> Vec<WmsLayer> {
        match self.fetch(endpoint_url).await {
            Ok(layers) => {
                debug!(endpoint = endpoint_url, layers = layers.len(), "Introspected WMS endpoint");
                layers
            }
            Err(error) => {
                warn!(
                    endpoint = endpoint_url,
                    error = %error,
                    "Layer introspection failed; treating endpoint as layerless"
                );
                Vec::new()
            }
        }
    }

    async fn fetch(&self, endpoint_url: &str) -> Result<Vec<WmsLayer>, ApiError> {
        let url = format!(
            "{}/layers?url={}",
            self.base_url,
            urlencoding::encode(endpoint_url)
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
            .json::<LayersResponse>()
            .await
            .map_err(|e| ApiError::format(SERVICE, &e))?;

        Ok(body.available_layers)
    }
}

#[async_trait]
impl LayerProbe for LayersClient {
    async fn available_layers(&self, endpoint_url: &str) -> Vec<WmsLayer> {
        LayersClient::available_layers(self, endpoint_url).await
    }
}
