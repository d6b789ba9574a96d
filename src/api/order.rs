//! Dataset download ordering.
//!
//! Orders are posted to the Geonorge ordering API with the camelCase body it
//! expects and fixed headers identifying an allowed origin. Unlike the soft
//! clients in this module, a rejected order is a hard, structured error that
//! preserves the upstream HTTP status for the caller.

use reqwest::Client;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::ClientConfig;

use super::ApiError;
use super::http_client::build_service_http_client;

const SERVICE: &str = "order";

/// Origin/referrer the ordering API accepts requests from.
const ALLOWED_ORIGIN: &str = "https://norgeskart.no";

/// A download-order request body (camelCase on the wire).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub email: String,
    pub usage_group: String,
    pub software_client: String,
    pub software_client_version: String,
    pub order_lines: Vec<OrderLine>,
}

/// One dataset within an order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub metadata_uuid: String,
    pub areas: Vec<OrderArea>,
    pub projections: Vec<OrderProjection>,
    pub formats: Vec<OrderFormat>,
    pub usage_purpose: String,
}

/// Area selection of an order line.
#[derive(Debug, Clone, Serialize)]
pub struct OrderArea {
    pub code: String,
    pub name: String,
    /// Area kind; serialized as `type`, the field name the API uses.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Projection selection of an order line.
#[derive(Debug, Clone, Serialize)]
pub struct OrderProjection {
    pub code: String,
    pub name: String,
    pub codespace: String,
}

/// Format selection of an order line.
#[derive(Debug, Clone, Serialize)]
pub struct OrderFormat {
    pub name: String,
}

/// Receipt returned for an accepted order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    #[serde(default)]
    pub reference_number: String,
    #[serde(default)]
    pub files: Vec<OrderFile>,
}

/// A downloadable file listed in an order receipt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub download_url: String,
}

impl OrderRequest {
    /// Builds a single-line order carrying the configured client
    /// identification.
    #[must_use]
    pub fn single(config: &ClientConfig, email: impl Into<String>, line: OrderLine) -> Self {
        Self {
            email: email.into(),
            usage_group: config.usage_group.clone(),
            software_client: config.software_client.clone(),
            software_client_version: config.software_client_version.clone(),
            order_lines: vec![line],
        }
    }
}

/// Client for the dataset-ordering API.
#[derive(Debug, Clone)]
pub struct OrderClient {
    client: Client,
    base_url: String,
}

impl OrderClient {
    /// Creates a client against the configured ordering endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.order_base_url)
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

    /// Submits a download order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Upstream`] with the upstream status and body when
    /// the ordering API rejects the order, [`ApiError::Request`] on
    /// transport failure, and [`ApiError::Format`] when the receipt body
    /// cannot be decoded.
    pub async fn submit(&self, order: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let url = format!("{}/api/order", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(header::ORIGIN, ALLOWED_ORIGIN)
            .header(header::REFERER, ALLOWED_ORIGIN)
            .json(order)
            .send()
            .await
            .map_err(|e| ApiError::request(SERVICE, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %body,
                "Order submission rejected upstream"
            );
            return Err(ApiError::Upstream {
                service: SERVICE,
                status: status.as_u16(),
                message: body,
            });
        }

        let receipt = response
            .json::<OrderReceipt>()
            .await
            .map_err(|e| ApiError::format(SERVICE, &e))?;

        info!(
            reference = %receipt.reference_number,
            files = receipt.files.len(),
            "Order accepted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_serializes_camel_case_wire_shape() {
        let config = ClientConfig::default();
        let order = OrderRequest::single(
            &config,
            "kari@example.no",
            OrderLine {
                metadata_uuid: "c777d53d-8fc0-4602-a271-b800a5d182a2".to_string(),
                areas: vec![OrderArea {
                    code: "03".to_string(),
                    name: "Oslo".to_string(),
                    kind: "fylke".to_string(),
                }],
                projections: vec![OrderProjection {
                    code: "25833".to_string(),
                    name: "EUREF89 UTM sone 33".to_string(),
                    codespace: "http://www.opengis.net/def/crs/EPSG/0/25833".to_string(),
                }],
                formats: vec![OrderFormat {
                    name: "SOSI".to_string(),
                }],
                usage_purpose: String::new(),
            },
        );

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["email"], "kari@example.no");
        assert_eq!(json["usageGroup"], "privat");
        assert_eq!(json["softwareClient"], "kartklient");
        assert_eq!(
            json["orderLines"][0]["metadataUuid"],
            "c777d53d-8fc0-4602-a271-b800a5d182a2"
        );
        assert_eq!(json["orderLines"][0]["areas"][0]["type"], "fylke");
        assert!(
            json["orderLines"][0]["projections"][0]["codespace"]
                .as_str()
                .unwrap()
                .contains("EPSG")
        );
        assert_eq!(json["orderLines"][0]["formats"][0]["name"], "SOSI");
        assert!(json["orderLines"][0]["usagePurpose"].is_string());
    }

    #[test]
    fn test_order_receipt_tolerates_missing_files() {
        let receipt: OrderReceipt =
            serde_json::from_str(r#"{"referenceNumber": "GN-1234"}"#).unwrap();
        assert_eq!(receipt.reference_number, "GN-1234");
        assert!(receipt.files.is_empty());
    }
}
