//! Debounced search-as-you-type driver.
//!
//! The search box fires on every keystroke; a fixed delay before issuing the
//! request bounds the request rate. This is the only rate-control mechanism
//! in the system: no retries, no cancellation of in-flight requests, just
//! "wait, and only the newest submission survives the wait".

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::api::{AddressClient, AddressHit};

/// Debounces address searches over an [`AddressClient`].
///
/// Cloneable; clones share the generation counter, so submissions from any
/// clone supersede earlier ones.
#[derive(Debug, Clone)]
pub struct DebouncedSearch {
    client: AddressClient,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl DebouncedSearch {
    /// Creates a driver with the given debounce delay.
    #[must_use]
    pub fn new(client: AddressClient, delay: Duration) -> Self {
        Self {
            client,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Submits a query; resolves after the debounce delay.
    ///
    /// Returns `None` when a newer submission superseded this one during the
    /// delay (the stale query is never sent). Otherwise issues the search
    /// and returns its hits, which are empty on soft failure per the
    /// address-client contract.
    pub async fn submit(&self, query: &str) -> Option<Vec<AddressHit>> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!(query, "Debounced query superseded; dropping");
            return None;
        }

        Some(self.client.search(query).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn driver_against(server: &MockServer, delay_ms: u64) -> DebouncedSearch {
        let client = AddressClient::with_base_url(server.uri(), 5).unwrap();
        DebouncedSearch::new(client, Duration::from_millis(delay_ms))
    }

    #[tokio::test]
    async fn test_single_submission_survives_the_delay() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sok"))
            .and(query_param("sok", "storgata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "adresser": [
                    {"adressetekst": "Storgata 1", "representasjonspunkt": {"lat": 59.9, "lon": 10.7}}
                ]
            })))
            .mount(&server)
            .await;

        let search = driver_against(&server, 10);
        let hits = search.submit("storgata").await;

        let hits = hits.expect("lone submission must not be dropped");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Storgata 1");
    }

    #[tokio::test]
    async fn test_newer_submission_supersedes_older() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "adresser": []
            })))
            .mount(&server)
            .await;

        let search = driver_against(&server, 80);
        let stale = search.clone();
        let first = tokio::spawn(async move { stale.submit("storg").await });

        // Let the first submission enter its delay before superseding it.
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = search.submit("storgata").await;

        assert!(second.is_some(), "newest submission must be issued");
        assert!(
            first.await.unwrap().is_none(),
            "superseded submission must be dropped"
        );
    }
}
