//! Forward geocoding: place name to coordinates via the Open-Meteo
//! geocoding API. Free, no API key required.

use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{QueryError, Upstream},
    http::{join_url, read_body, transport_error, truncate_body},
    model::GeoResult,
};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchEntry>>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    latitude: f64,
    longitude: f64,
    name: String,
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    base_url: String,
    http: Client,
}

impl GeocodingClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Resolve `name` to the first match the service returns.
    ///
    /// An absent or empty `results` array is [`QueryError::LocationNotFound`].
    pub async fn resolve(&self, name: &str) -> Result<GeoResult, QueryError> {
        let url = join_url(&self.base_url, "v1/search");
        tracing::debug!(%url, location = name, "geocoding request");

        let res = self
            .http
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| transport_error(Upstream::Geocoding, e))?;

        let body = read_body(res, Upstream::Geocoding).await?;

        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            QueryError::upstream(
                Upstream::Geocoding,
                format!("malformed response ({e}): {}", truncate_body(&body)),
            )
        })?;

        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| QueryError::LocationNotFound {
                location: name.to_string(),
            })?;

        tracing::info!(
            query = name,
            resolved = %first.name,
            latitude = first.latitude,
            longitude = first.longitude,
            "location geocoded"
        );

        Ok(GeoResult {
            latitude: first.latitude,
            longitude: first.longitude,
            resolved_name: first.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> GeocodingClient {
        GeocodingClient::new(server.uri(), Client::new())
    }

    #[tokio::test]
    async fn returns_first_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Pune"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "latitude": 18.5, "longitude": 73.8, "name": "Pune", "country": "India" },
                    { "latitude": 1.0, "longitude": 2.0, "name": "Pune Junction" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let geo = client(&server).resolve("Pune").await.unwrap();
        assert_eq!(
            geo,
            GeoResult {
                latitude: 18.5,
                longitude: 73.8,
                resolved_name: "Pune".into()
            }
        );
    }

    #[tokio::test]
    async fn missing_results_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "generationtime_ms": 0.5 })),
            )
            .mount(&server)
            .await;

        let err = client(&server).resolve("Atlantis").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LocationNotFound);
        assert!(err.user_message().contains("'Atlantis'"));
    }

    #[tokio::test]
    async fn empty_results_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
            .mount(&server)
            .await;

        let err = client(&server).resolve("Nowhere").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LocationNotFound);
    }

    #[tokio::test]
    async fn server_error_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client(&server).resolve("Pune").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn unreachable_host_is_upstream_unavailable() {
        // Nothing listens on port 1.
        let geocoder = GeocodingClient::new("http://127.0.0.1:1", Client::new());
        let err = geocoder.resolve("Pune").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);

        // The connect failure beneath reqwest's "error sending request".
        let message = err.user_message();
        assert!(message.contains("error sending request"), "{message}");
        assert!(message.to_lowercase().contains("connect"), "{message}");
    }
}
