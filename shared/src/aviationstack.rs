//! AviationStack client for the `/v1/flights` endpoint.

use tracing::{error, info};

use crate::models::{FlightDirection, FlightsPage, UpstreamFlight};
use crate::{Config, Error, Result};

/// Number of flights requested per board.
const FLIGHT_LIMIT: u32 = 10;

/// Client for the flight data provider.
#[derive(Debug, Clone)]
pub struct AviationStackClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AviationStackClient {
    /// Create a client with the configured base URL and timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch scheduled flights leaving from (or arriving at) `iata`.
    ///
    /// Makes exactly one request. Transport errors, timeouts, non-2xx statuses
    /// and undecodable bodies all come back as `Error::Upstream`.
    pub async fn flights(
        &self,
        api_key: &str,
        direction: FlightDirection,
        iata: &str,
    ) -> Result<Vec<UpstreamFlight>> {
        let url = format!("{}/v1/flights", self.base_url);
        let limit = FLIGHT_LIMIT.to_string();

        info!("Requesting {} flights for {}", direction.as_str(), iata);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("access_key", api_key),
                (direction.iata_param(), iata),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                // reqwest includes the URL in its message; keep the key out of logs and responses.
                let e = e.without_url();
                error!("Flight data request failed: {}", e);
                Error::from(e)
            })?;

        let page: FlightsPage = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!("Failed to decode flight data: {}", e);
            Error::from(e)
        })?;

        let flights = page.data.ok_or(Error::InvalidUpstreamResponse)?;
        info!("Received {} flights for {}", flights.len(), iata);

        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{refused_base_url, FakeUpstream};
    use std::time::Duration;

    fn config(base_url: &str) -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(1),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_departure_query_parameters() {
        let upstream = FakeUpstream::respond(200, r#"{"data": []}"#).await;
        let client = AviationStackClient::new(&config(&upstream.base_url)).unwrap();

        let flights = client
            .flights("test-key", FlightDirection::Departure, "OVB")
            .await
            .unwrap();
        assert!(flights.is_empty());

        assert_eq!(
            upstream.request_line().await,
            "GET /v1/flights?access_key=test-key&dep_iata=OVB&limit=10 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_arrival_query_parameters() {
        let upstream = FakeUpstream::respond(200, r#"{"data": [{}]}"#).await;
        let client = AviationStackClient::new(&config(&upstream.base_url)).unwrap();

        let flights = client
            .flights("test-key", FlightDirection::Arrival, "LED")
            .await
            .unwrap();
        assert_eq!(flights.len(), 1);

        let line = upstream.request_line().await;
        assert!(line.contains("arr_iata=LED"), "{}", line);
        assert!(!line.contains("dep_iata"), "{}", line);
    }

    #[tokio::test]
    async fn test_missing_data_is_invalid_response() {
        let upstream = FakeUpstream::respond(200, r#"{"error": {"code": "usage_limit_reached"}}"#).await;
        let client = AviationStackClient::new(&config(&upstream.base_url)).unwrap();

        let err = client
            .flights("test-key", FlightDirection::Departure, "SVO")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUpstreamResponse));
    }

    #[tokio::test]
    async fn test_non_json_body_is_upstream_error() {
        let upstream = FakeUpstream::respond(200, "<html>maintenance</html>").await;
        let client = AviationStackClient::new(&config(&upstream.base_url)).unwrap();

        let err = client
            .flights("test-key", FlightDirection::Departure, "SVO")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upstream(ref msg) if !msg.is_empty()));
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let upstream = FakeUpstream::respond(401, r#"{"error": "invalid_access_key"}"#).await;
        let client = AviationStackClient::new(&config(&upstream.base_url)).unwrap();

        let err = client
            .flights("test-key", FlightDirection::Departure, "SVO")
            .await
            .unwrap_err();
        match err {
            Error::Upstream(msg) => {
                assert!(msg.contains("401"), "{}", msg);
                assert!(!msg.contains("test-key"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = AviationStackClient::new(&config(&refused_base_url().await)).unwrap();

        let err = client
            .flights("test-key", FlightDirection::Departure, "SVO")
            .await
            .unwrap_err();
        match err {
            Error::Upstream(msg) => assert!(msg.to_lowercase().contains("refused"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout() {
        let upstream = FakeUpstream::hang().await;
        let client = AviationStackClient::new(&config(&upstream.base_url)).unwrap();

        let err = client
            .flights("test-key", FlightDirection::Departure, "SVO")
            .await
            .unwrap_err();
        match err {
            Error::Upstream(msg) => assert!(msg.contains("timed out"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
