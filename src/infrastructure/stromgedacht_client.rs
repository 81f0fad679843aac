// StromGedacht API client
use crate::application::signal_source::{
    ForecastResponse, NowResponse, RelativeStatesResponse, SignalSource,
};
use crate::domain::endpoint::Endpoint;
use crate::domain::errors::FetchError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone)]
pub struct StromGedachtClient {
    client: reqwest::Client,
    base_url: String,
}

impl StromGedachtClient {
    pub fn new(base_url: String, timeout: Duration) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, endpoint: Endpoint, zip: &str) -> String {
        format!("{}{}?{}", self.base_url, endpoint.path(), endpoint.query(zip))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint, zip: &str) -> Result<T, FetchError> {
        let url = self.build_url(endpoint, zip);
        tracing::debug!("GET {}", url);

        let transport = |source| FetchError::Transport { endpoint, source };

        let response = self.client.get(&url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!("Could not read error body from {}: {}", endpoint, e);
                String::new()
            });
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

#[async_trait]
impl SignalSource for StromGedachtClient {
    async fn fetch_current_state(&self, zip: &str) -> Result<i64, FetchError> {
        let now: NowResponse = self.get_json(Endpoint::Now, zip).await?;
        Ok(now.state)
    }

    async fn fetch_relative_forecast(&self, zip: &str) -> Result<RelativeStatesResponse, FetchError> {
        let response: RelativeStatesResponse = self.get_json(Endpoint::StatesRelative, zip).await?;
        tracing::debug!("Received {} states for {}", response.states.len(), zip);
        Ok(response)
    }

    async fn fetch_full_forecast(&self, zip: &str) -> Result<ForecastResponse, FetchError> {
        self.get_json(Endpoint::Forecast, zip).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::RawQuery;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn client(base_url: String) -> StromGedachtClient {
        StromGedachtClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_build_url() {
        let client = client("https://api.stromgedacht.de/".to_string());
        assert_eq!(
            client.build_url(Endpoint::StatesRelative, "70173"),
            "https://api.stromgedacht.de/v1/statesRelative?zip=70173&hoursInFuture=48&hoursInPast=96"
        );
        assert_eq!(
            client.build_url(Endpoint::Now, "70173"),
            "https://api.stromgedacht.de/v1/now?zip=70173"
        );
    }

    #[tokio::test]
    async fn test_fetch_current_state_sends_zip_and_accept() {
        let seen: Arc<Mutex<Option<(String, String)>>> = Arc::default();
        let recorder = seen.clone();
        let router = Router::new().route(
            "/v1/now",
            get(move |RawQuery(query): RawQuery, headers: AxumHeaders| async move {
                let accept = headers
                    .get("accept")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                *recorder.lock().unwrap() = Some((query.unwrap_or_default(), accept));
                r#"{"state": 3}"#
            }),
        );
        let client = client(serve(router).await);

        let state = client.fetch_current_state("70173").await.unwrap();

        assert_eq!(state, 3);
        let (query, accept) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(query, "zip=70173");
        assert_eq!(accept, "application/json");
    }

    #[tokio::test]
    async fn test_fetch_relative_forecast_keeps_source_order() {
        let router = Router::new().route(
            "/v1/statesRelative",
            get(|| async {
                r#"{"states": [
                    {"from": "2024-01-01T05:00:00+01:00", "to": "2024-01-01T06:00:00+01:00", "state": 4},
                    {"from": "2024-01-01T01:00:00+01:00", "to": "2024-01-01T02:00:00+01:00", "state": -1}
                ]}"#
            }),
        );
        let client = client(serve(router).await);

        let response = client.fetch_relative_forecast("70173").await.unwrap();

        let states: Vec<_> = response.states.iter().map(|s| s.state).collect();
        assert_eq!(states, vec![4, -1]);
    }

    #[tokio::test]
    async fn test_fetch_full_forecast() {
        let router = Router::new().route(
            "/v1/forecast",
            get(|| async {
                r#"{
                    "load": [{"dateTime": "2024-06-01T12:00:00Z", "value": 1000.5}],
                    "renewableEnergy": [{"dateTime": "2024-06-01T12:00:00Z", "value": 400}],
                    "residualLoad": [],
                    "superGreenThreshold": [{"dateTime": "2024-06-01T12:00:00Z", "value": 300}]
                }"#
            }),
        );
        let client = client(serve(router).await);

        let response = client.fetch_full_forecast("70173").await.unwrap();

        assert_eq!(response.load[0].value, 1000.5);
        assert_eq!(response.renewable_energy.len(), 1);
        assert!(response.residual_load.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let router = Router::new().route(
            "/v1/now",
            get(|| async { (StatusCode::BAD_REQUEST, "invalid zip") }),
        );
        let client = client(serve(router).await);

        let err = client.fetch_current_state("abc").await.unwrap_err();

        match err {
            FetchError::Status { endpoint, status, body } => {
                assert_eq!(endpoint, Endpoint::Now);
                assert_eq!(status, 400);
                assert_eq!(body, "invalid zip");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let router = Router::new().route("/v1/forecast", get(|| async { "<html>oops</html>" }));
        let client = client(serve(router).await);

        let err = client.fetch_full_forecast("70173").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { endpoint: Endpoint::Forecast, .. }));
    }

    #[tokio::test]
    async fn test_json_without_required_keys_is_a_decode_error() {
        let router = Router::new()
            .route("/v1/now", get(|| async { "{}" }))
            .route("/v1/statesRelative", get(|| async { r#"{"error": "zip not found"}"# }))
            .route("/v1/forecast", get(|| async { r#"{"message": "oops"}"# }));
        let client = client(serve(router).await);

        let err = client.fetch_current_state("70173").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { endpoint: Endpoint::Now, .. }), "{err:?}");

        let err = client.fetch_relative_forecast("70173").await.unwrap_err();
        assert!(
            matches!(err, FetchError::Decode { endpoint: Endpoint::StatesRelative, .. }),
            "{err:?}"
        );

        let err = client.fetch_full_forecast("70173").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { endpoint: Endpoint::Forecast, .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client(format!("http://{}", addr));

        let err = client.fetch_relative_forecast("70173").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport { endpoint: Endpoint::StatesRelative, .. }));
    }
}
