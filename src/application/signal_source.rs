// Source trait for grid signal data, plus the decoded response shapes
use crate::domain::errors::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NowResponse {
    pub state: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateEntry {
    pub from: String,
    pub to: String,
    pub state: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelativeStatesResponse {
    pub states: Vec<StateEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub load: Vec<ForecastPoint>,
    pub renewable_energy: Vec<ForecastPoint>,
    pub residual_load: Vec<ForecastPoint>,
    pub super_green_threshold: Vec<ForecastPoint>,
}

#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Raw state code for the present moment at `zip`
    async fn fetch_current_state(&self, zip: &str) -> Result<i64, FetchError>;

    /// States from 96h in the past to 48h in the future, in the order the source returns them
    async fn fetch_relative_forecast(&self, zip: &str) -> Result<RelativeStatesResponse, FetchError>;

    /// Load, renewable, residual load and super-green threshold series
    async fn fetch_full_forecast(&self, zip: &str) -> Result<ForecastResponse, FetchError>;
}
