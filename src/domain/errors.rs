// Error taxonomy for fetching, shaping and rendering signal charts
use crate::domain::endpoint::Endpoint;
use thiserror::Error;

/// A state code outside the known enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unmapped state code {code}")]
pub struct UnmappedCodeError {
    pub code: i64,
}

/// A series timestamp that does not match the format the series declares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("timestamp {raw:?} in series {series} does not match its format")]
pub struct TimestampFormatError {
    pub series: &'static str,
    pub raw: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with status {status}: {body}")]
    Status {
        endpoint: Endpoint,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {endpoint}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to draw {chart}: {detail}")]
pub struct RenderError {
    pub chart: &'static str,
    pub detail: String,
}

/// Any failure of a render entry point.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error(transparent)]
    Unmapped(#[from] UnmappedCodeError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Timestamp(#[from] TimestampFormatError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
