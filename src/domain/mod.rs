// Domain layer - signal codes, forecast data and chart models
pub mod chart;
pub mod endpoint;
pub mod errors;
pub mod forecast;
pub mod signal;
pub mod timestamp;
