use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::model::CurrentConditions;

pub mod openweather;

/// Failure modes of a weather lookup. None of these reach the user as-is:
/// the search layer collapses every variant into one fixed message and keeps
/// the detail for the logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Malformed(&'static str),
}

/// A source of current weather for a free-text city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, ProviderError>;
}
