use thiserror::Error;

use crate::validation::ValidationIssues;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("Invalid route request: {0}")]
    Validation(#[from] ValidationIssues),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),
}
