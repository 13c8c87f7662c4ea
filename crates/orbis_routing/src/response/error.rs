use serde::Deserialize;

use crate::error::RoutingError;

/// Turns a non-success response into a [`RoutingError`].
pub trait ResponseErrorParser {
    fn parse_error(&self, status: u16, body: &str) -> RoutingError;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResponseErrorParser;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    detailed_error: Option<DetailedError>,
    error: Option<LegacyError>,
}

#[derive(Deserialize)]
struct DetailedError {
    code: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct LegacyError {
    description: Option<String>,
}

impl ResponseErrorParser for DefaultResponseErrorParser {
    fn parse_error(&self, status: u16, body: &str) -> RoutingError {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();

        let (code, message) = match parsed {
            Some(ErrorBody {
                detailed_error: Some(detailed),
                ..
            }) => (detailed.code, detailed.message),
            Some(ErrorBody {
                error: Some(error), ..
            }) => (None, error.description),
            _ => (None, None),
        };

        RoutingError::Api {
            status,
            code,
            message: message.unwrap_or_else(|| body.to_string()),
        }
    }
}
