use serde::{Deserialize, Serialize};

use crate::algorithm::{Route, WeightStrategy};

/// Query string of `GET /route`.
///
/// Every field is optional so that missing or malformed parameters reach the
/// handler and are reported as a JSON 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub strategy: Option<String>,
}

/// Response of `GET /route`
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub strategy: WeightStrategy,
    #[serde(flatten)]
    pub route: Route,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub nodes: usize,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.into(),
        }
    }
}
