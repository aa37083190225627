use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::handlers::PortfolioApi;
use crate::core::{Endpoint, HttpMethod};

/// Platform invocation event. Only the method and the raw body are carried;
/// routing already happened on the platform side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// Shape the platform expects back: a status code, a header map, and the
/// body serialized to a string (empty for preflight).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn handle_event(api: &PortfolioApi, endpoint: Endpoint, event: &FunctionEvent) -> FunctionResponse {
    let method = HttpMethod::parse(&event.http_method);
    let response = api.handle(endpoint, method, event.body.as_deref());

    let mut headers: HashMap<String, String> = endpoint
        .cors_headers()
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let body = match &response.body {
        Some(value) => {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            value.to_string()
        }
        None => String::new(),
    };

    FunctionResponse {
        status_code: response.status,
        headers,
        body,
    }
}
