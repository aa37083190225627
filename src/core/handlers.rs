use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::core::catalog::{Catalog, CONTACT_THANKS_MESSAGE, HEALTH_MESSAGE};
use crate::core::{ApiResponse, ContactForm, ContactSubmission, Endpoint, HttpMethod};
use crate::utils::error::{ApiError, Result};

/// The request handler set. One instance per process, shared by reference
/// across all in-flight requests; it holds no mutable state.
///
/// Both transports funnel into [`PortfolioApi::handle`], which owns the full
/// request/response contract: preflight short-circuit, method checks,
/// validation, canned payloads, and the error boundary. The adapters only
/// translate representation.
#[derive(Clone)]
pub struct PortfolioApi {
    catalog: Arc<Catalog>,
}

impl PortfolioApi {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Dispatch an inbound request. Never returns an error: anything the
    /// endpoint handlers reject is converted to its response shape here,
    /// with full detail logged locally and only the short public message
    /// leaving the process.
    pub fn handle(&self, endpoint: Endpoint, method: HttpMethod, body: Option<&str>) -> ApiResponse {
        // CORS preflight wins before any endpoint logic.
        if method == HttpMethod::Options {
            return ApiResponse::preflight();
        }

        let result = match endpoint {
            Endpoint::Health => self.health(method),
            Endpoint::Projects => self.projects(method),
            Endpoint::Skills => self.skills(method),
            Endpoint::Contact => self.contact(method, body),
        };

        result.unwrap_or_else(error_response)
    }

    fn health(&self, method: HttpMethod) -> Result<ApiResponse> {
        require_get(method)?;
        Ok(ApiResponse::json(
            200,
            json!({
                "status": "OK",
                "message": HEALTH_MESSAGE,
                "timestamp": iso_timestamp(),
            }),
        ))
    }

    fn projects(&self, method: HttpMethod) -> Result<ApiResponse> {
        require_get(method)?;
        Ok(ApiResponse::json(
            200,
            json!({
                "success": true,
                "projects": self.catalog.projects(),
            }),
        ))
    }

    fn skills(&self, method: HttpMethod) -> Result<ApiResponse> {
        require_get(method)?;
        Ok(ApiResponse::json(
            200,
            json!({
                "success": true,
                "skills": self.catalog.skills(),
            }),
        ))
    }

    fn contact(&self, method: HttpMethod, body: Option<&str>) -> Result<ApiResponse> {
        if method != HttpMethod::Post {
            return Err(method_not_allowed(method));
        }

        let form: ContactForm = serde_json::from_str(body.unwrap_or_default())?;
        let submission = ContactSubmission::from_form(form)?;

        // The only side effect of the endpoint: one structured log record.
        // Nothing is stored or forwarded.
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            timestamp = %iso_timestamp(),
            "Contact form submission"
        );

        Ok(ApiResponse::json(
            200,
            json!({
                "success": true,
                "message": CONTACT_THANKS_MESSAGE,
            }),
        ))
    }
}

fn require_get(method: HttpMethod) -> Result<()> {
    if method != HttpMethod::Get {
        return Err(method_not_allowed(method));
    }
    Ok(())
}

fn method_not_allowed(method: HttpMethod) -> ApiError {
    ApiError::MethodNotAllowed {
        method: format!("{:?}", method),
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix,
/// e.g. `2026-08-06T09:41:00.123Z`.
fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn error_response(err: ApiError) -> ApiResponse {
    let status = err.status_code();
    match status {
        405 => {
            tracing::warn!(error = %err, "Rejected request method");
            ApiResponse::json(405, json!({ "error": err.public_message() }))
        }
        400 => {
            tracing::warn!(error = %err, "Rejected contact submission");
            ApiResponse::json(
                400,
                json!({ "success": false, "message": err.public_message() }),
            )
        }
        _ => {
            tracing::error!(error = %err, "Request processing failed");
            ApiResponse::json(
                500,
                json!({ "success": false, "message": err.public_message() }),
            )
        }
    }
}
