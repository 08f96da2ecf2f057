//! Typed API facades over the backend REST endpoints
//!
//! Three facades share one request pattern: build a request against a fixed
//! base path, send it, and either return the parsed JSON body or raise a
//! classified [`ApiError`]. They differ only in how failures are surfaced
//! (see `errors`).

mod audit_logs;
mod auth;
mod domains;
mod errors;

pub use audit_logs::AuditLogApi;
pub use auth::AuthApi;
pub use domains::DomainApi;
pub use errors::{ApiError, ErrorBody};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::http::HttpClient;

/// Build the HTTP client every facade uses
pub(crate) fn build_http(config: &ApiConfig) -> Result<HttpClient, ApiError> {
    HttpClient::builder()
        .timeout(config.timeout)
        .user_agent(concat!("reportdeck-client/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send a request and parse a successful JSON response
///
/// Non-success statuses become a classified error carrying the response
/// body text, in `<url> returned status <code>[: <body>]` form.
pub(crate) async fn expect_json<T: DeserializeOwned>(
    http: &HttpClient,
    builder: RequestBuilder,
) -> Result<T, ApiError> {
    let response = http.send(builder).await?;
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };
        return Err(ApiError::from_status(status, message));
    }

    response.json().await.map_err(|e| ApiError::Client(format!("Failed to parse response: {e}")))
}
