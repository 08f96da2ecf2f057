//! Audit-log facade: read-only queries over the audit trail
//!
//! Every operation is a GET; failures are logged for diagnostics and then
//! propagated unchanged, leaving presentation of the error to the view
//! layer.

use async_trait::async_trait;
use reportdeck_domain::{AuditLogEntry, LogFilter};
use reqwest::{Method, RequestBuilder};
use tracing::{debug, warn};

use super::errors::ApiError;
use super::expect_json;
use crate::config::ApiConfig;
use crate::http::HttpClient;

const DEFAULT_RECENT_LIMIT: usize = 100;

/// Facade for the `/audit-logs` endpoints
pub struct AuditLogApi {
    http: HttpClient,
    base_url: String,
}

impl AuditLogApi {
    /// Create the facade against `config`
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = super::build_http(config)?;
        Ok(Self { http, base_url: format!("{}/audit-logs", config.base_url) })
    }

    /// Fetch the complete audit trail
    pub async fn all_logs(&self) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get("");
        self.fetch("fetching all audit logs", builder).await
    }

    /// Fetch the most recent entries, at most `limit` (default 100)
    pub async fn recent_logs(&self, limit: Option<usize>) -> Result<Vec<AuditLogEntry>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        let builder = self.get("/recent").query(&[("limit", limit)]);
        self.fetch("fetching recent audit logs", builder).await
    }

    /// Fetch entries for one user email
    pub async fn logs_by_user(&self, email: &str) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get(&format!("/user/{}", urlencoding::encode(email)));
        self.fetch("fetching audit logs by user", builder).await
    }

    /// Fetch entries for one action type
    pub async fn logs_by_action(&self, action: &str) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get(&format!("/action/{}", urlencoding::encode(action)));
        self.fetch("fetching audit logs by action", builder).await
    }

    /// Fetch entries for one role
    pub async fn logs_by_role(&self, role: &str) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get(&format!("/role/{}", urlencoding::encode(role)));
        self.fetch("fetching audit logs by role", builder).await
    }

    /// Fetch entries within a date-range bucket (`today`, `7days`, ...)
    pub async fn logs_by_date_range(&self, range: &str) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get(&format!("/date-range/{}", urlencoding::encode(range)));
        self.fetch("fetching audit logs by date range", builder).await
    }

    /// Fetch entries matching the combined filter set
    ///
    /// Sentinel ("All Users", "All Actions", "All Status") and empty values
    /// are omitted from the query; only real constraints are transmitted.
    pub async fn logs_with_filters(
        &self,
        filter: &LogFilter,
    ) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get("/filter").query(&filter.query_pairs());
        self.fetch("fetching audit logs with filters", builder).await
    }

    /// Free-text search over the audit trail
    ///
    /// This is a separate query path from [`logs_with_filters`]; the two do
    /// not combine server-side.
    pub async fn search_logs(&self, term: &str) -> Result<Vec<AuditLogEntry>, ApiError> {
        let builder = self.get("/search").query(&[("searchTerm", term)]);
        self.fetch("searching audit logs", builder).await
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET audit logs");
        self.http.request(Method::GET, url)
    }

    async fn fetch(
        &self,
        context: &str,
        builder: RequestBuilder,
    ) -> Result<Vec<AuditLogEntry>, ApiError> {
        match expect_json(&self.http, builder).await {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // Logged here; surfaced to the caller unmodified.
                warn!(error = %err, "{context} failed");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl reportdeck_core::AuditLogReader for AuditLogApi {
    async fn fetch_filtered(
        &self,
        filter: &LogFilter,
    ) -> reportdeck_domain::Result<Vec<AuditLogEntry>> {
        self.logs_with_filters(filter).await.map_err(Into::into)
    }

    async fn search(&self, term: &str) -> reportdeck_domain::Result<Vec<AuditLogEntry>> {
        self.search_logs(term).await.map_err(Into::into)
    }
}
