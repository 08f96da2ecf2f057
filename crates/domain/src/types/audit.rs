//! Audit-log entry and filter types
//!
//! Entries are read-only from the client's perspective; the dashboard never
//! mutates or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel filter values meaning "no constraint"
///
/// They come straight from the dashboard's dropdown defaults and must never
/// be transmitted as query parameters.
pub mod sentinels {
    pub const ALL_USERS: &str = "All Users";
    pub const ALL_ACTIONS: &str = "All Actions";
    pub const ALL_STATUS: &str = "All Status";
}

/// Action vocabulary observed in the platform's audit trail
///
/// The `action` field is an open-ended string; these are the values the
/// dashboard offers as filter options.
pub mod actions {
    pub const USER_APPROVED: &str = "USER_APPROVED";
    pub const USER_REJECTED: &str = "USER_REJECTED";
    pub const REPORT_UPLOAD: &str = "REPORT_UPLOAD";
    pub const REPORT_VIEW: &str = "REPORT_VIEW";
    pub const REPORT_DOWNLOAD: &str = "REPORT_DOWNLOAD";
    pub const USER_LOGIN: &str = "USER_LOGIN";
    pub const LOGIN_FAILED: &str = "LOGIN_FAILED";
    pub const DOMAIN_ADDED: &str = "DOMAIN_ADDED";
}

/// Date-range buckets accepted by the `/audit-logs` endpoints
pub mod date_ranges {
    pub const TODAY: &str = "today";
    pub const LAST_7_DAYS: &str = "7days";
    pub const LAST_30_DAYS: &str = "30days";
    pub const LAST_90_DAYS: &str = "90days";
}

/// One row of the audit trail as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    /// `"Admin"` or `"Subscriber"` as rendered by the dashboard
    pub user_role: String,
    pub action: String,
    #[serde(default)]
    pub details: String,
    /// `"SUCCESS"` or `"FAILED"`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ip_address: Option<String>,
}

impl AuditLogEntry {
    /// Render the timestamp the way the dashboard table does
    /// (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Combined filter for the `/audit-logs/filter` endpoint
///
/// A field set to its sentinel value, left empty, or absent is treated as
/// "no constraint" and omitted from the transmitted query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub user_role: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    pub date_range: Option<String>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_role(mut self, role: impl Into<String>) -> Self {
        self.user_role = Some(role.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_date_range(mut self, range: impl Into<String>) -> Self {
        self.date_range = Some(range.into());
        self
    }

    /// Query parameters to transmit, with sentinel and empty values omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(role) = constrained(&self.user_role, sentinels::ALL_USERS) {
            pairs.push(("userRole", role));
        }
        if let Some(action) = constrained(&self.action, sentinels::ALL_ACTIONS) {
            pairs.push(("action", action));
        }
        if let Some(status) = constrained(&self.status, sentinels::ALL_STATUS) {
            pairs.push(("status", status));
        }
        if let Some(range) = &self.date_range {
            if !range.trim().is_empty() {
                pairs.push(("dateRange", range.clone()));
            }
        }
        pairs
    }

    /// True when every dimension is unconstrained
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

fn constrained(value: &Option<String>, sentinel: &str) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() && v != sentinel => Some(v.clone()),
        _ => None,
    }
}
