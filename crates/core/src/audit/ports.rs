//! Port interfaces for audit-log retrieval
//!
//! These traits define the boundary between view logic and the HTTP facade
//! implementations in the infra layer.

use async_trait::async_trait;
use reportdeck_domain::{AuditLogEntry, LogFilter, Result};

/// Trait for fetching audit-log entries
///
/// The two operations are deliberately separate query paths: a search fetch
/// replaces the filtered fetch rather than composing with it.
#[async_trait]
pub trait AuditLogReader: Send + Sync {
    /// Fetch entries matching the combined filter set
    async fn fetch_filtered(&self, filter: &LogFilter) -> Result<Vec<AuditLogEntry>>;

    /// Fetch entries matching a free-text search term
    async fn search(&self, term: &str) -> Result<Vec<AuditLogEntry>>;
}
