//! Audit-log view state machine
//!
//! Drives fetch-on-filter-change, free-text search, client-side narrowing
//! and pagination for the dashboard's audit table. All I/O goes through the
//! injected [`AuditLogReader`]; the view itself owns only transient state.
//!
//! Fetches are sequenced with a monotonically increasing request id: a
//! completion is applied only while its id is still the latest issued, so a
//! slow response can never overwrite the result of a newer request.

use std::sync::Arc;

use reportdeck_domain::types::audit::{date_ranges, sentinels};
use reportdeck_domain::{AuditLogEntry, LogFilter, Result};
use tracing::{debug, warn};

use super::ports::AuditLogReader;
use super::{pagination, text_filter};

/// Fixed page size of the audit table
pub const PAGE_SIZE: usize = 10;

/// Number of entries shown in the "recent activity" timeline panel
pub const RECENT_ACTIVITY_LEN: usize = 5;

const FETCH_ERROR: &str = "Failed to load audit logs. Please check if backend is running.";
const SEARCH_ERROR: &str = "Search failed";

/// Identity of one issued fetch, used to discard stale completions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// View state for the audit-log screen
pub struct AuditLogView {
    reader: Arc<dyn AuditLogReader>,
    role_filter: String,
    action_filter: String,
    date_range: String,
    search_term: String,
    current_page: usize,
    entries: Vec<AuditLogEntry>,
    loading: bool,
    error: Option<String>,
    latest_request: u64,
}

impl AuditLogView {
    /// Create a view with the dashboard's default filter state
    /// (all roles, all actions, last 7 days).
    pub fn new(reader: Arc<dyn AuditLogReader>) -> Self {
        Self {
            reader,
            role_filter: sentinels::ALL_USERS.to_string(),
            action_filter: sentinels::ALL_ACTIONS.to_string(),
            date_range: date_ranges::LAST_7_DAYS.to_string(),
            search_term: String::new(),
            current_page: 1,
            entries: Vec::new(),
            loading: false,
            error: None,
            latest_request: 0,
        }
    }

    // ---- filter dimension changes (each triggers an immediate re-fetch) ----

    pub async fn set_role_filter(&mut self, role: impl Into<String>) {
        self.role_filter = role.into();
        self.current_page = 1;
        self.refresh().await;
    }

    pub async fn set_action_filter(&mut self, action: impl Into<String>) {
        self.action_filter = action.into();
        self.current_page = 1;
        self.refresh().await;
    }

    pub async fn set_date_range(&mut self, range: impl Into<String>) {
        self.date_range = range.into();
        self.current_page = 1;
        self.refresh().await;
    }

    /// Update the search term without fetching
    ///
    /// Typing narrows the already-fetched set client-side; the server-side
    /// search only runs on [`submit_search`](Self::submit_search).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Submit the current search term
    ///
    /// A non-empty term runs the dedicated search fetch, replacing the
    /// filtered result set; search and the role/action/date filters are
    /// separate query paths and do not combine. An empty term reverts to
    /// the filtered fetch.
    pub async fn submit_search(&mut self) {
        self.current_page = 1;
        if self.search_term.trim().is_empty() {
            self.refresh().await;
            return;
        }

        let request = self.begin_request();
        let term = self.search_term.clone();
        let result = self.reader.search(&term).await;
        self.apply_search(request, result);
    }

    /// Re-fetch using the combined filter set
    pub async fn refresh(&mut self) {
        let request = self.begin_request();
        let filter = self.current_filter();
        let result = self.reader.fetch_filtered(&filter).await;
        self.apply_filtered(request, result);
    }

    // ---- request sequencing primitives ----
    //
    // `refresh` and `submit_search` compose these; drivers that schedule
    // their own fetches (e.g. spawning overlapping requests) use them
    // directly and get the same staleness guarantees.

    /// Issue a new request id, marking the view as loading
    pub fn begin_request(&mut self) -> RequestId {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        RequestId(self.latest_request)
    }

    /// Apply the completion of a filtered fetch
    ///
    /// Ignored when `request` is no longer the latest issued id; the newer
    /// in-flight request owns the loading flag and the result set.
    pub fn apply_filtered(&mut self, request: RequestId, result: Result<Vec<AuditLogEntry>>) {
        if !self.accept(request) {
            return;
        }
        match result {
            Ok(entries) => self.entries = entries,
            Err(err) => {
                warn!(error = %err, "failed to fetch audit logs");
                self.error = Some(FETCH_ERROR.to_string());
                self.entries.clear();
            }
        }
    }

    /// Apply the completion of a search fetch
    pub fn apply_search(&mut self, request: RequestId, result: Result<Vec<AuditLogEntry>>) {
        if !self.accept(request) {
            return;
        }
        match result {
            Ok(entries) => self.entries = entries,
            Err(err) => {
                warn!(error = %err, "audit log search failed");
                self.error = Some(SEARCH_ERROR.to_string());
                self.entries.clear();
            }
        }
    }

    /// Staleness check; clears the loading flag only for the latest request
    fn accept(&mut self, request: RequestId) -> bool {
        if request.0 != self.latest_request {
            debug!(request = request.0, latest = self.latest_request, "discarding stale response");
            return false;
        }
        self.loading = false;
        true
    }

    // ---- pagination ----

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.narrowed().len(), PAGE_SIZE)
    }

    // ---- derived views ----

    /// The entries visible on the current page
    ///
    /// While a search term is active the fetched set is first narrowed by a
    /// case-insensitive substring match over email, name, details and
    /// action; pagination then runs over the narrowed set.
    pub fn visible_entries(&self) -> Vec<&AuditLogEntry> {
        let narrowed = self.narrowed();
        let (start, end) = pagination::page_bounds(self.current_page, PAGE_SIZE, narrowed.len());
        narrowed[start..end].to_vec()
    }

    /// First entries of the unfiltered fetched set, for the timeline panel
    pub fn recent_activity(&self) -> &[AuditLogEntry] {
        let len = self.entries.len().min(RECENT_ACTIVITY_LEN);
        &self.entries[..len]
    }

    fn narrowed(&self) -> Vec<&AuditLogEntry> {
        if self.search_term.trim().is_empty() {
            self.entries.iter().collect()
        } else {
            self.entries.iter().filter(|e| text_filter::matches(e, &self.search_term)).collect()
        }
    }

    /// The combined filter built from the current dropdown state
    ///
    /// Sentinel values are carried as-is; the facade omits them at
    /// transmission time.
    pub fn current_filter(&self) -> LogFilter {
        LogFilter::new()
            .with_user_role(self.role_filter.clone())
            .with_action(self.action_filter.clone())
            .with_date_range(self.date_range.clone())
    }

    // ---- accessors ----

    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }
}
