//! Case-insensitive substring filtering over fetched entries
//!
//! Applied after a search fetch to narrow the already-loaded set further;
//! the backend search and this client-side pass use the same fields.

use reportdeck_domain::AuditLogEntry;

/// True when `entry` matches `term` on any of email, display name, details,
/// or action. An empty (or whitespace) term matches everything.
pub fn matches(entry: &AuditLogEntry, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    let name = entry.user_name.as_deref().unwrap_or("");
    entry.user_email.to_lowercase().contains(&term)
        || name.to_lowercase().contains(&term)
        || entry.details.to_lowercase().contains(&term)
        || entry.action.to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(email: &str, name: Option<&str>, action: &str, details: &str) -> AuditLogEntry {
        AuditLogEntry {
            id: 1,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap(),
            user_email: email.into(),
            user_name: name.map(Into::into),
            user_role: "Admin".into(),
            action: action.into(),
            details: details.into(),
            status: "SUCCESS".into(),
            ip_address: None,
        }
    }

    #[test]
    fn matches_are_case_insensitive() {
        let e = entry("Alice@Example.org", Some("Alice"), "REPORT_UPLOAD", "Quarterly report");
        assert!(matches(&e, "alice"));
        assert!(matches(&e, "report_upload"));
        assert!(matches(&e, "QUARTERLY"));
    }

    #[test]
    fn matches_any_of_the_four_fields() {
        let e = entry("a@x.com", Some("Ann Lee"), "USER_LOGIN", "from branch office");
        assert!(matches(&e, "a@x"));
        assert!(matches(&e, "lee"));
        assert!(matches(&e, "login"));
        assert!(matches(&e, "branch"));
        assert!(!matches(&e, "nowhere"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let e = entry("a@x.com", None, "REPORT_VIEW", "");
        assert!(matches(&e, ""));
        assert!(matches(&e, "   "));
    }

    #[test]
    fn missing_name_does_not_panic_or_match() {
        let e = entry("a@x.com", None, "REPORT_VIEW", "");
        assert!(!matches(&e, "ann"));
    }
}
