//! # Reportdeck Core
//!
//! View-level business logic - no network or storage dependencies.
//!
//! This crate contains:
//! - The audit-log view state machine (filters, search, pagination, loading)
//! - Pure pagination and text-filter helpers
//! - The [`AuditLogReader`] port its fetches go through
//!
//! ## Architecture Principles
//! - Only depends on `reportdeck-domain`
//! - No HTTP or storage code; all I/O via traits
//! - Pure, testable view logic

pub mod audit;

pub use audit::ports::AuditLogReader;
pub use audit::view::{AuditLogView, RequestId};
