//! # Reportdeck Domain
//!
//! Business domain types and models for the Reportdeck dashboard client.
//!
//! This crate contains:
//! - Wire-format data types (UserRecord, AuditLogEntry, DomainRecord, ...)
//! - Domain error types and Result definitions
//! - Audit-log filter model and its sentinel values
//!
//! ## Architecture
//! - No dependencies on other Reportdeck crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
