//! Wire-format data types shared across the client layer

pub mod audit;
pub mod domain;
pub mod user;

pub use audit::{AuditLogEntry, LogFilter};
pub use domain::DomainRecord;
pub use user::{AuthResponse, LoginRequest, SignupRequest, UserRecord, UserRole};
