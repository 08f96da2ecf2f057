//! # Reportdeck Infra
//!
//! Network-facing infrastructure: the HTTP client wrapper, the typed API
//! facades (auth, audit-log, domain CRUD), and configuration loading.
//!
//! Each facade is a thin typed wrapper translating a method call into one
//! HTTP request against the backend's REST API and returning the parsed
//! response body or a classified [`ApiError`].

pub mod api;
pub mod config;
pub mod http;

pub use api::{ApiError, AuditLogApi, AuthApi, DomainApi};
pub use config::ApiConfig;
pub use http::HttpClient;
