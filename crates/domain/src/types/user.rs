//! User and authentication types
//!
//! These mirror the JSON bodies exchanged with the `/auth` endpoints. The
//! backend sends camelCase field names throughout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ReportdeckError;

/// Role assigned to a platform account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "OPS")]
    Ops,
}

impl UserRole {
    /// Upper-case wire representation (`"USER"`, `"ADMIN"`, `"OPS"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::Ops => "OPS",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ReportdeckError;

    /// Case-insensitive parse; the signup form submits mixed-case values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            "OPS" => Ok(Self::Ops),
            other => Err(ReportdeckError::InvalidInput(format!("Unknown role: {other}"))),
        }
    }
}

/// User record cached in the session after login/signup
///
/// Immutable once stored; only a fresh login/signup response replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

/// Response body returned by `/auth/login` and `/auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Token scheme, `"Bearer"` unless the backend says otherwise
    #[serde(default = "default_token_type", rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl AuthResponse {
    /// Project the user fields out of the auth response for session storage
    pub fn user_record(&self) -> UserRecord {
        UserRecord {
            id: self.id,
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            phone_number: self.phone_number.clone(),
            domain: self.domain.clone(),
        }
    }
}

/// Request body for `/auth/signup`
///
/// `role` stays a free-form string here; the auth facade upper-cases it
/// before transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub domain: String,
    pub password: String,
    pub role: String,
}

/// Request body for `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
