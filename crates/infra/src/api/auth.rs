//! Auth facade: signup, login, and session delegation
//!
//! Auth failures are normalized into a single human-readable message per
//! operation, preferring the server's structured `message` field. On
//! success the returned token and user record are written into the injected
//! [`SessionStore`] before the raw response is handed back.

use reportdeck_common::SessionStore;
use reportdeck_domain::{AuthResponse, LoginRequest, SignupRequest, UserRecord};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::errors::{ApiError, ErrorBody};
use crate::config::ApiConfig;
use crate::http::HttpClient;

const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";
const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";

/// Facade for the `/auth` endpoints
pub struct AuthApi {
    http: HttpClient,
    base_url: String,
    session: SessionStore,
}

impl AuthApi {
    /// Create the facade against `config`, holding `session` for writes
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let http = super::build_http(config)?;
        Ok(Self { http, base_url: format!("{}/auth", config.base_url), session })
    }

    /// Register a new account
    ///
    /// The role value is upper-cased before transmission (the form submits
    /// mixed case). On success the session is established from the
    /// response.
    pub async fn signup(&self, mut request: SignupRequest) -> Result<AuthResponse, ApiError> {
        request.role = request.role.to_uppercase();
        self.authenticate("/signup", &request, SIGNUP_FALLBACK).await
    }

    /// Authenticate with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.authenticate("/login", &request, LOGIN_FALLBACK).await
    }

    async fn authenticate<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST auth request");

        let builder = self.http.request(Method::POST, &url).json(body);
        let response = match self.http.send(builder).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, url = %url, "auth request failed");
                return Err(ApiError::Auth(fallback.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    if raw.trim().is_empty() { fallback.to_string() } else { raw }
                });
            warn!(%status, url = %url, "authentication rejected");
            return Err(ApiError::Auth(message));
        }

        let auth: AuthResponse = response.json().await.map_err(|err| {
            warn!(error = %err, url = %url, "failed to parse auth response");
            ApiError::Auth(fallback.to_string())
        })?;

        // Session is only established when a token actually came back.
        if !auth.token.is_empty() {
            self.session.login(&auth.token, &auth.user_record());
        }

        info!(email = %auth.email, "authenticated");
        Ok(auth)
    }

    // ---- session delegation (no network) ----

    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.session.current_user()
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The session store this facade writes into
    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
