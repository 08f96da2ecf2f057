//! Typed session facade over a [`SessionStorage`] backend

use std::sync::Arc;

use reportdeck_domain::UserRecord;
use tracing::{info, warn};

use super::storage::SessionStorage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Client-held identity state: auth token plus cached user record
///
/// Both keys are written together by [`login`](Self::login) and removed
/// together by [`logout`](Self::logout), but the store itself does not
/// enforce atomicity between them; a reader can observe one present and the
/// other absent.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Persist the token and user record from a successful login/signup
    pub fn login(&self, token: &str, user: &UserRecord) {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(serialized) => self.storage.set(USER_KEY, &serialized),
            Err(err) => warn!(error = %err, "failed to serialize session user"),
        }
        info!(email = %user.email, role = %user.role, "session established");
    }

    /// Clear both session keys; idempotent
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        info!("session cleared");
    }

    /// The cached user record, or `None` when absent or unparseable
    ///
    /// Malformed persisted data is reported through a diagnostic and treated
    /// as an absent value, never surfaced as an error.
    pub fn current_user(&self) -> Option<UserRecord> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "malformed session user record; treating as absent");
                None
            }
        }
    }

    /// The stored auth token, if any
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// True iff a token is present; freshness and signature are not checked
    pub fn is_authenticated(&self) -> bool {
        self.storage.get(TOKEN_KEY).is_some()
    }
}
