//! Shared helpers for facade integration tests

use std::sync::{Arc, OnceLock};

use reportdeck_common::{MemorySessionStorage, SessionStore};
use reportdeck_domain::{UserRecord, UserRole};

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A session with no stored identity
pub fn empty_session() -> SessionStore {
    SessionStore::new(Arc::new(MemorySessionStorage::new()))
}

/// A session logged in as the standing test admin
pub fn admin_session() -> SessionStore {
    let session = empty_session();
    let user = UserRecord {
        id: 1,
        email: "admin@example.org".into(),
        full_name: "Site Admin".into(),
        role: UserRole::Admin,
        phone_number: None,
        domain: None,
    };
    session.login("t1", &user);
    session
}
