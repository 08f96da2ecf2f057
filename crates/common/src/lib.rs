//! # Reportdeck Common
//!
//! Shared client-side infrastructure that does not talk to the network.
//!
//! Currently this is the session layer: a key-value storage port with
//! in-memory and file-backed implementations, and the typed [`SessionStore`]
//! facade the API facades are constructed with.

pub mod session;

pub use session::{FileSessionStorage, MemorySessionStorage, SessionStorage, SessionStore};
