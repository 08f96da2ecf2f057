//! Client session state: auth token plus cached user record
//!
//! The session is plain key-value state with browser-storage semantics:
//! synchronous access, infallible writes, single-writer assumed. The storage
//! backend is injected so facades stay unit-testable without touching disk.

mod storage;
mod store;

pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
pub use store::SessionStore;
