//! Storage for the opaque bearer credential.
//!
//! The token itself is issued and validated by the backend; the client only
//! attaches it to requests and discards it when the backend rejects it. The
//! store is a trait so a host application can back it with whatever secure
//! storage it has; the default keeps it in memory for the session.

use std::sync::Mutex;

/// Holds the bearer token for the current session.
pub trait CredentialStore: Send + Sync {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    fn set(&self, token: String);

    /// Discard the stored token.
    fn clear(&self);
}

/// A [CredentialStore] that lives for the process only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `token`, for sessions resumed from an
    /// externally persisted credential.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: String) {
        *self.token.lock().unwrap() = Some(token);
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}
