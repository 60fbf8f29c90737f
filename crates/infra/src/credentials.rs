//! Credential storage
//!
//! One durable cell holding the bearer credential, written on sign-in, read
//! by the transport on every request, cleared on 401 or sign-out.
//! [`KeyringCredentialStore`] persists it in the platform keychain;
//! [`MemoryCredentialStore`] backs tests and headless hosts.
//!
//! Storage failures are logged and treated as an absent credential; the
//! session layer then behaves as if the user were signed out, which is the
//! safe direction.

use ecotrack_core::CredentialStore;
use ecotrack_domain::constants::{CREDENTIAL_SERVICE_NAME, CREDENTIAL_STORAGE_KEY};
use keyring::Entry;
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Platform-keychain credential store
pub struct KeyringCredentialStore {
    service_name: String,
}

impl KeyringCredentialStore {
    /// Store under the default service name
    pub fn new() -> Self {
        Self::with_service(CREDENTIAL_SERVICE_NAME)
    }

    /// Store under a specific service name (isolates test runs)
    pub fn with_service(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    fn entry(&self) -> Result<Entry, keyring::Error> {
        Entry::new(&self.service_name, CREDENTIAL_STORAGE_KEY)
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self) -> Option<String> {
        match self.entry().and_then(|e| e.get_password()) {
            Ok(credential) => Some(credential),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(service = %self.service_name, error = %e, "keychain read failed");
                None
            }
        }
    }

    fn set(&self, credential: &str) {
        match self.entry().and_then(|e| e.set_password(credential)) {
            Ok(()) => debug!(service = %self.service_name, "credential stored"),
            Err(e) => warn!(service = %self.service_name, error = %e, "keychain write failed"),
        }
    }

    fn clear(&self) {
        match self.entry().and_then(|e| e.delete_credential()) {
            Ok(()) => debug!(service = %self.service_name, "credential cleared"),
            Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!(service = %self.service_name, error = %e, "keychain delete failed"),
        }
    }
}

/// In-memory credential store for tests and headless hosts
#[derive(Default)]
pub struct MemoryCredentialStore {
    cell: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a credential already present
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self { cell: Mutex::new(Some(credential.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.cell.lock().clone()
    }

    fn set(&self, credential: &str) {
        *self.cell.lock() = Some(credential.to_string());
    }

    fn clear(&self) {
        *self.cell.lock() = None;
    }
}
