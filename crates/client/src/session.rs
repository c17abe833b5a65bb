use shared_types::{AppError, CREDENTIAL_STORAGE_KEY};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A named-slot key/value store that survives application restarts.
///
/// Only one slot (`jwt_token`) is used, but the trait mirrors the browser
/// storage shape so every backend behaves the same.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process store. Used by tests and when no persistent storage exists.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::storage("Credential storage is unavailable"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::storage("Credential storage is unavailable"))?;
        slots.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, for the web build.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// `None` when the browser denies storage access (private mode, sandboxed
    /// iframes).
    pub fn open() -> Option<Self> {
        Self::storage().map(|_| BrowserStorage)
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()
            .ok_or_else(|| AppError::storage("Browser storage is unavailable"))?
            .set_item(key, value)
            .map_err(|_| AppError::storage("Failed to write browser storage"))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::storage()
            .ok_or_else(|| AppError::storage("Browser storage is unavailable"))?
            .remove_item(key)
            .map_err(|_| AppError::storage("Failed to clear browser storage"))
    }
}

/// One file per slot under a data directory, for desktop and mobile builds.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CredentialStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(self.path(key), value))
            .map_err(|e| {
                tracing::warn!(error = %e, dir = %self.dir.display(), "Failed to write credential file");
                AppError::storage("Failed to save credential")
            })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to remove credential file");
                Err(AppError::storage("Failed to clear credential"))
            }
        }
    }
}

/// Whether a credential is currently stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// The application's credential holder.
///
/// Cheap to clone; all clones share one store. Provided to the UI through
/// context, never looked up globally.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// A session backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The persistent store for the current platform, falling back to memory
    /// when none is available.
    pub fn persistent(data_dir: Option<&str>) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = data_dir;
            match BrowserStorage::open() {
                Some(storage) => Self::new(Arc::new(storage)),
                None => {
                    tracing::warn!("localStorage unavailable, credential will not persist");
                    Self::in_memory()
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(Arc::new(FileStorage::new(data_dir.unwrap_or("."))))
        }
    }

    /// Store the credential, overwriting any previous one. The value is not
    /// inspected.
    pub fn set_credential(&self, token: &str) -> Result<(), AppError> {
        self.store.set(CREDENTIAL_STORAGE_KEY, token)
    }

    /// The stored credential. Empty values count as absent.
    pub fn credential(&self) -> Option<String> {
        self.store
            .get(CREDENTIAL_STORAGE_KEY)
            .filter(|t| !t.is_empty())
    }

    pub fn clear_credential(&self) -> Result<(), AppError> {
        self.store.remove(CREDENTIAL_STORAGE_KEY)
    }

    pub fn state(&self) -> SessionState {
        if self.credential().is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}
