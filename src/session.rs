//! Session Context
//!
//! Holds the bearer token issued at login. Injected into the API client and
//! the navigation guard; login is the only writer.

use std::sync::{Arc, RwLock};

use crate::config::ClientConfig;
use crate::error::SessionError;

/// Storage key for the persisted token
pub const TOKEN_KEY: &str = "access_token";

/// Persisted session state
pub trait SessionStore: Send + Sync {
    /// Raw stored value, if any
    fn load(&self) -> Option<String>;

    /// Persist a freshly issued token
    fn store_token(&self, token: &str) -> Result<(), SessionError>;

    /// Current token; an empty stored value counts as absent
    fn token(&self) -> Option<String> {
        self.load().filter(|token| !token.is_empty())
    }

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Pick the store for the current target
pub fn default_session(config: &ClientConfig) -> Arc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Arc::new(LocalStorageSession)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match &config.session_file {
            Some(path) => Arc::new(FileSession::new(path.clone())),
            None => Arc::new(MemorySession::new()),
        }
    }
}

// ========================
// In-memory
// ========================

/// Process-local session; also the test double
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }
}

// ========================
// File-backed (native shells)
// ========================

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSession;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::path::{Path, PathBuf};

    use serde::{Deserialize, Serialize};

    use super::SessionStore;
    use crate::error::SessionError;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct StoredSession {
        access_token: Option<String>,
    }

    /// Token persisted as a small JSON document on disk
    #[derive(Debug, Clone)]
    pub struct FileSession {
        path: PathBuf,
    }

    impl FileSession {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> Result<Option<StoredSession>, SessionError> {
            match fs::read_to_string(&self.path) {
                Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl SessionStore for FileSession {
        fn load(&self) -> Option<String> {
            match self.read() {
                Ok(stored) => stored.and_then(|s| s.access_token),
                Err(e) => {
                    log::warn!("[SESSION] Ignoring unreadable {}: {}", self.path.display(), e);
                    None
                }
            }
        }

        fn store_token(&self, token: &str) -> Result<(), SessionError> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let stored = StoredSession {
                access_token: Some(token.to_string()),
            };
            fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
            Ok(())
        }
    }
}

// ========================
// Browser localStorage
// ========================

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorageSession;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{SessionStore, TOKEN_KEY};
    use crate::error::SessionError;

    /// Token kept under `access_token` in `window.localStorage`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageSession;

    impl LocalStorageSession {
        fn storage() -> Result<web_sys::Storage, SessionError> {
            let window = web_sys::window()
                .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?;
            window
                .local_storage()
                .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_string()))
        }
    }

    impl SessionStore for LocalStorageSession {
        fn load(&self) -> Option<String> {
            Self::storage().ok()?.get_item(TOKEN_KEY).ok().flatten()
        }

        fn store_token(&self, token: &str) -> Result<(), SessionError> {
            Self::storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
        }
    }
}
