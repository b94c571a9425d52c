//! Session store for the bearer token.
//!
//! The token is an opaque credential issued by the backend on login. It
//! lives in a context value provided at the app root - the single writer -
//! and is persisted under a fixed key so a page reload stays signed in.
//! The durable side is localStorage in the browser; under SSR and in tests
//! a process-local store stands in.

use dioxus::prelude::*;

/// Storage key for the persisted token.
pub const TOKEN_KEY: &str = "bluelink-token";

/// Injectable session context. Cheap to copy; every copy shares one signal.
#[derive(Clone, Copy)]
pub struct Session {
    token: Signal<Option<String>>,
}

impl Session {
    /// The current token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Persist a freshly issued token and update in-memory state.
    pub fn set_token(&mut self, token: String) {
        storage::save(TOKEN_KEY, &token);
        self.token.set(Some(token));
    }

    /// Drop the session: explicit logout or a rejected token.
    pub fn clear(&mut self) {
        storage::remove(TOKEN_KEY);
        self.token.set(None);
    }
}

/// Provide the session at the app root, loading any persisted token once.
pub fn use_session_provider() -> Session {
    use_context_provider(|| Session {
        token: Signal::new(storage::load(TOKEN_KEY)),
    })
}

/// The session provided by the nearest [`use_session_provider`].
pub fn use_session() -> Session {
    use_context()
}

/// Durable key/value seam: localStorage in the browser, a process-local
/// map otherwise. Storage failures degrade to a per-tab session - the
/// in-memory signal still updates.
mod storage {
    #[cfg(target_arch = "wasm32")]
    pub fn load(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save(key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("could not persist {key} to localStorage");
                }
            }
            None => tracing::warn!("localStorage unavailable, {key} kept in memory only"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    use std::collections::HashMap;
    #[cfg(not(target_arch = "wasm32"))]
    use std::sync::{Mutex, OnceLock};

    #[cfg(not(target_arch = "wasm32"))]
    fn store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(key: &str) -> Option<String> {
        store().lock().ok()?.get(key).cloned()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(key: &str, value: &str) {
        if let Ok(mut store) = store().lock() {
            store.insert(key.to_string(), value.to_string());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn remove(key: &str) {
        if let Ok(mut store) = store().lock() {
            store.remove(key);
        }
    }
}
