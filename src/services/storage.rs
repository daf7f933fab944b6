//! Persisted preference capability.
//!
//! The sidebar's collapse preference survives page reloads through a
//! key-value store. Components only see the [`PreferenceStore`] trait; the
//! browser implementation wraps `window.localStorage`, and tests substitute
//! an in-memory map.

/// Key-value store for preferences that survive page reloads.
///
/// Values are plain strings so the stored representation stays compatible
/// with what the host pages already keep in local storage (`"true"` /
/// `"false"` under the sidebar key).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::PreferenceStore;
    use crate::services::logging::Logger;

    /// `window.localStorage`-backed store.
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        /// Returns `None` when local storage is unavailable, e.g. the page
        /// runs outside a browsing context or storage access is denied.
        pub fn new() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl PreferenceStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if self.storage.set_item(key, value).is_err() {
                Logger::warn_with_component("storage", &format!("failed to persist {key}"));
            }
        }
    }
}
