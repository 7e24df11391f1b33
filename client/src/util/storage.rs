//! `localStorage`-backed session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue behind `worklink::SessionStorage`
//! so the session manager never touches the browser directly. On the server
//! (and in native tests) entries live in an in-process map for the lifetime
//! of the value.

use worklink::SessionStorage;
#[cfg(not(feature = "hydrate"))]
use worklink::MemoryStorage;

#[derive(Debug, Default)]
pub struct BrowserStorage {
    #[cfg(not(feature = "hydrate"))]
    fallback: MemoryStorage,
}

impl BrowserStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of '{key}' failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of '{key}' failed: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("localStorage remove of '{key}' failed: {e:?}");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.fallback.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.fallback.remove(key);
    }
}
