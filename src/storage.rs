//! Key-Value Storage Backends
//!
//! The journal persists through this seam: the browser's localStorage in
//! the app, an in-memory map in tests.

use std::collections::BTreeMap;

/// Per-origin string key-value store.
///
/// Failures at the JS boundary are logged and treated as absence; the
/// store itself never transiently fails from the caller's view.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    /// All keys currently present, in unspecified order.
    fn keys(&self) -> Vec<String>;
}

/// The browser's localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = Self::raw() {
            if s.set_item(key, value).is_err() {
                web_sys::console::warn_1(&format!("[storage] failed to write {}", key).into());
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(s) = Self::raw() {
            let _ = s.remove_item(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let Some(s) = Self::raw() else {
            return Vec::new();
        };
        let len = s.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| s.key(i).ok().flatten())
            .collect()
    }
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    map: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.map.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }
}
