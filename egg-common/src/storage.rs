//! Page-scoped key-value storage
//!
//! Keys are namespaced as `"{prefix}{key}"`. The default prefix comes from a
//! [`Scope`] supplied by the caller (in the browser, the current page path
//! followed by `_`), and each call may override it with an explicit prefix.
//!
//! Every operation comes in two flavours. The `try_*` methods return a
//! `Result` so callers can tell a missing key from unavailable storage. The
//! plain methods log failures and collapse them: reads become `None`, writes
//! become no-ops.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage object could be obtained (disabled, sandboxed, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The storage object rejected the operation (security error, quota)
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// A string-to-string store with synchronous get/set by key.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Key prefix applied to every key that has no explicit prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    /// Scope for a page: `"{path}_"`.
    pub fn for_page(path: &str) -> Self {
        Self {
            prefix: format!("{path}_"),
        }
    }

    /// Use `prefix` verbatim.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    pub fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

/// A [`KeyValueStore`] paired with the scope used for unprefixed keys.
pub struct ScopedStorage<S> {
    store: S,
    scope: Scope,
}

impl<S: KeyValueStore> ScopedStorage<S> {
    pub fn new(store: S, scope: Scope) -> Self {
        Self { store, scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn full_key(&self, key: &str, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}{key}"),
            None => self.scope.key(key),
        }
    }

    pub fn try_get(
        &self,
        key: &str,
        prefix: Option<&str>,
    ) -> Result<Option<String>, StorageError> {
        self.store.get_item(&self.full_key(key, prefix))
    }

    /// Read a value, logging and discarding any storage failure.
    pub fn get(&self, key: &str, prefix: Option<&str>) -> Option<String> {
        let full_key = self.full_key(key, prefix);
        match self.store.get_item(&full_key) {
            Ok(value) => value,
            Err(e) => {
                error!(key = %full_key, "Failed to read from storage: {}", e);
                None
            }
        }
    }

    pub fn try_set(
        &self,
        key: &str,
        value: impl Display,
        prefix: Option<&str>,
    ) -> Result<(), StorageError> {
        self.store.set_item(&self.full_key(key, prefix), &value.to_string())
    }

    /// Write a value, logging and discarding any storage failure.
    pub fn set(&self, key: &str, value: impl Display, prefix: Option<&str>) {
        let full_key = self.full_key(key, prefix);
        if let Err(e) = self.store.set_item(&full_key, &value.to_string()) {
            error!(key = %full_key, "Failed to write to storage: {}", e);
        }
    }

    /// A value that fails to parse reads as absent.
    pub fn get_parsed<T: FromStr>(&self, key: &str, prefix: Option<&str>) -> Option<T> {
        self.get(key, prefix).and_then(|v| v.parse().ok())
    }

    pub fn get_bool(&self, key: &str, prefix: Option<&str>) -> Option<bool> {
        self.get(key, prefix).map(|v| v == "true")
    }

    pub fn set_bool(&self, key: &str, value: bool, prefix: Option<&str>) {
        self.set(key, if value { "true" } else { "false" }, prefix);
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str, prefix: Option<&str>) -> Option<T> {
        self.get(key, prefix).and_then(|v| serde_json::from_str(&v).ok())
    }

    pub fn try_set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        prefix: Option<&str>,
    ) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.try_set(key, encoded, prefix)
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T, prefix: Option<&str>) {
        if let Err(e) = self.try_set_json(key, value, prefix) {
            error!(key = %self.full_key(key, prefix), "Failed to write to storage: {}", e);
        }
    }
}

/// In-process store for tests and hosts without a browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Composite keys currently stored, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.items.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
