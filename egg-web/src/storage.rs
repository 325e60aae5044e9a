//! Local storage helpers

use std::str::FromStr;

use egg_common::{KeyValueStore, Scope, ScopedStorage, StorageError};
use tracing::warn;
use wasm_bindgen_x::{JsCast, JsValue};

/// `window.localStorage`, looked up on every access.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys_x::Storage, StorageError> {
        let window = web_sys_x::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is null".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }
}

/// Prefer `Error.message`, then a string payload, then the debug form.
fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys_x::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn current_page_path() -> Option<String> {
    web_sys_x::window().and_then(|w| w.location().pathname().ok())
}

fn scope_for_path(path: Option<String>) -> Scope {
    match path {
        Some(path) => Scope::for_page(&path),
        None => {
            warn!("Could not read page path, scoping storage to \"/\"");
            Scope::for_page("/")
        }
    }
}

/// A stored value that is absent or fails to parse yields `None`, leaving
/// the caller on its default.
pub(crate) fn parse_stored<T: FromStr>(stored: Option<&str>) -> Option<T> {
    stored.and_then(|v| v.parse().ok())
}

/// Scope of the current page: `"{pathname}_"`.
pub fn page_scope() -> Scope {
    scope_for_path(current_page_path())
}

pub fn page_storage() -> ScopedStorage<BrowserStorage> {
    ScopedStorage::new(BrowserStorage, page_scope())
}

/// Read `key` under `prefix`, or under the current page if `prefix` is `None`.
pub fn get_local_storage(key: &str, prefix: Option<&str>) -> Option<String> {
    page_storage().get(key, prefix)
}

pub fn set_local_storage(key: &str, value: impl std::fmt::Display, prefix: Option<&str>) {
    page_storage().set(key, value, prefix);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_for_known_path() {
        let scope = scope_for_path(Some("/wasmegg/mission-list/".to_string()));
        assert_eq!(scope.key("ships"), "/wasmegg/mission-list/_ships");
    }

    #[test]
    fn test_scope_falls_back_to_root() {
        assert_eq!(scope_for_path(None), Scope::for_page("/"));
        assert_eq!(scope_for_path(None).as_str(), "/_");
    }

    #[test]
    fn test_parse_stored_value() {
        assert_eq!(parse_stored::<u32>(Some("12")), Some(12));
        assert_eq!(parse_stored::<bool>(Some("true")), Some(true));
    }

    #[test]
    fn test_parse_stored_keeps_default_on_garbage() {
        assert_eq!(parse_stored::<u32>(Some("twelve")), None);
        assert_eq!(parse_stored::<u32>(Some("")), None);
        assert_eq!(parse_stored::<u32>(None), None);
    }
}
