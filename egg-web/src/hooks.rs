use std::fmt::Display;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::storage::{page_storage, parse_stored};

/// A signal backed by a page-scoped localStorage entry.
///
/// Starts at `default` and picks up the stored value once mounted. Every
/// later change is written back under `key`. A stored value that is missing
/// or fails to parse leaves the signal on `default` and the slot untouched
/// until the signal is first changed.
pub fn use_persisted<T>(key: &'static str, default: impl FnOnce() -> T) -> Signal<T>
where
    T: FromStr + Display + Clone + 'static,
{
    let mut value = use_signal(default);
    let mut loaded_from_storage = use_signal(|| false);
    let mut skip_write_back = use_signal(|| false);

    // Load after mount: the JS bridge may not be ready during component init
    use_effect(move || {
        if loaded_from_storage() {
            return;
        }

        let stored = page_storage().get(key, None);
        match parse_stored::<T>(stored.as_deref()) {
            Some(stored) => value.set(stored),
            None => skip_write_back.set(true),
        }
        loaded_from_storage.set(true);
    });

    use_effect(move || {
        let current = value.read().clone();
        if !loaded_from_storage() {
            return;
        }
        if *skip_write_back.peek() {
            skip_write_back.set(false);
            return;
        }
        page_storage().set(key, current, None);
    });

    value
}
