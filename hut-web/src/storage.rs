//! `localStorage` binding for the core key/value store.
use crate::dom;
use hut_core::{KeyValueStore, StorageError};

/// Stateless handle; every call goes back to `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().map_err(|_| StorageError::Unavailable)?;
        storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: dom::js_error_message(&err),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|_| StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: dom::js_error_message(&err),
        })
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|_| StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: dom::js_error_message(&err),
        })
    }
}

/// Saved language preference, if any.
#[must_use]
pub fn saved_language() -> Option<String> {
    match BrowserStore.get(hut_core::constants::PREFERRED_LANGUAGE_KEY) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("could not read language preference: {err}");
            None
        }
    }
}

pub fn save_language(code: &str) {
    if let Err(err) = BrowserStore.set(hut_core::constants::PREFERRED_LANGUAGE_KEY, code) {
        log::warn!("could not persist language preference: {err}");
    }
}
