//! Browser `localStorage` backend for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the web-sys storage glue behind [`ThemeStorage`] so the theme
//! store never touches browser APIs directly. Native builds report
//! [`StorageError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::theme::{StorageError, ThemeStorage};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Read { key: key.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no localStorage to read {key}");
            Err(StorageError::Unavailable)
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write { key: key.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no localStorage to write {key}={value}");
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}
