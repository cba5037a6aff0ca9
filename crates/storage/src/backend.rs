use std::{collections::BTreeMap, sync::Mutex};

use resistance_gen_domain as domain;

/// String key-value store the records are kept in.
pub trait Backend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;
    fn remove(&self, key: &str) -> Result<(), BackendError>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("{0}")]
    Other(String),
}

impl From<BackendError> for domain::StorageError {
    fn from(value: BackendError) -> Self {
        match value {
            BackendError::Unavailable => domain::StorageError::Unavailable,
            BackendError::Other(message) => domain::StorageError::Other(message.into()),
        }
    }
}

/// The browser's local storage.
///
/// Storage that is disabled or missing (e.g. outside of a browser) is reported as
/// [`BackendError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Browser;

impl Browser {
    fn storage() -> Result<web_sys::Storage, BackendError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(BackendError::Unavailable)
    }
}

impl Backend for Browser {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| BackendError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| BackendError::Other(format!("failed to write {key}: {err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| BackendError::Other(format!("failed to remove {key}: {err:?}")))
    }
}

/// In-process map, used on native hosts and in tests.
#[derive(Debug, Default)]
pub struct Memory {
    entries: Mutex<BTreeMap<String, String>>,
}

impl Memory {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, BackendError> {
        self.entries
            .lock()
            .map_err(|err| BackendError::Other(err.to_string()))
    }
}

impl Backend for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
