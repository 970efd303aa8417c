use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use super::ConfigError;

const CONFIG_KEY: &str = "/solar-system-sim | config";

/// Reads the TOML config stored under [`CONFIG_KEY`] in local storage.
pub(super) fn read() -> Result<Option<String>, ConfigError> {
    match LocalStorage::get::<String>(CONFIG_KEY) {
        Ok(s) => Ok(Some(s)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
