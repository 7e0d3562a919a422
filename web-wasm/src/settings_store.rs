//! Settings persistence in local storage
//!
//! Four scalar values under fixed keys, read at startup and written
//! only on an explicit save. When the backing store is unusable
//! (private browsing, quota) the session runs on in-memory settings.

use bid_writer_common::settings::{DEFAULT_MODEL, DEFAULT_PROVIDER};
use bid_writer_common::{Error, Result, Settings};
use gloo::storage::{LocalStorage, Storage};

const KEY_API_KEY: &str = "custom_api_key";
const KEY_PROVIDER: &str = "ai_provider";
const KEY_MODEL: &str = "ai_model";
const KEY_USE_CUSTOM_KEY: &str = "use_custom_key";

/// Read persisted settings, with the documented default per missing key
pub fn load() -> Settings {
    Settings {
        api_key: LocalStorage::get(KEY_API_KEY).unwrap_or_default(),
        provider: LocalStorage::get(KEY_PROVIDER).unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
        model: LocalStorage::get(KEY_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        use_custom_key: LocalStorage::get(KEY_USE_CUSTOM_KEY).unwrap_or(false),
    }
}

/// Persist all four fields in one pass
///
/// The first failing write aborts with `Error::Storage`; the caller
/// keeps the committed values in memory for the rest of the session.
pub fn save(settings: &Settings) -> Result<()> {
    LocalStorage::set(KEY_API_KEY, &settings.api_key).map_err(storage_error)?;
    LocalStorage::set(KEY_PROVIDER, &settings.provider).map_err(storage_error)?;
    LocalStorage::set(KEY_MODEL, &settings.model).map_err(storage_error)?;
    LocalStorage::set(KEY_USE_CUSTOM_KEY, settings.use_custom_key).map_err(storage_error)?;
    Ok(())
}

fn storage_error(err: gloo::storage::errors::StorageError) -> Error {
    Error::Storage(err.to_string())
}
