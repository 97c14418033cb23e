//! `localStorage` persistence for the share password cache.
//!
//! The cache lives under `config::SHARE_PASSWORDS_KEY` as one JSON object
//! mapping share names to passwords. It is read once when the app mounts and
//! written back only after a password is remembered or forgotten, so opening
//! shares never touches storage. A value that no longer parses is treated as
//! an empty cache and overwritten on the next write. Native builds see empty
//! storage and drop writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn write_raw(key: &str, raw: &str) {
    #[cfg(feature = "csr")]
    {
        let stored = local_storage().is_some_and(|storage| storage.set_item(key, raw).is_ok());
        if !stored {
            log::warn!("could not write {key} to localStorage; cached passwords last until reload");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, raw);
    }
}

/// Parse a stored value, logging and discarding anything malformed.
fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    serde_json::from_str(raw)
        .map_err(|e| log::warn!("discarding malformed {key} in localStorage: {e}"))
        .ok()
}

/// Read the value stored under `key`; `None` when absent or malformed.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    decode(key, &read_raw(key)?)
}

/// Replace the value stored under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => write_raw(key, &raw),
        Err(e) => log::warn!("could not encode {key} for localStorage: {e}"),
    }
}
