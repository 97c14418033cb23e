//! Cached share passwords, persisted across reloads.
//!
//! The map is read from `localStorage` once at startup. Nothing is written
//! until the user actually supplies a password, so a fresh browser has no
//! `share_passwords` key at all.

#[cfg(test)]
#[path = "passwords_test.rs"]
mod passwords_test;

use std::collections::BTreeMap;

use crate::config::SHARE_PASSWORDS_KEY;
use crate::util::storage;

/// Share name -> password.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharePasswords {
    entries: BTreeMap<String, String>,
}

impl SharePasswords {
    /// Read the persisted map; absent or malformed storage yields an empty cache.
    pub fn load() -> Self {
        storage::load_json::<BTreeMap<String, String>>(SHARE_PASSWORDS_KEY)
            .map(Self::from_entries)
            .unwrap_or_default()
    }

    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Cached password for `name`. Empty strings count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str).filter(|p| !p.is_empty())
    }

    pub fn remember(&mut self, name: &str, password: &str) {
        self.entries.insert(name.to_owned(), password.to_owned());
        self.persist();
    }

    pub fn forget(&mut self, name: &str) {
        if self.entries.remove(name).is_some() {
            self.persist();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        storage::save_json(SHARE_PASSWORDS_KEY, &self.entries);
    }
}
