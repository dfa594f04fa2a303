//! Key-addressed record storage.
//!
//! The record store is the persistence primitive behind every collection:
//! values are JSON-encoded and stored whole under a stable key, with a typed
//! default returned for keys nothing has been stored under yet. There is no
//! partial update at this layer; a write replaces the entire value for its
//! key.

mod medium;
mod repository;

pub use medium::{FileMedium, MemoryMedium, StorageMedium};
pub use repository::*;

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;

/// Generic key to JSON value store over a pluggable medium.
///
/// One mutex guards the medium so a [`RecordStore::update`] cycle (load,
/// mutate, store) cannot interleave with another caller on any key. The
/// store is constructed once at startup and handed to the repository; tests
/// substitute the in-memory medium via [`RecordStore::in_memory`].
pub struct RecordStore {
    medium: Mutex<Box<dyn StorageMedium>>,
}

impl RecordStore {
    /// Open a store backed by one file per key under `dir`.
    pub fn open(dir: &Path) -> Self {
        Self::with_medium(Box::new(FileMedium::new(dir)))
    }

    /// Open a store backed by process memory.
    pub fn in_memory() -> Self {
        Self::with_medium(Box::new(MemoryMedium::new()))
    }

    pub fn with_medium(medium: Box<dyn StorageMedium>) -> Self {
        Self {
            medium: Mutex::new(medium),
        }
    }

    /// Read the value stored under `key`, or `default` when nothing has been
    /// stored there yet. A missing key is never an error; a stored value
    /// that fails to decode is.
    pub fn read<T>(&self, key: &str, default: T) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let medium = self.lock();
        match medium.load(key).map_err(StoreError::Io)? {
            Some(raw) => decode(key, &raw),
            None => Ok(default),
        }
    }

    /// Serialize `value` and store it under `key`, fully replacing any prior
    /// value.
    pub fn write<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialize)?;
        let mut medium = self.lock();
        medium.store(key, &raw).map_err(StoreError::Io)
    }

    /// Load the value under `key` (or `default`), apply `mutate`, and store
    /// the result back. The medium lock is held across the whole cycle, so
    /// concurrent callers cannot interleave their read-modify-write
    /// sequences.
    pub fn update<T, F>(&self, key: &str, default: T, mutate: F) -> Result<(), StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let mut medium = self.lock();
        let mut value = match medium.load(key).map_err(StoreError::Io)? {
            Some(raw) => decode(key, &raw)?,
            None => default,
        };
        mutate(&mut value);
        let raw = serde_json::to_string(&value).map_err(StoreError::Serialize)?;
        medium.store(key, &raw).map_err(StoreError::Io)
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn StorageMedium>> {
        self.medium.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}
