// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! JSON storage facade - typed access over a string key-value store
//!
//! This module bridges application values and the low-level store handles.
//! It handles JSON serialization/deserialization and availability tracking,
//! working with any StoreHandle implementation (Sled, Memory).
//!
//! Reads and writes are deliberately asymmetric: a value that fails to decode
//! is treated as absent (with a warning), while a value that fails to encode
//! is an error. A stale or corrupt entry should never take the caller down,
//! but silently dropping a write would lose data.

use crate::availability::{probe, Availability};
use crate::error::{StorageError, StorageResult};
use crate::store::{create_store_handle, MemoryStore, StoreHandle, StoreKind};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Storage facade that persists serde-serializable values as JSON strings
/// Works with any StoreHandle implementation to hold the encoded entries
pub struct Storage {
    handle: Option<Box<dyn StoreHandle>>,
    availability: Availability,
}

impl Storage {
    /// Create a facade over an injected store handle
    ///
    /// Runs the availability probe once; the outcome is cached until
    /// [`refresh_availability`](Storage::refresh_availability) is called.
    pub fn new(handle: Box<dyn StoreHandle>) -> Self {
        let availability = probe(handle.as_ref());
        Storage {
            handle: Some(handle),
            availability,
        }
    }

    /// Create a facade over a backend chosen by kind and path
    ///
    /// This never fails: if the backend cannot be opened the facade comes up
    /// detached (not present, not enabled) and every operation returns
    /// [`StorageError::Unavailable`]. Callers that want to react should check
    /// [`is_available`](Storage::is_available) after construction.
    pub fn open<P: AsRef<Path>>(kind: StoreKind, path: P) -> Self {
        debug!(
            "Opening {} storage at {}",
            kind,
            path.as_ref().display()
        );
        match create_store_handle(kind, path) {
            Ok(handle) => Self::new(handle),
            Err(e) => {
                info!("Storage backend could not be opened, continuing detached: {}", e);
                Storage {
                    handle: None,
                    availability: Availability::DETACHED,
                }
            }
        }
    }

    /// Create a facade over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    fn handle(&self) -> StorageResult<&dyn StoreHandle> {
        self.handle.as_deref().ok_or(StorageError::Unavailable)
    }

    /// Whether the backend exists and passed its last probe (no I/O)
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// The cached availability state from the last probe
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Re-run the availability probe and return the new `is_available()`
    ///
    /// Availability is otherwise computed once at construction, so a backend
    /// that recovers (or breaks) afterwards is only observed through this.
    pub fn refresh_availability(&mut self) -> bool {
        self.availability = match self.handle.as_deref() {
            Some(handle) => probe(handle),
            None => Availability::DETACHED,
        };
        self.is_available()
    }

    /// Load and decode the value stored under a key
    ///
    /// A missing key yields `Ok(None)`. A stored value that fails to decode
    /// also yields `Ok(None)` after logging a warning; only backend failures
    /// surface as errors.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let handle = self.handle()?;
        let raw = match handle.get_item(key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Discarding malformed stored value for key '{}': {}", key, e);
                Ok(None)
            }
        }
    }

    /// Encode a value as JSON and store it under a key
    ///
    /// Returns the value back so callers can keep using it after the write.
    /// Unlike reads, an encoding failure here is a hard error.
    pub fn set<T: Serialize>(&self, key: &str, value: T) -> StorageResult<T> {
        let handle = self.handle()?;
        let raw = Self::serialize(&value)?;
        handle.set_item(key, &raw)?;
        Ok(value)
    }

    /// Store a value, or remove the key when given `None`
    pub fn set_or_remove<T: Serialize>(
        &self,
        key: &str,
        value: Option<T>,
    ) -> StorageResult<Option<T>> {
        match value {
            Some(value) => Ok(Some(self.set(key, value)?)),
            None => {
                self.remove(key)?;
                Ok(None)
            }
        }
    }

    /// Remove the value stored under a key; absent keys are a no-op
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        self.handle()?.remove_item(key)?;
        Ok(())
    }

    /// Remove each of the listed keys in order
    ///
    /// Absent keys are skipped silently and unlisted keys are untouched.
    /// Removals are independent; a failure partway leaves earlier removals
    /// in place.
    pub fn flush(&self, keys: &[&str]) -> StorageResult<()> {
        let handle = self.handle()?;
        for key in keys {
            handle.remove_item(key)?;
        }
        Ok(())
    }

    /// Remove every key the store holds, including keys written by other
    /// users of the same handle
    pub fn clear(&self) -> StorageResult<()> {
        self.handle()?.clear()?;
        Ok(())
    }

    /// Whether any value is stored under a key
    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.handle()?.contains_key(key)?)
    }

    /// Number of entries the store holds
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.handle()?.len()?)
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.handle()?.is_empty()?)
    }

    /// All keys the store currently holds
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.handle()?.keys()?)
    }

    /// Encode a value to the compact JSON form the facade stores
    pub fn serialize<T: Serialize>(value: &T) -> StorageResult<String> {
        serde_json::to_string(value).map_err(StorageError::Serialization)
    }

    /// Decode a raw stored string, yielding `None` on malformed input
    pub fn deserialize<T: DeserializeOwned>(raw: &str) -> Option<T> {
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding malformed stored value: {}", e);
                None
            }
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("availability", &self.availability)
            .finish_non_exhaustive()
    }
}
