// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sled store handle implementation

use super::traits::StoreHandle;
use super::types::{StoreError, StoreResult};
use std::path::Path;

/// Sled-backed store handle
///
/// Uses the default tree of a sled database. Keys and values are stored as
/// UTF-8 bytes; durability comes from sled's background flushing and its
/// flush on drop.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open or create a sled store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(SledStore { db })
    }
}

impl StoreHandle for SledStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .db
            .get(key)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        match value {
            Some(bytes) => Ok(Some(String::from_utf8(bytes.to_vec())?)),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.db
            .insert(key, value.as_bytes())
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.db
            .remove(key)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.db
            .clear()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.db.len())
    }

    fn contains_key(&self, key: &str) -> StoreResult<bool> {
        self.db
            .contains_key(key)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        for result in self.db.iter() {
            let (key, _) = result.map_err(|e| StoreError::Backend(e.to_string()))?;
            keys.push(String::from_utf8(key.to_vec())?);
        }
        Ok(keys)
    }
}
