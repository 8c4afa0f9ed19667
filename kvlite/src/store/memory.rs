// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory store handle implementation for testing

use super::traits::StoreHandle;
use super::types::StoreResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory store handle
///
/// Clones share the same underlying map, so a clone kept aside by a test can
/// observe the raw strings written through the facade.
#[derive(Clone)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreHandle for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.data.write().clear();
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.data.read().len())
    }

    fn contains_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }
}
