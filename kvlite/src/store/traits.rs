// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Store handle trait
//!
//! This module defines the capability every backend must provide: a
//! string-keyed, string-valued persistent map. The facade owns value
//! serialization; handles only move raw strings.

use super::types::StoreResult;

/// Trait for a string key-value store backing the facade
///
/// Keys and values are UTF-8 strings. Every method is synchronous and atomic
/// at single-key granularity; no method spans multiple keys atomically.
pub trait StoreHandle: Send + Sync {
    /// Read the raw string stored at `key`
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` at `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; succeeds even when the key is absent
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// Remove every key in the store
    fn clear(&self) -> StoreResult<()>;

    /// Number of keys currently stored
    fn len(&self) -> StoreResult<usize>;

    /// Check if a key exists
    fn contains_key(&self, key: &str) -> StoreResult<bool>;

    /// All keys currently stored, in no particular order
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Check if the store holds no keys
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
