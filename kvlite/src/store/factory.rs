// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Store handle factory
//!
//! This module provides the factory function for creating store handles
//! based on configuration. It handles the instantiation of the different
//! backend implementations.

use super::traits::StoreHandle;
use super::types::{StoreKind, StoreResult};
use std::path::Path;

/// Factory function to create a store handle based on configuration
///
/// This is the main entry point for building backends without naming a
/// concrete type. It takes a store kind and a path, then returns the
/// matching implementation as a trait object.
///
/// # Arguments
/// * `kind` - The backend to build (sled, memory)
/// * `path` - The filesystem path for on-disk backends; ignored by `Memory`
///
/// # Returns
/// A boxed trait object that implements StoreHandle
///
/// # Examples
/// ```ignore
/// use kvlite::{create_store_handle, StoreKind};
///
/// let handle = create_store_handle(StoreKind::Sled, "./data")?;
/// handle.set_item("key", "value")?;
/// ```
pub fn create_store_handle<P: AsRef<Path>>(
    kind: StoreKind,
    path: P,
) -> StoreResult<Box<dyn StoreHandle>> {
    match kind {
        #[cfg(feature = "sled-backend")]
        StoreKind::Sled => {
            let store = super::sled::SledStore::open(path)?;
            Ok(Box::new(store) as Box<dyn StoreHandle>)
        }
        #[cfg(not(feature = "sled-backend"))]
        StoreKind::Sled => Err(super::types::StoreError::Backend(
            "sled backend not enabled; build with the `sled-backend` feature".to_string(),
        )),
        StoreKind::Memory => {
            Ok(Box::new(super::memory::MemoryStore::new()) as Box<dyn StoreHandle>)
        }
    }
}
