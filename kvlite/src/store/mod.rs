// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Key-value store backends
//!
//! This module provides trait-based abstractions for string key-value storage,
//! allowing different backends (sled, in-memory) to be used interchangeably.
//!
//! The handles operate on raw strings; JSON encoding happens one layer up in
//! the storage facade.
//!
//! # Architecture
//!
//! ```text
//! Storage (JSON facade, availability tracking)
//!     ↓
//! StoreHandle (string key-value abstraction)
//!     ↓
//! Concrete Implementations (Sled, Memory)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::store::{create_store_handle, StoreKind};
//!
//! // Create a handle
//! let handle = create_store_handle(StoreKind::Sled, "./data")?;
//!
//! // Basic operations
//! handle.set_item("key", "value")?;
//! let value = handle.get_item("key")?;
//! handle.remove_item("key")?;
//! ```

// Core modules
pub mod factory;
pub mod traits;
pub mod types;

// Backend implementations
pub mod memory;
#[cfg(feature = "sled-backend")]
pub mod sled;

// Public API re-exports
pub use factory::create_store_handle;
pub use memory::MemoryStore;
#[cfg(feature = "sled-backend")]
pub use sled::SledStore;
pub use traits::StoreHandle;
pub use types::{StoreError, StoreKind, StoreResult};
