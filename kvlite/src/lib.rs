// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! KVLite - A lightweight JSON key-value storage facade
//!
//! KVLite wraps a string key-value store behind a typed facade: values go in
//! as any serde-serializable type and come back out the same way, with the
//! JSON encoding handled transparently in between.
//!
//! # Features
//!
//! - **Typed Access**: `get`/`set` with any `Serialize`/`Deserialize` type
//! - **Pluggable Backends**: Trait-based store seam with in-memory and
//!   embedded Sled implementations
//! - **Availability Probing**: A write/remove round-trip at construction
//!   tells callers whether the backend is actually usable
//! - **Fail-Soft Reads**: Corrupt or stale stored values read back as absent
//!   instead of failing the caller
//!
//! # Usage
//!
//! ```ignore
//! use kvlite::{Storage, StoreKind};
//!
//! let storage = Storage::open(StoreKind::Sled, "./data");
//! if storage.is_available() {
//!     storage.set("greeting", "hello")?;
//!     let value: Option<String> = storage.get("greeting")?;
//! }
//! ```

// Public modules - exposed to external users
pub mod store;

// Internal modules - only visible within kvlite crate
pub(crate) mod availability;
pub(crate) mod error;
pub(crate) mod facade;

// Re-export the public API - Storage is the main entry point
pub use availability::Availability;
pub use error::{StorageError, StorageResult};
pub use facade::Storage;
pub use store::{create_store_handle, MemoryStore, StoreError, StoreHandle, StoreKind, StoreResult};

#[cfg(feature = "sled-backend")]
pub use store::SledStore;

/// KVLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// KVLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
