//! Test utilities for KVLite integration tests
//!
//! Provides fault-injection store doubles built on the public StoreHandle
//! trait:
//! - FailingStore: every operation fails
//! - TogglingStore: health can be flipped at runtime to simulate outages

// Not every test binary uses every fixture
#![allow(dead_code)]

use kvlite::{MemoryStore, StoreError, StoreHandle, StoreResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Initialize test logging; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Store double whose every operation fails with a backend error
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> StoreResult<T> {
        Err(StoreError::Backend("simulated store failure".to_string()))
    }
}

impl StoreHandle for FailingStore {
    fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Self::fail()
    }

    fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Self::fail()
    }

    fn remove_item(&self, _key: &str) -> StoreResult<()> {
        Self::fail()
    }

    fn clear(&self) -> StoreResult<()> {
        Self::fail()
    }

    fn len(&self) -> StoreResult<usize> {
        Self::fail()
    }

    fn contains_key(&self, _key: &str) -> StoreResult<bool> {
        Self::fail()
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Self::fail()
    }
}

/// Store double backed by a MemoryStore whose health can be toggled
///
/// While healthy it behaves like the inner memory store; while unhealthy
/// every operation fails. The switch is shared, so tests keep a handle to
/// it after the store has been boxed into a facade.
pub struct TogglingStore {
    healthy: Arc<AtomicBool>,
    inner: MemoryStore,
}

impl TogglingStore {
    pub fn new() -> Self {
        TogglingStore {
            healthy: Arc::new(AtomicBool::new(true)),
            inner: MemoryStore::new(),
        }
    }

    /// Shared flag controlling whether operations succeed
    pub fn switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.healthy)
    }

    /// A clone of the inner store sharing the same contents
    pub fn inner(&self) -> MemoryStore {
        self.inner.clone()
    }

    fn check(&self) -> StoreResult<()> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Backend("simulated outage".to_string()))
        }
    }
}

impl StoreHandle for TogglingStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.remove_item(key)
    }

    fn clear(&self) -> StoreResult<()> {
        self.check()?;
        self.inner.clear()
    }

    fn len(&self) -> StoreResult<usize> {
        self.check()?;
        self.inner.len()
    }

    fn contains_key(&self, key: &str) -> StoreResult<bool> {
        self.check()?;
        self.inner.contains_key(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        self.check()?;
        self.inner.keys()
    }
}
