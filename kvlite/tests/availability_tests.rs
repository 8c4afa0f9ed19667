//! Integration tests for availability probing and detached facades
//!
//! Availability is probed once at construction and cached; these tests
//! cover the probe outcome, explicit re-probing, and the facade that comes
//! up with no backend at all.

#[path = "testutils/mod.rs"]
mod testutils;

use kvlite::{Availability, Storage, StorageError};
use std::sync::atomic::Ordering;
use testutils::{init_logging, FailingStore, TogglingStore};

#[test]
fn test_failed_probe_marks_storage_unavailable() {
    init_logging();

    let storage = Storage::new(Box::new(FailingStore));

    assert!(!storage.is_available());
    assert_eq!(
        storage.availability(),
        Availability {
            present: true,
            enabled: false,
        }
    );
}

#[test]
fn test_operations_on_broken_backend_return_store_errors() {
    init_logging();

    let storage = Storage::new(Box::new(FailingStore));

    let result: Result<Option<String>, _> = storage.get("k");
    assert!(matches!(result, Err(StorageError::Store(_))));
    assert!(matches!(storage.set("k", 1), Err(StorageError::Store(_))));
    assert!(matches!(storage.clear(), Err(StorageError::Store(_))));
}

#[test]
fn test_refresh_availability_tracks_backend_health() {
    init_logging();

    let store = TogglingStore::new();
    let switch = store.switch();
    let mut storage = Storage::new(Box::new(store));
    assert!(storage.is_available());

    // An outage is not observed until the next explicit probe
    switch.store(false, Ordering::SeqCst);
    assert!(storage.is_available());
    assert!(!storage.refresh_availability());
    assert!(!storage.is_available());

    switch.store(true, Ordering::SeqCst);
    assert!(storage.refresh_availability());
    assert!(storage.is_available());
}

#[test]
fn test_operations_do_not_consult_cached_availability() {
    let store = TogglingStore::new();
    let switch = store.switch();
    switch.store(false, Ordering::SeqCst);

    // Probe fails at construction, so the cached state says unavailable
    let storage = Storage::new(Box::new(store));
    assert!(!storage.is_available());

    // Once the backend heals, operations go through despite the stale cache
    switch.store(true, Ordering::SeqCst);
    storage.set("k", 7).expect("set after recovery failed");
    assert_eq!(
        storage.get::<i32>("k").expect("get after recovery failed"),
        Some(7)
    );
}

#[cfg(feature = "sled-backend")]
#[test]
fn test_unopenable_backend_yields_detached_facade() {
    use kvlite::StoreKind;

    init_logging();

    // A regular file where sled expects a directory cannot be opened
    let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let mut storage = Storage::open(StoreKind::Sled, file.path());

    assert!(!storage.is_available());
    assert_eq!(
        storage.availability(),
        Availability {
            present: false,
            enabled: false,
        }
    );

    let result: Result<Option<String>, _> = storage.get("k");
    assert!(matches!(result, Err(StorageError::Unavailable)));
    assert!(matches!(storage.set("k", 1), Err(StorageError::Unavailable)));
    assert!(matches!(storage.remove("k"), Err(StorageError::Unavailable)));
    assert!(matches!(storage.clear(), Err(StorageError::Unavailable)));

    // Re-probing a facade with no handle cannot make it available
    assert!(!storage.refresh_availability());
}
