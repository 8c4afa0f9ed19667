// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the storage facade

use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the storage facade.
///
/// Backend faults are wrapped in [`StorageError::Store`] so callers can
/// distinguish them from encoding failures. Decode failures on read are
/// not errors at all; reads treat malformed values as absent.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Value serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type StorageResult<T> = Result<T, StorageError>;
