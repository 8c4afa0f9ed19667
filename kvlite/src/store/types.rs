// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Store backend types and error handling
//!
//! This module defines the backend selection enum and the error type shared
//! by all store handle implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store backend configuration
///
/// Specifies which underlying key-value technology backs the facade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreKind {
    /// Sled - embedded on-disk key-value store
    /// Best for: durable single-process persistence
    Sled,

    /// Memory - in-process map
    /// Best for: unit testing, ephemeral data
    Memory,
}

impl Default for StoreKind {
    fn default() -> Self {
        StoreKind::Sled
    }
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(StoreKind::Sled),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(format!(
                "Unknown store kind: {}. Valid options: sled, memory",
                s
            )),
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreKind::Sled => "sled",
            StoreKind::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// Error type for store handle operations
///
/// Covers backend failures at the raw string key-value level. Designed to be
/// easily converted from underlying storage engine errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-specific failure (sled, future backends)
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored value was not valid UTF-8
    #[error("stored value is not valid UTF-8: {0}")]
    InvalidValue(#[from] std::string::FromUtf8Error),
}

/// Result type for store handle operations
pub type StoreResult<T> = Result<T, StoreError>;
