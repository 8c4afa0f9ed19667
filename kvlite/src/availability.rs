// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Availability probing for storage backends
//!
//! A backend can be present (a handle was constructed) without being usable
//! (the probe round-trip fails). Both facts are tracked separately so callers
//! can tell a missing backend apart from a broken one.

use crate::store::StoreHandle;
use log::info;

/// Key written and immediately removed by the availability probe.
pub(crate) const PROBE_KEY: &str = "__kvlite_probe__";

/// Outcome of an availability check against a storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    /// Whether a backend handle exists at all.
    pub present: bool,
    /// Whether the probe write/remove round-trip succeeded.
    pub enabled: bool,
}

impl Availability {
    /// Availability of a facade with no backend handle.
    pub(crate) const DETACHED: Availability = Availability {
        present: false,
        enabled: false,
    };

    /// Returns true when the backend both exists and passed the probe.
    pub fn is_available(&self) -> bool {
        self.present && self.enabled
    }
}

/// Runs the write/remove probe against a handle.
///
/// The probe writes [`PROBE_KEY`] and removes it again. Any failure in that
/// round-trip marks the backend as not enabled; the probe never leaves its
/// key behind on a healthy backend.
pub(crate) fn probe(handle: &dyn StoreHandle) -> Availability {
    let enabled = match handle
        .set_item(PROBE_KEY, PROBE_KEY)
        .and_then(|_| handle.remove_item(PROBE_KEY))
    {
        Ok(()) => true,
        Err(e) => {
            info!("Storage availability probe failed: {}", e);
            false
        }
    };

    Availability {
        present: true,
        enabled,
    }
}
