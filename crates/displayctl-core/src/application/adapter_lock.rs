//! Per-adapter critical sections for mode changes.
//!
//! A mode change is a read-modify-write against OS state: read the current
//! mode, patch it, test it, commit it.  Two changes for the same adapter must
//! not interleave, otherwise the second one can land between the first one's
//! test and commit.  Changes for different adapters run independently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Table of one mutex per adapter name.
///
/// Entries are created on first use and never removed; the number of adapter
/// names on a machine is small and fixed.
#[derive(Debug, Default)]
pub struct AdapterLocks {
    table: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AdapterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` while holding the lock for `adapter_name`.
    ///
    /// A poisoned lock (a previous holder panicked) is taken over rather than
    /// propagated: the guarded data is `()`, so there is nothing to corrupt.
    pub fn with_adapter<T>(&self, adapter_name: &str, f: impl FnOnce() -> T) -> T {
        let lock = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(table.entry(adapter_name.to_owned()).or_default())
        };
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}

/// The process-wide lock table used by [`Device::change_settings`](super::device::Device::change_settings).
pub fn adapter_locks() -> &'static AdapterLocks {
    static LOCKS: OnceLock<AdapterLocks> = OnceLock::new();
    LOCKS.get_or_init(AdapterLocks::new)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
