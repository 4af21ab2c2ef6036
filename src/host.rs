//! Runtime registry for host-provided license checkers.
//!
//! The host API this crate delegates to may not exist at all in some
//! deployments (e.g. a community distribution), and has changed shape across
//! host versions. Instead of a compile-time dependency, the host installs its
//! checker here at startup under one of the known [`EntryPoint`]s; the gate
//! probes for whichever shape is present at call time.
//!
//! Re-registering an entry point overwrites the previous checker atomically;
//! `Arc`s already handed out keep working. `remove` and `clear` exist mainly
//! for tests and host teardown.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::checker::{EntryPoint, LicenseChecker};

static GLOBAL: Lazy<HostServices> = Lazy::new(HostServices::new);

/// Resolution failure detail. Logged by the gate, never returned to callers.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no license checker registered (probed: {probed})")]
    NotFound { probed: String },
}

/// Thread-safe map from entry point to the checker the host registered there.
pub struct HostServices {
    checkers: RwLock<HashMap<EntryPoint, Arc<dyn LicenseChecker>>>,
}

impl HostServices {
    pub fn new() -> Self {
        Self {
            checkers: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide registry used by the top-level [`is_allowed`] facade.
    ///
    /// [`is_allowed`]: crate::is_allowed
    pub fn global() -> &'static HostServices {
        &GLOBAL
    }

    /// Install a checker under `entry`. Overwrites any previous registration.
    pub fn register(&self, entry: EntryPoint, checker: Arc<dyn LicenseChecker>) {
        self.checkers.write().insert(entry, checker);
    }

    /// Remove a registration; returns the removed checker if one was present.
    pub fn remove(&self, entry: EntryPoint) -> Option<Arc<dyn LicenseChecker>> {
        self.checkers.write().remove(&entry)
    }

    /// Remove all registrations (useful in tests).
    pub fn clear(&self) {
        self.checkers.write().clear();
    }

    /// Probe the known entry points in fixed order and return the first
    /// registered checker. Re-reads the map on every call — the resolved
    /// checker is never cached across calls.
    pub fn resolve_checker(
        &self,
    ) -> Result<(EntryPoint, Arc<dyn LicenseChecker>), ResolveError> {
        let r = self.checkers.read();
        for entry in EntryPoint::PROBE_ORDER {
            if let Some(checker) = r.get(&entry) {
                return Ok((entry, checker.clone()));
            }
        }
        Err(ResolveError::NotFound {
            probed: EntryPoint::PROBE_ORDER
                .iter()
                .map(|e| e.key())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn len(&self) -> usize {
        self.checkers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.read().is_empty()
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::new()
    }
}
