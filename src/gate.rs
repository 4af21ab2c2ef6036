//! The license gate: resolves a host checker and delegates the allow/deny
//! decision to it, failing closed on every error.

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::{anyhow, Context, Result};

use crate::host::HostServices;

/// Fail-closed view over a [`HostServices`] registry.
///
/// `is_allowed` never panics and never returns an error: resolution failure,
/// a checker error, and a checker panic all log one error event and yield
/// `false`. Absence of a working license mechanism must never be read as
/// implicit permission.
pub struct LicenseGate<'h> {
    host: &'h HostServices,
}

impl<'h> LicenseGate<'h> {
    pub fn new(host: &'h HostServices) -> Self {
        Self { host }
    }

    /// Returns whether `feature` is currently licensed.
    ///
    /// Stateless and synchronous; each call resolves the checker anew, so
    /// results track the host's current licensing state. No retries: a
    /// transient host failure shows up as a single denied check.
    pub fn is_allowed(&self, feature: &str) -> bool {
        match self.check(feature) {
            Ok(allowed) => allowed,
            Err(e) => {
                tracing::error!(feature, error = ?e, "cannot check license");
                false
            }
        }
    }

    fn check(&self, feature: &str) -> Result<bool> {
        let (entry, checker) = self.host.resolve_checker()?;

        // The checker is host code; a panic there must not unwind into the
        // caller.
        match catch_unwind(AssertUnwindSafe(|| checker.is_allowed(feature))) {
            Ok(result) => {
                result.with_context(|| format!("checker at `{}` failed", entry.key()))
            }
            Err(panic) => Err(anyhow!(
                "checker at `{}` panicked: {}",
                entry.key(),
                panic_message(&panic)
            )),
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "<non-string panic payload>"
    }
}

/// Checks `feature` against the process-wide host registry.
///
/// The single operation this crate exposes to the hosting application.
/// Callable from any thread; see [`LicenseGate::is_allowed`] for the
/// fail-closed contract.
pub fn is_allowed(feature: &str) -> bool {
    LicenseGate::new(HostServices::global()).is_allowed(feature)
}
