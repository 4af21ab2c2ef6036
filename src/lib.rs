//! Fail-closed feature licensing gate.
//!
//! The host application owns the actual licensing logic; it installs a
//! [`LicenseChecker`] in the [`HostServices`] registry at startup. Callers
//! then ask [`is_allowed`] whether a feature is licensed. Any failure
//! (no checker registered, checker error, checker panic) is logged and
//! answered with `false`.

pub mod checker;
pub mod gate;
pub mod host;

// Re-export main types for easy access
pub use checker::{EntryPoint, LicenseChecker};
pub use gate::{is_allowed, LicenseGate};
pub use host::{HostServices, ResolveError};
