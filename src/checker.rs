use anyhow::Result;

/// Allow-check capability the host application provides.
///
/// Implementations own the actual licensing truth; whether that is a signed
/// file, a license server, or an embedded key is the host's business and
/// invisible to this crate. The feature identifier
/// is passed through uninspected; validation, if any, belongs to the host.
///
/// Implementations must tolerate concurrent invocation: the gate adds no
/// synchronization around the call.
pub trait LicenseChecker: Send + Sync {
    /// Returns whether `feature` is currently permitted.
    ///
    /// An `Err` is treated by the gate as "check failed" and mapped to a
    /// denied result, never surfaced to callers.
    fn is_allowed(&self, feature: &str) -> Result<bool>;
}

/// The two host API shapes a checker may be registered under.
///
/// Recent hosts expose the check API; older hosts only ship the deprecated
/// checker stub. Resolution probes them in that order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// Current host API.
    CheckApi,
    /// Deprecated stub API kept for older hosts.
    LegacyStub,
}

impl EntryPoint {
    /// Fixed probe order used by resolution.
    pub const PROBE_ORDER: [EntryPoint; 2] = [EntryPoint::CheckApi, EntryPoint::LegacyStub];

    /// Stable registry key, used in logs and error detail.
    pub const fn key(self) -> &'static str {
        match self {
            EntryPoint::CheckApi => "licensing.check-api",
            EntryPoint::LegacyStub => "licensing.checker-stub",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_order_prefers_current_api() {
        assert_eq!(
            EntryPoint::PROBE_ORDER,
            [EntryPoint::CheckApi, EntryPoint::LegacyStub]
        );
    }

    #[test]
    fn entry_point_keys_are_distinct() {
        assert_ne!(EntryPoint::CheckApi.key(), EntryPoint::LegacyStub.key());
    }
}
