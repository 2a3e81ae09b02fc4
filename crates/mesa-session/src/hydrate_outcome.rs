use mesa_core::Identity;

use serde::Serialize;

/// Result of startup hydration - distinguishes "no record anywhere" from
/// records that were found but thrown away.
#[derive(Debug, Default, Serialize)]
pub struct HydrateOutcome {
    /// The adopted identity, when any backend held a live record.
    pub identity: Option<Identity>,
    /// Backend that supplied the adopted record.
    pub source: Option<&'static str>,
    /// Records found but rejected, and why.
    pub discarded: Vec<DiscardedRecord>,
}

#[derive(Debug, Serialize)]
pub struct DiscardedRecord {
    pub store: &'static str,
    pub reason: DiscardReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// Record did not decode as an identity. Purged from its backend.
    Corrupt,
    /// Token expiry was at or before hydration time. Purged from its
    /// backend.
    Expired,
}
