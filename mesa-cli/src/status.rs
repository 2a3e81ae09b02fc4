use mesa_core::Identity;
use mesa_session::{HydrateOutcome, PersistReport, SessionManager};

use serde::Serialize;

/// What `mesa status` reports. The bearer token itself is never included.
#[derive(Debug, Serialize)]
pub(crate) struct StatusReport {
    pub authenticated: bool,
    /// Backend the session hydrated from, when any.
    pub source: Option<&'static str>,
    pub discarded_records: usize,
    pub identity: Option<IdentitySummary>,
}

#[derive(Debug, Serialize)]
pub(crate) struct IdentitySummary {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub roles: Vec<String>,
    pub has_token: bool,
}

impl StatusReport {
    pub(crate) fn collect(manager: &SessionManager, outcome: &HydrateOutcome) -> Self {
        Self {
            authenticated: manager.is_authenticated(),
            source: outcome.source,
            discarded_records: outcome.discarded.len(),
            identity: manager.current_identity().as_ref().map(IdentitySummary::from_identity),
        }
    }
}

impl IdentitySummary {
    pub(crate) fn from_identity(identity: &Identity) -> Self {
        let mut roles: Vec<String> = identity.roles.iter().cloned().collect();
        roles.sort();

        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            display_name: identity.display_name(),
            roles,
            has_token: identity.token.is_some(),
        }
    }
}

/// Human-readable per-backend persistence outcomes.
pub(crate) fn format_report(report: &PersistReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(()) => format!("{}: ok", outcome.store),
            Err(e) => format!("{}: failed ({e})", outcome.store),
        })
        .collect()
}
