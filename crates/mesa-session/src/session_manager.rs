use crate::{BackendOutcome, DiscardReason, DiscardedRecord, HydrateOutcome, PersistReport};

use mesa_auth::ExpiryPolicy;
use mesa_core::Identity;
use mesa_store::SessionStore;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

/// Single authoritative holder of the current authenticated identity.
///
/// Constructed once at process start and handed to whatever layer needs
/// it. Mediates every read and write of the persisted session, and
/// broadcasts each identity replacement to subscribers. None of the
/// public operations ever raise: storage failures degrade to "session not
/// persisted on that backend" and are logged and reported as values.
pub struct SessionManager {
    stores: Vec<Arc<dyn SessionStore>>,
    storage_key: String,
    policy: ExpiryPolicy,
    identity_tx: watch::Sender<Option<Identity>>,
}

impl SessionManager {
    pub fn new(storage_key: impl Into<String>, policy: ExpiryPolicy) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            stores: Vec::new(),
            storage_key: storage_key.into(),
            policy,
            identity_tx,
        }
    }

    /// Register a storage backend. Registration order is hydration
    /// precedence; persistence passes hit every backend regardless.
    pub fn register_store(&mut self, store: Arc<dyn SessionStore>) {
        debug!("Registered '{}' session store", store.name());
        self.stores.push(store);
    }

    pub fn store_names(&self) -> Vec<&'static str> {
        self.stores.iter().map(|s| s.name()).collect()
    }

    /// One-time startup read of the persisted session.
    ///
    /// Walks backends in registration order and adopts the first live
    /// record. Corrupt records and records whose token expiry is at or
    /// before the current time are purged from the backend they came
    /// from. Expiry is evaluated purely from the token's local claims -
    /// no network call is made.
    pub async fn hydrate(&self) -> HydrateOutcome {
        let now = chrono::Utc::now().timestamp();
        let mut outcome = HydrateOutcome::default();

        for store in &self.stores {
            let raw = match store.load(&self.storage_key).await {
                Ok(Some(raw)) => raw,
                Ok(None) => {
                    debug!("No persisted session in '{}' store", store.name());
                    continue;
                }
                Err(e) => {
                    warn!("Session read failed on '{}' store: {}", store.name(), e);
                    continue;
                }
            };

            let identity = match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => identity,
                Err(e) => {
                    warn!(
                        "Corrupt session record in '{}' store, purging: {}",
                        store.name(),
                        e
                    );
                    self.purge_record(store.as_ref()).await;
                    outcome.discarded.push(DiscardedRecord {
                        store: store.name(),
                        reason: DiscardReason::Corrupt,
                    });
                    continue;
                }
            };

            if let Some(token) = &identity.token
                && self.policy.is_expired_at(token, now)
            {
                info!(
                    "Persisted session in '{}' store has expired, purging",
                    store.name()
                );
                self.purge_record(store.as_ref()).await;
                outcome.discarded.push(DiscardedRecord {
                    store: store.name(),
                    reason: DiscardReason::Expired,
                });
                continue;
            }

            info!(
                "Hydrated session for {} from '{}' store",
                identity.email,
                store.name()
            );
            outcome.source = Some(store.name());
            self.identity_tx.send_replace(Some(identity.clone()));
            outcome.identity = Some(identity);
            break;
        }

        if outcome.identity.is_none() {
            debug!("No live persisted session, starting signed out");
        }

        outcome
    }

    /// Replace the current identity wholesale and persist the change to
    /// every registered backend.
    ///
    /// The in-memory value and the broadcast happen first; each backend
    /// is then attempted independently, and a failing backend never
    /// affects another backend or the caller. `None` clears all backends
    /// instead of writing.
    pub async fn set_identity(&self, identity: Option<Identity>) -> PersistReport {
        if let Some(identity) = &identity
            && let Err(e) = identity.validate()
        {
            warn!("Accepting identity for {} despite: {}", identity.email, e);
        }

        self.identity_tx.send_replace(identity.clone());

        match identity {
            Some(identity) => self.persist_record(&identity).await,
            None => self.clear_record().await,
        }
    }

    /// Clear the session everywhere. Equivalent to
    /// `set_identity(None)`; the previous identity's token is
    /// unreachable through this manager afterwards. Idempotent.
    pub async fn logout(&self) -> PersistReport {
        info!("Logging out");
        self.set_identity(None).await
    }

    /// Synchronous read of the in-memory identity. Never blocks, never
    /// touches storage.
    pub fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    /// Whether the current identity may be treated as signed in.
    ///
    /// True iff an identity is present and its token, if any, is not
    /// expired at call time. Token-less identities count as authenticated
    /// (OAuth flows backed by server-side session cookies). Evaluated
    /// lazily against the wall clock on every call - never cached.
    pub fn is_authenticated(&self) -> bool {
        let guard = self.identity_tx.borrow();
        match guard.as_ref() {
            Some(identity) => match &identity.token {
                Some(token) => !self.policy.is_expired(token),
                None => true,
            },
            None => false,
        }
    }

    /// Receiver observing every identity replacement.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }

    /// Delete the persisted record from every backend without touching
    /// the in-memory identity. Recovery tool for corrupt records.
    pub async fn purge(&self) -> PersistReport {
        self.clear_record().await
    }

    async fn persist_record(&self, identity: &Identity) -> PersistReport {
        let record = match serde_json::to_string(identity) {
            Ok(record) => record,
            Err(e) => {
                warn!("Session record did not serialize, nothing persisted: {}", e);
                return PersistReport::default();
            }
        };

        let mut report = PersistReport::default();
        for store in &self.stores {
            let result = store.save(&self.storage_key, &record).await;
            match &result {
                Ok(()) => debug!("Session persisted to '{}' store", store.name()),
                Err(e) => warn!("Session write failed on '{}' store: {}", store.name(), e),
            }
            report.outcomes.push(BackendOutcome {
                store: store.name(),
                result,
            });
        }
        report
    }

    async fn clear_record(&self) -> PersistReport {
        let mut report = PersistReport::default();
        for store in &self.stores {
            let result = store.delete(&self.storage_key).await;
            match &result {
                Ok(()) => debug!("Session cleared from '{}' store", store.name()),
                Err(e) => warn!("Session clear failed on '{}' store: {}", store.name(), e),
            }
            report.outcomes.push(BackendOutcome {
                store: store.name(),
                result,
            });
        }
        report
    }

    async fn purge_record(&self, store: &dyn SessionStore) {
        if let Err(e) = store.delete(&self.storage_key).await {
            warn!(
                "Failed to purge session record from '{}' store: {}",
                store.name(),
                e
            );
        }
    }
}
