use crate::Result as StoreErrorResult;

use async_trait::async_trait;

/// A key-value capability for persisting the session record.
///
/// Zero or more backends are registered with the session manager at
/// startup - an OS-protected store on native runtimes, a local key-value
/// store on web. The manager iterates whatever is registered rather than
/// branching on platform identity, and no backend's success depends on
/// another's.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stable backend name used in logs and persistence reports.
    fn name(&self) -> &'static str;

    /// Read the value stored under `key`. `None` when absent.
    async fn load(&self, key: &str) -> StoreErrorResult<Option<String>>;

    /// Durably write `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    /// Remove the value stored under `key`. Removing a missing key
    /// succeeds.
    async fn delete(&self, key: &str) -> StoreErrorResult<()>;
}
