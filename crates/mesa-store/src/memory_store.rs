use crate::session_store::SessionStore;
use crate::{Result as StoreErrorResult, StoreError};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

/// In-process session store.
///
/// The web runtime's local key-value storage analog, and the test double
/// for everything that needs a backend without touching disk. Nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> StoreErrorResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::unavailable("memory store mutex poisoned"))
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, key: &str) -> StoreErrorResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreErrorResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
