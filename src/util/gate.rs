//! Coordination between sync passes and deletions.
//!
//! Sync passes hold a shared guard, so any number of them run side by side.
//! A deletion holds the exclusive guard, so no sync pass can re-insert a row
//! while it is being torn down.

use std::sync::Arc;

use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

#[derive(Clone, Default)]
pub struct StoreGate {
    lock: Arc<RwLock<()>>,
}

impl StoreGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard held for the duration of a sync pass.
    pub async fn sync(&self) -> OwnedRwLockReadGuard<()> {
        Arc::clone(&self.lock).read_owned().await
    }

    /// Guard held for the duration of a deletion.
    pub async fn delete(&self) -> OwnedRwLockWriteGuard<()> {
        Arc::clone(&self.lock).write_owned().await
    }
}
