//! In-memory storage.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::store::FloorPlan;

/// Volatile storage for tests and scratch sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    plans: RwLock<BTreeMap<String, FloorPlan>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("lock poisoned: {e}"))
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, plan: &FloorPlan) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let plan = plan.clone();
        Box::pin(async move {
            self.plans.write().map_err(lock_error)?.insert(id, plan);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<FloorPlan>> {
        let id = id.to_string();
        Box::pin(async move {
            let plans = self.plans.read().map_err(lock_error)?;
            plans.get(&id).cloned().ok_or(StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.plans.write().map_err(lock_error)?.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move { Ok(self.plans.read().map_err(lock_error)?.keys().cloned().collect()) })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.plans.read().map_err(lock_error)?.contains_key(&id)) })
    }
}
