use crate::day::DayKey;
use crate::errors::EngineError;
use crate::rollover::RolloverPolicy;
use crate::storage::save_store;
use crate::store::Store;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<Store>>,
    pub policy: RolloverPolicy,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: Store, policy: RolloverPolicy) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            policy,
        }
    }

    /// Writes the whole store while holding the lock.
    pub async fn persist(&self, today: DayKey) -> Result<(), EngineError> {
        let mut store = self.store.lock().await;
        save_store(&self.data_path, &mut store, today).await
    }
}
