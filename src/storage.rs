use crate::day::DayKey;
use crate::errors::EngineError;
use crate::store::{LocalStorage, Store};
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the key-value namespace from disk. A missing or unreadable file
/// yields an empty namespace.
pub async fn load_storage(path: &Path) -> LocalStorage {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(storage) => storage,
            Err(err) => {
                error!("failed to parse data file: {err}");
                LocalStorage::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalStorage::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            LocalStorage::default()
        }
    }
}

pub async fn persist_storage(path: &Path, storage: &LocalStorage) -> Result<(), EngineError> {
    let payload = serde_json::to_vec_pretty(storage)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Records today's progress, then writes every entry to `path`.
pub async fn save_store(path: &Path, store: &mut Store, today: DayKey) -> Result<(), EngineError> {
    let storage = store.save(today)?;
    persist_storage(path, &storage).await
}
