use crate::errors::AppError;
use crate::repository::EntryStore;
use std::path::Path;
use tokio::fs;
use tracing::error;

pub async fn load_store(path: &Path) -> EntryStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                EntryStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => EntryStore::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            EntryStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &EntryStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write data file {}: {err}", path.display());
        AppError::internal(err)
    })?;
    Ok(())
}
