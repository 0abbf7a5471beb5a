use crate::catalog::ActivityCatalog;
use crate::repository::EntryStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<EntryStore>>,
    pub catalog: Arc<ActivityCatalog>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: EntryStore, catalog: ActivityCatalog) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            catalog: Arc::new(catalog),
        }
    }
}
