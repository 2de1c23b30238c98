use crate::store::StoreData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub store: Arc<Mutex<StoreData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, store: StoreData) -> Self {
        Self {
            data_dir,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
