use crate::storage::TaskStore;
use std::sync::Arc;

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
    pub token: Arc<str>,
}

impl AppState {
    pub fn new(store: TaskStore, token: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(store),
            token: token.into(),
        }
    }
}
