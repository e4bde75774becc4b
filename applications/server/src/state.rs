/// Shared application state
use roster_core::UserStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers
///
/// Mutating handlers hold the write guard from their uniqueness check until
/// the store write completes.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Arc<RwLock<UserStore>>,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self {
            users: Arc::new(RwLock::new(store)),
        }
    }
}
