use std::sync::Arc;

use bawaba_db::{DbPool, SqlUserStore, UserStore};

use crate::messages::MessageCatalog;

/// Shared application state passed to every route handler.
///
/// The user store is held behind the trait object so tests can substitute
/// a stub store; handlers never touch the pool directly.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UserStore>,
    pub messages: MessageCatalog,
}

impl AppState {
    /// Build a state container from an already constructed store.
    pub fn new(store: Arc<dyn UserStore>, messages: MessageCatalog) -> Self {
        Self { store, messages }
    }

    /// Convenience constructor wiring the SQL store over the shared pool.
    pub fn from_pool(pool: DbPool, messages: MessageCatalog) -> Self {
        Self::new(Arc::new(SqlUserStore::new(pool)), messages)
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}
