//! Menu Application State
//!
//! The store handle is the only state the handlers share. It is opened at
//! startup, passed in explicitly, and closed after the server drains.

use std::sync::Arc;

use crate::store::{MemoryMenuStore, MenuStore};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn MenuStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryMenuStore::new()))
    }
}
