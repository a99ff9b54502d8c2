//! Persistence collaborator
//!
//! Handlers only see the [`MenuStore`] trait. The backend is picked once at
//! startup by [`open`] and shared through `AppState`.

pub mod memory;
pub mod mongo;
pub mod unavailable;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::menu::models::{MenuItem, MenuItemChanges, NewMenuItem};

pub use memory::MemoryMenuStore;
pub use mongo::MongoMenuStore;
pub use unavailable::UnavailableStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Single-record operations over menu items.
///
/// `update_by_id` and `delete_by_id` return `Ok(None)` when no record has the id.
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn insert(&self, item: NewMenuItem) -> Result<MenuItem, StoreError>;

    /// All items in insertion order.
    async fn find_all(&self) -> Result<Vec<MenuItem>, StoreError>;

    /// Returns the item as it is after the update.
    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError>;

    async fn delete_by_id(&self, id: ObjectId) -> Result<Option<MenuItem>, StoreError>;

    /// Releases the backend's resources. Called once after the server drains.
    async fn close(&self) {}

    fn backend(&self) -> &'static str;
}

/// Opens the store the configuration asks for.
///
/// A database that cannot be reached is logged and never aborts startup.
/// The connection check runs in the background, so this returns without
/// waiting on server selection.
pub async fn open(config: &Config) -> Arc<dyn MenuStore> {
    let Some(uri) = config.mongo_uri.as_deref() else {
        warn!("MONGO_URI not set, menu items will be kept in memory only");
        return Arc::new(MemoryMenuStore::new());
    };

    match MongoMenuStore::connect(uri, config.mongo_db.as_deref()).await {
        Ok(store) => {
            let store = Arc::new(store);
            tokio::spawn(log_connection(store.clone()));
            store
        }
        Err(e) => {
            error!("MongoDB connection error: {e}");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}

async fn log_connection(store: Arc<MongoMenuStore>) {
    match store.ping().await {
        Ok(()) => info!("MongoDB connected"),
        Err(e) => error!("MongoDB connection error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_without_uri_uses_memory() {
        let config = Config {
            port: 0,
            mongo_uri: None,
            mongo_db: None,
        };

        assert_eq!(open(&config).await.backend(), "memory");
    }

    #[tokio::test]
    async fn open_with_bad_uri_stays_up() {
        let config = Config {
            port: 0,
            mongo_uri: Some("not-a-mongodb-uri".into()),
            mongo_db: None,
        };

        let store = open(&config).await;
        assert_eq!(store.backend(), "unavailable");
        assert!(matches!(
            store.find_all().await,
            Err(StoreError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn open_does_not_wait_for_unreachable_server() {
        let config = Config {
            port: 0,
            mongo_uri: Some(
                "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=30000".into(),
            ),
            mongo_db: None,
        };

        let store = tokio::time::timeout(std::time::Duration::from_secs(5), open(&config))
            .await
            .expect("open blocked on server selection");
        assert_eq!(store.backend(), "mongodb");
    }
}
