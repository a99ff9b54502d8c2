use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{MenuStore, StoreError};
use crate::menu::models::{MenuItem, MenuItemChanges, NewMenuItem};

/// Stand-in used when the database client could not be built at startup.
///
/// Every operation fails, so requests get a 500 while the process keeps serving.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl MenuStore for UnavailableStore {
    async fn insert(&self, _item: NewMenuItem) -> Result<MenuItem, StoreError> {
        Err(self.error())
    }

    async fn find_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        Err(self.error())
    }

    async fn update_by_id(
        &self,
        _id: ObjectId,
        _changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError> {
        Err(self.error())
    }

    async fn delete_by_id(&self, _id: ObjectId) -> Result<Option<MenuItem>, StoreError> {
        Err(self.error())
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}
