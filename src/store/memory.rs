//! In-process menu store
//!
//! Backs the service when no database is configured, and the tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use super::{MenuStore, StoreError};
use crate::menu::models::{MenuItem, MenuItemChanges, NewMenuItem};

/// Items keyed by id, each tagged with its insertion sequence number.
///
/// DashMap locks per shard, so an update or delete is atomic for its record.
#[derive(Default)]
pub struct MemoryMenuStore {
    items: DashMap<ObjectId, (u64, MenuItem)>,
    next_seq: AtomicU64,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl MenuStore for MemoryMenuStore {
    async fn insert(&self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
        let id = ObjectId::new();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let item = item.with_id(id.to_hex());

        self.items.insert(id, (seq, item.clone()));
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        let mut entries: Vec<(u64, MenuItem)> =
            self.items.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|(seq, _)| *seq);

        Ok(entries.into_iter().map(|(_, item)| item).collect())
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError> {
        Ok(self.items.get_mut(&id).map(|mut entry| {
            let (_, item) = entry.value_mut();
            changes.apply(item);
            item.clone()
        }))
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<Option<MenuItem>, StoreError> {
        Ok(self.items.remove(&id).map(|(_, (_, item))| item))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
