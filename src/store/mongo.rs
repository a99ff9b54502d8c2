//! MongoDB-backed menu store
//!
//! Items live in the `menuitems` collection. Documents carry a native
//! ObjectId `_id`; clients see it as hex.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{MenuStore, StoreError};
use crate::config::DEFAULT_DATABASE;
use crate::menu::models::{MenuItem, MenuItemChanges, NewMenuItem};

pub const COLLECTION: &str = "menuitems";

#[derive(Debug, Serialize, Deserialize)]
struct MenuItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    price: f64,
}

impl From<MenuItemDocument> for MenuItem {
    fn from(doc: MenuItemDocument) -> Self {
        MenuItem {
            id: doc.id.to_hex(),
            name: doc.name,
            description: doc.description,
            price: doc.price,
        }
    }
}

pub struct MongoMenuStore {
    client: Client,
    database: Database,
    items: Collection<MenuItemDocument>,
}

impl MongoMenuStore {
    /// Builds a client for `uri`. No round trip to the server happens here.
    ///
    /// The database is `database` if given, else the one named in the URI,
    /// else `test`.
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        info!(
            "Using MongoDB database {} collection {COLLECTION}",
            database.name()
        );

        let items = database.collection(COLLECTION);
        Ok(Self {
            client,
            database,
            items,
        })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

fn set_document(changes: MenuItemChanges) -> Document {
    let mut set = Document::new();
    if let Some(name) = changes.name {
        set.insert("name", name);
    }
    if let Some(description) = changes.description {
        set.insert("description", description);
    }
    if let Some(price) = changes.price {
        set.insert("price", price);
    }
    set
}

#[async_trait]
impl MenuStore for MongoMenuStore {
    async fn insert(&self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
        let document = MenuItemDocument {
            id: ObjectId::new(),
            name: item.name,
            description: item.description,
            price: item.price,
        };
        self.items.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn find_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        let cursor = self.items.find(doc! {}).await?;
        let documents: Vec<MenuItemDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(MenuItem::from).collect())
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError> {
        // MongoDB rejects an empty $set
        if changes.is_empty() {
            let found = self.items.find_one(by_id(id)).await?;
            return Ok(found.map(MenuItem::from));
        }

        let updated = self
            .items
            .find_one_and_update(by_id(id), doc! { "$set": set_document(changes) })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(MenuItem::from))
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<Option<MenuItem>, StoreError> {
        let deleted = self.items.find_one_and_delete(by_id(id)).await?;
        Ok(deleted.map(MenuItem::from))
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
