use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use uuid::Uuid;

use skybook_core::{ProfileUpdate, StoreError, User, UserStore};

use crate::database::{store_err, Database, USERS};

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.handle().collection(USERS),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.collection.insert_one(user).await.map_err(store_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(store_err)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(store_err)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: &ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one_and_update(
                doc! { "_id": id.to_string() },
                doc! { "$set": {
                    "email": &changes.email,
                    "username": &changes.username,
                    "fullname": &changes.fullname,
                    "password": &changes.password_hash,
                    "isAdmin": changes.is_admin,
                } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(store_err)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(store_err)?;
        cursor.try_collect().await.map_err(store_err)
    }
}
