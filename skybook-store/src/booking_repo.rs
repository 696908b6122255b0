use async_trait::async_trait;
use bson::doc;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use uuid::Uuid;

use skybook_core::{Booking, BookingStore, StoreError};

use crate::database::{store_err, Database, BOOKINGS};

pub struct MongoBookingStore {
    collection: Collection<Booking>,
}

impl MongoBookingStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.handle().collection(BOOKINGS),
        }
    }
}

#[async_trait]
impl BookingStore for MongoBookingStore {
    async fn insert(&self, booking: &Booking) -> Result<(), StoreError> {
        self.collection
            .insert_one(booking)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn find_one_for_owner(
        &self,
        owner: Uuid,
        flight_number: &str,
    ) -> Result<Option<Booking>, StoreError> {
        self.collection
            .find_one(doc! { "user": owner.to_string(), "flightNumber": flight_number })
            .await
            .map_err(store_err)
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Booking>, StoreError> {
        let cursor = self
            .collection
            .find(doc! { "user": owner.to_string() })
            .await
            .map_err(store_err)?;
        cursor.try_collect().await.map_err(store_err)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(store_err)?;
        cursor.try_collect().await.map_err(store_err)
    }

    async fn delete_for_owner(
        &self,
        owner: Uuid,
        flight_number: &str,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_many(doc! { "user": owner.to_string(), "flightNumber": flight_number })
            .await
            .map_err(store_err)?;
        Ok(result.deleted_count)
    }

    async fn delete_by_flight(&self, flight_number: &str) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_many(doc! { "flightNumber": flight_number })
            .await
            .map_err(store_err)?;
        Ok(result.deleted_count)
    }

    async fn set_flight_date_time(
        &self,
        flight_number: &str,
        departure: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_many(
                doc! { "flightNumber": flight_number },
                doc! { "$set": {
                    "flightDateTime": bson::DateTime::from_chrono(departure),
                } },
            )
            .await
            .map_err(store_err)?;
        Ok(result.modified_count)
    }
}
