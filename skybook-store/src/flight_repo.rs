use async_trait::async_trait;
use bson::doc;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use skybook_core::{Flight, FlightStore, StoreError};

use crate::database::{store_err, Database, FLIGHTS};

pub struct MongoFlightStore {
    collection: Collection<Flight>,
}

impl MongoFlightStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.handle().collection(FLIGHTS),
        }
    }
}

#[async_trait]
impl FlightStore for MongoFlightStore {
    async fn insert(&self, flight: &Flight) -> Result<(), StoreError> {
        self.collection
            .insert_one(flight)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn find_by_number(&self, flight_number: &str) -> Result<Option<Flight>, StoreError> {
        self.collection
            .find_one(doc! { "flightNumber": flight_number })
            .await
            .map_err(store_err)
    }

    async fn set_departure(
        &self,
        flight_number: &str,
        departure: DateTime<Utc>,
    ) -> Result<Option<Flight>, StoreError> {
        self.collection
            .find_one_and_update(
                doc! { "flightNumber": flight_number },
                doc! { "$set": {
                    "departureDateTime": bson::DateTime::from_chrono(departure),
                } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(store_err)
    }

    async fn delete_by_number(&self, flight_number: &str) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "flightNumber": flight_number })
            .await
            .map_err(store_err)?;
        Ok(result.deleted_count > 0)
    }

    async fn find_all(&self) -> Result<Vec<Flight>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(store_err)?;
        cursor.try_collect().await.map_err(store_err)
    }

    async fn search(
        &self,
        departure_city: &str,
        destination_city: &str,
        departure: DateTime<Utc>,
    ) -> Result<Vec<Flight>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {
                "departureCity": departure_city,
                "destinationCity": destination_city,
                "departureDateTime": bson::DateTime::from_chrono(departure),
            })
            .await
            .map_err(store_err)?;
        cursor.try_collect().await.map_err(store_err)
    }
}
