use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::booking::Booking;
use crate::flight::Flight;
use crate::user::{ProfileUpdate, User};

/// Persistence-seam failure. Duplicate-key violations are distinguished so
/// the flight registry can retry number generation and sign-up can report a
/// conflict instead of an internal error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("{0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Account persistence. Uniqueness of `email` and `username` is enforced by
/// store-level indexes; `insert` surfaces violations as `DuplicateKey`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Replaces the profile fields; returns the updated record, or `None`
    /// when the id is unknown.
    async fn update_profile(
        &self,
        id: Uuid,
        changes: &ProfileUpdate,
    ) -> Result<Option<User>, StoreError>;
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;
}

/// Flight persistence. `flight_number` carries a unique index; `insert`
/// surfaces collisions as `DuplicateKey` so callers can resample.
#[async_trait]
pub trait FlightStore: Send + Sync {
    async fn insert(&self, flight: &Flight) -> Result<(), StoreError>;
    async fn find_by_number(&self, flight_number: &str) -> Result<Option<Flight>, StoreError>;
    /// Sets the departure time only; returns the updated flight, or `None`
    /// when the number is unknown.
    async fn set_departure(
        &self,
        flight_number: &str,
        departure: DateTime<Utc>,
    ) -> Result<Option<Flight>, StoreError>;
    async fn delete_by_number(&self, flight_number: &str) -> Result<bool, StoreError>;
    async fn find_all(&self) -> Result<Vec<Flight>, StoreError>;
    /// Exact match on both cities and on the departure timestamp.
    async fn search(
        &self,
        departure_city: &str,
        destination_city: &str,
        departure: DateTime<Utc>,
    ) -> Result<Vec<Flight>, StoreError>;
}

/// Booking persistence. No foreign-key constraint backs `flight_number`;
/// referential checks happen at write time in the booking engine.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert(&self, booking: &Booking) -> Result<(), StoreError>;
    async fn find_one_for_owner(
        &self,
        owner: Uuid,
        flight_number: &str,
    ) -> Result<Option<Booking>, StoreError>;
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Booking>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Booking>, StoreError>;
    /// Deletes bookings matching both owner and flight number; returns the
    /// number removed.
    async fn delete_for_owner(
        &self,
        owner: Uuid,
        flight_number: &str,
    ) -> Result<u64, StoreError>;
    /// Delete-cascade step: removes every booking referencing the flight.
    async fn delete_by_flight(&self, flight_number: &str) -> Result<u64, StoreError>;
    /// Update-cascade step: refreshes the departure snapshot on every
    /// booking referencing the flight.
    async fn set_flight_date_time(
        &self,
        flight_number: &str,
        departure: DateTime<Utc>,
    ) -> Result<u64, StoreError>;
}
