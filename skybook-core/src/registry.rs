use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::DomainError;
use crate::flight::{Flight, NewFlight};
use crate::flight_number;
use crate::policy::{self, Identity};
use crate::repository::{BookingStore, FlightStore, StoreError};

/// CRUD over flight records. Owns flight-number generation and the two
/// cascades that keep dependent bookings consistent with their flight.
pub struct FlightRegistry {
    flights: Arc<dyn FlightStore>,
    bookings: Arc<dyn BookingStore>,
}

impl FlightRegistry {
    pub fn new(flights: Arc<dyn FlightStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { flights, bookings }
    }

    /// Admin only. Persists the flight under a freshly generated number.
    ///
    /// Two concurrent creations can sample the same candidate, so
    /// uniqueness is settled at insert time by the store's unique index:
    /// on a duplicate-key error a new number is sampled and the insert
    /// retried. The keyspace (26*26*900) makes collisions rare enough
    /// that no back-off is needed.
    pub async fn create_flight(
        &self,
        caller: &Identity,
        spec: NewFlight,
    ) -> Result<Flight, DomainError> {
        policy::require_admin(caller)?;
        spec.validate()?;

        loop {
            let candidate = flight_number::generate();
            let flight = Flight::new(candidate, &spec);
            match self.flights.insert(&flight).await {
                Ok(()) => {
                    info!(flight_number = %flight.flight_number, "flight created");
                    return Ok(flight);
                }
                Err(StoreError::DuplicateKey(_)) => {
                    warn!(flight_number = %flight.flight_number, "flight number collision, resampling");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Admin only. Only the departure time changes; any other field in the
    /// request is ignored. On success the denormalized `flightDateTime` on
    /// every dependent booking is refreshed to match.
    ///
    /// The two steps are separate writes: a failure after the flight update
    /// leaves stale booking snapshots behind and is surfaced to the caller,
    /// but the flight update is not rolled back.
    pub async fn update_departure_time(
        &self,
        caller: &Identity,
        flight_number: &str,
        new_departure: DateTime<Utc>,
    ) -> Result<Flight, DomainError> {
        policy::require_admin(caller)?;

        let updated = self
            .flights
            .set_departure(flight_number, new_departure)
            .await?
            .ok_or_else(|| DomainError::not_found("Flight"))?;

        let touched = self
            .bookings
            .set_flight_date_time(flight_number, updated.departure_date_time)
            .await?;
        info!(
            flight_number,
            bookings = touched,
            "departure time updated, booking snapshots refreshed"
        );

        Ok(updated)
    }

    /// Admin only. Deletes the flight and every booking referencing it.
    ///
    /// Bookings go first: if the process dies between the two writes the
    /// flight survives with no dependents, which a later retry cleans up,
    /// rather than bookings pointing at a vanished flight.
    pub async fn delete_flight(
        &self,
        caller: &Identity,
        flight_number: &str,
    ) -> Result<Flight, DomainError> {
        policy::require_admin(caller)?;

        let flight = self
            .flights
            .find_by_number(flight_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Flight"))?;

        let removed = self.bookings.delete_by_flight(flight_number).await?;
        self.flights.delete_by_number(flight_number).await?;
        info!(flight_number, bookings = removed, "flight deleted with dependents");

        Ok(flight)
    }

    /// Admin only.
    pub async fn list_flights(&self, caller: &Identity) -> Result<Vec<Flight>, DomainError> {
        policy::require_admin(caller)?;
        Ok(self.flights.find_all().await?)
    }

    /// Regular users only. All three criteria are mandatory (enforced at
    /// the API boundary). Cities and the departure timestamp are matched
    /// by exact equality; a request carrying only a calendar date matches
    /// only flights departing at exactly midnight UTC.
    pub async fn search_flights(
        &self,
        caller: &Identity,
        departure_city: &str,
        destination_city: &str,
        departure: DateTime<Utc>,
    ) -> Result<Vec<Flight>, DomainError> {
        policy::require_regular_user(caller)?;
        Ok(self
            .flights
            .search(departure_city, destination_city, departure)
            .await?)
    }
}
