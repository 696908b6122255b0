use std::sync::Arc;

use tracing::info;

use crate::booking::{Booking, BookingSummary};
use crate::error::DomainError;
use crate::flight::FareType;
use crate::policy::{self, Identity};
use crate::repository::{BookingStore, FlightStore};

/// Creates and cancels bookings against flight inventory, deriving the fare
/// from the referenced flight at booking time.
pub struct BookingEngine {
    flights: Arc<dyn FlightStore>,
    bookings: Arc<dyn BookingStore>,
}

impl BookingEngine {
    pub fn new(flights: Arc<dyn FlightStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { flights, bookings }
    }

    /// Regular users only. The referenced flight must exist (checked here,
    /// there is no store-level foreign key) and must carry a positive price
    /// for the requested fare class. `final_fare` and `flight_date_time`
    /// are snapshots of the flight at this moment; the fare is never
    /// recomputed afterwards.
    pub async fn create_booking(
        &self,
        caller: &Identity,
        flight_number: &str,
        fare_type: &str,
        luggage_weight: f64,
    ) -> Result<BookingSummary, DomainError> {
        policy::require_regular_user(caller)?;

        let flight = self
            .flights
            .find_by_number(flight_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Flight"))?;

        let fare = FareType::parse(fare_type).ok_or_else(invalid_fare)?;
        let final_fare = flight.prices.amount(fare);
        if final_fare <= 0.0 {
            return Err(invalid_fare());
        }

        let booking = Booking::new(caller.user_id, &flight, fare, luggage_weight, final_fare);
        self.bookings.insert(&booking).await?;
        info!(
            flight_number,
            fare = fare.as_str(),
            final_fare,
            "booking created"
        );

        Ok(BookingSummary::from(&booking))
    }

    /// Regular users only. Both the existence check and the delete are
    /// scoped by owner and flight number, so a caller can never remove
    /// another user's booking on the same flight. A caller holding several
    /// bookings on one flight loses all of them; there is no per-booking
    /// identifier on this path.
    pub async fn delete_booking(
        &self,
        caller: &Identity,
        flight_number: &str,
    ) -> Result<(), DomainError> {
        policy::require_regular_user(caller)?;

        self.bookings
            .find_one_for_owner(caller.user_id, flight_number)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        let removed = self
            .bookings
            .delete_for_owner(caller.user_id, flight_number)
            .await?;
        info!(flight_number, removed, "booking deleted");
        Ok(())
    }

    /// Regular users only; never includes another user's bookings.
    pub async fn list_my_bookings(&self, caller: &Identity) -> Result<Vec<Booking>, DomainError> {
        policy::require_regular_user(caller)?;
        Ok(self.bookings.find_by_owner(caller.user_id).await?)
    }

    /// Admin only; every booking system-wide.
    pub async fn list_all_bookings(&self, caller: &Identity) -> Result<Vec<Booking>, DomainError> {
        policy::require_admin(caller)?;
        Ok(self.bookings.find_all().await?)
    }
}

fn invalid_fare() -> DomainError {
    DomainError::BadRequest("Invalid fare type or price not available".to_string())
}
