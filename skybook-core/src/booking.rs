use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flight::{FareType, Flight};

/// Seat assignment is a fixed placeholder: no seat map exists and no
/// availability is tracked, so concurrent bookings can share a seat.
pub const PLACEHOLDER_SEAT: &str = "A5";
pub const PLACEHOLDER_AIRCRAFT: &str = "Boeing 777";

/// A booking, stored in the `bookings` collection.
///
/// `final_fare` and `flight_date_time` are snapshots taken at booking time.
/// The fare is never recomputed; the departure snapshot is refreshed only by
/// the update cascade when the referenced flight's departure changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Owning user; bookings are only visible to their owner (admins see all).
    pub user: Uuid,
    pub flight_number: String,
    pub fare_type: FareType,
    pub luggage_weight: f64,
    pub final_fare: f64,
    pub seat_number: String,
    pub aircraft_model: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub flight_date_time: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        owner: Uuid,
        flight: &Flight,
        fare_type: FareType,
        luggage_weight: f64,
        final_fare: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: owner,
            flight_number: flight.flight_number.clone(),
            fare_type,
            luggage_weight,
            final_fare,
            seat_number: PLACEHOLDER_SEAT.to_string(),
            aircraft_model: PLACEHOLDER_AIRCRAFT.to_string(),
            flight_date_time: flight.departure_date_time,
        }
    }
}

/// Response shape returned to the caller after a successful booking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub flight_number: String,
    pub seat_number: String,
    pub aircraft_model: String,
    pub flight_date_time: DateTime<Utc>,
    pub final_fare: f64,
}

impl From<&Booking> for BookingSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            flight_number: booking.flight_number.clone(),
            seat_number: booking.seat_number.clone(),
            aircraft_model: booking.aircraft_model.clone(),
            flight_date_time: booking.flight_date_time,
            final_fare: booking.final_fare,
        }
    }
}
