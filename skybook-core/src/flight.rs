use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Fare class used for price lookup on a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FareType {
    Economy,
    Business,
    First,
}

impl FareType {
    /// Parses the wire spelling; anything outside the three classes is
    /// rejected by the booking engine.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "economy" => Some(Self::Economy),
            "business" => Some(Self::Business),
            "first" => Some(Self::First),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

/// Per-class price table embedded in a flight document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FarePrices {
    pub economy: f64,
    pub business: f64,
    pub first: f64,
}

impl FarePrices {
    pub fn amount(&self, fare: FareType) -> f64 {
        match fare {
            FareType::Economy => self.economy,
            FareType::Business => self.business,
            FareType::First => self.first,
        }
    }
}

/// A scheduled flight, stored in the `flights` collection.
///
/// `flight_number` is system-generated, globally unique, and immutable.
/// Only `departure_date_time` may change after creation; any change to it
/// cascades to the dependent bookings' snapshot field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub flight_number: String,
    pub departure_city: String,
    pub destination_city: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub departure_date_time: DateTime<Utc>,
    /// Total trip duration in hours.
    pub total_duration: f64,
    pub stops: i32,
    pub prices: FarePrices,
}

/// Caller-supplied fields for flight creation; the flight number is never
/// accepted from the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub departure_city: String,
    pub destination_city: String,
    pub departure_date_time: DateTime<Utc>,
    pub total_duration: f64,
    pub stops: i32,
    pub prices: FarePrices,
}

impl NewFlight {
    /// Required-field and price checks, reported as one validation error
    /// listing every violation.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();

        if self.departure_city.trim().is_empty() {
            violations.push("departureCity");
        }
        if self.destination_city.trim().is_empty() {
            violations.push("destinationCity");
        }
        if self.total_duration <= 0.0 {
            violations.push("totalDuration");
        }
        if self.stops < 0 {
            violations.push("stops");
        }
        if self.prices.economy <= 0.0 {
            violations.push("prices.economy");
        }
        if self.prices.business <= 0.0 {
            violations.push("prices.business");
        }
        if self.prices.first <= 0.0 {
            violations.push("prices.first");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "invalid flight data: {}",
                violations.join(", ")
            )))
        }
    }
}

impl Flight {
    pub fn new(flight_number: String, spec: &NewFlight) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight_number,
            departure_city: spec.departure_city.clone(),
            destination_city: spec.destination_city.clone(),
            departure_date_time: spec.departure_date_time,
            total_duration: spec.total_duration,
            stops: spec.stops,
            prices: spec.prices,
        }
    }
}

/// Parses a search departure date: full RFC 3339, or a bare calendar date
/// taken as midnight UTC. Search then matches the resulting timestamp
/// exactly, not by calendar day.
pub fn parse_departure(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    Err(DomainError::BadRequest(
        "Please provide valid search criteria".to_string(),
    ))
}
