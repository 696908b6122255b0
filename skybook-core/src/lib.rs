pub mod booking;
pub mod engine;
pub mod error;
pub mod flight;
pub mod flight_number;
pub mod policy;
pub mod registry;
pub mod repository;
pub mod user;
pub mod validation;

#[cfg(test)]
pub(crate) mod testutil;

pub use booking::{Booking, BookingSummary};
pub use engine::BookingEngine;
pub use error::DomainError;
pub use flight::{FarePrices, FareType, Flight, NewFlight};
pub use policy::Identity;
pub use registry::FlightRegistry;
pub use repository::{BookingStore, FlightStore, StoreError, UserStore};
pub use user::{ProfileUpdate, User, UserStatus};
