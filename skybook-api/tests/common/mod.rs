//! In-memory stores and app wiring for router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use skybook_api::password::PasswordService;
use skybook_api::token::{TokenConfig, TokenService};
use skybook_api::{app, AppState};
use skybook_core::{
    Booking, BookingEngine, BookingStore, Flight, FlightRegistry, FlightStore, ProfileUpdate,
    StoreError, User, UserStatus, UserStore,
};

#[derive(Default)]
pub struct MemUserStore {
    users: Mutex<Vec<User>>,
}

impl MemUserStore {
    /// Marks an account as soft-deleted, something the HTTP surface
    /// deliberately offers no route for.
    pub fn deactivate(&self, email: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            user.status = UserStatus::Inactive;
        }
    }
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(StoreError::DuplicateKey(user.email.clone()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: &ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.email = changes.email.clone();
                user.username = changes.username.clone();
                user.fullname = changes.fullname.clone();
                user.password = changes.password_hash.clone();
                user.is_admin = changes.is_admin;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MemFlightStore {
    flights: Mutex<Vec<Flight>>,
}

#[async_trait]
impl FlightStore for MemFlightStore {
    async fn insert(&self, flight: &Flight) -> Result<(), StoreError> {
        let mut flights = self.flights.lock().unwrap();
        if flights.iter().any(|f| f.flight_number == flight.flight_number) {
            return Err(StoreError::DuplicateKey(flight.flight_number.clone()));
        }
        flights.push(flight.clone());
        Ok(())
    }

    async fn find_by_number(&self, flight_number: &str) -> Result<Option<Flight>, StoreError> {
        Ok(self
            .flights
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.flight_number == flight_number)
            .cloned())
    }

    async fn set_departure(
        &self,
        flight_number: &str,
        departure: DateTime<Utc>,
    ) -> Result<Option<Flight>, StoreError> {
        let mut flights = self.flights.lock().unwrap();
        match flights.iter_mut().find(|f| f.flight_number == flight_number) {
            Some(flight) => {
                flight.departure_date_time = departure;
                Ok(Some(flight.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_number(&self, flight_number: &str) -> Result<bool, StoreError> {
        let mut flights = self.flights.lock().unwrap();
        let before = flights.len();
        flights.retain(|f| f.flight_number != flight_number);
        Ok(flights.len() < before)
    }

    async fn find_all(&self) -> Result<Vec<Flight>, StoreError> {
        Ok(self.flights.lock().unwrap().clone())
    }

    async fn search(
        &self,
        departure_city: &str,
        destination_city: &str,
        departure: DateTime<Utc>,
    ) -> Result<Vec<Flight>, StoreError> {
        Ok(self
            .flights
            .lock()
            .unwrap()
            .iter()
            .filter(|f| {
                f.departure_city == departure_city
                    && f.destination_city == destination_city
                    && f.departure_date_time == departure
            })
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingStore for MemBookingStore {
    async fn insert(&self, booking: &Booking) -> Result<(), StoreError> {
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }

    async fn find_one_for_owner(
        &self,
        owner: Uuid,
        flight_number: &str,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user == owner && b.flight_number == flight_number)
            .cloned())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user == owner)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn delete_for_owner(
        &self,
        owner: Uuid,
        flight_number: &str,
    ) -> Result<u64, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| !(b.user == owner && b.flight_number == flight_number));
        Ok((before - bookings.len()) as u64)
    }

    async fn delete_by_flight(&self, flight_number: &str) -> Result<u64, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.flight_number != flight_number);
        Ok((before - bookings.len()) as u64)
    }

    async fn set_flight_date_time(
        &self,
        flight_number: &str,
        departure: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        let mut touched = 0;
        for booking in bookings.iter_mut() {
            if booking.flight_number == flight_number {
                booking.flight_date_time = departure;
                touched += 1;
            }
        }
        Ok(touched)
    }
}

/// Full app wired against in-memory stores.
pub fn test_app() -> axum::Router {
    test_app_with_users().0
}

/// Like [`test_app`], but hands back the user store so tests can seed
/// states the routes cannot produce.
pub fn test_app_with_users() -> (axum::Router, Arc<MemUserStore>) {
    let users = Arc::new(MemUserStore::default());
    let flights = Arc::new(MemFlightStore::default());
    let bookings = Arc::new(MemBookingStore::default());

    let state = AppState {
        users: users.clone(),
        registry: Arc::new(FlightRegistry::new(flights.clone(), bookings.clone())),
        engine: Arc::new(BookingEngine::new(flights, bookings)),
        tokens: Arc::new(TokenService::new(TokenConfig {
            access_secret: "test-access-secret".to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            access_ttl_seconds: 3600,
            refresh_ttl_seconds: 86400,
        })),
        passwords: Arc::new(PasswordService::new()),
    };

    (app(state), users)
}
