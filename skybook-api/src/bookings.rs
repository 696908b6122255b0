use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use skybook_core::{Booking, BookingSummary, FareType, Identity};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingRequest {
    flight_number: String,
    /// Passed through as text so an unknown class is reported by the
    /// engine, not as a deserialization failure.
    fare_type: String,
    luggage_weight: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub user: Uuid,
    pub flight_number: String,
    pub fare_type: FareType,
    pub luggage_weight: f64,
    pub final_fare: f64,
    pub seat_number: String,
    pub aircraft_model: String,
    pub flight_date_time: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            user: booking.user,
            flight_number: booking.flight_number,
            fare_type: booking.fare_type,
            luggage_weight: booking.luggage_weight,
            final_fare: booking.final_fare,
            seat_number: booking.seat_number,
            aircraft_model: booking.aircraft_model,
            flight_date_time: booking.flight_date_time,
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create-booking", post(create_booking))
        .route("/delete-booking/{flightNumber}", delete(delete_booking))
        .route("/view-my-bookings", get(view_my_bookings))
        .route("/view-all-bookings", get(view_all_bookings))
        .layer(axum::middleware::from_fn_with_state(
            state,
            crate::middleware::auth::require_auth,
        ))
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_booking(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingSummary>, AppError> {
    let summary = state
        .engine
        .create_booking(&caller, &req.flight_number, &req.fare_type, req.luggage_weight)
        .await?;
    Ok(Json(summary))
}

async fn delete_booking(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(flight_number): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.engine.delete_booking(&caller, &flight_number).await?;
    Ok(Json(json!({ "message": "Booking deleted successfully" })))
}

async fn view_my_bookings(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state.engine.list_my_bookings(&caller).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

async fn view_all_bookings(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state.engine.list_all_bookings(&caller).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
