use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skybook_core::flight::parse_departure;
use skybook_core::{FarePrices, Flight, Identity, NewFlight};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub flight_number: String,
    pub departure_city: String,
    pub destination_city: String,
    pub departure_date_time: DateTime<Utc>,
    pub total_duration: f64,
    pub stops: i32,
    pub prices: FarePrices,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            flight_number: flight.flight_number,
            departure_city: flight.departure_city,
            destination_city: flight.destination_city,
            departure_date_time: flight.departure_date_time,
            total_duration: flight.total_duration,
            stops: flight.stops,
            prices: flight.prices,
        }
    }
}

/// Only the departure time is honored; any other field in the request body
/// is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateFlightRequest {
    departure_date_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery {
    departure_city: Option<String>,
    destination_city: Option<String>,
    departure_date: Option<String>,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/add-flight", post(add_flight))
        .route("/update-flight/{flightNumber}", put(update_flight))
        .route("/delete-flight/{flightNumber}", delete(delete_flight))
        .route("/view-flights", get(view_flights))
        .route("/search-flights", get(search_flights))
        .layer(axum::middleware::from_fn_with_state(
            state,
            crate::middleware::auth::require_auth,
        ))
}

// ============================================================================
// Handlers
// ============================================================================

async fn add_flight(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(spec): Json<NewFlight>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state.registry.create_flight(&caller, spec).await?;
    Ok(Json(FlightResponse::from(flight)))
}

async fn update_flight(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(flight_number): Path<String>,
    Json(req): Json<UpdateFlightRequest>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state
        .registry
        .update_departure_time(&caller, &flight_number, req.departure_date_time)
        .await?;
    Ok(Json(FlightResponse::from(flight)))
}

async fn delete_flight(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(flight_number): Path<String>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state.registry.delete_flight(&caller, &flight_number).await?;
    Ok(Json(FlightResponse::from(flight)))
}

async fn view_flights(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let flights = state.registry.list_flights(&caller).await?;
    Ok(Json(flights.into_iter().map(FlightResponse::from).collect()))
}

async fn search_flights(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    // All three criteria are mandatory.
    let (departure_city, destination_city, departure_date) = match (
        query.departure_city,
        query.destination_city,
        query.departure_date,
    ) {
        (Some(a), Some(b), Some(c)) if !a.is_empty() && !b.is_empty() && !c.is_empty() => (a, b, c),
        _ => {
            return Err(AppError::BadRequestError(
                "Please provide valid search criteria".to_string(),
            ))
        }
    };
    let departure = parse_departure(&departure_date)?;

    let flights = state
        .registry
        .search_flights(&caller, &departure_city, &destination_city, departure)
        .await?;
    Ok(Json(flights.into_iter().map(FlightResponse::from).collect()))
}
