use std::net::SocketAddr;
use std::sync::Arc;

use skybook_api::{app, state::AppState};
use skybook_api::password::PasswordService;
use skybook_api::token::{TokenConfig, TokenService};
use skybook_core::{BookingEngine, FlightRegistry};
use skybook_store::{Database, MongoBookingStore, MongoFlightStore, MongoUserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skybook_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Skybook API on port {}", config.server.port);

    let database = Database::connect(&config.database)
        .await
        .expect("Failed to connect to MongoDB");
    database
        .ensure_indexes()
        .await
        .expect("Failed to create indexes");

    let users = Arc::new(MongoUserStore::new(&database));
    let flights = Arc::new(MongoFlightStore::new(&database));
    let bookings = Arc::new(MongoBookingStore::new(&database));

    let state = AppState {
        users,
        registry: Arc::new(FlightRegistry::new(flights.clone(), bookings.clone())),
        engine: Arc::new(BookingEngine::new(flights, bookings)),
        tokens: Arc::new(TokenService::new(TokenConfig {
            access_secret: config.auth.access_token_secret.clone(),
            refresh_secret: config.auth.refresh_token_secret.clone(),
            access_ttl_seconds: config.auth.access_token_ttl_seconds,
            refresh_ttl_seconds: config.auth.refresh_token_ttl_seconds,
        })),
        passwords: Arc::new(PasswordService::new()),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
