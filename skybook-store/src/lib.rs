pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod flight_repo;
pub mod user_repo;

pub use app_config::Config;
pub use booking_repo::MongoBookingStore;
pub use database::Database;
pub use flight_repo::MongoFlightStore;
pub use user_repo::MongoUserStore;
