use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, IndexModel};
use tracing::info;

use skybook_core::{Booking, Flight, StoreError, User};

use crate::app_config::DatabaseConfig;

pub const USERS: &str = "users";
pub const FLIGHTS: &str = "flights";
pub const BOOKINGS: &str = "bookings";

/// Handle to the backing MongoDB database.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(&cfg.url).await?;
        info!(database = %cfg.name, "connected to MongoDB");
        Ok(Self {
            db: client.database(&cfg.name),
        })
    }

    pub fn handle(&self) -> &mongodb::Database {
        &self.db
    }

    /// Creates the unique indexes the write paths depend on: concurrent
    /// flight creation and sign-up resolve races through duplicate-key
    /// errors on these indexes, not through pre-checks alone.
    pub async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let unique = |keys| {
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        };

        self.db
            .collection::<User>(USERS)
            .create_indexes(vec![unique(doc! { "email": 1 }), unique(doc! { "username": 1 })])
            .await?;
        self.db
            .collection::<Flight>(FLIGHTS)
            .create_indexes(vec![unique(doc! { "flightNumber": 1 })])
            .await?;
        // Not unique: one flight carries many bookings. Speeds up the
        // cascades and owner-scoped lookups.
        self.db
            .collection::<Booking>(BOOKINGS)
            .create_indexes(vec![
                IndexModel::builder().keys(doc! { "flightNumber": 1 }).build(),
                IndexModel::builder().keys(doc! { "user": 1 }).build(),
            ])
            .await?;

        info!("indexes ensured");
        Ok(())
    }
}

/// Maps a driver error onto the store seam, singling out unique-index
/// violations (server code 11000).
pub(crate) fn store_err(err: mongodb::error::Error) -> StoreError {
    use mongodb::error::{ErrorKind, WriteFailure};

    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = &*err.kind {
        if write_error.code == 11000 {
            return StoreError::DuplicateKey(write_error.message.clone());
        }
    }
    StoreError::backend(err)
}
