//! wayfare-store: Postgres persistence for listings
//!
//! Wraps a `sqlx::PgPool` behind the `ListingStore` repository. Migrations
//! are embedded and run by the server at startup.

pub mod error;
pub mod listings;

pub use error::{Result, StoreError};
pub use listings::{ListingQuery, ListingStore};

/// Embedded migrations for the listings schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
