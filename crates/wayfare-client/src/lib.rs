//! wayfare-client: HTTP client library for the wayfare API
//!
//! # Examples
//!
//! ```no_run
//! use wayfare_client::HttpClient;
//! use wayfare_api::requests::CreateListingRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:8080")?
//!     .with_basic_auth("admin", "hunter2");
//!
//! // Get health
//! let health = client.health().await?;
//! println!("Status: {}", health.status);
//!
//! // List active listings, newest first
//! let listings = client.list_listings()
//!     .page(1)
//!     .per_page(50)
//!     .status("active")
//!     .send()
//!     .await?;
//!
//! // Create a listing
//! let listing = client.create_listing(CreateListingRequest {
//!     title: "Lakeside cabin".into(),
//!     description: "Two bedrooms on the north shore".into(),
//!     location: "Duluth, MN".into(),
//!     price: "125.50".parse()?,
//!     status: None,
//! }).await?;
//! println!("created listing {}", listing.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Session tokens
//!
//! ```no_run
//! use wayfare_client::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:8080")?;
//! let session = client.create_session("admin", "hunter2").await?;
//! let client = client.with_token(session.token);
//! let listing = client.get_listing(7).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;

pub use error::{ClientError, Result};
pub use http::{HttpClient, ListListingsBuilder};
