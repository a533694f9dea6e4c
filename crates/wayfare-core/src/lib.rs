//! wayfare-core: Domain model for the travel listing platform
//!
//! Contains the `Listing` entity, its status lifecycle, and field-level
//! validation shared by the server and the store.

pub mod error;
pub mod listing;
pub mod validate;

pub use error::{CoreError, FieldError};
pub use listing::{Listing, ListingDraft, ListingPatch, ListingStatus};
pub use validate::{MAX_LOCATION_LEN, MAX_TITLE_LEN, PRICE_MAX_DIGITS, PRICE_SCALE};
