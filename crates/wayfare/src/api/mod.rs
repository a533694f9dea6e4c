//! API route handlers

pub mod error;
pub mod listings;
pub mod sessions;
pub mod system;

pub use error::{ApiError, AppError};
