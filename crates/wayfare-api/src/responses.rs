//! Response types for the API

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wayfare_core::Listing;

/// A single listing as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    #[schema(example = "125.50")]
    pub price: Decimal,
    /// One of `active`, `pending`, `inactive`
    #[schema(example = "pending")]
    pub status: String,
    /// Set once at insertion, never changes
    pub created_at: DateTime<Utc>,
    /// Refreshed on every modification
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            location: listing.location,
            price: listing.price,
            status: listing.status.to_string(),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

/// Page of listings, newest first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingListResponse {
    pub data: Vec<ListingResponse>,
    pub pagination: Pagination,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    /// Current page (1-indexed)
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of items
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// A freshly minted session token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    /// Bearer token to present on subsequent requests
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use wayfare_core::ListingStatus;

    use super::*;

    #[test]
    fn listing_response_renders_status_lowercase() {
        let listing = Listing {
            id: 7,
            title: "Lakeside cabin".to_string(),
            description: "Two bedrooms".to_string(),
            location: "Duluth, MN".to_string(),
            price: Decimal::new(12_550, 2),
            status: ListingStatus::Active,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
        };
        let response = ListingResponse::from(listing);
        assert_eq!(response.status, "active");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["price"], serde_json::json!("125.50"));
    }
}
