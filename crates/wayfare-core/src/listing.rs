//! The `Listing` entity and its status lifecycle

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a listing
///
/// Stored as the `listing_status` enum type in Postgres. New listings
/// default to `Pending` until reviewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "listing_status", rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    #[default]
    Pending,
    Inactive,
}

impl ListingStatus {
    /// Stable lowercase name, matching the wire and database representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "inactive" => Ok(Self::Inactive),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// A travel listing as stored in the database
///
/// `created_at` is set once at insertion and never changes; `updated_at`
/// is refreshed by every modification.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: Decimal,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a listing, validated before any insert or full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: Decimal,
    pub status: ListingStatus,
}

/// Partial update of a listing; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<ListingStatus>,
}

impl ListingPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.price.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ListingStatus::Active,
            ListingStatus::Pending,
            ListingStatus::Inactive,
        ] {
            assert_eq!(status.as_str().parse::<ListingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(ListingStatus::default(), ListingStatus::Pending);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "archived".parse::<ListingStatus>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownStatus(s) if s == "archived"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ListingStatus::Active).unwrap();
        assert_eq!(json, r#""active""#);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ListingPatch::default().is_empty());
        let patch = ListingPatch {
            title: Some("Lakeside cabin".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
