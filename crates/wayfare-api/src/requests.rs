//! Request types for the API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wayfare_core::{CoreError, ListingDraft, ListingPatch, ListingStatus};

/// Body of `POST /api/v1/listings`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    #[schema(example = "Lakeside cabin", max_length = 200)]
    pub title: String,
    pub description: String,
    #[schema(example = "Duluth, MN", max_length = 100)]
    pub location: String,
    /// Nightly price, at most 10 digits with 2 decimal places
    #[schema(example = "125.50")]
    pub price: Decimal,
    /// One of `active`, `pending`, `inactive`; defaults to `pending`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "pending")]
    pub status: Option<String>,
}

/// Body of `PUT /api/v1/listings/{id}`; replaces every writable field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateListingRequest {
    #[schema(max_length = 200)]
    pub title: String,
    pub description: String,
    #[schema(max_length = 100)]
    pub location: String,
    #[schema(example = "125.50")]
    pub price: Decimal,
    /// One of `active`, `pending`, `inactive`; defaults to `pending` when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `PATCH /api/v1/listings/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchListingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "125.50")]
    pub price: Option<Decimal>,
    /// One of `active`, `pending`, `inactive`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `POST /api/v1/auth/sessions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    pub username: String,
    pub password: String,
}

fn parse_status(status: Option<String>) -> Result<ListingStatus, CoreError> {
    status.as_deref().map_or(Ok(ListingStatus::default()), str::parse)
}

impl TryFrom<CreateListingRequest> for ListingDraft {
    type Error = CoreError;

    fn try_from(req: CreateListingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            location: req.location,
            price: req.price,
            status: parse_status(req.status)?,
        })
    }
}

impl TryFrom<UpdateListingRequest> for ListingDraft {
    type Error = CoreError;

    fn try_from(req: UpdateListingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            location: req.location,
            price: req.price,
            status: parse_status(req.status)?,
        })
    }
}

impl TryFrom<PatchListingRequest> for ListingPatch {
    type Error = CoreError;

    fn try_from(req: PatchListingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            location: req.location,
            price: req.price,
            status: req.status.as_deref().map(str::parse).transpose()?,
        })
    }
}
