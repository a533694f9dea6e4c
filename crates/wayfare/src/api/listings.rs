//! Listing CRUD endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use wayfare_api::{
    requests::{CreateListingRequest, PatchListingRequest, UpdateListingRequest},
    responses::{ListingListResponse, ListingResponse, Pagination},
};
use wayfare_core::{ListingDraft, ListingPatch, ListingStatus};
use wayfare_store::ListingQuery;

use crate::api::error::{ApiError, AppError};
use crate::state::AppState;

/// Hard ceiling on page size
const MAX_PER_PAGE: u64 = 200;

/// Query parameters for listing pages
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListListingsQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (at most 200)
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Only return listings with this status
    #[serde(default)]
    pub status: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    50
}

/// List listings, newest first
#[utoipa::path(
    get,
    path = "/api/v1/listings",
    tag = "listings",
    params(ListListingsQuery),
    security(("basic_auth" = []), ("session_token" = [])),
    responses(
        (status = 200, description = "Page of listings", body = ListingListResponse),
        (status = 400, description = "Unknown status filter", body = ApiError),
        (status = 401, description = "Missing or invalid credentials", body = ApiError)
    )
)]
pub async fn list_listings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListListingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status: Option<ListingStatus> = query.status.as_deref().map(str::parse).transpose()?;
    let page = query.page.max(1);
    let per_page = query.per_page.clamp(1, MAX_PER_PAGE);

    let (listings, total_items) = state
        .store
        .list(&ListingQuery {
            page,
            per_page,
            status,
        })
        .await?;

    Ok(Json(ListingListResponse {
        data: listings.into_iter().map(ListingResponse::from).collect(),
        pagination: Pagination {
            page,
            per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page),
        },
    }))
}

/// Create a new listing
#[utoipa::path(
    post,
    path = "/api/v1/listings",
    tag = "listings",
    request_body = CreateListingRequest,
    security(("basic_auth" = []), ("session_token" = [])),
    responses(
        (status = 201, description = "Listing created", body = ListingResponse),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid credentials", body = ApiError)
    )
)]
pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = ListingDraft::try_from(req)?;
    draft.validate()?;
    let listing = state.store.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(ListingResponse::from(listing))))
}

/// Get a single listing
#[utoipa::path(
    get,
    path = "/api/v1/listings/{id}",
    tag = "listings",
    params(("id" = i64, Path, description = "Listing id")),
    security(("basic_auth" = []), ("session_token" = [])),
    responses(
        (status = 200, description = "The listing", body = ListingResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiError),
        (status = 404, description = "Unknown listing id", body = ApiError)
    )
)]
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let listing = state.store.get(id).await?;
    Ok(Json(ListingResponse::from(listing)))
}

/// Replace every writable field of a listing
#[utoipa::path(
    put,
    path = "/api/v1/listings/{id}",
    tag = "listings",
    params(("id" = i64, Path, description = "Listing id")),
    request_body = UpdateListingRequest,
    security(("basic_auth" = []), ("session_token" = [])),
    responses(
        (status = 200, description = "Updated listing", body = ListingResponse),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid credentials", body = ApiError),
        (status = 404, description = "Unknown listing id", body = ApiError)
    )
)]
pub async fn update_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = ListingDraft::try_from(req)?;
    draft.validate()?;
    let listing = state.store.update(id, &draft).await?;
    Ok(Json(ListingResponse::from(listing)))
}

/// Partially update a listing
#[utoipa::path(
    patch,
    path = "/api/v1/listings/{id}",
    tag = "listings",
    params(("id" = i64, Path, description = "Listing id")),
    request_body = PatchListingRequest,
    security(("basic_auth" = []), ("session_token" = [])),
    responses(
        (status = 200, description = "Updated listing", body = ListingResponse),
        (status = 400, description = "Empty patch or validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid credentials", body = ApiError),
        (status = 404, description = "Unknown listing id", body = ApiError)
    )
)]
pub async fn patch_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<PatchListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let patch = ListingPatch::try_from(req)?;
    patch.validate()?;
    let listing = state.store.patch(id, &patch).await?;
    Ok(Json(ListingResponse::from(listing)))
}

/// Delete a listing
#[utoipa::path(
    delete,
    path = "/api/v1/listings/{id}",
    tag = "listings",
    params(("id" = i64, Path, description = "Listing id")),
    security(("basic_auth" = []), ("session_token" = [])),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ApiError),
        (status = 404, description = "Unknown listing id", body = ApiError)
    )
)]
pub async fn delete_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
