//! HTTP router configuration

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::error::AppError;
use crate::api::{listings, sessions, system};
use crate::auth;
use crate::config::Config;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    // Everything under /api/v1 except session creation requires credentials
    let listings = Router::new()
        .route(
            "/listings",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/listings/{id}",
            get(listings::get_listing)
                .put(listings::update_listing)
                .patch(listings::patch_listing)
                .delete(listings::delete_listing),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    let api_v1 = Router::new()
        .route(
            "/auth/sessions",
            post(sessions::create_session).delete(sessions::delete_session),
        )
        .merge(listings);

    Router::new()
        // System endpoints
        .route("/health", get(system::health))
        // Versioned API
        .nest("/api/v1", api_v1)
        // Documentation: one schema, two viewers
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/api/docs/scalar", ApiDoc::openapi()))
        .route("/api/openapi.yaml", get(openapi_yaml))
        // Layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// YAML rendering of the OpenAPI document
async fn openapi_yaml() -> Result<impl IntoResponse, AppError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| AppError::internal(format!("failed to render OpenAPI document: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

/// CORS restricted to the configured origin allow-list
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
