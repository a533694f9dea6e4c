//! OpenAPI document definition
//!
//! Single source for the schema endpoints and both interactive viewers.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wayfare API",
        description = "Travel listing platform: authenticated CRUD for listings"
    ),
    paths(
        api::system::health,
        api::listings::list_listings,
        api::listings::create_listing,
        api::listings::get_listing,
        api::listings::update_listing,
        api::listings::patch_listing,
        api::listings::delete_listing,
        api::sessions::create_session,
        api::sessions::delete_session,
    ),
    components(schemas(
        wayfare_api::requests::CreateListingRequest,
        wayfare_api::requests::UpdateListingRequest,
        wayfare_api::requests::PatchListingRequest,
        wayfare_api::requests::CreateSessionRequest,
        wayfare_api::responses::ListingResponse,
        wayfare_api::responses::ListingListResponse,
        wayfare_api::responses::Pagination,
        wayfare_api::responses::HealthResponse,
        wayfare_api::responses::SessionResponse,
        api::error::ApiError,
        api::error::FieldErrorBody,
    )),
    modifiers(&SecuritySchemes),
    tags(
        (name = "listings", description = "Travel listing CRUD"),
        (name = "auth", description = "Session tokens"),
        (name = "system", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
            components.add_security_scheme(
                "session_token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/listings",
            "/api/v1/listings/{id}",
            "/api/v1/auth/sessions",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn security_schemes_are_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("basic_auth"));
        assert!(components.security_schemes.contains_key("session_token"));
    }

    #[test]
    fn document_serializes_to_json_and_yaml() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("Wayfare API"));
        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.contains("Wayfare API"));
    }
}
