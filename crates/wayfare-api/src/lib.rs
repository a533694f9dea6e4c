//! wayfare-api: Shared API types and schemas
//!
//! Contains request/response types and OpenAPI schema definitions used by
//! the server, the client library, and external consumers.

pub mod requests;
pub mod responses;
