//! wayfare: travel listing platform server
//!
//! Axum HTTP server exposing authenticated CRUD for listings, OpenAPI
//! documentation, and a CORS allow-list. The binary entry point lives in
//! `main.rs`; everything else is a library so integration tests can build
//! the router directly.

pub mod api;
pub mod auth;
pub mod config;
pub mod openapi;
pub mod router;
pub mod state;
