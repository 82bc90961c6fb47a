//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for the catalog listings, users and favorites. Controllers resolve the acting
//! user from the session, call into services, and return JSON responses. Every handler is
//! annotated with utoipa for the OpenAPI document.

pub mod catalog;
pub mod favorite;
pub mod user;
pub mod util;
