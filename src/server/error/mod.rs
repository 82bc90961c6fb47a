//! Error types for the Holocron server application.
//!
//! Domain errors (users, catalog, favorites, configuration) live in their own submodules and
//! are aggregated into [`Error`]. Every error implements `IntoResponse` so controllers can
//! return them directly; anything without a dedicated mapping becomes a logged 500.

pub mod catalog;
pub mod config;
pub mod favorite;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, config::ConfigError, favorite::FavoriteError, user::UserError,
    },
};

/// Main error type for the Holocron server application.
///
/// Uses `thiserror`'s `#[from]` so domain and library errors convert with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// User could not be resolved.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Catalog entity lookup failed.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Favorite toggle was rejected.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Favorite already added
/// - 404 Not Found - Missing user, catalog entity or favorite
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error body returned for expected failures.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Lets unit tests returning [`TestError`](holocron_test_utils::TestError) propagate service
/// errors with `?`.
#[cfg(test)]
impl From<Error> for holocron_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(err) => Self::DbErr(err),
            Error::SessionError(err) => Self::SessionError(err),
            err => Self::DbErr(sea_orm::DbErr::Custom(err.to_string())),
        }
    }
}
