use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0:?} not found in database")]
    NotFound(i32),
    #[error("No bootstrap user exists, create a user before managing favorites")]
    NoBootstrapUser,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::NOT_FOUND, "User not found")
    }
}
