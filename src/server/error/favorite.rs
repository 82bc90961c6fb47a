use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{error::error_response, model::catalog::EntityRef};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {user_id} already has {entity} as a favorite")]
    Duplicate { user_id: i32, entity: EntityRef },
    #[error("User ID {user_id} has no favorite for {entity}")]
    NotFound { user_id: i32, entity: EntityRef },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Duplicate { entity, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("Favorite {} already added", entity.kind().label()),
            ),
            Self::NotFound { entity, .. } => error_response(
                StatusCode::NOT_FOUND,
                format!("Favorite {} not found", entity.kind().label()),
            ),
        }
    }
}
