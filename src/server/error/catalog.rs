use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{error::error_response, model::catalog::EntityRef};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog entity {0} not found")]
    EntityNotFound(EntityRef),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::EntityNotFound(entity) => {
                tracing::debug!(entity = %entity, "{}", self);

                let message = match entity {
                    EntityRef::People(_) => "Character not found",
                    EntityRef::Planet(_) => "Planet not found",
                    EntityRef::Starship(_) => "Starship not found",
                };

                error_response(StatusCode::NOT_FOUND, message)
            }
        }
    }
}
