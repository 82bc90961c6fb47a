use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteKind,
    },
    server::{
        controller::util::get_user::get_current_user,
        error::Error,
        model::{app::AppState, catalog::EntityRef},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Mark a character, planet or starship as a favorite of the current user
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKind, Path, description = "Catalog the entity belongs to"),
        ("id" = i32, Path, description = "ID of the entity within its catalog")
    ),
    responses(
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Favorite already added", body = ErrorDto),
        (status = 404, description = "User or entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path((kind, id)): Path<(FavoriteKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state, &session).await?;

    FavoriteService::new(&state.db)
        .add_favorite(user.id, EntityRef::new(kind, id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            msg: format!("Favorite {} added", kind.label()),
        }),
    ))
}

/// Remove a character, planet or starship from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKind, Path, description = "Catalog the entity belongs to"),
        ("id" = i32, Path, description = "ID of the entity within its catalog")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path((kind, id)): Path<(FavoriteKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state, &session).await?;

    FavoriteService::new(&state.db)
        .remove_favorite(user.id, EntityRef::new(kind, id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("Favorite {} removed", kind.label()),
        }),
    ))
}
