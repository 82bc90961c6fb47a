use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::util::get_user::get_current_user,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get all favorites of the current user
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing the current user's favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state, &session).await?;

    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user.id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
