use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{user::UserError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Resolves the user acting on the request
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: The session's user, or the bootstrap user when the session holds none
/// - `Err(Error::UserError(UserError::NotFound))`: User ID exists in session but not found in
///   database (session is cleared)
/// - `Err(Error::UserError(UserError::NoBootstrapUser))`: Session is empty and no users exist
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_current_user(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let session_user_id = SessionUserId::get(session).await?;

    match UserService::new(&state.db)
        .resolve_current_user(session_user_id)
        .await
    {
        Err(Error::UserError(UserError::NotFound(user_id))) => {
            session.clear().await;

            tracing::debug!(
                "Session cleared for user ID {} with active session but was not found in database",
                user_id
            );

            Err(UserError::NotFound(user_id).into())
        }
        result => result,
    }
}
