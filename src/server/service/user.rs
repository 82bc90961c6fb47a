use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
    },
};

/// Service for looking up user accounts.
///
/// Users are created outside of this application; the service only reads them.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user ordered by ID, without passwords
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Resolves the user acting on a request.
    ///
    /// When the session carries a user ID that user is resolved, otherwise the bootstrap user
    /// (lowest ID) stands in.
    ///
    /// # Arguments
    /// - `session_user_id` - User ID stored in the request's session, if any
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The acting user
    /// - `Err(Error::UserError(UserError::NotFound))` - Session user ID is not in the database
    /// - `Err(Error::UserError(UserError::NoBootstrapUser))` - No session user and no users exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn resolve_current_user(
        &self,
        session_user_id: Option<i32>,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = match session_user_id {
            Some(user_id) => user_repo
                .get_by_id(user_id)
                .await?
                .ok_or(UserError::NotFound(user_id))?,
            None => user_repo
                .get_bootstrap()
                .await?
                .ok_or(UserError::NoBootstrapUser)?,
        };

        Ok(user.into())
    }
}
