//! Favorite toggle service.
//!
//! Each `(user, kind, id)` key is either absent or present. Adding moves it from absent to
//! present, removing moves it back; the other two transitions are rejected with
//! [`FavoriteError::Duplicate`] and [`FavoriteError::NotFound`].

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{
            catalog::CatalogError, favorite::FavoriteError, user::UserError, Error,
        },
        model::catalog::EntityRef,
        service::catalog::CatalogService,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a catalog entity as a favorite of the user
    ///
    /// Checks run in a fixed order: user, then the referenced entity, then the existing
    /// favorite. A missing entity is therefore reported even when a stale favorite for it
    /// is still stored.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `entity` - Catalog entity to mark
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(Error::UserError)` - User does not exist
    /// - `Err(Error::CatalogError)` - Referenced entity does not exist
    /// - `Err(Error::FavoriteError)` - User already has this favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        entity: EntityRef,
    ) -> Result<FavoriteDto, Error> {
        self.ensure_user_exists(user_id).await?;

        if !CatalogService::new(self.db).entity_exists(entity).await? {
            return Err(CatalogError::EntityNotFound(entity).into());
        }

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo
            .find(user_id, entity.favorite_type(), entity.id())
            .await?
            .is_some()
        {
            return Err(FavoriteError::Duplicate { user_id, entity }.into());
        }

        // A concurrent add can slip past the check above, the unique index catches it
        match favorite_repo
            .create(user_id, entity.favorite_type(), entity.id())
            .await
        {
            Ok(favorite) => Ok(favorite.into()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(FavoriteError::Duplicate { user_id, entity }.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a favorite from the user
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::UserError)` - User does not exist
    /// - `Err(Error::FavoriteError)` - User has no such favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, entity: EntityRef) -> Result<(), Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let Some(favorite) = favorite_repo
            .find(user_id, entity.favorite_type(), entity.id())
            .await?
        else {
            return Err(FavoriteError::NotFound { user_id, entity }.into());
        };

        let result = favorite_repo.delete(favorite.id).await?;

        // Removed by another request between the lookup & delete
        if result.rows_affected == 0 {
            return Err(FavoriteError::NotFound { user_id, entity }.into());
        }

        Ok(())
    }

    /// Lists the user's favorites ordered by ID
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(())
    }
}
