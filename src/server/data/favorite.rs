use chrono::Utc;
use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite
    ///
    /// Fails with a unique constraint violation if the user already has a favorite for the
    /// same type & ID.
    pub async fn create(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_type: ActiveValue::Set(favorite_type),
            favorite_id: ActiveValue::Set(favorite_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the favorite a user holds for a specific type & ID
    pub async fn find(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::FavoriteType.eq(favorite_type))
            .filter(entity::favorite::Column::FavoriteId.eq(favorite_id))
            .one(self.db)
            .await
    }

    /// Gets all favorites owned by a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
