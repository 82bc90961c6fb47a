use chrono::Utc;
use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite without checking that the referenced catalog entity exists
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                favorite_type: ActiveValue::Set(favorite_type),
                favorite_id: ActiveValue::Set(favorite_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
